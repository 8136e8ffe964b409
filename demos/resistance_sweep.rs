use rlc_phasor::prelude::*;

fn main() {
    // Default mains circuit: 16 mH, 150 µF, 230 V, 50 Hz.
    let config = CircuitConfig::default();
    let resistances = [0.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];

    let points = match sweep_resistance(&config, resistances) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("sweep failed: {e}");
            return;
        }
    };

    println!("R(ohm), Z(ohm), I(A), pf, P(W), Q(VAR)");
    for p in &points {
        match &p.outcome {
            Ok(a) => println!(
                "{:.1}, {:.3}, {:.3}, {:.4}, {:.1}, {:.1}",
                p.resistance, a.impedance, a.current, a.power_factor, a.active_power, a.reactive_power
            ),
            Err(e) => println!("{:.1}, {e}", p.resistance),
        }
    }
}
