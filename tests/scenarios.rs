//! End-to-end scenarios for the default 16 mH / 150 µF / 230 V / 50 Hz circuit.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rlc_phasor::prelude::*;

fn run(input: &str) -> Result<Calculation, RlcError> {
    calculate(input, &CircuitConfig::default())
}

#[test]
fn ten_ohms_matches_hand_calculation() {
    let calc = run("10").expect("10 ohm analysis");
    let a = calc.analysis;

    assert_relative_eq!(a.inductive_reactance, 5.0265, epsilon = 1.0e-4);
    assert_relative_eq!(a.capacitive_reactance, 21.2207, epsilon = 1.0e-4);
    assert_relative_eq!(a.reactance, -16.1941, epsilon = 1.0e-4);
    assert_relative_eq!(a.impedance, 19.0328, epsilon = 1.0e-4);
    assert_relative_eq!(a.current, 12.0844, epsilon = 1.0e-4);
    assert_relative_eq!(a.power_factor, 0.5254, epsilon = 1.0e-4);
    assert_relative_eq!(a.active_power, 1460.32, epsilon = 1.0e-2);
    assert_relative_eq!(a.reactive_power, 2364.86, epsilon = 1.0e-2);
    assert_relative_eq!(a.apparent_power, 2779.41, epsilon = 1.0e-2);

    assert_eq!(calc.waveforms.len(), 1000);
    assert_eq!(calc.phasors.voltage, CScalar::new(230.0, 0.0));
    assert_relative_eq!(calc.phasors.view_extent, 345.0);
}

#[test]
fn zero_ohms_is_purely_reactive() {
    let a = run("0").expect("R = 0 is tolerated").analysis;
    assert_relative_eq!(a.impedance, a.reactance.abs(), max_relative = 1.0e-15);
    assert_relative_eq!(a.impedance, 16.1941, epsilon = 1.0e-4);
    assert_eq!(a.power_factor, 0.0);
    assert_eq!(a.active_power, 0.0);
    assert_eq!(a.reactive_power, a.apparent_power);
}

#[test]
fn zero_ohms_current_is_in_quadrature() {
    let calc = run("0").unwrap();
    // φ = 90°: i(t) = -(V/Z)·cos(ωt), so i(0) is the negative peak.
    let peak = 230.0 / calc.analysis.impedance;
    assert_relative_eq!(calc.waveforms.current[0], -peak, max_relative = 1.0e-12);
    assert_abs_diff_eq!(calc.phasors.current.re, 0.0, epsilon = 1.0e-10);
    assert_relative_eq!(calc.phasors.current.im, 230.0, max_relative = 1.0e-12);
}

#[test]
fn malformed_input_produces_only_the_message() {
    let outcome = run("abc");
    assert!(matches!(outcome, Err(RlcError::InvalidInput { ref input }) if input == "abc"));
    assert_eq!(summary_text(&outcome), INVALID_INPUT_MESSAGE);
    assert_eq!(summary_text(&outcome), "Please enter valid numeric values.");
}

#[test]
fn zero_impedance_is_a_domain_error_not_infinity() {
    let base = CircuitConfig::default();
    let f0 = resonant_frequency(base.inductance, base.capacitance).unwrap();
    let outcome = calculate("0", &base.with_frequency(f0));
    assert!(matches!(
        outcome,
        Err(RlcError::Domain(DomainError::ZeroImpedance))
    ));
    assert!(summary_text(&outcome).contains("impedance is zero"));
}

#[test]
fn power_waveform_is_pointwise_product() {
    let w = run("7.5").unwrap().waveforms;
    for (_, v, i, p) in w.rows() {
        assert_eq!(p, v * i);
    }
}

#[test]
fn waveform_covers_five_mains_cycles() {
    let w = run("10").unwrap().waveforms;
    // The final sample lands on sin(10π), which rounds to either side of zero.
    let interior = &w.voltage[..w.len() - 1];
    let rising_zero_crossings = interior
        .windows(2)
        .filter(|pair| pair[0] < 0.0 && pair[1] >= 0.0)
        .count();
    assert_eq!(rising_zero_crossings, 4);
    assert_relative_eq!(*w.time.last().unwrap(), 0.1, max_relative = 1.0e-12);
}

#[test]
fn custom_circuit_is_injectable() {
    let config = CircuitConfig::default()
        .with_inductance(0.1)
        .with_capacitance(1.0e-4)
        .with_source_voltage(120.0)
        .with_frequency(60.0);
    let a = calculate("25", &config).unwrap().analysis;
    let xl = 2.0 * std::f64::consts::PI * 60.0 * 0.1;
    let xc = 1.0 / (2.0 * std::f64::consts::PI * 60.0 * 1.0e-4);
    assert_relative_eq!(a.reactance, xl - xc, max_relative = 1.0e-12);
    assert!(a.is_inductive());
    assert_relative_eq!(a.apparent_power, 120.0 * a.current, max_relative = 1.0e-15);
}

#[test]
fn enormous_resistance_is_nearly_purely_resistive() {
    for input in ["1e200", "1e300"] {
        let outcome = run(input);
        let calc = outcome.as_ref().expect("large resistance is still analyzable");
        let a = calc.analysis;
        assert!(a.impedance.is_finite());
        assert_eq!(a.power_factor, 1.0);
        assert_eq!(a.reactive_power, 0.0);
        assert!(a.current > 0.0);
        assert_eq!(calc.waveforms.len(), 1000);
        assert!(calc.waveforms.current.iter().all(|i| i.is_finite()));
        assert!(summary_text(&outcome).starts_with("Impedance: "));
    }
}

#[test]
fn overflowing_circuit_reports_overflow() {
    let config = CircuitConfig::default().with_source_voltage(1.0e300);
    let outcome = calculate("1e-10", &config);
    assert!(matches!(
        outcome,
        Err(RlcError::Domain(DomainError::Overflow("apparent power")))
    ));
    assert!(!summary_text(&outcome).contains("impedance is zero"));
}
