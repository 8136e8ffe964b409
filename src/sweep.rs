//! Sampling helpers and resistance sweeps.

use std::io::{self, Write};

use crate::circuits::analysis::{analyze, AnalysisResult, DomainError};
use crate::config::{CircuitConfig, ConfigError};
use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Analysis outcome at one resistance of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistancePoint {
    /// Resistance in ohms.
    pub resistance: Scalar,
    /// Analysis at that resistance, or why it could not be computed.
    pub outcome: Result<AnalysisResult, DomainError>,
}

/// Analyzes the circuit at each resistance in `resistances`.
///
/// A point that hits a domain error (e.g. `R = 0` at resonance) is recorded
/// and the sweep carries on.
pub fn sweep_resistance<I>(
    config: &CircuitConfig,
    resistances: I,
) -> Result<Vec<ResistancePoint>, ConfigError>
where
    I: IntoIterator<Item = Scalar>,
{
    let _span = tracing::info_span!("sweep_resistance").entered();
    config.validate()?;
    resistances
        .into_iter()
        .map(|r| {
            let params = config.with_resistance(r)?;
            Ok(ResistancePoint {
                resistance: r,
                outcome: analyze(&params),
            })
        })
        .collect()
}

/// Writes sweep points as CSV; failed points leave the numeric columns empty.
pub fn write_sweep_csv<W: Write>(mut w: W, points: &[ResistancePoint]) -> io::Result<()> {
    writeln!(w, "R,Z,I,pf,P,Q,S,error")?;
    for p in points {
        match &p.outcome {
            Ok(a) => writeln!(
                w,
                "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},",
                p.resistance,
                a.impedance,
                a.current,
                a.power_factor,
                a.active_power,
                a.reactive_power,
                a.apparent_power
            )?,
            Err(e) => writeln!(w, "{:.16e},,,,,,,{}", p.resistance, e)?,
        }
    }
    Ok(())
}
