//! Request boundary: parse one resistance, run the full pipeline, format the result.
//!
//! Every request is independent. [`calculate`] either returns a complete
//! [`Calculation`] (analysis, waveforms and phasors together) or a single
//! [`RlcError`]; [`summary_text`] maps both outcomes to the text a front end
//! shows.

use std::fmt;

use crate::circuits::analysis::{analyze, AnalysisResult};
use crate::config::{CircuitConfig, CircuitParameters, WaveformWindow};
use crate::errors::RlcError;
use crate::math::Scalar;
use crate::synthesis::{synthesize_phasors, synthesize_waveforms, PhasorSet, WaveformSet};
use crate::units::{
    ActivePower, ApparentPower, Current, Impedance, Quantity, ReactivePower,
};

/// Shown in place of the summary when the resistance text is not a number.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numeric values.";

/// Everything produced for one resistance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Parameters the analysis ran with.
    pub parameters: CircuitParameters,
    /// Scalar results.
    pub analysis: AnalysisResult,
    /// Time-domain samples.
    pub waveforms: WaveformSet,
    /// Phasor diagram vectors.
    pub phasors: PhasorSet,
}

/// Parses resistance text; surrounding whitespace is ignored.
///
/// Text that does not parse, or parses to NaN or infinity, is rejected.
pub fn parse_resistance(input: &str) -> Result<Scalar, RlcError> {
    match input.trim().parse::<Scalar>() {
        Ok(r) if r.is_finite() => Ok(r),
        _ => Err(RlcError::InvalidInput {
            input: input.to_owned(),
        }),
    }
}

/// Runs analysis and synthesis for a numeric resistance.
pub fn evaluate(
    resistance: Scalar,
    config: &CircuitConfig,
    window: &WaveformWindow,
) -> Result<Calculation, RlcError> {
    let parameters = config.with_resistance(resistance)?;
    let analysis = analyze(&parameters)?;
    let waveforms = synthesize_waveforms(
        parameters.source_voltage,
        parameters.frequency,
        analysis.impedance,
        parameters.resistance,
        window,
    )?;
    let phasors = synthesize_phasors(
        parameters.source_voltage,
        parameters.resistance,
        analysis.reactance,
        analysis.power_factor,
    );
    Ok(Calculation {
        parameters,
        analysis,
        waveforms,
        phasors,
    })
}

/// Parses `input` and evaluates it over the default waveform window.
pub fn calculate(input: &str, config: &CircuitConfig) -> Result<Calculation, RlcError> {
    let resistance = parse_resistance(input)?;
    evaluate(resistance, config, &WaveformWindow::default())
}

/// Two-decimal textual summary of an analysis.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a>(pub &'a AnalysisResult);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.0;
        let z: Impedance<Scalar> = Quantity::new(a.impedance);
        let i: Current<Scalar> = Quantity::new(a.current);
        let p: ActivePower<Scalar> = Quantity::new(a.active_power);
        let q: ReactivePower<Scalar> = Quantity::new(a.reactive_power);
        let s: ApparentPower<Scalar> = Quantity::new(a.apparent_power);
        writeln!(f, "Impedance: {z:.2}")?;
        writeln!(f, "Current: {i:.2}")?;
        writeln!(f, "Power Factor: {:.2}", a.power_factor)?;
        writeln!(f, "Power: {p:.2}")?;
        writeln!(f, "Reactive Power: {q:.2}")?;
        write!(f, "Apparent Power: {s:.2}")
    }
}

/// Text a front end displays for a request outcome.
#[must_use]
pub fn summary_text(outcome: &Result<Calculation, RlcError>) -> String {
    match outcome {
        Ok(calc) => Summary(&calc.analysis).to_string(),
        Err(RlcError::InvalidInput { .. }) => INVALID_INPUT_MESSAGE.to_owned(),
        Err(err) => format!("Cannot analyze circuit: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::analysis::DomainError;

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(parse_resistance(" 10.5 ").unwrap(), 10.5);
        assert_eq!(parse_resistance("1e1").unwrap(), 10.0);
        assert_eq!(parse_resistance("-2").unwrap(), -2.0);
    }

    #[test]
    fn rejects_garbage_and_non_finite_text() {
        for input in ["abc", "", "  ", "10 ohm", "inf", "NaN"] {
            assert!(
                matches!(parse_resistance(input), Err(RlcError::InvalidInput { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn summary_uses_two_decimals() {
        let outcome = calculate("10", &CircuitConfig::default());
        assert_eq!(
            summary_text(&outcome),
            "Impedance: 19.03 Ω\n\
             Current: 12.08 A\n\
             Power Factor: 0.53\n\
             Power: 1460.32 W\n\
             Reactive Power: 2364.86 VAR\n\
             Apparent Power: 2779.41 VA"
        );
    }

    #[test]
    fn invalid_input_maps_to_fixed_message() {
        let outcome = calculate("abc", &CircuitConfig::default());
        assert!(outcome.is_err());
        assert_eq!(summary_text(&outcome), INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn domain_errors_get_a_diagnostic() {
        let config = CircuitConfig::default().with_capacitance(0.0);
        let outcome = calculate("10", &config);
        assert!(matches!(
            outcome,
            Err(RlcError::Domain(DomainError::ZeroCapacitance))
        ));
        assert!(summary_text(&outcome).starts_with("Cannot analyze circuit: capacitance is zero"));
    }

    #[test]
    fn evaluate_honours_custom_window() {
        let window = WaveformWindow::new(0.0, 0.02, 64).unwrap();
        let calc = evaluate(10.0, &CircuitConfig::default(), &window).unwrap();
        assert_eq!(calc.waveforms.len(), 64);
        assert_eq!(calc.phasors.impedance.re, 10.0);
        assert_eq!(calc.phasors.impedance.im, calc.analysis.reactance);
    }
}
