//! Steady-state analysis of the series RLC loop.
//!
//! [`analyze`] evaluates the closed-form expressions in a fixed order:
//!
//! 1. `XL = 2πfL`
//! 2. `XC = 1 / (2πfC)`
//! 3. `X = XL - XC`
//! 4. `Z = √(R² + X²)`
//! 5. `I = V / Z`
//! 6. `pf = R / Z`
//! 7. `P = V·I·pf`
//! 8. `Q = V·I·√(1 - pf²)` with the radicand clamped at zero
//! 9. `S = V·I`
//!
//! `Z` is the norm of the summed component impedances, computed with `hypot`
//! so a very large `R` does not overflow. Either every field of
//! [`AnalysisResult`] is produced or a [`DomainError`] is returned; infinities
//! and NaNs never leak into the result.

use thiserror::Error;

use crate::circuits::network::SeriesRlc;
use crate::config::CircuitParameters;
use crate::constants::resonant_frequency;
use crate::math::{clamped_sqrt, phase_from_power_factor, Scalar};

/// Division-by-zero and related failures of the closed-form analysis.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Source frequency is zero, so the capacitive reactance is unbounded.
    #[error("source frequency is zero; capacitive reactance is undefined")]
    ZeroFrequency,
    /// Capacitance is zero, so the capacitive reactance is unbounded.
    #[error("capacitance is zero; capacitive reactance is undefined")]
    ZeroCapacitance,
    /// `R = 0` at resonance leaves nothing to limit the current.
    #[error("impedance is zero (no resistance at resonance); current is undefined")]
    ZeroImpedance,
    /// An intermediate quantity overflowed or was poisoned by a NaN input.
    #[error("{0} is not a finite number")]
    Overflow(&'static str),
}

/// Scalar results of a steady-state analysis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    /// Inductive reactance `XL` in ohms.
    pub inductive_reactance: Scalar,
    /// Capacitive reactance `XC` in ohms.
    pub capacitive_reactance: Scalar,
    /// Net reactance `X = XL - XC` in ohms.
    pub reactance: Scalar,
    /// Impedance magnitude `Z` in ohms.
    pub impedance: Scalar,
    /// RMS current magnitude in amperes.
    pub current: Scalar,
    /// Power factor `R / Z`.
    pub power_factor: Scalar,
    /// Active power `P` in watts.
    pub active_power: Scalar,
    /// Reactive power `Q` in volt-amperes reactive.
    pub reactive_power: Scalar,
    /// Apparent power `S` in volt-amperes.
    pub apparent_power: Scalar,
    /// Undamped resonant frequency in hertz, when `L·C > 0`.
    pub resonant_frequency: Option<Scalar>,
    /// Series quality factor `(1/R)·√(L/C)`, when `R > 0`.
    pub quality_factor: Option<Scalar>,
}

impl AnalysisResult {
    /// Phase angle `arccos(pf)` in radians, in `[0, π]`.
    #[must_use]
    pub fn phase_angle(&self) -> Scalar {
        phase_from_power_factor(self.power_factor)
    }

    /// Phase angle in degrees.
    #[must_use]
    pub fn phase_angle_degrees(&self) -> Scalar {
        self.phase_angle().to_degrees()
    }

    /// True when the inductor dominates (`X > 0`).
    #[must_use]
    pub fn is_inductive(&self) -> bool {
        self.reactance > 0.0
    }
}

/// Reactive power `V·I·√(1 - pf²)`.
///
/// Rounding near resonance can push `pf²` just past one; the radicand is then
/// clamped to zero so the result is `0` rather than NaN.
#[must_use]
pub fn reactive_power(voltage: Scalar, current: Scalar, power_factor: Scalar) -> Scalar {
    voltage * current * clamped_sqrt(1.0 - power_factor * power_factor)
}

fn finite(name: &'static str, value: Scalar) -> Result<Scalar, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::Overflow(name))
    }
}

fn quality_factor(params: &CircuitParameters) -> Option<Scalar> {
    if params.resistance <= 0.0 {
        return None;
    }
    let q = (params.inductance / params.capacitance).sqrt() / params.resistance;
    q.is_finite().then_some(q)
}

/// Computes impedance, current, power factor and the power triangle.
pub fn analyze(params: &CircuitParameters) -> Result<AnalysisResult, DomainError> {
    let _span = tracing::info_span!("analyze", resistance = params.resistance).entered();

    let rlc = SeriesRlc::from_parameters(params);
    let reactances = rlc.reactances()?;
    let reactance = finite("reactance", reactances.net())?;

    let r = params.resistance;
    let v = params.source_voltage;
    // |R + jX| via hypot, so a large R cannot overflow through R².
    let impedance = finite("impedance", rlc.impedance()?.norm())?;
    if impedance == 0.0 {
        return Err(DomainError::ZeroImpedance);
    }
    let current = finite("current", v / impedance)?;
    let power_factor = finite("power factor", r / impedance)?;
    let apparent_power = finite("apparent power", v * current)?;

    let result = AnalysisResult {
        inductive_reactance: reactances.inductive,
        capacitive_reactance: reactances.capacitive,
        reactance,
        impedance,
        current,
        power_factor,
        active_power: v * current * power_factor,
        reactive_power: reactive_power(v, current, power_factor),
        apparent_power,
        resonant_frequency: resonant_frequency(params.inductance, params.capacitance),
        quality_factor: quality_factor(params),
    };

    tracing::debug!(
        impedance = result.impedance,
        current = result.current,
        power_factor = result.power_factor,
        active_power = result.active_power,
        reactive_power = result.reactive_power,
        "series RLC analysis complete"
    );
    Ok(result)
}
