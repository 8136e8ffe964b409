//! Time-domain waveforms and phasor vectors derived from an analysis.
//!
//! Both products are plain data for a rendering layer: a [`WaveformSet`]
//! feeds a three-panel voltage/current/power chart and a [`PhasorSet`] feeds a
//! single vector diagram.
//!
//! ## Display conventions
//!
//! * The source voltage `V` is used directly as the sinusoid amplitude.
//! * The current phasor is drawn with the *voltage* magnitude so both arrows
//!   share one scale; only its angle carries information.
//! * The impedance phasor `(R, X)` is drawn on the same axes in ohms. Mixing
//!   units is a layout convention, not a dimensional claim.

use std::io::{self, Write};

use num_complex::Complex;
use thiserror::Error;

use crate::circuits::analysis::DomainError;
use crate::config::{ConfigError, WaveformWindow};
use crate::constants::{angular_frequency, PHASOR_VIEW_SCALE};
use crate::math::{phase_from_power_factor, CScalar, Scalar};
use crate::sweep::linspace;

/// Failures while sampling waveforms.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SynthesisError {
    /// The impedance cannot scale the current.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The sampling window is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Sampled voltage, current and instantaneous power on a shared time base.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveformSet {
    /// Sample times in seconds.
    pub time: Vec<Scalar>,
    /// Source voltage at each sample.
    pub voltage: Vec<Scalar>,
    /// Loop current at each sample.
    pub current: Vec<Scalar>,
    /// Instantaneous power `v(t)·i(t)` at each sample.
    pub power: Vec<Scalar>,
}

impl WaveformSet {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True if no samples were taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterates `(t, v, i, p)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (Scalar, Scalar, Scalar, Scalar)> + '_ {
        self.time
            .iter()
            .zip(&self.voltage)
            .zip(&self.current)
            .zip(&self.power)
            .map(|(((&t, &v), &i), &p)| (t, v, i, p))
    }
}

/// Samples `v(t) = V·sin(ωt)` and `i(t) = (V/Z)·sin(ωt - φ)` with `φ = arccos(R/Z)`.
///
/// Power is the pointwise product of the two sampled sequences.
pub fn synthesize_waveforms(
    voltage: Scalar,
    frequency: Scalar,
    impedance: Scalar,
    resistance: Scalar,
    window: &WaveformWindow,
) -> Result<WaveformSet, SynthesisError> {
    let _span = tracing::info_span!("synthesize_waveforms", samples = window.samples).entered();
    window.validate()?;
    if impedance == 0.0 || !impedance.is_finite() {
        return Err(DomainError::ZeroImpedance.into());
    }

    let omega = angular_frequency(frequency);
    let phase = phase_from_power_factor(resistance / impedance);
    let amplitude = voltage / impedance;

    let time = linspace(window.start, window.stop, window.samples);
    let mut out = WaveformSet {
        voltage: Vec::with_capacity(time.len()),
        current: Vec::with_capacity(time.len()),
        power: Vec::with_capacity(time.len()),
        time: Vec::new(),
    };
    for &t in &time {
        let v = voltage * (omega * t).sin();
        let i = amplitude * (omega * t - phase).sin();
        out.voltage.push(v);
        out.current.push(i);
        out.power.push(v * i);
    }
    out.time = time;

    tracing::debug!(samples = out.len(), phase, "waveforms sampled");
    Ok(out)
}

/// Voltage, current and impedance arrows anchored at the origin.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasorSet {
    /// Reference voltage `(V, 0)`.
    pub voltage: CScalar,
    /// Current direction drawn at voltage scale: `(V·cos φ, V·sin φ)`.
    pub current: CScalar,
    /// Impedance `(R, X)`.
    pub impedance: CScalar,
    /// Half-width of the square viewport, `1.5·|V|`.
    pub view_extent: Scalar,
}

impl PhasorSet {
    /// Angle of the current arrow relative to the voltage arrow, in radians.
    #[must_use]
    pub fn current_angle(&self) -> Scalar {
        self.current.arg() - self.voltage.arg()
    }

    /// Labelled arrows in drawing order.
    #[must_use]
    pub fn labelled(&self) -> [(&'static str, CScalar); 3] {
        [
            ("Voltage (V)", self.voltage),
            ("Current (I)", self.current),
            ("Impedance (Z)", self.impedance),
        ]
    }
}

/// Builds the phasor diagram from the analysis scalars.
#[must_use]
pub fn synthesize_phasors(
    voltage: Scalar,
    resistance: Scalar,
    reactance: Scalar,
    power_factor: Scalar,
) -> PhasorSet {
    let phase = phase_from_power_factor(power_factor);
    PhasorSet {
        voltage: Complex::new(voltage, 0.0),
        current: Complex::new(voltage * phase.cos(), voltage * phase.sin()),
        impedance: Complex::new(resistance, reactance),
        view_extent: PHASOR_VIEW_SCALE * voltage.abs(),
    }
}

/// Writes a waveform set as `time,voltage,current,power` CSV.
pub fn write_waveform_csv<W: Write>(mut w: W, waveforms: &WaveformSet) -> io::Result<()> {
    writeln!(w, "time,voltage,current,power")?;
    for (t, v, i, p) in waveforms.rows() {
        writeln!(w, "{:.16e},{:.16e},{:.16e},{:.16e}", t, v, i, p)?;
    }
    Ok(())
}

/// Writes the phasor arrows as `label,re,im` CSV.
pub fn write_phasor_csv<W: Write>(mut w: W, phasors: &PhasorSet) -> io::Result<()> {
    writeln!(w, "label,re,im")?;
    for (label, z) in phasors.labelled() {
        writeln!(w, "{},{:.16e},{:.16e}", label, z.re, z.im)?;
    }
    Ok(())
}
