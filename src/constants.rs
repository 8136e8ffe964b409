//! Fixed circuit constants and frequency helpers.
//!
//! ## Defaults
//!
//! The tool models one mains-frequency series RLC circuit. Only the resistance
//! is supplied per request; the remaining element values below are compiled in
//! and collected into [`crate::config::CircuitConfig::default`].
//!
//! | Quantity | Value |
//! |---|---|
//! | Inductance | 16 mH |
//! | Capacitance | 150 µF |
//! | Source voltage | 230 V RMS |
//! | Frequency | 50 Hz |
//!
//! The default waveform window spans 0.1 s (five cycles at 50 Hz) with 1000
//! uniformly spaced samples.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Series inductance in henries (H). 16 mH.
pub const DEFAULT_INDUCTANCE: Scalar = 16.0e-3;
/// Series capacitance in farads (F). 150 µF.
pub const DEFAULT_CAPACITANCE: Scalar = 150.0e-6;
/// Source RMS voltage in volts (V).
pub const DEFAULT_SOURCE_VOLTAGE: Scalar = 230.0;
/// Source frequency in hertz (Hz).
pub const DEFAULT_FREQUENCY: Scalar = 50.0;

/// Start of the waveform window in seconds.
pub const DEFAULT_WINDOW_START: Scalar = 0.0;
/// End of the waveform window in seconds.
pub const DEFAULT_WINDOW_STOP: Scalar = 0.1;
/// Number of samples across the waveform window.
pub const DEFAULT_WINDOW_SAMPLES: usize = 1000;

/// Half-width of the phasor diagram viewport as a multiple of the source voltage.
pub const PHASOR_VIEW_SCALE: Scalar = 1.5;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Undamped resonant frequency `1 / (2π√(LC))` in hertz.
///
/// Returns `None` when `L·C` is not strictly positive.
#[must_use]
pub fn resonant_frequency(inductance: Scalar, capacitance: Scalar) -> Option<Scalar> {
    let lc = inductance * capacitance;
    if lc > 0.0 && lc.is_finite() {
        Some(1.0 / (2.0 * PI * lc.sqrt()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angular_frequency_of_mains() {
        assert_relative_eq!(angular_frequency(50.0), 100.0 * PI, max_relative = 1.0e-12);
    }

    #[test]
    fn resonance_of_default_circuit() {
        let f0 = resonant_frequency(DEFAULT_INDUCTANCE, DEFAULT_CAPACITANCE).unwrap();
        assert_relative_eq!(f0, 102.734_074, max_relative = 1.0e-8);
    }

    #[test]
    fn resonance_requires_positive_lc() {
        assert!(resonant_frequency(0.0, DEFAULT_CAPACITANCE).is_none());
        assert!(resonant_frequency(DEFAULT_INDUCTANCE, -1.0).is_none());
    }
}
