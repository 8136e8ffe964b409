//! Injectable circuit constants and sampling configuration.
//!
//! The tool only asks for a resistance per request. Everything else that
//! defines the circuit lives in a [`CircuitConfig`], whose default is the
//! compiled-in mains circuit from [`crate::constants`]. Tests and library
//! callers swap in arbitrary element values through the `with_*` setters.
//!
//! ```rust
//! use rlc_phasor::config::CircuitConfig;
//!
//! let config = CircuitConfig::default().with_frequency(60.0);
//! let params = config.with_resistance(10.0).unwrap();
//! assert_eq!(params.frequency, 60.0);
//! ```

use thiserror::Error;

use crate::constants::{
    DEFAULT_CAPACITANCE, DEFAULT_FREQUENCY, DEFAULT_INDUCTANCE, DEFAULT_SOURCE_VOLTAGE,
    DEFAULT_WINDOW_SAMPLES, DEFAULT_WINDOW_START, DEFAULT_WINDOW_STOP,
};
use crate::math::Scalar;

/// Errors raised while validating configuration records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter is NaN or infinite.
    #[error("parameter `{0}` must be finite")]
    NonFinite(&'static str),
    /// The waveform window has no samples.
    #[error("waveform window needs at least one sample")]
    EmptyWindow,
    /// The waveform window ends before it starts.
    #[error("waveform window stop ({stop}) precedes start ({start})")]
    ReversedWindow {
        /// Window start in seconds.
        start: Scalar,
        /// Window stop in seconds.
        stop: Scalar,
    },
}

/// Fixed element values of the series circuit (everything except R).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitConfig {
    /// Inductance in henries.
    pub inductance: Scalar,
    /// Capacitance in farads.
    pub capacitance: Scalar,
    /// Source RMS voltage in volts.
    pub source_voltage: Scalar,
    /// Source frequency in hertz.
    pub frequency: Scalar,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            inductance: DEFAULT_INDUCTANCE,
            capacitance: DEFAULT_CAPACITANCE,
            source_voltage: DEFAULT_SOURCE_VOLTAGE,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl CircuitConfig {
    /// Replaces the inductance.
    #[must_use]
    pub fn with_inductance(mut self, henries: Scalar) -> Self {
        self.inductance = henries;
        self
    }

    /// Replaces the capacitance.
    #[must_use]
    pub fn with_capacitance(mut self, farads: Scalar) -> Self {
        self.capacitance = farads;
        self
    }

    /// Replaces the source RMS voltage.
    #[must_use]
    pub fn with_source_voltage(mut self, volts: Scalar) -> Self {
        self.source_voltage = volts;
        self
    }

    /// Replaces the source frequency.
    #[must_use]
    pub fn with_frequency(mut self, hz: Scalar) -> Self {
        self.frequency = hz;
        self
    }

    /// Checks that every constant is finite.
    ///
    /// Zero frequency or capacitance is *not* a configuration error; it is
    /// reported as a domain error by the analyzer when the reactance is formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("inductance", self.inductance),
            ("capacitance", self.capacitance),
            ("source_voltage", self.source_voltage),
            ("frequency", self.frequency),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, _)) => Err(ConfigError::NonFinite(*name)),
            None => Ok(()),
        }
    }

    /// Combines the constants with a resistance into a parameter record.
    pub fn with_resistance(&self, resistance: Scalar) -> Result<CircuitParameters, ConfigError> {
        self.validate()?;
        if !resistance.is_finite() {
            return Err(ConfigError::NonFinite("resistance"));
        }
        Ok(CircuitParameters {
            resistance,
            inductance: self.inductance,
            capacitance: self.capacitance,
            source_voltage: self.source_voltage,
            frequency: self.frequency,
        })
    }
}

/// Complete parameter set for one analysis request.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitParameters {
    /// Resistance in ohms.
    pub resistance: Scalar,
    /// Inductance in henries.
    pub inductance: Scalar,
    /// Capacitance in farads.
    pub capacitance: Scalar,
    /// Source RMS voltage in volts.
    pub source_voltage: Scalar,
    /// Source frequency in hertz.
    pub frequency: Scalar,
}

/// Uniform time base used for waveform synthesis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformWindow {
    /// First sample time in seconds.
    pub start: Scalar,
    /// Last sample time in seconds (inclusive).
    pub stop: Scalar,
    /// Number of samples.
    pub samples: usize,
}

impl Default for WaveformWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            stop: DEFAULT_WINDOW_STOP,
            samples: DEFAULT_WINDOW_SAMPLES,
        }
    }
}

impl WaveformWindow {
    /// Creates a validated window.
    pub fn new(start: Scalar, stop: Scalar, samples: usize) -> Result<Self, ConfigError> {
        let window = Self {
            start,
            stop,
            samples,
        };
        window.validate()?;
        Ok(window)
    }

    /// Checks bounds and sample count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_finite() {
            return Err(ConfigError::NonFinite("window start"));
        }
        if !self.stop.is_finite() {
            return Err(ConfigError::NonFinite("window stop"));
        }
        if self.samples == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.stop < self.start {
            return Err(ConfigError::ReversedWindow {
                start: self.start,
                stop: self.stop,
            });
        }
        Ok(())
    }

    /// Window length in seconds.
    #[must_use]
    pub fn duration(&self) -> Scalar {
        self.stop - self.start
    }
}
