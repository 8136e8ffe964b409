//! Convenience re-exports for analyzing the series RLC circuit.

pub use crate::calculation::{
    calculate, evaluate, parse_resistance, summary_text, Calculation, Summary,
    INVALID_INPUT_MESSAGE,
};
pub use crate::circuits::{
    analysis::{analyze, reactive_power, AnalysisResult, DomainError},
    component::{Capacitor, Component, Inductor, Resistor, VoltageSource},
    network::{Reactances, SeriesRlc},
};
pub use crate::config::{CircuitConfig, CircuitParameters, ConfigError, WaveformWindow};
pub use crate::constants::*;
pub use crate::errors::RlcError;
pub use crate::math::{clamped_sqrt, phase_from_power_factor, CScalar, Scalar};
pub use crate::sweep::{linspace, sweep_resistance, write_sweep_csv, ResistancePoint};
pub use crate::synthesis::{
    synthesize_phasors, synthesize_waveforms, write_phasor_csv, write_waveform_csv, PhasorSet,
    SynthesisError, WaveformSet,
};
pub use crate::units::{
    ActivePower, ApparentPower, Current, Frequency, Impedance, Quantity, ReactivePower, Unit,
    Voltage,
};
