//! Series RLC circuit model and its steady-state analysis.

/// Closed-form steady-state analysis (impedance, current, power triangle).
pub mod analysis;
/// Lumped component definitions and traits.
pub mod component;
/// The series R-L-C loop.
pub mod network;

pub use analysis::{analyze, AnalysisResult, DomainError};
pub use component::{Capacitor, Component, Inductor, Resistor, VoltageSource};
pub use network::{Reactances, SeriesRlc};
