#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fixed circuit constants and frequency helpers.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared numerical primitives.
pub mod math;
/// Injectable circuit constants and sampling windows.
pub mod config;
/// Series RLC components, topology and steady-state analysis.
pub mod circuits;
/// Waveform and phasor synthesis.
pub mod synthesis;
/// Sampling helpers and resistance sweeps.
pub mod sweep;
/// Request boundary: parsing, evaluation and summary formatting.
pub mod calculation;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
