//! Shared error types used across submodules.

use thiserror::Error;

use crate::circuits::analysis::DomainError;
use crate::config::ConfigError;
use crate::synthesis::SynthesisError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum RlcError {
    /// The resistance text is not a finite number.
    #[error("invalid resistance input {input:?}")]
    InvalidInput {
        /// The rejected text.
        input: String,
    },
    /// The closed-form analysis hit a division by zero.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// A configuration record failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Writing an export failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SynthesisError> for RlcError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::Domain(e) => Self::Domain(e),
            SynthesisError::Config(e) => Self::Config(e),
        }
    }
}
