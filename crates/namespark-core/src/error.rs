use thiserror::Error;

use crate::form::FormStep;

/// Core error type shared across NameSpark crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A form step was left without the data it requires.
    #[error("step {step} is incomplete: {message}")]
    Validation { step: FormStep, message: String },
    /// A step number outside the form was requested.
    #[error("unknown form step: {0}")]
    UnknownStep(u8),
}

/// Convenience alias for results returned by NameSpark crates.
pub type Result<T> = std::result::Result<T, Error>;
