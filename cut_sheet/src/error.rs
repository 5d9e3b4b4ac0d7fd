//! Error types for cut sheet computations.

use thiserror::Error;

/// Result type for cut sheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a slope profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Station increment was zero, negative or not a number.
    #[error("invalid increment {0}: must be greater than zero")]
    InvalidIncrement(f64),

    /// Begin and end stations coincide so the slope is undefined.
    #[error("begin and end station are equal; slope is undefined")]
    DivisionByZero,

    /// A custom station token could not be parsed as a number.
    #[error("invalid station value {token:?}")]
    Parse { token: String },
}
