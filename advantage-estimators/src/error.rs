//! Errors in the library.
use thiserror::Error;

/// Errors raised by the advantage estimators.
#[derive(Error, Debug, PartialEq)]
pub enum AdvantageError {
    /// An input array does not have the shape of `rewards`.
    #[error("Shape mismatch of {name}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Name of the offending array.
        name: &'static str,

        /// Shape of `rewards`.
        expected: (usize, usize),

        /// Shape of the offending array.
        actual: (usize, usize),
    },

    /// The trajectory window is too short for the number of extra steps.
    #[error("Trajectory length {length} is too short for {n_extra_steps} extra steps")]
    TooShort {
        /// Length of the trajectories.
        length: usize,

        /// Number of trailing lookahead steps.
        n_extra_steps: usize,
    },

    /// A scalar parameter is out of its domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
