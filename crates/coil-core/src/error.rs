//! Error types for the core value types.

use std::error::Error;
use std::fmt;

/// Errors from converting raw values into core types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A direction code outside the cardinal range `2..=5`.
    UnknownDirection {
        /// The raw code from the input event.
        code: i8,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection { code } => {
                write!(f, "unknown direction code {code} (expected 2..=5)")
            }
        }
    }
}

impl Error for CoreError {}
