//! Error types for the keyscrambler library.

use std::fmt;

/// Errors produced by the keyscrambler library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// The input key has zero length.
    EmptyKey,
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrambleError::EmptyKey => {
                write!(f, "can't scramble, key cannot be empty")
            }
        }
    }
}

impl std::error::Error for ScrambleError {}
