use thiserror::Error;

/// Errors that can occur when validating a search range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("range end {high} is out of bounds for slice of length {len}")]
    OutOfBounds { high: usize, len: usize },
}
