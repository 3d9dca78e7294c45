//! Error types shared by every module of the crate.

use thiserror::Error;

/// Errors raised by Hamming code construction and the encode/decode/check operations.
///
/// All of these are contract violations by the caller. A correctable single-bit
/// error found while decoding is not an error; it is reported through
/// [`Decoded`](crate::Decoded).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction parameter is outside the supported range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A data word or codeword does not have the length the code expects.
    #[error("Length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch {
        /// Length required by the code
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// A bit string contains a symbol other than `'0'` or `'1'`.
    #[error("Invalid character {character:?} at index {index}")]
    InvalidCharacter {
        /// Offending symbol
        character: char,
        /// 0-indexed character position in the input
        index: usize,
    },

    /// A matrix and a vector (or two matrices) were built for different codes.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Dimension the operation required
        expected: usize,
        /// Dimension that was supplied
        actual: usize,
    },

    /// A bit index lies outside the word it addresses.
    #[error("Index {index} out of range for a word of {length} bits")]
    IndexOutOfRange {
        /// Requested 0-indexed bit
        index: usize,
        /// Length of the word
        length: usize,
    },
}

impl Error {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Create a LengthMismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}

/// Result type for all fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;
