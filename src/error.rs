//! Error types for bitsliced operations.
//!
//! The arithmetic itself is total; errors only come from lane counts that do
//! not fit a bit-plane vector and from the console reader.

use std::fmt;

/// Errors that can occur during bitsliced operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitslicedError {
    /// More values were requested than the container can hold.
    OutOfRange {
        /// The number of values requested.
        count: usize,
        /// The maximum number of values accepted.
        capacity: usize,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
    /// A token from the input stream was not an unsigned 32-bit integer.
    ParseError {
        /// The offending token.
        token: String,
        /// Zero-based index of the token in the stream.
        position: usize,
    },
    /// Reading the input stream failed.
    IoError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for BitslicedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitslicedError::OutOfRange { count, capacity } => write!(
                f,
                "Lane count out of range: {} values requested, capacity is {}",
                count, capacity
            ),
            BitslicedError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
            BitslicedError::ParseError { token, position } => write!(
                f,
                "Parse error: token {:?} at position {} is not an unsigned 32-bit integer",
                token, position
            ),
            BitslicedError::IoError { message } => write!(f, "I/O error: {}", message),
        }
    }
}

impl std::error::Error for BitslicedError {}

impl From<std::io::Error> for BitslicedError {
    fn from(err: std::io::Error) -> Self {
        io_error(err.to_string())
    }
}

/// Result type alias for bitsliced operations.
pub type Result<T> = std::result::Result<T, BitslicedError>;

/// Creates an out-of-range error.
pub fn out_of_range(count: usize, capacity: usize) -> BitslicedError {
    BitslicedError::OutOfRange { count, capacity }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> BitslicedError {
    BitslicedError::ValidationError {
        message: message.into(),
    }
}

/// Creates a parse error.
pub fn parse_error(token: impl Into<String>, position: usize) -> BitslicedError {
    BitslicedError::ParseError {
        token: token.into(),
        position,
    }
}

/// Creates an I/O error.
pub fn io_error(message: impl Into<String>) -> BitslicedError {
    BitslicedError::IoError {
        message: message.into(),
    }
}
