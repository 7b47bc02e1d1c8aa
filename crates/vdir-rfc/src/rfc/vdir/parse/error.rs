//! Decode error types.

use thiserror::Error;

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// An error that occurred while decoding a directory stream.
///
/// Every variant except `Io` carries the 1-based line number where the
/// offending content line started.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid UTF-8 sequence")]
    InvalidUtf8 { line: usize },

    #[error("line {line}: unexpected end of input in {context}")]
    UnexpectedEof { line: usize, context: String },

    #[error("line {line}: missing colon separator after {name:?}")]
    MissingColon { line: usize, name: String },

    #[error("line {line}: empty property name")]
    EmptyPropertyName { line: usize },

    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedProperty {
        line: usize,
        expected: String,
        found: String,
    },

    #[error("line {line}: BEGIN without a profile name")]
    MissingProfile { line: usize },

    #[error("line {line}: unexpected END:{found}, expected END:{expected}")]
    ProfileMismatch {
        line: usize,
        expected: String,
        found: String,
    },
}

impl DecodeError {
    /// Returns the line the error refers to, if it has one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::InvalidUtf8 { line }
            | Self::UnexpectedEof { line, .. }
            | Self::MissingColon { line, .. }
            | Self::EmptyPropertyName { line }
            | Self::UnexpectedProperty { line, .. }
            | Self::MissingProfile { line }
            | Self::ProfileMismatch { line, .. } => Some(*line),
        }
    }

    /// Returns whether the input ended before the current block was closed.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
