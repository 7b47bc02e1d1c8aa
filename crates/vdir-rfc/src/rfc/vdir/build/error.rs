//! Encode error types.

use thiserror::Error;

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// An error that occurred while encoding a block.
///
/// Everything except `Io` is detected before the first byte is written.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("block has no profile")]
    MissingProfile,

    #[error("property has no name")]
    EmptyPropertyName,

    #[error("parameter {parameter} of {property} contains a double quote")]
    QuotedParameter { property: String, parameter: String },

    #[error("parameter {parameter} of {property} contains a literal \\n sequence")]
    EscapedParameter { property: String, parameter: String },
}
