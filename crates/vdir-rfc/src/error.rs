//! Crate-level error type.

use thiserror::Error;

use crate::rfc::vdir::{DecodeError, EncodeError, MapError};

/// Result type for operations that span several codec stages.
pub type VdirResult<T> = Result<T, VdirError>;

#[derive(Error, Debug)]
pub enum VdirError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input contains no block")]
    NoBlock,

    #[error("encoded output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
