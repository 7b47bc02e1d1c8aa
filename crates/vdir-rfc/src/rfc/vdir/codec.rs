//! String-level convenience functions.

use super::build::{Encoder, EncoderOptions};
use super::map::Record;
use super::parse::Decoder;
use crate::error::{VdirError, VdirResult};

/// Encodes a record to text with default options.
///
/// ## Errors
/// Returns a mapping or encode error.
pub fn marshal(record: &dyn Record) -> VdirResult<String> {
    marshal_with(record, EncoderOptions::default())
}

/// Encodes a record to text.
///
/// ## Errors
/// Returns a mapping or encode error.
pub fn marshal_with(record: &dyn Record, options: EncoderOptions) -> VdirResult<String> {
    let mut encoder = Encoder::with_options(Vec::new(), options);
    encoder.encode(record)?;
    Ok(String::from_utf8(encoder.into_inner())?)
}

/// Decodes the first block of `input` into a fresh `T`.
///
/// ## Errors
/// Returns `NoBlock` for input without a block, or a decode or mapping error.
pub fn unmarshal<T: Record + Default>(input: &str) -> VdirResult<T> {
    Decoder::new(input.as_bytes())
        .decode()?
        .ok_or(VdirError::NoBlock)
}
