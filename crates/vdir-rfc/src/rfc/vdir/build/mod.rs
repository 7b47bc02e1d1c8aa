//! Directory stream encoding.
//!
//! ## Features
//!
//! - Writes CRLF line endings
//! - Folds long values with CRLF + SPACE, never inside an escape sequence
//! - Quotes parameter values containing `:`, `;` or `,`
//! - Validates the whole block tree before writing

mod encoder;
mod error;
mod escape;
mod fold;

pub use encoder::{Encoder, EncoderOptions};
pub use error::{EncodeError, EncodeResult};
pub use escape::escape_param_value;
