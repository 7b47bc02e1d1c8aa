//! Directory stream decoding.
//!
//! ## Features
//!
//! - Streams from any `BufRead`, one block per call
//! - Unfolds continuation lines (CRLF or bare LF, then one SPACE/HTAB)
//! - Parses property groups (`item1.TEL`), including dotted groups
//! - Quoted parameter values with literal `,`, `;` and `:`
//! - Nested blocks of any depth, read with an explicit stack

mod decoder;
mod error;
mod scanner;

pub use decoder::Decoder;
pub use error::{DecodeError, DecodeResult};
