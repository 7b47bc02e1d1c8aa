//! RFC 2425 directory information blocks.
//!
//! This module provides the text codec shared by vCard (RFC 6350) and
//! iCalendar (RFC 5545), a generic block tree, and a mapping layer between
//! that tree and typed records.
//!
//! ## Usage
//!
//! ### Decoding
//!
//! ```rust
//! use vdir_rfc::rfc::vdir::Decoder;
//!
//! let input = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! BEGIN:VEVENT\r\n\
//! SUMMARY:Standup\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n";
//!
//! let cal = Decoder::new(input.as_bytes()).read_block().unwrap().unwrap();
//! assert_eq!(cal.blocks[0].get_property("SUMMARY").unwrap().text_value(), "Standup");
//! ```
//!
//! ### Records
//!
//! ```rust
//! use vdir_rfc::record;
//! use vdir_rfc::rfc::vdir::{marshal, unmarshal};
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Card {
//!         pub profile: String => ("VCARD", profile),
//!         pub fn_: String => "FN",
//!     }
//! }
//!
//! let card = Card { fn_: "John Doe".into(), ..Card::default() };
//! let text = marshal(&card).unwrap();
//! assert_eq!(text, "BEGIN:VCARD\r\nFN:John Doe\r\nEND:VCARD\r\n");
//!
//! let back: Card = unmarshal(&text).unwrap();
//! assert_eq!(back.fn_, "John Doe");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Tree types (`Block`, `Property`, `Parameter`, values)
//! - [`parse`] - Streaming decoder
//! - [`build`] - Encoder
//! - [`map`] - `Record` trait, `record!` support, tree/record conversion

pub mod build;
mod codec;
pub mod core;
pub mod map;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::{EncodeError, EncodeResult, Encoder, EncoderOptions};
pub use codec::{marshal, marshal_with, unmarshal};
pub use self::core::{Block, Parameter, Property, StructuredValue, Value};
pub use map::{MapError, MapResult, Record, from_block, to_block};
pub use parse::{DecodeError, DecodeResult, Decoder};
