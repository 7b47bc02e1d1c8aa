//! vCard records (RFC 6350, RFC 2426).
//!
//! ## Usage
//!
//! ```rust
//! use vdir_rfc::rfc::vcard::Card;
//! use vdir_rfc::rfc::vdir::{marshal, unmarshal};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card: Card = unmarshal(input).unwrap();
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! assert_eq!(card.primary_email(), Some("john@example.com"));
//!
//! assert_eq!(marshal(&card).unwrap(), input);
//! ```

mod card;

pub use card::{Address, CalendarDate, Card, Impp, Name, Photo, TypedValue};
