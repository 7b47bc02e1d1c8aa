//! Mapping between directory blocks and typed records.
//!
//! A record declares, per field, where its data lives in the tree:
//!
//! | option     | record → block                       | block → record                      |
//! |------------|--------------------------------------|-------------------------------------|
//! | `profile`  | block profile (tag name if empty)    | copied from the block               |
//! | `object`   | one child block per element          | children with matching profile      |
//! | `value`    | property, or value component         | first property, or next component   |
//! | `param`    | parameter of the enclosing property  | parameter of the enclosing property |
//! | `multiple` | one multi-valued property            | every string of every property      |
//!
//! ## Usage
//!
//! ```rust
//! use vdir_rfc::record;
//! use vdir_rfc::rfc::vdir::map::{from_block, to_block};
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Note {
//!         pub profile: String => ("VNOTE", profile),
//!         pub body: String,
//!     }
//! }
//!
//! let note = Note { body: "hello".into(), ..Note::default() };
//! let block = to_block(&note).unwrap();
//! assert_eq!(block.profile, "VNOTE");
//!
//! let mut copy = Note::default();
//! from_block(&mut copy, &block).unwrap();
//! assert_eq!(copy.body, "hello");
//! ```

mod error;
mod from_block;
mod macros;
mod record;
mod to_block;

pub use error::{MapError, MapResult};
pub use from_block::{from_block, from_property};
pub use record::{Field, FieldMut, FieldOption, FieldRef, FieldSpec, Record, RecordList};
pub use to_block::{to_block, to_property};
