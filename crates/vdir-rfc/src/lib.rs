//! RFC 2425 directory information blocks: the text codec shared by vCard and
//! iCalendar, a generic block tree, and a record mapping layer.

pub mod error;
pub mod rfc;

pub use error::{VdirError, VdirResult};

#[doc(hidden)]
pub mod __private {
    pub use const_str;
}
