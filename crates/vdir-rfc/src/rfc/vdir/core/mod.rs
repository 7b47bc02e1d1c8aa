//! Generic directory tree (RFC 2425 §5.8).
//!
//! These types carry no format knowledge beyond names, parameters and value
//! shapes. They are built fresh per decode call, handed to the encoder or the
//! mapping layer, and then dropped.

mod block;
mod parameter;
mod property;
mod value;

pub use block::Block;
pub use parameter::Parameter;
pub use property::Property;
pub use value::{StructuredValue, Value};
