//! Mapping error types.

use thiserror::Error;

use super::record::{FieldOption, FieldSpec};

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// A record layout the mapping engine cannot express.
///
/// These are programming errors in a record declaration, not problems with
/// the data being mapped: absent properties and empty values never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("field `{field}` ({option}) must be {expected}, found {found}")]
    UnsupportedShape {
        field: &'static str,
        option: FieldOption,
        expected: &'static str,
        found: &'static str,
    },
}

impl MapError {
    pub(crate) fn unsupported(spec: FieldSpec, expected: &'static str, found: &'static str) -> Self {
        Self::UnsupportedShape {
            field: spec.field,
            option: spec.option,
            expected,
            found,
        }
    }
}
