//! Record descriptors.

use std::fmt;

use super::error::MapResult;

/// How a record field maps onto the directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOption {
    /// A property of the block, or a value component inside a property.
    Value,
    /// The block's profile.
    Profile,
    /// Nested blocks.
    Object,
    /// A parameter of the enclosing property.
    Param,
    /// Every string of every matching property, flattened.
    Multiple,
}

impl fmt::Display for FieldOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Profile => "profile",
            Self::Object => "object",
            Self::Param => "param",
            Self::Multiple => "multiple",
        })
    }
}

/// Static metadata for one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust field name.
    pub field: &'static str,
    /// Property, parameter or profile name, uppercase. `-` ignores the field.
    pub name: &'static str,
    pub option: FieldOption,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(field: &'static str, name: &'static str, option: FieldOption) -> Self {
        Self {
            field,
            name,
            option,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.name == "-"
    }
}

/// Read-only view of a field's value.
#[derive(Clone, Copy)]
pub enum FieldRef<'a> {
    Text(&'a str),
    TextList(&'a [String]),
    Record(&'a dyn Record),
    Records(&'a dyn RecordList),
}

impl FieldRef<'_> {
    /// Short name of the value shape, for error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::TextList(_) => "text list",
            Self::Record(_) => "record",
            Self::Records(_) => "record list",
        }
    }
}

/// Mutable view of a field's value.
pub enum FieldMut<'a> {
    Text(&'a mut String),
    TextList(&'a mut Vec<String>),
    Record(&'a mut dyn Record),
    Records(&'a mut dyn RecordList),
}

impl FieldMut<'_> {
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::TextList(_) => "text list",
            Self::Record(_) => "record",
            Self::Records(_) => "record list",
        }
    }
}

/// A type that can be mapped to and from a directory block.
///
/// Implementations are normally generated by [`record!`](crate::record).
/// Visitors see fields in declaration order and never see ignored fields.
pub trait Record {
    /// All fields in declaration order, ignored ones included.
    fn descriptor(&self) -> &'static [FieldSpec];

    /// Calls `visitor` with every mapped field.
    ///
    /// ## Errors
    /// Returns the first error produced by `visitor`.
    fn visit(
        &self,
        visitor: &mut dyn FnMut(FieldSpec, FieldRef<'_>) -> MapResult<()>,
    ) -> MapResult<()>;

    /// Calls `visitor` with a mutable view of every mapped field.
    ///
    /// ## Errors
    /// Returns the first error produced by `visitor`.
    fn visit_mut(
        &mut self,
        visitor: &mut dyn FnMut(FieldSpec, FieldMut<'_>) -> MapResult<()>,
    ) -> MapResult<()>;
}

/// A growable list of records of one type.
pub trait RecordList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, index: usize) -> Option<&dyn Record>;

    /// Fills a fresh default element with `fill` and appends it.
    ///
    /// ## Errors
    /// Returns the error from `fill`, in which case nothing is appended.
    fn push_with(
        &mut self,
        fill: &mut dyn FnMut(&mut dyn Record) -> MapResult<()>,
    ) -> MapResult<()>;
}

impl<T: Record + Default> RecordList for Vec<T> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn record(&self, index: usize) -> Option<&dyn Record> {
        self.get(index).map(|r| r as &dyn Record)
    }

    fn push_with(
        &mut self,
        fill: &mut dyn FnMut(&mut dyn Record) -> MapResult<()>,
    ) -> MapResult<()> {
        let mut item = T::default();
        fill(&mut item)?;
        self.push(item);
        Ok(())
    }
}

/// Field types a record may contain.
pub trait Field {
    fn field_ref(&self) -> FieldRef<'_>;
    fn field_mut(&mut self) -> FieldMut<'_>;
}

impl Field for String {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Text(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Text(self)
    }
}

impl Field for Vec<String> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::TextList(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::TextList(self)
    }
}

impl<T: Record + Default> Field for Vec<T> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Records(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Records(self)
    }
}
