//! Property parameters.

/// A property parameter with an ordered list of values.
///
/// Parameters without `=` in the source text have an empty value list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values in order of appearance.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Creates a parameter that carries no value (`;HOME`).
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        Self::multi(name, Vec::new())
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}
