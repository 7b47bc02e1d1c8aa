//! Property value shapes (RFC 2425 §5.8.2).

/// One value component: an ordered list of comma-separated strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value(pub Vec<String>);

impl Value {
    /// Creates an empty value component.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a component holding a single string.
    #[must_use]
    pub fn single(text: impl Into<String>) -> Self {
        Self(vec![text.into()])
    }

    /// Returns the first string, or an empty string if there is none.
    #[must_use]
    pub fn text(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    /// Returns whether every string in the component is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.0.push(text.into());
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for Value {
    fn from(strings: Vec<String>) -> Self {
        Self(strings)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::single(text)
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A full property value: semicolon-separated components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredValue(pub Vec<Value>);

impl StructuredValue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value with one component holding one string.
    #[must_use]
    pub fn single(text: impl Into<String>) -> Self {
        Self(vec![Value::single(text)])
    }

    /// Returns the first string of the first component, or an empty string.
    #[must_use]
    pub fn text(&self) -> &str {
        self.0.first().map_or("", Value::text)
    }

    /// Returns the component at `index`.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns whether no component carries a non-empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(Value::is_blank)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, component: Value) {
        self.0.push(component);
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl From<Vec<Value>> for StructuredValue {
    fn from(components: Vec<Value>) -> Self {
        Self(components)
    }
}

impl<'a> IntoIterator for &'a StructuredValue {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
