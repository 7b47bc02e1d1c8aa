//! Content line properties.

use super::{Parameter, StructuredValue, Value};

/// A single parsed content line.
///
/// Format: `[group.]NAME[;PARAM=VAL[,VAL]...]*:VALUE[;VALUE]*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Value components.
    pub value: StructuredValue,
}

impl Default for Property {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Property {
    /// Creates a property with no parameters and a single empty component,
    /// the same value `NAME:` decodes to.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: StructuredValue(vec![Value::new()]),
        }
    }

    /// Creates a property holding a single text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: StructuredValue::single(value),
            ..Self::new(name)
        }
    }

    /// Creates a property from value components. No components is the same
    /// as one empty component.
    #[must_use]
    pub fn structured(name: impl Into<String>, components: Vec<Value>) -> Self {
        if components.is_empty() {
            return Self::new(name);
        }
        Self {
            value: StructuredValue(components),
            ..Self::new(name)
        }
    }

    /// Sets the group prefix.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.add_param(param);
        self
    }

    /// Adds a parameter, appending its values to an existing parameter of the
    /// same name instead of adding a second entry.
    pub fn add_param(&mut self, param: Parameter) {
        if let Some(existing) = self.params.iter_mut().find(|p| p.name == param.name) {
            existing.values.extend(param.values);
        } else {
            self.params.push(param);
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.param(name)?.value()
    }

    /// Returns the first string of the first value component.
    #[must_use]
    pub fn text_value(&self) -> &str {
        self.value.text()
    }

    /// Returns whether the property has the given name (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
