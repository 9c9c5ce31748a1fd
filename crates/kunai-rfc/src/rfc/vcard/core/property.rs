//! vCard property type (RFC 6350).

use std::fmt;

use super::parameter::Parameter;

/// A vCard property.
///
/// `values` holds one entry for plain properties and one entry per
/// `;`-separated component for composite ones such as `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property group (e.g., "item1" in "item1.TEL"); empty when absent.
    pub group: String,
    /// Property name, as written.
    pub name: String,
    /// Parameters in order of appearance.
    pub parameters: Vec<Parameter>,
    /// Values in order of appearance.
    pub values: Vec<String>,
}

impl Property {
    /// Creates an ungrouped property with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_values(name, vec![value.into()])
    }

    /// Creates an ungrouped property with several values.
    #[must_use]
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            group: String::new(),
            name: name.into(),
            parameters: Vec::new(),
            values,
        }
    }

    /// Creates a grouped property with a single value.
    #[must_use]
    pub fn grouped(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            ..Self::new(name, value)
        }
    }

    /// Returns the group, if the property has one.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        (!self.group.is_empty()).then_some(self.group.as_str())
    }

    /// Returns the first value.
    #[must_use]
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns the first parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Returns whether any parameter matches both name and value exactly.
    #[must_use]
    pub fn has_param(&self, name: &str, value: &str) -> bool {
        self.parameters
            .iter()
            .any(|p| p.name == name && p.value == value)
    }

    /// Appends a parameter.
    pub fn add_param(&mut self, param: Parameter) {
        self.parameters.push(param);
    }
}

/// Renders `[group.]NAME: first-value` for human display.
impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(group) = self.group() {
            write!(f, "{group}.")?;
        }
        write!(f, "{}: {}", self.name, self.first_value().unwrap_or_default())
    }
}

/// Property names the pipeline treats specially.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const KIND: &str = "KIND";

    // Structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
}
