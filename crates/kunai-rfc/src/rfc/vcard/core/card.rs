//! vCard wrapper type.

use super::datetime::DateTime;
use super::property::{Property, names};
use crate::rfc::vcard::error::{VCardError, VCardErrorKind, VCardResult};

/// A complete vCard 4.0.
///
/// The version is implied: only 4.0 cards can be built or parsed, so it is
/// not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The first FN property.
    pub formatted_name: Property,
    /// BDAY, if present.
    pub birthday: Option<DateTime>,
    /// ANNIVERSARY, if present.
    pub anniversary: Option<DateTime>,
    /// Every other property in order of appearance, including repeated FN.
    pub properties: Vec<Property>,
}

impl Card {
    /// Creates a card holding only an FN with the given value.
    ///
    /// ## Errors
    /// Returns `InvalidProperty` if `formatted_name` is empty.
    pub fn new(formatted_name: impl Into<String>) -> VCardResult<Self> {
        let value = non_empty_fn(formatted_name.into())?;
        Ok(Self {
            formatted_name: Property::new(names::FN, value),
            birthday: None,
            anniversary: None,
            properties: Vec::new(),
        })
    }

    /// Returns the first FN value.
    #[must_use]
    pub fn formatted_name_value(&self) -> Option<&str> {
        self.formatted_name.first_value()
    }

    /// Replaces the FN values with a single new value, keeping group and
    /// parameters.
    ///
    /// ## Errors
    /// Returns `InvalidProperty` if `value` is empty.
    pub fn set_formatted_name(&mut self, value: impl Into<String>) -> VCardResult<()> {
        let value = non_empty_fn(value.into())?;
        self.formatted_name.values = vec![value];
        Ok(())
    }

    /// Appends a property to the generic collection.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Returns the first generic property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns all generic properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.name == name).collect()
    }
}

fn non_empty_fn(value: String) -> VCardResult<String> {
    if value.is_empty() {
        return Err(VCardError::new(
            VCardErrorKind::InvalidProperty,
            "FN value must not be empty",
        ));
    }
    Ok(value)
}
