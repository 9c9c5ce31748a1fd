//! vCard core types.
//!
//! - [`Card`] - one parsed or constructed vCard
//! - [`Property`] - group, name, parameters and values
//! - [`Parameter`] - one `NAME=value` pair
//! - [`DateTime`] - BDAY/ANNIVERSARY value, text or structured
//!
//! ## Example
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::core::{Card, Property};
//!
//! let mut card = Card::new("John Doe").unwrap();
//! card.add_property(Property::new("EMAIL", "john@example.com"));
//! assert_eq!(card.formatted_name_value(), Some("John Doe"));
//! ```

mod card;
mod datetime;
mod parameter;
mod property;

pub use card::Card;
pub use datetime::DateTime;
pub use parameter::Parameter;
pub use property::{Property, names};
