//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::build::to_vcf_string;
//! use kunai_rfc::rfc::vcard::core::{Card, Property};
//!
//! let mut card = Card::new("John Doe").unwrap();
//! card.add_property(Property::new("EMAIL", "john@example.com"));
//!
//! let output = to_vcf_string(&card);
//! assert!(output.contains("FN:John Doe\r\n"));
//! ```
//!
//! Output is never folded and values are written as stored, without
//! escaping.

mod display;
mod serializer;

pub use display::to_display_string;
pub use serializer::{serialize, to_vcf_string};
