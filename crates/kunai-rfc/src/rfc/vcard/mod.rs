//! vCard 4.0 (RFC 6350) contact cards.
//!
//! ## Overview
//!
//! A card file holds exactly one vCard 4.0 in strict CRLF form. This module
//! reads it into a [`Card`], checks it against the structural rules and
//! writes it back out in canonical order.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::parse_str;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card = parse_str(input).unwrap();
//! assert_eq!(card.formatted_name_value(), Some("John Doe"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::{Card, Property, to_vcf_string, validate};
//!
//! let mut card = Card::new("Jane Doe").unwrap();
//! card.add_property(Property::new("EMAIL", "jane@example.com"));
//! validate(&card).unwrap();
//!
//! let output = to_vcf_string(&card);
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Card model (`Card`, `Property`, `Parameter`, `DateTime`)
//! - [`parse`] - Unfolding, line decoding and card assembly
//! - [`validate`] - Structural checks on a built card
//! - [`build`] - Serialization and display rendering
//! - [`error`] - Error kinds shared by every stage

pub mod build;
pub mod core;
pub mod error;
pub mod parse;
pub mod validate;


pub use build::{serialize, to_display_string, to_vcf_string};
pub use self::core::{Card, DateTime, Parameter, Property};
pub use error::{VCardError, VCardErrorKind, VCardResult, error_message};
pub use parse::{parse, parse_str, parse_with_config};
pub use validate::validate;
