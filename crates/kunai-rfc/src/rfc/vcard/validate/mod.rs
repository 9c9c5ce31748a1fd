//! Structural validation of assembled cards.
//!
//! Validation is independent of parsing: it re-checks a [`Card`] built by
//! hand or by the parser and reports the first violation found.
//!
//! [`Card`]: crate::rfc::vcard::core::Card

mod card;

pub use card::validate;
