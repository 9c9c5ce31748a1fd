//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::parse::parse_str;
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
//! ## Stages
//!
//! - [`unfold`] turns CRLF-terminated physical lines into logical lines
//! - [`parse_content_line`] splits a logical line into group, name,
//!   parameters and value
//! - [`parse_str`] assembles the card and enforces VERSION and FN

mod file;
mod lexer;
mod parser;
mod text;
mod values;

pub use file::{parse, parse_with_config, read_source};
pub use lexer::{ContentLine, LogicalLine, parse_content_line, unfold};
pub use parser::parse_str;
pub use text::{contains_alpha, split_composite, trim};
pub use values::{PropertyRule, parse_date_time};
