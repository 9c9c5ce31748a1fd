//! vCard 4.0 reading, validation and writing (RFC 6350).
//!
//! See [`rfc::vcard`] for the pipeline entry points.

pub mod rfc;
