//! Kunai vCard tools - integration test support.
//!
//! Re-exports the workspace crates so file-level tests can use a single
//! `kunai_test::component::` path.

pub mod component {
    pub use kunai_core::*;

    pub mod vcard {
        pub use kunai_rfc::rfc::vcard::*;
    }
}
