//! Shared foundation for the kunai workspace: configuration, the core error
//! type, and the vCard wire constants used by both the pipeline and the CLI.

pub mod config;
pub mod constants;
pub mod error;
