//! File-level integration tests for vCard reading and writing.
//!
//! Every test works in its own `tempfile` directory, removed when the test
//! ends, so tests run in parallel without sharing files.

mod helpers;
mod parse_file;
mod write_file;
