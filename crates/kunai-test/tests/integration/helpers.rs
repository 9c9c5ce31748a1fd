#![allow(clippy::expect_used, dead_code)]
//! Test helpers for file integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub use kunai_test::component::config::FileConfig;
pub use kunai_test::component::vcard::{
    Card, DateTime, Parameter, Property, VCardErrorKind, parse, parse_with_config, serialize,
    to_vcf_string, validate,
};

/// A minimal card using every routed property.
pub const SAMPLE_CARD: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Simon Perreault\r\n\
BDAY:--0203\r\n\
ANNIVERSARY:20090808T1430-0500\r\n\
N:Perreault;Simon;;;ing. jr,M.Sc.\r\n\
TEL;VALUE=uri;TYPE=work,voice;PREF=1:tel:+1-418-656-9254;ext=102\r\n\
END:VCARD\r\n";

/// Scratch directory, removed when dropped.
pub struct TestDir {
    inner: TempDir,
}

impl TestDir {
    /// Creates a fresh, empty directory.
    pub fn new() -> Self {
        let inner = tempfile::Builder::new()
            .prefix("kunai-test-")
            .tempdir()
            .expect("Failed to create test directory");
        tracing::debug!(dir = %inner.path().display(), "Created test directory");
        Self { inner }
    }

    /// Path of `name` inside the directory, without creating it.
    pub fn path(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }

    /// Writes `contents` to `name` and returns its path.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn root(&self) -> &Path {
        self.inner.path()
    }
}
