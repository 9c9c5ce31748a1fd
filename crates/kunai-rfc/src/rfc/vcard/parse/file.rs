//! Reading vCard files from disk.

use std::path::Path;

use kunai_core::config::FileConfig;
use kunai_core::constants::UTF8_BOM;

use super::parser::parse_str;
use crate::rfc::vcard::core::Card;
use crate::rfc::vcard::error::{VCardError, VCardErrorKind, VCardResult};

/// Parses the vCard file at `path`, accepting the default extensions.
///
/// ## Errors
/// Returns `InvalidFile` for a rejected extension or an unreadable or
/// non-UTF-8 file, otherwise any error from [`parse_str`].
pub fn parse(path: impl AsRef<Path>) -> VCardResult<Card> {
    parse_with_config(path, &FileConfig::default())
}

/// Parses the vCard file at `path` with the given file settings.
///
/// ## Errors
/// Same as [`parse`].
#[tracing::instrument(skip(path, files), fields(file = %path.as_ref().display()))]
pub fn parse_with_config(path: impl AsRef<Path>, files: &FileConfig) -> VCardResult<Card> {
    let input = read_source(path.as_ref(), files)?;
    parse_str(&input)
}

/// Reads a vCard file into a string, without a leading byte-order mark.
///
/// ## Errors
/// Returns `InvalidFile` if the extension is not accepted, the file cannot be
/// read, or its contents are not UTF-8.
pub fn read_source(path: &Path, files: &FileConfig) -> VCardResult<String> {
    if !files.accepts(path) {
        tracing::warn!(extensions = ?files.extensions, "Rejected file extension");
        return Err(VCardError::new(
            VCardErrorKind::InvalidFile,
            format!("{}: unsupported file extension", path.display()),
        ));
    }

    let bytes = std::fs::read(path).map_err(|e| VCardError::from_read(&e, path))?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    tracing::trace!(len = bytes.len(), "Read vCard file");

    String::from_utf8(bytes.to_vec()).map_err(|e| {
        VCardError::new(
            VCardErrorKind::InvalidFile,
            format!("{}: {e}", path.display()),
        )
    })
}
