//! vCard serialization.

use std::path::Path;

use kunai_core::constants::{BEGIN_LINE, CRLF, END_LINE, VERSION_LINE_CRLF};

use crate::rfc::vcard::core::{Card, DateTime, Property, names};
use crate::rfc::vcard::error::{VCardError, VCardResult};

/// Renders a card to its canonical text form.
///
/// ## Summary
/// Emits `BEGIN:VCARD`, `VERSION:4.0`, FN, BDAY, ANNIVERSARY, then every
/// generic property in stored order, then `END:VCARD`. Every line ends in
/// CRLF and no line is folded, whatever its length.
#[must_use]
pub fn to_vcf_string(card: &Card) -> String {
    let mut output = String::new();

    output.push_str(BEGIN_LINE);
    output.push_str(VERSION_LINE_CRLF);

    serialize_property(&card.formatted_name, &mut output);

    if let Some(birthday) = &card.birthday {
        serialize_date_time(names::BDAY, birthday, &mut output);
    }
    if let Some(anniversary) = &card.anniversary {
        serialize_date_time(names::ANNIVERSARY, anniversary, &mut output);
    }

    for prop in &card.properties {
        serialize_property(prop, &mut output);
    }

    output.push_str(END_LINE);
    output
}

/// Writes a card to `path`, replacing any existing file.
///
/// The whole card is rendered first and written in one operation. The card
/// is not validated here.
///
/// ## Errors
/// Returns `WriteFailure` if the file cannot be written. The destination may
/// then be missing, truncated or partially written.
#[tracing::instrument(skip(card, path), fields(file = %path.as_ref().display()))]
pub fn serialize(card: &Card, path: impl AsRef<Path>) -> VCardResult<()> {
    let path = path.as_ref();
    let output = to_vcf_string(card);

    std::fs::write(path, output.as_bytes()).map_err(|e| {
        tracing::warn!(error = %e, "Failed to write vCard");
        VCardError::from_write(&e, path)
    })?;

    tracing::debug!(bytes = output.len(), "Wrote vCard");
    Ok(())
}

fn serialize_property(prop: &Property, output: &mut String) {
    // Group prefix
    if let Some(group) = prop.group() {
        output.push_str(group);
        output.push('.');
    }

    output.push_str(&prop.name);

    for param in &prop.parameters {
        output.push(';');
        output.push_str(&param.name);
        output.push('=');
        output.push_str(&param.value);
    }

    output.push(':');
    output.push_str(&prop.values.join(";"));
    output.push_str(CRLF);
}

fn serialize_date_time(name: &str, value: &DateTime, output: &mut String) {
    output.push_str(name);
    if value.is_text() {
        output.push_str(";VALUE=text");
    }
    output.push(':');
    output.push_str(&value.to_string());
    output.push_str(CRLF);
}
