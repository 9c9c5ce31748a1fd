//! Subcommand bodies.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use kunai_core::config::FileConfig;
use kunai_rfc::rfc::vcard::{
    Card, DateTime, VCardError, parse_with_config, serialize, to_display_string,
    validate as validate_card,
};

/// Placeholder for an absent listing column.
const MISSING: &str = "-";

/// Reads `input`, checks it, writes it to `output` and prints the result.
///
/// ## Errors
/// Any pipeline error from parsing, validation or writing, or a failure to
/// write to `out`.
#[tracing::instrument(skip(files, out), fields(input = %input.display(), output = %output.display()))]
pub fn convert(
    input: &Path,
    output: &Path,
    files: &FileConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let card = parse_with_config(input, files)?;
    validate_card(&card)?;
    serialize(&card, output)?;

    tracing::info!("Converted card");

    out.write_all(to_display_string(&card).as_bytes())?;
    Ok(())
}

/// Prints a card's display string.
///
/// ## Errors
/// Any parse error, or a failure to write to `out`.
pub fn show(file: &Path, files: &FileConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let card = parse_with_config(file, files)?;
    out.write_all(to_display_string(&card).as_bytes())?;
    Ok(())
}

/// Parses and validates a card, printing `OK` when both succeed.
///
/// ## Errors
/// The first parse or validation error.
pub fn validate(file: &Path, files: &FileConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let card = parse_with_config(file, files)?;
    validate_card(&card)?;
    writeln!(out, "OK")?;
    Ok(())
}

/// Prints one tab-separated row per valid card in `dir`.
///
/// Columns are file name, FN, birthday and anniversary. Files with other
/// extensions are ignored; cards that fail to parse or validate are skipped.
///
/// ## Errors
/// Fails if the directory cannot be read or `out` cannot be written.
#[tracing::instrument(skip(files, out), fields(dir = %dir.display()))]
pub fn list(dir: &Path, files: &FileConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && files.accepts(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut listed = 0_usize;
    for path in &paths {
        let card = match parse_with_config(path, files).and_then(|card| {
            validate_card(&card)?;
            Ok(card)
        }) {
            Ok(card) => card,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping invalid card");
                continue;
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(out, "{}", listing_row(&name, &card))?;
        listed += 1;
    }

    tracing::debug!(found = paths.len(), listed, "Listed cards");
    Ok(())
}

/// Renders a command failure for stderr.
///
/// Pipeline errors already lead with their kind message, so they print as
/// is. Anything else gets an `Error:` prefix and its cause chain.
#[must_use]
pub fn error_report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<VCardError>() {
        Some(card_err) => card_err.to_string(),
        None => format!("Error: {err:#}"),
    }
}

/// Formats one listing row.
#[must_use]
pub fn listing_row(file_name: &str, card: &Card) -> String {
    let birthday = card.birthday.as_ref().map_or_else(|| MISSING.to_string(), describe_date);
    let anniversary = card
        .anniversary
        .as_ref()
        .map_or_else(|| MISSING.to_string(), describe_date);

    format!(
        "{file_name}\t{}\t{birthday}\t{anniversary}",
        card.formatted_name_value().unwrap_or(MISSING)
    )
}

/// Renders a date for people: ISO calendar form when the value can be read
/// as one, the raw value otherwise.
#[must_use]
pub fn describe_date(value: &DateTime) -> String {
    if value.is_text() {
        return value.text_value().to_string();
    }

    let Some(date) = value.calendar_date() else {
        return value.to_string();
    };

    let date = date.format("%Y-%m-%d");
    match value.calendar_time() {
        Some(time) if value.is_utc_time() => format!("{date} {} UTC", time.format("%H:%M:%S")),
        Some(time) => format!("{date} {}", time.format("%H:%M:%S")),
        None => date.to_string(),
    }
}
