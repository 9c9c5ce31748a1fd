//! Human-readable card rendering.

use std::fmt::Write as _;

use crate::rfc::vcard::core::{Card, names};

/// Renders a card for people, not for parsers.
///
/// One `NAME: value` line per field: FN's first value, BDAY and ANNIVERSARY
/// when present, then each generic property as `[group.]NAME: first-value`.
#[must_use]
pub fn to_display_string(card: &Card) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "{}: {}",
        names::FN,
        card.formatted_name_value().unwrap_or_default()
    )
    .ok();

    if let Some(birthday) = &card.birthday {
        writeln!(output, "{}: {birthday}", names::BDAY).ok();
    }
    if let Some(anniversary) = &card.anniversary {
        writeln!(output, "{}: {anniversary}", names::ANNIVERSARY).ok();
    }

    for prop in &card.properties {
        writeln!(output, "{prop}").ok();
    }

    output
}
