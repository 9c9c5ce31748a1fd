//! Per-property value interpretation.

use super::text::{contains_alpha, split_composite};
use crate::rfc::vcard::core::{DateTime, Parameter, names};

/// How the assembler treats a decoded property, chosen by name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRule {
    /// Single value, stored in the generic collection.
    Plain,
    /// `;`-separated components (N), stored in the generic collection.
    Composite,
    /// First occurrence becomes the card's FN; later ones are generic.
    FormattedName,
    /// BDAY, routed to the birthday field.
    Birthday,
    /// ANNIVERSARY, routed to the anniversary field.
    Anniversary,
    /// VERSION, checked and discarded.
    Version,
    /// BEGIN/END inside the card, discarded.
    Marker,
}

impl PropertyRule {
    /// Looks up the rule for a property name. Names are case-sensitive.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        match name {
            names::FN => Self::FormattedName,
            names::N => Self::Composite,
            names::BDAY => Self::Birthday,
            names::ANNIVERSARY => Self::Anniversary,
            names::VERSION => Self::Version,
            names::BEGIN | names::END => Self::Marker,
            _ => Self::Plain,
        }
    }

    /// Splits a raw value into the property's value list.
    #[must_use]
    pub fn split_values(self, raw: &str) -> Vec<String> {
        match self {
            Self::Composite => split_composite(raw, ';'),
            _ => vec![raw.to_string()],
        }
    }
}

/// Interprets a BDAY/ANNIVERSARY value.
///
/// 1. `VALUE=text` among the parameters: text form, verbatim.
/// 2. Contains `T`: split at the first `T` into date and time.
/// 3. Exactly 10 bytes long, or no alphabetic character: date only.
/// 4. Otherwise: text form.
#[must_use]
pub fn parse_date_time(raw: &str, params: &[Parameter]) -> DateTime {
    if params.iter().any(|p| p.name == "VALUE" && p.value == "text") {
        return DateTime::text(raw);
    }

    if let Some((date, time)) = raw.split_once('T') {
        return DateTime::date_time(date, time);
    }

    if raw.len() == 10 || !contains_alpha(raw) {
        return DateTime::date(raw);
    }

    DateTime::text(raw)
}
