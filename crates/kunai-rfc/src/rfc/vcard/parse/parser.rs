//! vCard document parser.

use kunai_core::constants::{BEGIN_MARKER, END_MARKER, VCARD_VERSION};

use super::lexer::{ContentLine, LogicalLine, parse_content_line, unfold};
use super::values::{PropertyRule, parse_date_time};
use crate::rfc::vcard::core::{Card, DateTime, Property};
use crate::rfc::vcard::error::{VCardError, VCardErrorKind, VCardResult};

/// Parses the text of a single vCard 4.0.
///
/// ## Summary
/// Unfolds the input, checks the `BEGIN:VCARD`/`END:VCARD` frame, decodes
/// every property in between and assembles a [`Card`]. Parsing is
/// all-or-nothing: the first error aborts and nothing partial is returned.
///
/// ## Errors
/// - `InvalidCard` for bad line termination, a missing frame, a VERSION other
///   than 4.0, or a missing VERSION or FN.
/// - `InvalidProperty` for malformed property or parameter syntax.
/// - `InvalidDateTime` for a BDAY/ANNIVERSARY with neither date nor time.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_str(input: &str) -> VCardResult<Card> {
    tracing::debug!("Parsing vCard");

    let lines = unfold(input)?;

    tracing::trace!(count = lines.len(), "Unfolded lines");

    let body = framed_body(&lines)?;
    let card = Assembler::default().run(body)?;

    tracing::debug!(
        properties = card.properties.len(),
        has_birthday = card.birthday.is_some(),
        has_anniversary = card.anniversary.is_some(),
        "Parsed vCard"
    );

    Ok(card)
}

/// Returns the lines between `BEGIN:VCARD` and `END:VCARD`.
fn framed_body(lines: &[LogicalLine]) -> VCardResult<&[LogicalLine]> {
    match lines {
        [first, body @ .., last] if first.text == BEGIN_MARKER && last.text == END_MARKER => {
            Ok(body)
        }
        [first, .., last] => {
            tracing::warn!(first = %first.text, last = %last.text, "Card is not framed by BEGIN/END");
            Err(VCardError::new(
                VCardErrorKind::InvalidCard,
                "card must start with BEGIN:VCARD and end with END:VCARD",
            ))
        }
        _ => {
            tracing::warn!(count = lines.len(), "Too few lines for a card");
            Err(VCardError::new(
                VCardErrorKind::InvalidCard,
                "card needs at least BEGIN:VCARD and END:VCARD",
            ))
        }
    }
}

#[derive(Default)]
struct Assembler {
    version_seen: bool,
    formatted_name: Option<Property>,
    birthday: Option<DateTime>,
    anniversary: Option<DateTime>,
    properties: Vec<Property>,
}

impl Assembler {
    fn run(mut self, body: &[LogicalLine]) -> VCardResult<Card> {
        for line in body {
            if line.text.is_empty() {
                continue;
            }

            tracing::trace!(line = line.line, "Decoding property");
            let content = parse_content_line(&line.text, line.line)?;
            self.accept(content, line.line)?;
        }

        self.finish()
    }

    fn accept(&mut self, content: ContentLine, line_num: usize) -> VCardResult<()> {
        let rule = PropertyRule::for_name(&content.name);

        match rule {
            PropertyRule::Marker => {
                tracing::debug!(line = line_num, name = %content.name, "Ignoring nested marker");
            }
            PropertyRule::Version => {
                if content.value != VCARD_VERSION {
                    tracing::warn!(line = line_num, version = %content.value, "Unsupported version");
                    return Err(VCardError::invalid_card(
                        line_num,
                        format!("unsupported vCard version: {}", content.value),
                    ));
                }
                if self.version_seen {
                    tracing::debug!(line = line_num, "Ignoring repeated VERSION");
                }
                self.version_seen = true;
            }
            PropertyRule::Birthday => {
                self.birthday = Some(date_time_value(&content, line_num)?);
            }
            PropertyRule::Anniversary => {
                self.anniversary = Some(date_time_value(&content, line_num)?);
            }
            PropertyRule::FormattedName | PropertyRule::Composite | PropertyRule::Plain => {
                let prop = Property {
                    values: rule.split_values(&content.value),
                    group: content.group,
                    name: content.name,
                    parameters: content.params,
                };
                if rule == PropertyRule::FormattedName && self.formatted_name.is_none() {
                    self.formatted_name = Some(prop);
                } else {
                    self.properties.push(prop);
                }
            }
        }

        Ok(())
    }

    fn finish(self) -> VCardResult<Card> {
        if !self.version_seen {
            tracing::warn!("Card has no VERSION property");
            return Err(VCardError::new(
                VCardErrorKind::InvalidCard,
                "missing required property: VERSION",
            ));
        }

        let Some(formatted_name) = self.formatted_name else {
            tracing::warn!("Card has no FN property");
            return Err(VCardError::new(
                VCardErrorKind::InvalidCard,
                "missing required property: FN",
            ));
        };

        Ok(Card {
            formatted_name,
            birthday: self.birthday,
            anniversary: self.anniversary,
            properties: self.properties,
        })
    }
}

fn date_time_value(content: &ContentLine, line_num: usize) -> VCardResult<DateTime> {
    let value = parse_date_time(&content.value, &content.params);
    if !value.is_text() && value.date_part().is_empty() && value.time_part().is_empty() {
        return Err(VCardError::at(
            VCardErrorKind::InvalidDateTime,
            line_num,
            format!("{} has neither date nor time", content.name),
        ));
    }
    Ok(value)
}
