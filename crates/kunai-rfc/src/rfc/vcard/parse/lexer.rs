//! vCard lexer: line unfolding and content line decoding.
//!
//! Physical lines must end in CRLF. A line starting with a space or tab
//! continues the previous logical line (RFC 6350 §3.2).

use super::text::trim;
use crate::rfc::vcard::core::Parameter;
use crate::rfc::vcard::error::{VCardError, VCardResult};

/// One unfolded property line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Physical line (1-based) where this logical line starts.
    pub line: usize,
    /// Unfolded content, without the line terminator.
    pub text: String,
}

/// Unfolds CRLF-terminated physical lines into logical lines.
///
/// Exactly one leading space or tab is removed from each continuation line.
/// Empty physical lines produce empty logical lines; the caller decides what
/// to do with them.
///
/// ## Errors
/// - `InvalidCard` if any physical line is not terminated by CRLF, or
///   contains a bare CR.
/// - `InvalidProperty` if the first line is a continuation.
pub fn unfold(input: &str) -> VCardResult<Vec<LogicalLine>> {
    let mut lines: Vec<LogicalLine> = Vec::new();

    for (idx, raw) in input.split_inclusive('\n').enumerate() {
        let line_num = idx + 1;
        let content = raw.strip_suffix("\r\n").ok_or_else(|| {
            tracing::warn!(line = line_num, "Physical line not terminated by CRLF");
            VCardError::invalid_card(line_num, "line is not terminated by CRLF")
        })?;

        if content.contains('\r') {
            tracing::warn!(line = line_num, "Bare CR inside physical line");
            return Err(VCardError::invalid_card(
                line_num,
                "bare CR inside line",
            ));
        }

        if let Some(continuation) = content
            .strip_prefix(' ')
            .or_else(|| content.strip_prefix('\t'))
        {
            let prev = lines.last_mut().ok_or_else(|| {
                VCardError::invalid_property(line_num, "continuation line without a property")
            })?;
            prev.text.push_str(continuation);
        } else {
            lines.push(LogicalLine {
                line: line_num,
                text: content.to_string(),
            });
        }
    }

    Ok(lines)
}

/// A decoded content line before value interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property group; empty when absent.
    pub group: String,
    /// Property name, as written.
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Trimmed text after the first colon.
    pub value: String,
}

/// Decodes a logical line into group, name, parameters and raw value.
///
/// Format: `[group.]name[;param=value]*:value`
///
/// The value starts after the first colon, so parameter values cannot
/// contain one.
///
/// ## Errors
/// Returns `InvalidProperty` for a missing colon, an empty value, an empty
/// name, or a parameter that is not exactly `name=value` with both sides
/// non-empty.
pub fn parse_content_line(line: &str, line_num: usize) -> VCardResult<ContentLine> {
    let (left, right) = line
        .split_once(':')
        .ok_or_else(|| VCardError::invalid_property(line_num, "missing colon separator"))?;

    let left = trim(left);
    let value = trim(right);
    if value.is_empty() {
        return Err(VCardError::invalid_property(line_num, "empty property value"));
    }

    let mut tokens = left.split(';');
    let (group, name) = parse_group(trim(tokens.next().unwrap_or_default()));
    if name.is_empty() {
        return Err(VCardError::invalid_property(line_num, "empty property name"));
    }

    let params = tokens
        .map(trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_parameter(token, line_num))
        .collect::<VCardResult<Vec<_>>>()?;

    Ok(ContentLine {
        group: group.to_string(),
        name: name.to_string(),
        params,
        value: value.to_string(),
    })
}

/// Splits `group.name` on the first dot; no dot means no group.
fn parse_group(token: &str) -> (&str, &str) {
    match token.split_once('.') {
        Some((group, name)) => (trim(group), trim(name)),
        None => ("", token),
    }
}

fn parse_parameter(token: &str, line_num: usize) -> VCardResult<Parameter> {
    let (name, value) = token.split_once('=').ok_or_else(|| {
        VCardError::invalid_property(line_num, format!("parameter {token:?} has no '='"))
    })?;

    if value.contains('=') {
        return Err(VCardError::invalid_property(
            line_num,
            format!("parameter {token:?} has more than one '='"),
        ));
    }

    let (name, value) = (trim(name), trim(value));
    if name.is_empty() || value.is_empty() {
        return Err(VCardError::invalid_property(
            line_num,
            format!("parameter {token:?} needs a name and a value"),
        ));
    }

    Ok(Parameter::new(name, value))
}
