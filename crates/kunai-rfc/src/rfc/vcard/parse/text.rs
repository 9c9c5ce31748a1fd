//! Text helpers shared by the unfolder and decoder.

/// Trims leading and trailing ASCII whitespace.
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_ascii()
}

/// Returns whether the string contains at least one ASCII letter.
///
/// Non-ASCII letters do not count, so `１９９６年` reads as a date.
#[must_use]
pub fn contains_alpha(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Splits on `delim`, keeping empty tokens.
///
/// `"a;;c"` yields `["a", "", "c"]` and `""` yields `[""]`, so the number of
/// tokens is always one more than the number of delimiters.
#[must_use]
pub fn split_composite(s: &str, delim: char) -> Vec<String> {
    s.split(delim).map(str::to_owned).collect()
}
