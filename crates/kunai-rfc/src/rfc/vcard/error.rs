//! vCard pipeline error types.

use std::fmt;

/// Result type for vCard pipeline operations.
pub type VCardResult<T> = Result<T, VCardError>;

/// An error raised by parsing, validating or writing a card.
#[derive(Debug, Clone)]
pub struct VCardError {
    /// The kind of error.
    pub kind: VCardErrorKind,
    /// Physical line (1-based) where the offending logical line starts, when known.
    pub line: Option<usize>,
    /// Additional context.
    pub message: String,
}

impl VCardError {
    /// Creates an error without line information.
    #[must_use]
    pub fn new(kind: VCardErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: None,
            message: message.into(),
        }
    }

    /// Creates an error tied to an input line.
    #[must_use]
    pub fn at(kind: VCardErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: Some(line),
            message: message.into(),
        }
    }

    /// Creates an invalid-property error at the given line.
    #[must_use]
    pub fn invalid_property(line: usize, message: impl Into<String>) -> Self {
        Self::at(VCardErrorKind::InvalidProperty, line, message)
    }

    /// Creates an invalid-card error at the given line.
    #[must_use]
    pub fn invalid_card(line: usize, message: impl Into<String>) -> Self {
        Self::at(VCardErrorKind::InvalidCard, line, message)
    }

    /// Maps an I/O failure while reading input.
    #[must_use]
    pub fn from_read(err: &std::io::Error, path: &std::path::Path) -> Self {
        let kind = if err.kind() == std::io::ErrorKind::OutOfMemory {
            VCardErrorKind::InternalFailure
        } else {
            VCardErrorKind::InvalidFile
        };
        Self::new(kind, format!("{}: {err}", path.display()))
    }

    /// Maps an I/O failure while writing output.
    #[must_use]
    pub fn from_write(err: &std::io::Error, path: &std::path::Path) -> Self {
        let kind = if err.kind() == std::io::ErrorKind::OutOfMemory {
            VCardErrorKind::InternalFailure
        } else {
            VCardErrorKind::WriteFailure
        };
        Self::new(kind, format!("{}: {err}", path.display()))
    }
}

impl fmt::Display for VCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}: {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for VCardError {}

/// The kind of a vCard pipeline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VCardErrorKind {
    /// Bad path or extension, unreadable or non-UTF-8 file.
    InvalidFile,
    /// Structural violation: BEGIN/END, VERSION, FN, line termination.
    InvalidCard,
    /// Malformed property or parameter, empty value, wrong `N` arity.
    InvalidProperty,
    /// Misplaced or inconsistent BDAY/ANNIVERSARY.
    InvalidDateTime,
    /// I/O failure while writing.
    WriteFailure,
    /// Resource exhaustion.
    InternalFailure,
}

impl VCardErrorKind {
    /// Returns the fixed human-readable message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidFile => "Invalid file",
            Self::InvalidCard => "Invalid card",
            Self::InvalidProperty => "Invalid property",
            Self::InvalidDateTime => "Invalid date-time",
            Self::WriteFailure => "Write error",
            Self::InternalFailure => "Other error",
        }
    }
}

impl fmt::Display for VCardErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Returns the human-readable message for an error kind.
#[must_use]
pub const fn error_message(kind: VCardErrorKind) -> &'static str {
    kind.message()
}
