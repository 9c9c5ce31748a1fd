/// Line terminator required on every physical line
pub const CRLF: &str = "\r\n";

/// The only vCard version this workspace reads and writes
pub const VCARD_VERSION: &str = "4.0";

pub const BEGIN_MARKER: &str = "BEGIN:VCARD";
pub const END_MARKER: &str = "END:VCARD";
pub const VERSION_LINE: &str = const_str::concat!("VERSION:", VCARD_VERSION);

pub const BEGIN_LINE: &str = const_str::concat!(BEGIN_MARKER, CRLF);
pub const VERSION_LINE_CRLF: &str = const_str::concat!(VERSION_LINE, CRLF);
pub const END_LINE: &str = const_str::concat!(END_MARKER, CRLF);

/// UTF-8 byte-order mark some editors prepend to `.vcf` files
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Extensions accepted when no configuration overrides them
pub const DEFAULT_EXTENSIONS: &[&str] = &["vcf", "vcard"];
