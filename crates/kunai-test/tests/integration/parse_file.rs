//! Tests for reading cards from disk.

use super::helpers::*;

/// ## Summary
/// Both default extensions are accepted.
#[test_log::test]
fn parses_default_extensions() {
    let dir = TestDir::new();

    for name in ["card.vcf", "card.vcard"] {
        let path = dir.write(name, SAMPLE_CARD);
        let card = parse(&path).expect("default extension should parse");
        assert_eq!(card.formatted_name_value(), Some("Simon Perreault"));
        assert_eq!(card.properties.len(), 2);
    }
}

#[test_log::test]
fn rejects_other_extensions() {
    let dir = TestDir::new();

    for name in ["card.txt", "card", "card.VCF", "card.vcf.bak"] {
        let path = dir.write(name, SAMPLE_CARD);
        let err = parse(&path).expect_err("extension should be rejected");
        assert_eq!(err.kind, VCardErrorKind::InvalidFile, "{name}");
    }
}

#[test_log::test]
fn configured_extensions_replace_defaults() {
    let dir = TestDir::new();
    let files = FileConfig {
        extensions: vec!["card".to_string()],
    };

    let accepted = dir.write("contact.card", SAMPLE_CARD);
    assert!(parse_with_config(&accepted, &files).is_ok());

    let rejected = dir.write("contact.vcf", SAMPLE_CARD);
    let err = parse_with_config(&rejected, &files).expect_err("vcf no longer accepted");
    assert_eq!(err.kind, VCardErrorKind::InvalidFile);
}

#[test_log::test]
fn missing_file_is_invalid_file() {
    let dir = TestDir::new();
    let err = parse(dir.path("absent.vcf")).expect_err("missing file should fail");
    assert_eq!(err.kind, VCardErrorKind::InvalidFile);
    assert!(err.message.contains("absent.vcf"));
}

#[test_log::test]
fn directory_with_card_extension_is_invalid_file() {
    let dir = TestDir::new();
    let path = dir.path("folder.vcf");
    std::fs::create_dir(&path).expect("Failed to create directory");

    let err = parse(&path).expect_err("directory should fail");
    assert_eq!(err.kind, VCardErrorKind::InvalidFile);
}

/// ## Summary
/// A leading UTF-8 byte-order mark is dropped before unfolding.
#[test_log::test]
fn strips_byte_order_mark() {
    let dir = TestDir::new();
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(SAMPLE_CARD.as_bytes());
    let with_bom = dir.write("bom.vcf", &bytes);
    let without_bom = dir.write("plain.vcf", SAMPLE_CARD);

    let card = parse(&with_bom).expect("BOM file should parse");
    assert_eq!(card, parse(&without_bom).expect("plain file should parse"));
}

#[test_log::test]
fn invalid_utf8_is_invalid_file() {
    let dir = TestDir::new();
    let mut bytes = b"BEGIN:VCARD\r\nVERSION:4.0\r\nFN:".to_vec();
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    bytes.extend_from_slice(b"\r\nEND:VCARD\r\n");
    let path = dir.write("binary.vcf", &bytes);

    let err = parse(&path).expect_err("non-UTF-8 should fail");
    assert_eq!(err.kind, VCardErrorKind::InvalidFile);
}

#[test_log::test]
fn lf_line_endings_are_invalid_card() {
    let dir = TestDir::new();
    let path = dir.write("unix.vcf", SAMPLE_CARD.replace("\r\n", "\n"));

    let err = parse(&path).expect_err("LF-only file should fail");
    assert_eq!(err.kind, VCardErrorKind::InvalidCard);
    assert_eq!(err.line, Some(1));
}

#[test_log::test]
fn parse_errors_carry_line_numbers() {
    let dir = TestDir::new();
    let path = dir.write(
        "bad.vcf",
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nNOTE no colon\r\nEND:VCARD\r\n",
    );

    let err = parse(&path).expect_err("malformed property should fail");
    assert_eq!(err.kind, VCardErrorKind::InvalidProperty);
    assert_eq!(err.line, Some(4));
}

#[test_log::test]
fn parsed_file_validates() {
    let dir = TestDir::new();
    let path = dir.write("card.vcf", SAMPLE_CARD);
    let card = parse(&path).expect("sample should parse");
    validate(&card).expect("sample should validate");
}
