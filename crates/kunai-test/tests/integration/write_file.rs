//! Tests for writing cards to disk.

use super::helpers::*;

#[test_log::test]
fn write_then_reparse() {
    let dir = TestDir::new();
    let source = dir.write("source.vcf", SAMPLE_CARD);
    let card = parse(&source).expect("sample should parse");

    let target = dir.path("copy.vcf");
    serialize(&card, &target).expect("write should succeed");

    let reparsed = parse(&target).expect("written card should parse");
    assert_eq!(card, reparsed);
    assert_eq!(
        std::fs::read_to_string(&target).expect("Failed to read back"),
        to_vcf_string(&card)
    );
}

#[test_log::test]
fn write_built_card() {
    let dir = TestDir::new();
    let mut card = Card::new("Jane Doe").expect("non-empty FN");
    card.birthday = Some(DateTime::text("circa 1800"));
    let mut email = Property::grouped("work", "EMAIL", "jane@example.com");
    email.add_param(Parameter::new("PREF", "1"));
    card.add_property(email);
    validate(&card).expect("built card should validate");

    let target = dir.path("jane.vcf");
    serialize(&card, &target).expect("write should succeed");

    let written = std::fs::read_to_string(&target).expect("Failed to read back");
    assert_eq!(
        written,
        "BEGIN:VCARD\r\n\
         VERSION:4.0\r\n\
         FN:Jane Doe\r\n\
         BDAY;VALUE=text:circa 1800\r\n\
         work.EMAIL;PREF=1:jane@example.com\r\n\
         END:VCARD\r\n"
    );
    assert_eq!(parse(&target).expect("written card should parse"), card);
}

#[test_log::test]
fn overwrites_existing_file() {
    let dir = TestDir::new();
    let target = dir.write("existing.vcf", "old contents that are much longer than the new card");
    let card = Card::new("Short").expect("non-empty FN");

    serialize(&card, &target).expect("overwrite should succeed");
    assert_eq!(
        std::fs::read_to_string(&target).expect("Failed to read back"),
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Short\r\nEND:VCARD\r\n"
    );
}

#[test_log::test]
fn long_lines_are_not_folded() {
    let dir = TestDir::new();
    let mut card = Card::new("Jane").expect("non-empty FN");
    card.add_property(Property::new("NOTE", "n".repeat(300)));

    let target = dir.path("long.vcf");
    serialize(&card, &target).expect("write should succeed");

    let written = std::fs::read_to_string(&target).expect("Failed to read back");
    assert_eq!(written.lines().count(), 5);
    assert!(written.lines().all(|l| !l.starts_with(' ')));
}

#[test_log::test]
fn missing_directory_is_write_failure() {
    let dir = TestDir::new();
    let card = Card::new("Jane").expect("non-empty FN");

    let err = serialize(&card, dir.path("nope").join("card.vcf"))
        .expect_err("write into missing directory should fail");
    assert_eq!(err.kind, VCardErrorKind::WriteFailure);
}

#[test_log::test]
fn directory_target_is_write_failure() {
    let dir = TestDir::new();
    let card = Card::new("Jane").expect("non-empty FN");

    let err = serialize(&card, dir.root()).expect_err("writing over a directory should fail");
    assert_eq!(err.kind, VCardErrorKind::WriteFailure);
}
