//! Card validator.
//!
//! Checks run in a fixed order so the same card always reports the same
//! error: FN, then the generic properties in stored order, then the N/KIND
//! counts, then BDAY, then ANNIVERSARY.

use crate::rfc::vcard::core::{Card, DateTime, Property, names};
use crate::rfc::vcard::error::{VCardError, VCardErrorKind, VCardResult};

/// Validates a card against the vCard 4.0 structure rules.
///
/// ## Errors
/// - `InvalidProperty`: FN misnamed or without values; a property with no
///   name or no values; an incomplete parameter; an N without exactly five
///   components; more than one N or KIND.
/// - `InvalidCard`: a VERSION in the generic collection.
/// - `InvalidDateTime`: BDAY/ANNIVERSARY in the generic collection, or an
///   inconsistent birthday/anniversary value.
#[tracing::instrument(skip(card), fields(properties = card.properties.len()))]
pub fn validate(card: &Card) -> VCardResult<()> {
    validate_formatted_name(&card.formatted_name)?;

    let mut n_count = 0usize;
    let mut kind_count = 0usize;
    for prop in &card.properties {
        validate_property(prop)?;
        match prop.name.as_str() {
            names::N => n_count += 1,
            names::KIND => kind_count += 1,
            _ => {}
        }
    }

    if n_count > 1 {
        return Err(violation(VCardErrorKind::InvalidProperty, "more than one N"));
    }
    if kind_count > 1 {
        return Err(violation(
            VCardErrorKind::InvalidProperty,
            "more than one KIND",
        ));
    }

    if let Some(birthday) = &card.birthday {
        validate_date_time(names::BDAY, birthday)?;
    }
    if let Some(anniversary) = &card.anniversary {
        validate_date_time(names::ANNIVERSARY, anniversary)?;
    }

    tracing::debug!("Card is valid");
    Ok(())
}

fn validate_formatted_name(prop: &Property) -> VCardResult<()> {
    if prop.name != names::FN {
        return Err(violation(
            VCardErrorKind::InvalidProperty,
            format!("FN field holds a {} property", prop.name),
        ));
    }
    if prop.values.is_empty() {
        return Err(violation(VCardErrorKind::InvalidProperty, "FN has no value"));
    }
    Ok(())
}

fn validate_property(prop: &Property) -> VCardResult<()> {
    match prop.name.as_str() {
        "" => {
            return Err(violation(
                VCardErrorKind::InvalidProperty,
                "property without a name",
            ));
        }
        names::VERSION => {
            return Err(violation(
                VCardErrorKind::InvalidCard,
                "VERSION is not a stored property",
            ));
        }
        names::BDAY | names::ANNIVERSARY => {
            return Err(violation(
                VCardErrorKind::InvalidDateTime,
                format!("{} belongs in its dedicated field", prop.name),
            ));
        }
        names::N if prop.values.len() != 5 => {
            return Err(violation(
                VCardErrorKind::InvalidProperty,
                format!("N has {} components, expected 5", prop.values.len()),
            ));
        }
        _ => {}
    }

    if prop.values.is_empty() {
        return Err(violation(
            VCardErrorKind::InvalidProperty,
            format!("{} has no value", prop.name),
        ));
    }

    if let Some(param) = prop.parameters.iter().find(|p| !p.is_complete()) {
        return Err(violation(
            VCardErrorKind::InvalidProperty,
            format!("{} has an incomplete parameter {param}", prop.name),
        ));
    }

    Ok(())
}

fn validate_date_time(name: &str, value: &DateTime) -> VCardResult<()> {
    match value {
        DateTime::Structured { date, time, .. } if date.is_empty() && time.is_empty() => {
            Err(violation(
                VCardErrorKind::InvalidDateTime,
                format!("{name} has neither date nor time"),
            ))
        }
        _ => Ok(()),
    }
}

fn violation(kind: VCardErrorKind, message: impl Into<String>) -> VCardError {
    let err = VCardError::new(kind, message);
    tracing::debug!(error = %err, "Card failed validation");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::Parameter;

    fn five_part_name() -> Property {
        Property::with_values(
            names::N,
            vec!["Doe".into(), "Jane".into(), String::new(), String::new(), String::new()],
        )
    }

    fn base_card() -> Card {
        Card::new("Jane Doe").unwrap()
    }

    fn kind_of(card: &Card) -> VCardErrorKind {
        validate(card).unwrap_err().kind
    }

    #[test_log::test]
    fn minimal_card_is_valid() {
        assert!(validate(&base_card()).is_ok());
    }

    #[test]
    fn full_card_is_valid() {
        let mut card = base_card();
        card.birthday = Some(DateTime::date_time("19960415", "120000"));
        card.anniversary = Some(DateTime::text("circa 2010"));
        card.add_property(five_part_name());
        card.add_property(Property::new(names::KIND, "individual"));
        card.add_property(Property::new(names::FN, "J. Doe"));
        assert!(validate(&card).is_ok());
    }

    #[test]
    fn misnamed_fn_is_invalid_property() {
        let mut card = base_card();
        card.formatted_name.name = "NOTE".into();
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidProperty);
    }

    #[test]
    fn fn_without_values_is_invalid_property() {
        let mut card = base_card();
        card.formatted_name.values.clear();
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidProperty);
    }

    #[test]
    fn stored_version_is_invalid_card() {
        let mut card = base_card();
        card.add_property(Property::new(names::VERSION, "4.0"));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidCard);
    }

    #[test]
    fn stored_bday_is_invalid_date_time() {
        let mut card = base_card();
        card.add_property(Property::new(names::BDAY, "19960415"));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidDateTime);
    }

    #[test]
    fn stored_anniversary_is_invalid_date_time() {
        let mut card = base_card();
        card.add_property(Property::new(names::ANNIVERSARY, "20090808"));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidDateTime);
    }

    #[test]
    fn two_n_properties_is_invalid_property() {
        let mut card = base_card();
        card.add_property(five_part_name());
        card.add_property(five_part_name());
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidProperty);
    }

    #[test]
    fn n_with_wrong_arity_is_invalid_property() {
        let mut card = base_card();
        card.add_property(Property::with_values(
            names::N,
            vec!["Doe".into(), "Jane".into()],
        ));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidProperty);
    }

    #[test]
    fn two_kind_properties_is_invalid_property() {
        let mut card = base_card();
        card.add_property(Property::new(names::KIND, "individual"));
        card.add_property(Property::new(names::KIND, "group"));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidProperty);
    }

    #[test]
    fn property_without_values_is_invalid_property() {
        let mut card = base_card();
        card.add_property(Property::with_values("NOTE", Vec::new()));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidProperty);
    }

    #[test]
    fn property_without_name_is_invalid_property() {
        let mut card = base_card();
        card.add_property(Property::new("", "value"));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidProperty);
    }

    #[test]
    fn incomplete_parameter_is_invalid_property() {
        let mut card = base_card();
        let mut tel = Property::new("TEL", "+1-555-555-5555");
        tel.add_param(Parameter::new("TYPE", ""));
        card.add_property(tel);
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidProperty);
    }

    #[test]
    fn empty_structured_birthday_is_invalid_date_time() {
        let mut card = base_card();
        card.birthday = Some(DateTime::date_time("", ""));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidDateTime);
    }

    #[test]
    fn empty_text_dates_are_valid() {
        let mut card = base_card();
        card.birthday = Some(DateTime::text(""));
        card.anniversary = Some(DateTime::text(""));
        assert!(validate(&card).is_ok());
    }

    #[test]
    fn time_only_birthday_is_valid() {
        let mut card = base_card();
        card.birthday = Some(DateTime::date_time("", "1200"));
        assert!(validate(&card).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let mut card = base_card();
        card.add_property(Property::new(names::BDAY, "19960415"));
        card.add_property(Property::new(names::VERSION, "4.0"));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidDateTime);
    }

    #[test]
    fn property_checks_precede_count_checks() {
        let mut card = base_card();
        card.add_property(Property::new(names::KIND, "individual"));
        card.add_property(Property::new(names::KIND, "group"));
        card.add_property(Property::new(names::VERSION, "4.0"));
        assert_eq!(kind_of(&card), VCardErrorKind::InvalidCard);
    }
}
