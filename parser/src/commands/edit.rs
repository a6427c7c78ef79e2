use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};
use tutorbook_core::{EditCommand, EditDescriptor, Subject};

use super::Parser;
use crate::error::{ParseError, Result};
use crate::syntax::{PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_SUBJECT};
use crate::tokenizer::tokenize;
use crate::util::{parse_address, parse_email, parse_index, parse_name, parse_phone, parse_subjects};

/// Parses `edit` arguments: `INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [s/SUBJECT]...`.
///
/// `s/` on its own clears every subject; omitting `s/` leaves subjects
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditCommandParser;

impl Parser for EditCommandParser {
    type Output = EditCommand;

    fn parse(&self, args: &str, _now: NaiveDateTime) -> Result<EditCommand> {
        debug!(args, "Parsing edit command");
        let map = tokenize(
            args,
            &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_SUBJECT],
        );

        let index = parse_index(map.preamble()).map_err(|err| {
            warn!(error = %err, "Failed to parse index");
            ParseError::invalid_format_caused_by(EditCommand::MESSAGE_USAGE, err)
        })?;

        map.verify_no_duplicate_prefixes_for(&[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
        ])?;

        let mut descriptor = EditDescriptor::default();
        if let Some(name) = map.value(PREFIX_NAME) {
            descriptor.set_name(parse_name(name)?);
        }
        if let Some(phone) = map.value(PREFIX_PHONE) {
            descriptor.set_phone(parse_phone(phone)?);
        }
        if let Some(email) = map.value(PREFIX_EMAIL) {
            descriptor.set_email(parse_email(email)?);
        }
        if let Some(address) = map.value(PREFIX_ADDRESS) {
            descriptor.set_address(parse_address(address)?);
        }
        match parse_subjects_for_edit(map.all_values(PREFIX_SUBJECT))? {
            SubjectEdit::Unchanged => {}
            SubjectEdit::Clear => descriptor.clear_subjects(),
            SubjectEdit::Replace(subjects) => descriptor.set_subjects(subjects),
        }

        if !descriptor.is_any_field_edited() {
            warn!("No fields edited in edit command");
            return Err(ParseError::NotEdited);
        }

        info!(index = %index, "Parsed edit command");
        Ok(EditCommand::new(index, descriptor))
    }
}

enum SubjectEdit {
    Unchanged,
    Clear,
    Replace(BTreeSet<Subject>),
}

/// No `s/` at all leaves subjects alone; a single empty `s/` clears them.
fn parse_subjects_for_edit(raw: &[String]) -> Result<SubjectEdit> {
    match raw {
        [] => Ok(SubjectEdit::Unchanged),
        [only] if only.is_empty() => Ok(SubjectEdit::Clear),
        _ => parse_subjects(raw).map(SubjectEdit::Replace),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tutorbook_core::FieldUpdate;

    use super::*;
    use crate::error::ErrorKind;
    use crate::syntax::Prefix;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn parse(args: &str) -> Result<EditCommand> {
        EditCommandParser.parse(args, now())
    }

    fn invalid_format() -> String {
        ParseError::invalid_format(EditCommand::MESSAGE_USAGE).to_string()
    }

    #[test]
    fn test_name_and_phone() {
        let command = parse(" 1 n/John Doe p/98765432").unwrap();
        assert_eq!(command.index().one_based(), 1);

        let descriptor = command.descriptor();
        assert_eq!(descriptor.name().as_set().unwrap().as_str(), "John Doe");
        assert_eq!(descriptor.phone().as_set().unwrap().as_str(), "98765432");
        assert!(descriptor.email().is_absent());
        assert!(descriptor.address().is_absent());
        assert!(descriptor.subjects().is_absent());
    }

    #[test]
    fn test_missing_parts() {
        assert_eq!(parse(" n/Amy").unwrap_err().to_string(), invalid_format());
        assert_eq!(parse(" 1").unwrap_err(), ParseError::NotEdited);
        assert_eq!(parse("").unwrap_err().to_string(), invalid_format());
    }

    #[test]
    fn test_invalid_preamble() {
        for args in [" -5 n/Amy", " 0 n/Amy", " 1 some random string", " 1 i/ string"] {
            let err = parse(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "input {args:?}");
            assert_eq!(err.to_string(), invalid_format());
        }
    }

    #[test]
    fn test_index_error_is_kept_as_source() {
        let err = parse(" a n/Amy").unwrap_err();
        assert_eq!(
            err,
            ParseError::invalid_format_caused_by(EditCommand::MESSAGE_USAGE, ParseError::InvalidIndex)
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse(" 1 n/James&").unwrap_err().kind(),
            ErrorKind::Constraint
        );
        assert_eq!(parse(" 1 p/911a").unwrap_err().kind(), ErrorKind::Constraint);
        assert_eq!(parse(" 1 e/bob!yahoo").unwrap_err().kind(), ErrorKind::Constraint);
        assert_eq!(parse(" 1 a/").unwrap_err().kind(), ErrorKind::Constraint);
        assert_eq!(parse(" 1 s/Math!").unwrap_err().kind(), ErrorKind::Constraint);
    }

    #[test]
    fn test_first_invalid_field_wins() {
        let err = parse(" 1 n/James& e/bob!yahoo").unwrap_err();
        assert_eq!(err.to_string(), tutorbook_core::Name::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_duplicate_single_valued_fields() {
        let err = parse(" 1 p/911 p/912 e/a@bc.com e/b@bc.com").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateFields(vec![Prefix::new("p/"), Prefix::new("e/")])
        );
    }

    #[test]
    fn test_duplicates_checked_before_values() {
        let err = parse(" 1 p/abc p/def").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateField);
    }

    #[test]
    fn test_repeated_subjects_are_collected() {
        let command = parse(" 2 s/Math s/Physics").unwrap();
        let FieldUpdate::Set(subjects) = command.descriptor().subjects() else {
            panic!("subjects should be set");
        };
        let names: Vec<&str> = subjects.iter().map(Subject::as_str).collect();
        assert_eq!(names, vec!["Math", "Physics"]);
    }

    #[test]
    fn test_empty_subject_clears() {
        let command = parse(" 3 s/").unwrap();
        assert!(command.descriptor().subjects().is_cleared());
    }

    #[test]
    fn test_empty_subject_among_others_is_invalid() {
        let err = parse(" 1 s/Math s/").unwrap_err();
        assert_eq!(err.to_string(), Subject::MESSAGE_CONSTRAINTS);
        let err = parse(" 1 s/ s/Math").unwrap_err();
        assert_eq!(err.to_string(), Subject::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_same_input_same_command() {
        let args = " 1 n/Amy Bee p/11111111 e/amy@example.com a/Block 312 s/Math";
        assert_eq!(parse(args).unwrap(), parse(args).unwrap());
    }
}
