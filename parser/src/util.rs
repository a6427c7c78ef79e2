//! Single-field parsers.
//!
//! Each function validates one raw string and converts it into its domain
//! type. Values are trimmed before checking.

use std::collections::BTreeSet;

use tutorbook_core::{Address, Email, Index, Name, Phone, Subject};

use crate::error::{ParseError, Result};

/// Parses a 1-based index.
///
/// Accepts only an unsigned decimal integer greater than zero, with no sign
/// and no other characters.
///
/// # Examples
///
/// ```
/// use tutorbook_parser::util::parse_index;
///
/// assert_eq!(parse_index(" 3 ").unwrap().one_based(), 3);
/// assert!(parse_index("0").is_err());
/// assert!(parse_index("+1").is_err());
/// assert!(parse_index("1 a").is_err());
/// ```
pub fn parse_index(raw: &str) -> Result<Index> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(raw: &str) -> Result<Name> {
    Ok(raw.parse()?)
}

pub fn parse_phone(raw: &str) -> Result<Phone> {
    Ok(raw.parse()?)
}

pub fn parse_email(raw: &str) -> Result<Email> {
    Ok(raw.parse()?)
}

pub fn parse_address(raw: &str) -> Result<Address> {
    Ok(raw.parse()?)
}

pub fn parse_subject(raw: &str) -> Result<Subject> {
    Ok(raw.parse()?)
}

/// Parses every token into a [`Subject`]. Repeated subjects collapse into
/// one; an empty input gives an empty set.
pub fn parse_subjects<S: AsRef<str>>(raw: &[S]) -> Result<BTreeSet<Subject>> {
    raw.iter().map(|s| parse_subject(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use tutorbook_core::FieldKind;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_index_accepts_positive() {
        assert_eq!(parse_index("1").unwrap().zero_based(), 0);
        assert_eq!(parse_index("  10  ").unwrap().one_based(), 10);
        assert_eq!(parse_index("007").unwrap().one_based(), 7);
    }

    #[test]
    fn test_parse_index_rejects_non_positive_and_junk() {
        for raw in ["", "  ", "0", "-1", "+1", "a", "1a", "1 2", "1.0"] {
            assert_eq!(parse_index(raw), Err(ParseError::InvalidIndex), "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_index_rejects_overflow() {
        assert_eq!(
            parse_index("99999999999999999999999999"),
            Err(ParseError::InvalidIndex)
        );
    }

    #[test]
    fn test_field_errors_are_constraint_errors() {
        let err = parse_phone("+651234").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Constraint);
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
        match err {
            ParseError::Constraint(inner) => assert_eq!(inner.field, FieldKind::Phone),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_subjects_collapses_duplicates() {
        let subjects = parse_subjects(&["Math", "Physics", "Math"]).unwrap();
        assert_eq!(subjects.len(), 2);
        assert!(parse_subjects::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_subjects_fails_on_first_bad_token() {
        let err = parse_subjects(&["Math", ""]).unwrap_err();
        assert_eq!(err.to_string(), Subject::MESSAGE_CONSTRAINTS);
    }
}
