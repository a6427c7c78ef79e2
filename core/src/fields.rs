//! Contact field value types.
//!
//! Each type wraps a validated string. Construction goes through
//! [`FromStr`](std::str::FromStr) (or `TryFrom<String>` for serde), which
//! trims the input and checks it against the type's constraint grammar. A
//! rejected value yields a [`ConstraintError`] carrying the type's
//! `MESSAGE_CONSTRAINTS` text.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which contact field a [`ConstraintError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
    Subject,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Address => "address",
            FieldKind::Subject => "subject",
        };
        f.write_str(label)
    }
}

/// A well-formed value that violates its field's constraint grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConstraintError {
    /// Field whose constraint was violated.
    pub field: FieldKind,
    /// Human-readable description of the constraint.
    pub message: &'static str,
}

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("static regex must compile")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("static regex must compile"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[[:alnum:]]+(?:[+_.\-][[:alnum:]]+)*",
        r"@(?:[[:alnum:]]+(?:-[[:alnum:]]+)*\.)*",
        r"[[:alnum:]][[:alnum:]\-]*[[:alnum:]]$",
    ))
    .expect("static regex must compile")
});
static SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:alnum:]]+(?: [[:alnum:]]+)*$").expect("static regex must compile")
});

fn check(
    raw: &str,
    field: FieldKind,
    message: &'static str,
    is_valid: impl Fn(&str) -> bool,
) -> Result<String, ConstraintError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !is_valid(trimmed) {
        return Err(ConstraintError { field, message });
    }
    Ok(trimmed.to_string())
}

/// A contact's full name.
///
/// # Examples
///
/// ```
/// use tutorbook_core::Name;
///
/// let name: Name = "  John Doe ".parse().unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// assert!("John*".parse::<Name>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for duplicate detection.
    pub fn eq_ignore_case(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl FromStr for Name {
    type Err = ConstraintError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        check(raw, FieldKind::Name, Self::MESSAGE_CONSTRAINTS, |s| {
            NAME_RE.is_match(s)
        })
        .map(Name)
    }
}

/// A contact's phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ConstraintError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        check(raw, FieldKind::Phone, Self::MESSAGE_CONSTRAINTS, |s| {
            PHONE_RE.is_match(s)
        })
        .map(Phone)
    }
}

/// A contact's email address (`local-part@domain`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.-, \
and may not start or end with a special character. \
The domain is made up of labels separated by periods; each label starts and ends with an \
alphanumeric character, may contain hyphens, and the last label is at least 2 characters long.";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = ConstraintError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        check(raw, FieldKind::Email, Self::MESSAGE_CONSTRAINTS, |s| {
            EMAIL_RE.is_match(s)
        })
        .map(Email)
    }
}

/// A contact's postal address. Any non-blank text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ConstraintError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        check(raw, FieldKind::Address, Self::MESSAGE_CONSTRAINTS, |_| true).map(Address)
    }
}

/// A subject taught to a contact, e.g. `Physics` or `A Math`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Subject names should be alphanumeric words separated by single spaces";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Subject {
    type Err = ConstraintError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        check(raw, FieldKind::Subject, Self::MESSAGE_CONSTRAINTS, |s| {
            SUBJECT_RE.is_match(s)
        })
        .map(Subject)
    }
}

macro_rules! string_conversions {
    ($($ty:ident),* $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = ConstraintError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_conversions!(Name, Phone, Email, Address, Subject);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_alphanumeric_and_spaces() {
        assert!("Peter Jack 2nd".parse::<Name>().is_ok());
        assert!("12345".parse::<Name>().is_ok());
    }

    #[test]
    fn test_name_rejects_blank_and_symbols() {
        let err = "   ".parse::<Name>().unwrap_err();
        assert_eq!(err.field, FieldKind::Name);
        assert_eq!(err.message, Name::MESSAGE_CONSTRAINTS);
        assert!("peter*".parse::<Name>().is_err());
        assert!("^".parse::<Name>().is_err());
    }

    #[test]
    fn test_phone_requires_three_digits() {
        assert!("911".parse::<Phone>().is_ok());
        assert!("91".parse::<Phone>().is_err());
        assert!("9011p041".parse::<Phone>().is_err());
        assert!("9312 1534".parse::<Phone>().is_err());
    }

    #[test]
    fn test_email_local_part_rules() {
        assert!("alice@example.com".parse::<Email>().is_ok());
        assert!("a+b_c.d-e@example.com".parse::<Email>().is_ok());
        assert!("-alice@example.com".parse::<Email>().is_err());
        assert!("alice-@example.com".parse::<Email>().is_err());
        assert!("al..ice@example.com".parse::<Email>().is_err());
        assert!("alice@".parse::<Email>().is_err());
        assert!("@example.com".parse::<Email>().is_err());
    }

    #[test]
    fn test_email_domain_rules() {
        assert!("peter@example-site.com.sg".parse::<Email>().is_ok());
        assert!("peter@localhost".parse::<Email>().is_ok());
        assert!("peter@example.c".parse::<Email>().is_err());
        assert!("peter@-example.com".parse::<Email>().is_err());
        assert!("peter@example.com-".parse::<Email>().is_err());
        assert!("peter@example..com".parse::<Email>().is_err());
    }

    #[test]
    fn test_address_trims_and_rejects_blank() {
        let address: Address = "  Blk 456, Den Road, #01-355 ".parse().unwrap();
        assert_eq!(address.as_str(), "Blk 456, Den Road, #01-355");
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn test_subject_allows_multiword() {
        assert!("A Math".parse::<Subject>().is_ok());
        assert!("A  Math".parse::<Subject>().is_err());
        assert!("Chem!".parse::<Subject>().is_err());
        assert!("".parse::<Subject>().is_err());
    }

    #[test]
    fn test_deserialize_runs_constraints() {
        let ok: Phone = serde_json::from_str("\"98765432\"").unwrap();
        assert_eq!(ok.as_str(), "98765432");
        assert!(serde_json::from_str::<Phone>("\"abc\"").is_err());
    }
}
