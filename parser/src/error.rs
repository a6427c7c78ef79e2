//! Error types for command parsing.
//!
//! Every failure is an ordinary rejected-input outcome. The `Display` text
//! is the message shown to the user; [`ParseError::InvalidCommandFormat`]
//! may also carry the lower-level error that triggered it as its
//! [`source`](std::error::Error::source).

use thiserror::Error;
use tutorbook_core::{ConstraintError, EditCommand, LessonRuleViolation};

use crate::syntax::Prefix;

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input does not have the expected lexical shape.
    Format,
    /// Well-formed value that breaks a field's constraint grammar.
    Constraint,
    /// A single-valued prefix appeared more than once.
    DuplicateField,
    /// Well-formed value that breaks a time or scheduling rule.
    Range,
    /// An edit that changes nothing.
    NotEdited,
    /// The command word is not recognized.
    UnknownCommand,
}

/// Errors produced while turning a command line into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Arguments do not match the command's usage.
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat {
        usage: &'static str,
        #[source]
        source: Option<Box<ParseError>>,
    },

    /// The command word is not one the parser knows.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Index is not a positive integer.
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    /// A field value breaks its constraint grammar.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// Single-valued prefixes that were given more than once.
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        join_prefixes(.0)
    )]
    DuplicateFields(Vec<Prefix>),

    /// Lesson text does not match `D/M/YYYY HHMM-HHMM`.
    #[error(
        "Invalid date or time format. Expected: 'D/M/YYYY HHMM-HHMM' (e.g., 15/4/2025 0900-1100)"
    )]
    LessonFormat,

    /// Hour above 23 or minute above 59.
    #[error("Time must be between 00:00 and 23:59.")]
    LessonTimeOutOfRange,

    /// Date does not exist, e.g. 31/2/2025.
    #[error("Invalid date or time entered. Please ensure you have entered a valid date or time.")]
    LessonCalendar,

    /// Lesson breaks a scheduling rule.
    #[error(transparent)]
    LessonRule(#[from] LessonRuleViolation),

    /// An edit command with no fields to change.
    #[error("{}", EditCommand::MESSAGE_NOT_EDITED)]
    NotEdited,
}

impl ParseError {
    /// Invalid-format error with no underlying cause.
    pub fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidCommandFormat {
            usage,
            source: None,
        }
    }

    /// Invalid-format error that keeps `cause` as its source.
    pub fn invalid_format_caused_by(usage: &'static str, cause: ParseError) -> Self {
        ParseError::InvalidCommandFormat {
            usage,
            source: Some(Box::new(cause)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidCommandFormat { .. }
            | ParseError::InvalidIndex
            | ParseError::LessonFormat => ErrorKind::Format,
            ParseError::UnknownCommand(_) => ErrorKind::UnknownCommand,
            ParseError::Constraint(_) => ErrorKind::Constraint,
            ParseError::DuplicateFields(_) => ErrorKind::DuplicateField,
            ParseError::LessonTimeOutOfRange
            | ParseError::LessonCalendar
            | ParseError::LessonRule(_) => ErrorKind::Range,
            ParseError::NotEdited => ErrorKind::NotEdited,
        }
    }
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(Prefix::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
