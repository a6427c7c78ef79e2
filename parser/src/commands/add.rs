use chrono::NaiveDateTime;
use tracing::{debug, info};
use tutorbook_core::{AddCommand, NextLesson, Person};

use super::Parser;
use crate::error::{ParseError, Result};
use crate::syntax::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_SUBJECT, Prefix,
};
use crate::tokenizer::tokenize;
use crate::util::{parse_address, parse_email, parse_name, parse_phone, parse_subjects};

/// Parses `add` arguments: `n/NAME p/PHONE e/EMAIL a/ADDRESS [s/SUBJECT]...`.
///
/// The four scalar fields are required and single-valued, and nothing may
/// come before the first prefix. New contacts start with no lesson.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddCommandParser;

impl Parser for AddCommandParser {
    type Output = AddCommand;

    fn parse(&self, args: &str, _now: NaiveDateTime) -> Result<AddCommand> {
        debug!(args, "Parsing add command");
        let map = tokenize(
            args,
            &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_SUBJECT],
        );

        let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
        if !required.iter().all(|&prefix| map.contains(prefix)) || !map.preamble().is_empty() {
            return Err(ParseError::invalid_format(AddCommand::MESSAGE_USAGE));
        }
        map.verify_no_duplicate_prefixes_for(&required)?;

        let field = |prefix: Prefix| map.value(prefix).unwrap_or_default();
        let person = Person {
            name: parse_name(field(PREFIX_NAME))?,
            phone: parse_phone(field(PREFIX_PHONE))?,
            email: parse_email(field(PREFIX_EMAIL))?,
            address: parse_address(field(PREFIX_ADDRESS))?,
            subjects: parse_subjects(map.all_values(PREFIX_SUBJECT))?,
            next_lesson: NextLesson::None,
        };

        info!(name = %person.name, "Parsed add command");
        Ok(AddCommand::new(person))
    }
}
