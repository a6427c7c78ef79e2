//! Command builders and the command-word dispatcher.
//!
//! Each builder turns the argument text of one command kind into a finished
//! command object, following the same steps: tokenize, parse the preamble,
//! reject repeated single-valued fields, parse each field, then check the
//! command's own postconditions. The first error ends the parse.

mod add;
mod edit;
mod next_lesson;

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{debug, warn};
use tutorbook_core::{AddCommand, Command, EditCommand, NextLessonCommand};

use crate::clock::{Clock, SystemClock};
use crate::error::{ParseError, Result};

pub use add::AddCommandParser;
pub use edit::EditCommandParser;
pub use next_lesson::NextLessonCommandParser;

/// Builds one kind of command from its argument text.
///
/// `args` is everything after the command word, including the leading
/// space. `now` is the clock reading every time-dependent check uses.
pub trait Parser {
    type Output;

    fn parse(&self, args: &str, now: NaiveDateTime) -> Result<Self::Output>;
}

/// Usage shown when a line cannot be split into a command word and
/// arguments.
pub const MESSAGE_USAGE: &str = "Available commands: add, edit, nextlesson\n\
Example: edit 1 p/91234567";

static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<word>\S+)(?P<arguments>.*)$").expect("static regex must compile")
});

/// Parses whole command lines, dispatching on the command word.
///
/// The clock is read once per line.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tutorbook_core::Command;
/// use tutorbook_parser::CommandParser;
/// use tutorbook_parser::clock::FixedClock;
///
/// let now = NaiveDate::from_ymd_opt(2025, 4, 1)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let parser = CommandParser::new(FixedClock::new(now));
///
/// let command = parser.parse_command("edit 1 n/John Doe p/98765432").unwrap();
/// assert!(matches!(command, Command::Edit(_)));
///
/// let command = parser.parse_command("nextlesson 1 nl/15/4/2025 0900-1100").unwrap();
/// assert_eq!(command.command_word(), "nextlesson");
/// ```
pub struct CommandParser {
    clock: Box<dyn Clock>,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl CommandParser {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Parses one line of user input into a [`Command`].
    pub fn parse_command(&self, line: &str) -> Result<Command> {
        let Some(captures) = COMMAND_RE.captures(line.trim()) else {
            return Err(ParseError::invalid_format(MESSAGE_USAGE));
        };
        let word = &captures["word"];
        let arguments = &captures["arguments"];
        let now = self.clock.now();
        debug!(word, arguments, %now, "Dispatching command");

        match word {
            AddCommand::COMMAND_WORD => AddCommandParser.parse(arguments, now).map(Command::from),
            EditCommand::COMMAND_WORD => EditCommandParser.parse(arguments, now).map(Command::from),
            NextLessonCommand::COMMAND_WORD => NextLessonCommandParser
                .parse(arguments, now)
                .map(Command::from),
            _ => {
                warn!(word, "Unknown command word");
                Err(ParseError::UnknownCommand(word.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for CommandParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandParser").finish_non_exhaustive()
    }
}
