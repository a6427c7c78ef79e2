//! Command-line parsing for the tutorbook contact manager.
//!
//! Turns one line of user text into a validated [`Command`]:
//!
//! 1. [`tokenize`] splits the arguments into a preamble and prefixed fields
//!    (`n/`, `p/`, `e/`, `a/`, `s/`, `nl/`).
//! 2. Field parsers in [`util`] and [`parse_lesson_window`] check and convert
//!    each raw value.
//! 3. Builders in [`commands`] assemble the command, including the
//!    partial-update [`EditDescriptor`](tutorbook_core::EditDescriptor) for
//!    `edit`.
//!
//! Parsing is synchronous and side-effect free apart from one read of the
//! configured [`Clock`] per line.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tutorbook_core::Command;
//! use tutorbook_parser::{CommandParser, ParseError};
//! use tutorbook_parser::clock::FixedClock;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 4, 1)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 0)
//!     .unwrap();
//! let parser = CommandParser::new(FixedClock::new(now));
//!
//! let Command::Edit(edit) = parser.parse_command("edit 1 n/John Doe p/98765432").unwrap() else {
//!     panic!("expected an edit command");
//! };
//! assert_eq!(edit.index().one_based(), 1);
//! assert!(edit.descriptor().email().is_absent());
//!
//! assert_eq!(parser.parse_command("edit 1").unwrap_err(), ParseError::NotEdited);
//! ```
//!
//! [`Command`]: tutorbook_core::Command

pub mod clock;
pub mod commands;
pub mod config;
mod error;
mod lesson;
pub mod syntax;
mod tokenizer;
pub mod util;

pub use clock::Clock;
pub use commands::{
    AddCommandParser, CommandParser, EditCommandParser, NextLessonCommandParser, Parser,
};
pub use config::{ConfigError, ParserConfig};
pub use error::{ErrorKind, ParseError, Result};
pub use lesson::parse_lesson_window;
pub use tokenizer::{ArgumentMultimap, tokenize};
