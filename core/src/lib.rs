//! Domain types for the tutorbook contact manager.
//!
//! This crate defines the values the command parser produces and the
//! contact list those commands are applied to:
//!
//! - [`Name`], [`Phone`], [`Email`], [`Address`], [`Subject`] — validated
//!   contact fields, each parsed with [`FromStr`](std::str::FromStr).
//! - [`Index`] — a 1-based position in the displayed contact list.
//! - [`LessonWindow`] / [`NextLesson`] — a scheduled lesson and the
//!   "no lesson" state.
//! - [`FieldUpdate`] / [`EditDescriptor`] — partial updates that tell
//!   "leave unchanged" apart from "clear" and "replace".
//! - [`Command`] — the immutable result of parsing one command line.
//! - [`Person`] / [`AddressBook`] — contacts and the in-memory list
//!   commands are executed against.
//!
//! # Example
//!
//! ```
//! use tutorbook_core::*;
//!
//! let mut descriptor = EditDescriptor::default();
//! descriptor.set_phone("98765432".parse().unwrap());
//! let command = EditCommand::new(Index::from_one_based(1).unwrap(), descriptor);
//!
//! assert_eq!(command.index().one_based(), 1);
//! assert!(command.descriptor().name().is_absent());
//! assert_eq!(Command::from(command).command_word(), "edit");
//! ```

mod command;
mod descriptor;
mod fields;
mod index;
mod lesson;
mod person;

pub use command::{AddCommand, Command, EditCommand, NextLessonCommand};
pub use descriptor::{EditDescriptor, FieldUpdate};
pub use fields::{Address, ConstraintError, Email, FieldKind, Name, Phone, Subject};
pub use index::Index;
pub use lesson::{LessonRuleViolation, LessonWindow, NextLesson};
pub use person::{AddressBook, ExecuteError, Person};
