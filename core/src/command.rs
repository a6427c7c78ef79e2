//! Parsed command objects.
//!
//! Commands are immutable once built. Each carries the command word and
//! usage text the parser reports when the command's arguments are
//! malformed.

use serde::Serialize;

use crate::{EditDescriptor, Index, NextLesson, Person};

/// A fully parsed and validated user command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    NextLesson(NextLessonCommand),
}

impl Command {
    /// The word that introduces this command on the command line.
    pub fn command_word(&self) -> &'static str {
        match self {
            Command::Add(_) => AddCommand::COMMAND_WORD,
            Command::Edit(_) => EditCommand::COMMAND_WORD,
            Command::NextLesson(_) => NextLessonCommand::COMMAND_WORD,
        }
    }
}

impl From<AddCommand> for Command {
    fn from(command: AddCommand) -> Self {
        Command::Add(command)
    }
}

impl From<EditCommand> for Command {
    fn from(command: EditCommand) -> Self {
        Command::Edit(command)
    }
}

impl From<NextLessonCommand> for Command {
    fn from(command: NextLessonCommand) -> Self {
        Command::NextLesson(command)
    }
}

/// Adds a new contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [s/SUBJECT]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 s/Math s/Physics";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }
}

/// Edits the contact at `index`, changing only the fields in `descriptor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditCommand {
    index: Index,
    descriptor: EditDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified \
by the index number used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [s/SUBJECT]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    pub fn new(index: Index, descriptor: EditDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditDescriptor {
        &self.descriptor
    }
}

/// Sets or clears the next lesson of the contact at `index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextLessonCommand {
    index: Index,
    next_lesson: NextLesson,
}

impl NextLessonCommand {
    pub const COMMAND_WORD: &'static str = "nextlesson";
    pub const MESSAGE_USAGE: &'static str = "nextlesson: Sets the next lesson of the person \
identified by the index number used in the displayed person list. An empty value removes the lesson.\n\
Parameters: INDEX (must be a positive integer) nl/[D/M/YYYY HHMM-HHMM]\n\
Example: nextlesson 1 nl/15/4/2025 0900-1100";

    pub fn new(index: Index, next_lesson: NextLesson) -> Self {
        Self { index, next_lesson }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn next_lesson(&self) -> &NextLesson {
        &self.next_lesson
    }
}
