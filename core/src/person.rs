//! Contacts and the in-memory contact list commands are applied to.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Address, Command, Email, Index, Name, NextLesson, Phone, Subject};

/// A single contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub subjects: BTreeSet<Subject>,
    #[serde(default)]
    pub next_lesson: NextLesson,
}

impl Person {
    /// Two contacts are the same person when their names match, ignoring
    /// ASCII case.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.eq_ignore_case(&other.name)
    }
}

/// Reasons a parsed command cannot be applied to an [`AddressBook`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    /// Index points past the end of the list.
    #[error("The person index provided is invalid")]
    InvalidIndex(Index),
    /// The change would create a second contact with the same name.
    #[error("This person already exists in the address book")]
    DuplicatePerson,
}

/// Ordered list of contacts, addressed by [`Index`].
///
/// # Examples
///
/// ```
/// use tutorbook_core::{AddCommand, AddressBook, Command, NextLesson, Person};
///
/// let person = Person {
///     name: "John Doe".parse().unwrap(),
///     phone: "98765432".parse().unwrap(),
///     email: "johnd@example.com".parse().unwrap(),
///     address: "311, Clementi Ave 2".parse().unwrap(),
///     subjects: Default::default(),
///     next_lesson: NextLesson::None,
/// };
///
/// let mut book = AddressBook::default();
/// book.execute(&Command::Add(AddCommand::new(person))).unwrap();
/// assert_eq!(book.persons().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { persons }
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn get(&self, index: Index) -> Option<&Person> {
        self.persons.get(index.zero_based())
    }

    /// Applies `command`, returning the feedback message shown to the user.
    ///
    /// The list is left unchanged when an error is returned.
    pub fn execute(&mut self, command: &Command) -> Result<String, ExecuteError> {
        match command {
            Command::Add(add) => {
                let person = add.person();
                if self.persons.iter().any(|p| p.is_same_person(person)) {
                    return Err(ExecuteError::DuplicatePerson);
                }
                self.persons.push(person.clone());
                Ok(format!("New person added: {}", person.name))
            }
            Command::Edit(edit) => {
                let position = self.position(edit.index())?;
                let edited = edit.descriptor().apply_to(&self.persons[position]);
                let clashes = self
                    .persons
                    .iter()
                    .enumerate()
                    .any(|(i, p)| i != position && p.is_same_person(&edited));
                if clashes {
                    return Err(ExecuteError::DuplicatePerson);
                }
                let message = format!("Edited Person: {}", edited.name);
                self.persons[position] = edited;
                Ok(message)
            }
            Command::NextLesson(next) => {
                let position = self.position(next.index())?;
                let person = &mut self.persons[position];
                person.next_lesson = *next.next_lesson();
                Ok(match person.next_lesson {
                    NextLesson::None => format!("Removed next lesson from Person: {}", person.name),
                    NextLesson::Scheduled(window) => {
                        format!("Added next lesson to Person: {} ({window})", person.name)
                    }
                })
            }
        }
    }

    fn position(&self, index: Index) -> Result<usize, ExecuteError> {
        self.get(index)
            .map(|_| index.zero_based())
            .ok_or(ExecuteError::InvalidIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::{AddCommand, EditCommand, EditDescriptor, LessonWindow, NextLessonCommand};

    fn person(name: &str) -> Person {
        Person {
            name: name.parse().unwrap(),
            phone: "94351253".parse().unwrap(),
            email: "someone@example.com".parse().unwrap(),
            address: "123, Jurong West Ave 6".parse().unwrap(),
            subjects: BTreeSet::from(["Math".parse().unwrap()]),
            next_lesson: NextLesson::None,
        }
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn test_add_rejects_same_name_ignoring_case() {
        let mut book = AddressBook::new(vec![person("Alice Pauline")]);
        let err = book
            .execute(&Command::Add(AddCommand::new(person("alice pauline"))))
            .unwrap_err();
        assert_eq!(err, ExecuteError::DuplicatePerson);
        assert_eq!(book.persons().len(), 1);
    }

    #[test]
    fn test_get_by_display_index() {
        let book = AddressBook::new(vec![person("Alice Pauline"), person("Benson Meier")]);
        let second = Index::from_one_based(2).unwrap();
        assert_eq!(book.get(second).unwrap().name.as_str(), "Benson Meier");
        assert!(book.get(Index::from_one_based(3).unwrap()).is_none());
    }

    #[test]
    fn test_edit_out_of_range_index() {
        let mut book = AddressBook::new(vec![person("Alice Pauline")]);
        let mut descriptor = EditDescriptor::default();
        descriptor.set_phone("999".parse().unwrap());
        let index = Index::from_one_based(2).unwrap();

        let err = book
            .execute(&Command::Edit(EditCommand::new(index, descriptor)))
            .unwrap_err();
        assert_eq!(err, ExecuteError::InvalidIndex(index));
    }

    #[test]
    fn test_edit_into_existing_name_is_rejected() {
        let mut book = AddressBook::new(vec![person("Alice Pauline"), person("Benson Meier")]);
        let mut descriptor = EditDescriptor::default();
        descriptor.set_name("Benson Meier".parse().unwrap());

        let err = book
            .execute(&Command::Edit(EditCommand::new(first(), descriptor)))
            .unwrap_err();
        assert_eq!(err, ExecuteError::DuplicatePerson);
        assert_eq!(book.persons()[0].name.as_str(), "Alice Pauline");
    }

    #[test]
    fn test_edit_own_name_case_is_allowed() {
        let mut book = AddressBook::new(vec![person("Alice Pauline")]);
        let mut descriptor = EditDescriptor::default();
        descriptor.set_name("ALICE PAULINE".parse().unwrap());

        book.execute(&Command::Edit(EditCommand::new(first(), descriptor)))
            .unwrap();
        assert_eq!(book.persons()[0].name.as_str(), "ALICE PAULINE");
    }

    #[test]
    fn test_absent_subjects_survive_edit() {
        let mut book = AddressBook::new(vec![person("Alice Pauline")]);
        let mut descriptor = EditDescriptor::default();
        descriptor.set_phone("91234567".parse().unwrap());

        book.execute(&Command::Edit(EditCommand::new(first(), descriptor)))
            .unwrap();
        assert_eq!(book.persons()[0].subjects.len(), 1);
    }

    #[test]
    fn test_next_lesson_set_and_cleared() {
        let mut book = AddressBook::new(vec![person("Alice Pauline")]);
        let now = NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let window = LessonWindow::new(
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            now,
        )
        .unwrap();

        let message = book
            .execute(&Command::NextLesson(NextLessonCommand::new(
                first(),
                NextLesson::Scheduled(window),
            )))
            .unwrap();
        assert_eq!(
            message,
            "Added next lesson to Person: Alice Pauline (15/4/2025 0900-1100)"
        );
        assert!(book.persons()[0].next_lesson.is_scheduled());

        book.execute(&Command::NextLesson(NextLessonCommand::new(
            first(),
            NextLesson::None,
        )))
        .unwrap();
        assert!(!book.persons()[0].next_lesson.is_scheduled());
    }

    #[test]
    fn test_contact_file_defaults_optional_fields() {
        let json = r#"[{
            "name": "Alex Yeoh",
            "phone": "87438807",
            "email": "alexyeoh@example.com",
            "address": "Blk 30 Geylang Street 29, #06-40"
        }]"#;
        let book: AddressBook = serde_json::from_str(json).unwrap();
        let alex = &book.persons()[0];
        assert!(alex.subjects.is_empty());
        assert_eq!(alex.next_lesson, NextLesson::None);
    }
}
