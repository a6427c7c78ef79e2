//! Partial updates to a contact.
//!
//! [`EditDescriptor`] records, per field, whether an edit leaves the field
//! alone, clears it, or replaces it. Only the subject set can be cleared;
//! the scalar fields are required on every contact.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Address, Email, Name, Person, Phone, Subject};

/// Requested change to a single field.
///
/// # Examples
///
/// ```
/// use tutorbook_core::FieldUpdate;
///
/// let update: FieldUpdate<u32> = FieldUpdate::default();
/// assert!(update.is_absent());
/// assert_eq!(FieldUpdate::Set(3).as_set(), Some(&3));
/// assert_eq!(FieldUpdate::<u32>::Cleared.as_set(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate<T> {
    /// Leave the field as it is.
    #[default]
    Absent,
    /// Reset the field to its empty value.
    Cleared,
    /// Replace the field.
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldUpdate::Absent)
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, FieldUpdate::Cleared)
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Absent | FieldUpdate::Cleared => None,
        }
    }
}

impl<T: Clone + Default> FieldUpdate<T> {
    /// Value the field takes after the update is applied to `current`.
    pub fn apply(&self, current: &T) -> T {
        match self {
            FieldUpdate::Absent => current.clone(),
            FieldUpdate::Cleared => T::default(),
            FieldUpdate::Set(value) => value.clone(),
        }
    }
}

/// Which fields an edit changes, and to what.
///
/// Scalar fields can only be absent or set. The subject set is tri-state:
/// absent keeps the existing subjects, cleared empties them, set replaces
/// them.
///
/// # Examples
///
/// ```
/// use tutorbook_core::EditDescriptor;
///
/// let mut descriptor = EditDescriptor::default();
/// assert!(!descriptor.is_any_field_edited());
///
/// descriptor.clear_subjects();
/// assert!(descriptor.is_any_field_edited());
/// assert!(descriptor.subjects().is_cleared());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EditDescriptor {
    name: FieldUpdate<Name>,
    phone: FieldUpdate<Phone>,
    email: FieldUpdate<Email>,
    address: FieldUpdate<Address>,
    subjects: FieldUpdate<BTreeSet<Subject>>,
}

impl EditDescriptor {
    pub fn set_name(&mut self, name: Name) {
        self.name = FieldUpdate::Set(name);
    }

    pub fn set_phone(&mut self, phone: Phone) {
        self.phone = FieldUpdate::Set(phone);
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = FieldUpdate::Set(email);
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = FieldUpdate::Set(address);
    }

    pub fn set_subjects(&mut self, subjects: BTreeSet<Subject>) {
        self.subjects = FieldUpdate::Set(subjects);
    }

    pub fn clear_subjects(&mut self) {
        self.subjects = FieldUpdate::Cleared;
    }

    pub fn name(&self) -> &FieldUpdate<Name> {
        &self.name
    }

    pub fn phone(&self) -> &FieldUpdate<Phone> {
        &self.phone
    }

    pub fn email(&self) -> &FieldUpdate<Email> {
        &self.email
    }

    pub fn address(&self) -> &FieldUpdate<Address> {
        &self.address
    }

    pub fn subjects(&self) -> &FieldUpdate<BTreeSet<Subject>> {
        &self.subjects
    }

    /// Returns `true` if at least one field is not absent.
    pub fn is_any_field_edited(&self) -> bool {
        !(self.name.is_absent()
            && self.phone.is_absent()
            && self.email.is_absent()
            && self.address.is_absent()
            && self.subjects.is_absent())
    }

    /// Produces the edited copy of `person`. Absent fields are carried over
    /// unchanged; the next lesson is never touched by an edit.
    pub fn apply_to(&self, person: &Person) -> Person {
        Person {
            name: self.name.as_set().unwrap_or(&person.name).clone(),
            phone: self.phone.as_set().unwrap_or(&person.phone).clone(),
            email: self.email.as_set().unwrap_or(&person.email).clone(),
            address: self.address.as_set().unwrap_or(&person.address).clone(),
            subjects: self.subjects.apply(&person.subjects),
            next_lesson: person.next_lesson,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NextLesson;

    fn alice() -> Person {
        Person {
            name: "Alice Pauline".parse().unwrap(),
            phone: "94351253".parse().unwrap(),
            email: "alice@example.com".parse().unwrap(),
            address: "123, Jurong West Ave 6, #08-111".parse().unwrap(),
            subjects: ["Math", "Physics"]
                .iter()
                .map(|s| s.parse().unwrap())
                .collect(),
            next_lesson: NextLesson::None,
        }
    }

    #[test]
    fn test_default_descriptor_is_not_edited() {
        assert!(!EditDescriptor::default().is_any_field_edited());
    }

    #[test]
    fn test_apply_replaces_only_set_fields() {
        let mut descriptor = EditDescriptor::default();
        descriptor.set_phone("91234567".parse().unwrap());

        let edited = descriptor.apply_to(&alice());
        assert_eq!(edited.phone.as_str(), "91234567");
        assert_eq!(edited.name, alice().name);
        assert_eq!(edited.subjects, alice().subjects);
    }

    #[test]
    fn test_cleared_subjects_empty_the_set() {
        let mut descriptor = EditDescriptor::default();
        descriptor.clear_subjects();

        let edited = descriptor.apply_to(&alice());
        assert!(edited.subjects.is_empty());
    }

    #[test]
    fn test_set_subjects_replaces_the_set() {
        let mut descriptor = EditDescriptor::default();
        descriptor.set_subjects(BTreeSet::from(["Chemistry".parse().unwrap()]));

        let edited = descriptor.apply_to(&alice());
        let names: Vec<&str> = edited.subjects.iter().map(Subject::as_str).collect();
        assert_eq!(names, vec!["Chemistry"]);
    }

    #[test]
    fn test_field_update_apply() {
        let current = vec![1, 2];
        assert_eq!(FieldUpdate::Absent.apply(&current), vec![1, 2]);
        assert_eq!(FieldUpdate::Cleared.apply(&current), Vec::<i32>::new());
        assert_eq!(FieldUpdate::Set(vec![3]).apply(&current), vec![3]);
    }
}
