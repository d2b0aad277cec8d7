//! Flat name-indexed registry over people.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::person::Person;
use crate::errors::{BalanceError, Result};

/// Owns every [`Person`] in the book.
///
/// Names are not unique; lookups and name-based removal act on the first
/// match in iteration order, shadowing any later entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonManager {
    pub people: Vec<Person>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonManager {
    /// Creates an empty registry. Each instance gets its own freshly
    /// allocated collection.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            people: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends an already-constructed person and returns their id.
    /// Duplicate names are permitted.
    pub fn add_person(&mut self, person: Person) -> Uuid {
        let id = person.id;
        tracing::debug!(person = %person.name, "adding person");
        self.people.push(person);
        self.touch();
        id
    }

    /// Constructs a person from `name` and appends them.
    pub fn add_person_by_name(&mut self, name: impl Into<String>) -> Uuid {
        self.add_person(Person::new(name))
    }

    /// Removes the person identified by `id`, returning them. Removal of
    /// an absent id is a hard miss. Accounts owned by the person go with
    /// them; their back-references are not cleaned up.
    pub fn remove_person(&mut self, id: Uuid) -> Result<Person> {
        let index = self
            .people
            .iter()
            .position(|person| person.id == id)
            .ok_or_else(|| BalanceError::PersonNotFound(id.to_string()))?;
        let person = self.people.remove(index);
        tracing::debug!(person = %person.name, "removed person");
        self.touch();
        Ok(person)
    }

    /// Removes the first person whose name matches. Returns `false` when
    /// nothing matched; a miss here is a no-op, not an error, unlike
    /// [`PersonManager::remove_person`].
    pub fn remove_person_by_name(&mut self, name: &str) -> bool {
        match self.people.iter().position(|person| person.name == name) {
            Some(index) => {
                self.people.remove(index);
                tracing::debug!(person = name, "removed person by name");
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Returns the first person whose name matches exactly, or `None`.
    pub fn person_by_name(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.name == name)
    }

    pub fn person_by_name_mut(&mut self, name: &str) -> Option<&mut Person> {
        self.people.iter_mut().find(|person| person.name == name)
    }

    pub fn person(&self, id: Uuid) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn person_mut(&mut self, id: Uuid) -> Option<&mut Person> {
        self.people.iter_mut().find(|person| person.id == id)
    }

    /// Live ordered view of the managed people.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for PersonManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_person_is_retrievable_by_name() {
        let mut manager = PersonManager::new();
        manager.add_person_by_name("Clinton");

        let person = manager.person_by_name("Clinton").expect("person");
        assert_eq!(person.name, "Clinton");
    }

    #[test]
    fn lookup_misses_softly() {
        let manager = PersonManager::new();
        assert!(manager.person_by_name("NoSuchName").is_none());
    }

    #[test]
    fn remove_person_misses_hard() {
        let mut manager = PersonManager::new();
        let err = manager
            .remove_person(Uuid::new_v4())
            .expect_err("absent id must be a hard miss");
        assert!(matches!(err, BalanceError::PersonNotFound(_)));
    }

    #[test]
    fn remove_by_name_is_a_no_op_on_miss() {
        let mut manager = PersonManager::new();
        manager.add_person_by_name("Jeff");

        assert!(!manager.remove_person_by_name("NoSuchName"));
        assert_eq!(manager.people().len(), 1);
    }

    #[test]
    fn duplicate_names_shadow_and_remove_first() {
        let mut manager = PersonManager::new();
        let first = manager.add_person_by_name("Jeff");
        let second = manager.add_person_by_name("Jeff");

        assert_eq!(manager.person_by_name("Jeff").unwrap().id, first);

        assert!(manager.remove_person_by_name("Jeff"));
        assert_eq!(manager.people().len(), 1);
        assert_eq!(manager.person_by_name("Jeff").unwrap().id, second);
    }

    #[test]
    fn instances_never_share_state() {
        let mut left = PersonManager::new();
        let right = PersonManager::new();

        left.add_person_by_name("Jeff");
        assert!(right.people().is_empty());
    }

    #[test]
    fn mutation_touches_updated_at() {
        let mut manager = PersonManager::new();
        let before = manager.updated_at;
        manager.add_person_by_name("Jeff");
        assert!(manager.updated_at >= before);
    }
}
