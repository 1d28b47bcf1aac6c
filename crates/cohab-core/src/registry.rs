//! Get-or-create lookup for people and houses.
//!
//! The registry is the context object for one build: it owns every
//! [`Person`] and [`House`] seen so far and hands out [`PersonId`]s. Nothing
//! here is process-global, so independent builds never share identities.
//!
//! Resolution is total. An unknown name is not an error; it is how entities
//! come into existence.

use std::collections::HashMap;

use tracing::trace;

use crate::model::{House, Person, PersonId, SENTINEL};

/// Owner of all entities referenced by an occupancy log.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    /// Indexed by `PersonId.0`.
    persons: Vec<Person>,
    person_index: HashMap<String, PersonId>,
    houses: HashMap<String, House>,
    /// House names in first-mention order.
    house_order: Vec<String>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, registering a new person if needed.
    ///
    /// The sentinel `"-"` is registered like anyone else.
    pub fn resolve_person(&mut self, name: &str) -> PersonId {
        if let Some(&id) = self.person_index.get(name) {
            return id;
        }
        let id = PersonId(self.persons.len() as u64);
        trace!(%id, name, "registered person");
        self.persons.push(Person::new(id, name));
        self.person_index.insert(name.to_string(), id);
        id
    }

    /// Return the house called `name`, registering it if needed.
    pub fn resolve_house(&mut self, name: &str) -> &mut House {
        self.house_and_persons(name).0
    }

    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        let idx = usize::try_from(id.0).ok()?;
        self.persons.get(idx)
    }

    #[must_use]
    pub fn person_by_name(&self, name: &str) -> Option<&Person> {
        self.person_index.get(name).and_then(|&id| self.person(id))
    }

    /// Every registered person in id order, sentinel included.
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    /// Every registered person except the sentinel, in id order.
    pub fn real_persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter().filter(|p| p.name != SENTINEL)
    }

    /// The sentinel's id, if the log ever mentioned it.
    #[must_use]
    pub fn sentinel(&self) -> Option<PersonId> {
        self.person_index.get(SENTINEL).copied()
    }

    #[must_use]
    pub fn house(&self, name: &str) -> Option<&House> {
        self.houses.get(name)
    }

    /// Distinct house names, in the order they were first mentioned.
    #[must_use]
    pub fn house_names(&self) -> &[String] {
        &self.house_order
    }

    #[must_use]
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    #[must_use]
    pub fn house_count(&self) -> usize {
        self.house_order.len()
    }

    /// Split borrow used by occupancy and relation updates, which need a
    /// house and the people in it at the same time. Registers the house on
    /// first mention.
    pub(crate) fn house_and_persons(&mut self, name: &str) -> (&mut House, &mut [Person]) {
        if !self.houses.contains_key(name) {
            trace!(name, "registered house");
            self.house_order.push(name.to_string());
        }
        let house = self
            .houses
            .entry(name.to_string())
            .or_insert_with(|| House::new(name));
        (house, &mut self.persons)
    }
}
