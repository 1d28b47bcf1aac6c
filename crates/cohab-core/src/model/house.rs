use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::PersonId;

/// A named dwelling and the people currently living in it.
///
/// Only present tenants are kept here; who lived here in the past is
/// recorded in each [`Person`](super::Person)'s history and relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub name: String,
    pub occupants: BTreeSet<PersonId>,
}

impl House {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            occupants: BTreeSet::new(),
        }
    }

    /// Returns `true` if `person` currently lives here.
    #[must_use]
    pub fn is_occupied_by(&self, person: PersonId) -> bool {
        self.occupants.contains(&person)
    }

    #[must_use]
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }
}
