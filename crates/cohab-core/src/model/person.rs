use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Registry-assigned person identifier.
///
/// Ids are handed out sequentially from 0 by a single
/// [`Registry`](crate::registry::Registry) and are never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// "Lived with `other` at `house`."
///
/// Stored on both people involved. Ordering is by `other` then `house`, so a
/// person's relation set iterates grouped by housemate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub other: PersonId,
    pub house: String,
}

impl Relation {
    pub fn new(other: PersonId, house: impl Into<String>) -> Self {
        Self {
            other,
            house: house.into(),
        }
    }
}

/// An individual appearing in the occupancy log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Every house this person moved into, in log order.
    pub houses: Vec<String>,
    /// Deduplicated cohabitation facts.
    pub relations: BTreeSet<Relation>,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            houses: Vec::new(),
            relations: BTreeSet::new(),
        }
    }

    /// Record a relation. Returns `true` if it was not already present.
    pub fn relate(&mut self, other: PersonId, house: &str) -> bool {
        self.relations.insert(Relation::new(other, house))
    }

    /// Returns `true` if this person lived with `other` at `house`.
    #[must_use]
    pub fn lived_with(&self, other: PersonId, house: &str) -> bool {
        self.relations.contains(&Relation::new(other, house))
    }

    /// Distinct housemates across all houses, in id order.
    #[must_use]
    pub fn housemates(&self) -> BTreeSet<PersonId> {
        self.relations.iter().map(|r| r.other).collect()
    }
}
