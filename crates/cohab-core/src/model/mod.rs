//! Entities of the occupancy log: people, houses, and the events that move
//! people between them.

pub mod event;
pub mod house;
pub mod person;

pub use event::OccupancyEvent;
pub use house::House;
pub use person::{Person, PersonId, Relation};

/// Reserved name meaning "no one".
///
/// The sentinel is registered like any other person but never occupies a
/// house, never accrues relations, and never appears in the graph.
pub const SENTINEL: &str = "-";

/// Returns `true` if `name` is the reserved "no one" token.
#[must_use]
pub fn is_sentinel(name: &str) -> bool {
    name == SENTINEL
}
