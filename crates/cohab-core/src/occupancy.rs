//! Move-in / move-out transitions for a single house.
//!
//! Within one event every arrival is applied before any departure. A person
//! who leaves on the same record that someone else arrives is therefore gone
//! by the time relations are derived, and does not become a housemate of the
//! arrival.

use tracing::debug;

use crate::error::CohabError;
use crate::model::{Person, PersonId, is_sentinel};
use crate::registry::Registry;

/// Counts of what one [`apply`] call actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccupancyChange {
    /// People newly added to the occupant set.
    pub arrived: usize,
    /// People removed from the occupant set.
    pub departed: usize,
}

/// Apply one record's arrivals and departures to `house`.
///
/// The house is registered if this is its first mention. Sentinel ids in
/// either list are skipped. Every move-in extends the person's residence
/// history, even when they already live here; only the occupant set is
/// idempotent.
///
/// # Errors
///
/// Returns [`CohabError::InconsistentState`] if a departing person is not a
/// current occupant. Arrivals from the same call have already been applied
/// when this happens; callers are expected to abandon the build.
pub fn apply(
    registry: &mut Registry,
    house: &str,
    incoming: &[PersonId],
    outgoing: &[PersonId],
    line: Option<usize>,
) -> Result<OccupancyChange, CohabError> {
    let (dwelling, persons) = registry.house_and_persons(house);

    let mut change = OccupancyChange::default();

    for &id in incoming {
        let Some(person) = slot(persons, id) else {
            continue;
        };
        if is_sentinel(&person.name) {
            continue;
        }
        person.houses.push(house.to_string());
        if dwelling.occupants.insert(id) {
            change.arrived += 1;
        }
    }

    for &id in outgoing {
        let Some(person) = slot(persons, id) else {
            continue;
        };
        if is_sentinel(&person.name) {
            continue;
        }
        if !dwelling.is_occupied_by(id) {
            return Err(CohabError::InconsistentState {
                person: person.name.clone(),
                house: house.to_string(),
                line,
            });
        }
        dwelling.occupants.remove(&id);
        change.departed += 1;
    }

    debug!(
        house,
        arrived = change.arrived,
        departed = change.departed,
        occupants = dwelling.occupant_count(),
        "applied occupancy change"
    );
    Ok(change)
}

pub(crate) fn slot(persons: &mut [Person], id: PersonId) -> Option<&mut Person> {
    let idx = usize::try_from(id.0).ok()?;
    persons.get_mut(idx)
}
