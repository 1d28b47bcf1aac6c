//! Relation derivation from a house's current occupants.
//!
//! Every call recomputes all pairs in the occupant set from scratch rather
//! than diffing against the previous snapshot. Relation sets are true sets,
//! so re-deriving an unchanged household adds nothing.

use tracing::trace;

use crate::model::PersonId;
use crate::occupancy::slot;
use crate::registry::Registry;

/// Record "lived together at `house`" for every pair of current occupants.
///
/// Returns the number of relation entries that were newly inserted, counting
/// both directions of each pair. A house with zero or one occupant, or one
/// not yet registered, yields `0`.
pub fn update(registry: &mut Registry, house: &str) -> usize {
    if registry.house(house).is_none() {
        return 0;
    }
    let (dwelling, persons) = registry.house_and_persons(house);
    let occupants: Vec<PersonId> = dwelling.occupants.iter().copied().collect();

    let mut inserted = 0;
    for (i, &x) in occupants.iter().enumerate() {
        for &y in &occupants[i + 1..] {
            if slot(persons, x).is_some_and(|px| px.relate(y, house)) {
                inserted += 1;
            }
            if slot(persons, y).is_some_and(|py| py.relate(x, house)) {
                inserted += 1;
            }
        }
    }

    trace!(house, occupants = occupants.len(), inserted, "derived relations");
    inserted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Relation;
    use crate::occupancy::apply;

    fn relations(reg: &Registry, id: PersonId) -> Vec<Relation> {
        reg.person(id)
            .map(|p| p.relations.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn pair_is_related_both_ways() {
        let mut reg = Registry::new();
        let alice = reg.resolve_person("Alice");
        let bob = reg.resolve_person("Bob");
        apply(&mut reg, "A", &[alice, bob], &[], None).expect("apply");

        assert_eq!(update(&mut reg, "A"), 2);
        assert_eq!(relations(&reg, alice), vec![Relation::new(bob, "A")]);
        assert_eq!(relations(&reg, bob), vec![Relation::new(alice, "A")]);
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let mut reg = Registry::new();
        let ids: Vec<_> = ["Alice", "Bob", "Carol"]
            .iter()
            .map(|n| reg.resolve_person(n))
            .collect();
        apply(&mut reg, "A", &ids, &[], None).expect("apply");

        assert_eq!(update(&mut reg, "A"), 6);
        let before: Vec<_> = ids.iter().map(|&id| relations(&reg, id)).collect();
        assert_eq!(update(&mut reg, "A"), 0);
        let after: Vec<_> = ids.iter().map(|&id| relations(&reg, id)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn single_or_no_occupant_yields_nothing() {
        let mut reg = Registry::new();
        assert_eq!(update(&mut reg, "Nowhere"), 0);
        assert!(reg.house("Nowhere").is_none());

        let alice = reg.resolve_person("Alice");
        apply(&mut reg, "A", &[alice], &[], None).expect("apply");
        assert_eq!(update(&mut reg, "A"), 0);
        assert!(relations(&reg, alice).is_empty());
    }

    #[test]
    fn departed_people_keep_their_relations() {
        let mut reg = Registry::new();
        let alice = reg.resolve_person("Alice");
        let bob = reg.resolve_person("Bob");
        let carol = reg.resolve_person("Carol");
        apply(&mut reg, "A", &[alice, bob], &[], None).expect("in");
        update(&mut reg, "A");

        apply(&mut reg, "A", &[carol], &[bob], None).expect("swap");
        update(&mut reg, "A");

        assert_eq!(
            relations(&reg, alice),
            vec![Relation::new(bob, "A"), Relation::new(carol, "A")]
        );
        assert_eq!(relations(&reg, carol), vec![Relation::new(alice, "A")]);
        assert_eq!(relations(&reg, bob), vec![Relation::new(alice, "A")]);
    }
}
