//! Known-history regression tests for the cohabitation builder.
//!
//! Each test replays a short hand-written log and checks the exact relation
//! sets and graph edges that must come out of it.

use cohab_core::feed::{FeedFormat, parse_feed};
use cohab_core::{
    CohabBuilder, CohabError, OccupancyEvent, PersonId, Registry, Relation, SENTINEL,
    build_graph,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn id(reg: &Registry, name: &str) -> PersonId {
    reg.person_by_name(name)
        .unwrap_or_else(|| panic!("{name} should be registered"))
        .id
}

fn relations(reg: &Registry, name: &str) -> Vec<Relation> {
    reg.person_by_name(name)
        .map(|p| p.relations.iter().cloned().collect())
        .unwrap_or_default()
}

fn replay(events: &[OccupancyEvent]) -> CohabBuilder {
    let mut builder = CohabBuilder::new();
    builder.ingest_all(events).expect("log should replay cleanly");
    builder
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn two_people_move_in_together() {
    let builder = replay(&[OccupancyEvent::move_in("A", ["Alice", "Bob"])]);
    let reg = builder.registry();

    assert_eq!(relations(reg, "Alice"), vec![Relation::new(id(reg, "Bob"), "A")]);
    assert_eq!(relations(reg, "Bob"), vec![Relation::new(id(reg, "Alice"), "A")]);
}

#[test]
fn swap_keeps_history_of_departed_housemate() {
    let builder = replay(&[
        OccupancyEvent::move_in("A", ["Alice", "Bob"]),
        OccupancyEvent::new("A", ["Carol"], ["Bob"]),
    ]);
    let reg = builder.registry();
    let (alice, bob, carol) = (id(reg, "Alice"), id(reg, "Bob"), id(reg, "Carol"));

    let occupants: Vec<_> = reg
        .house("A")
        .expect("house A")
        .occupants
        .iter()
        .copied()
        .collect();
    assert_eq!(occupants, vec![alice, carol]);

    assert_eq!(
        relations(reg, "Alice"),
        vec![Relation::new(bob, "A"), Relation::new(carol, "A")]
    );
    assert_eq!(relations(reg, "Carol"), vec![Relation::new(alice, "A")]);
    // Bob left before Carol's arrival was derived.
    assert_eq!(relations(reg, "Bob"), vec![Relation::new(alice, "A")]);
}

#[test]
fn relations_across_two_houses() {
    let events = [
        OccupancyEvent::move_in("A", ["Dave", "Zoe"]),
        OccupancyEvent::move_in("B", ["Dave", "Eve"]),
    ];
    let mut builder = CohabBuilder::new();
    builder.ingest_all(&events).expect("replay");
    let (graph, reg) = builder.finish_with_registry().expect("graph");

    let dave = id(&reg, "Dave");
    let eve = id(&reg, "Eve");
    let zoe = id(&reg, "Zoe");
    assert_eq!(
        relations(&reg, "Dave"),
        vec![Relation::new(zoe, "A"), Relation::new(eve, "B")]
    );

    let houses_touching_dave: Vec<&str> = graph
        .edge_triples()
        .into_iter()
        .filter(|&(a, b, _)| a == dave || b == dave)
        .map(|(_, _, house)| house)
        .collect();
    assert_eq!(houses_touching_dave, vec!["A", "B"]);
}

#[test]
fn moving_out_a_stranger_aborts() {
    let events = [
        OccupancyEvent::move_in("A", ["Alice"]),
        OccupancyEvent::new("A", Vec::<String>::new(), ["Frank"]).at_line(3),
        OccupancyEvent::move_in("A", ["Bob"]),
    ];
    let err = build_graph(&events).expect_err("Frank never lived in A");
    assert_eq!(
        err,
        CohabError::InconsistentState {
            person: "Frank".into(),
            house: "A".into(),
            line: Some(3),
        }
    );
}

#[test]
fn sentinel_never_blocks_or_appears() {
    let events = [
        OccupancyEvent::new("A", ["Alice", "Bob"], [SENTINEL]),
        OccupancyEvent::new("A", [SENTINEL], ["Bob"]),
        OccupancyEvent::new("B", [SENTINEL], [SENTINEL]),
    ];
    let mut builder = CohabBuilder::new();
    builder.ingest_all(&events).expect("sentinel is a no-op");
    let (graph, reg) = builder.finish_with_registry().expect("graph");

    let dash = reg.sentinel().expect("sentinel registered");
    assert!(reg.person(dash).expect("dash").relations.is_empty());
    assert!(graph.node_index(dash).is_none());
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.houses(), ["A".to_string(), "B".to_string()]);
}

#[test]
fn returning_tenant_does_not_duplicate_edge() {
    let graph = build_graph(&[
        OccupancyEvent::move_in("A", ["Alice", "Bob"]),
        OccupancyEvent::new("A", Vec::<String>::new(), ["Bob"]),
        OccupancyEvent::move_in("A", ["Bob"]),
    ])
    .expect("build");
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn repeat_move_in_is_recorded_in_history() {
    let builder = replay(&[
        OccupancyEvent::move_in("A", ["Alice"]),
        OccupancyEvent::move_in("A", ["Alice"]),
    ]);
    let reg = builder.registry();
    let alice = reg.person_by_name("Alice").expect("alice");

    assert_eq!(alice.houses, vec!["A".to_string(), "A".to_string()]);
    assert_eq!(reg.house("A").expect("house A").occupant_count(), 1);
}

#[test]
fn returning_tenant_history_lists_each_stay() {
    let builder = replay(&[
        OccupancyEvent::move_in("A", ["Bob"]),
        OccupancyEvent::new("A", ["-"], ["Bob"]),
        OccupancyEvent::move_in("B", ["Bob"]),
        OccupancyEvent::new("B", ["-"], ["Bob"]),
        OccupancyEvent::move_in("A", ["Bob"]),
    ]);
    let bob = builder.registry().person_by_name("Bob").expect("bob");
    assert_eq!(bob.houses, vec!["A", "B", "A"]);
}

#[test]
fn feed_to_graph_end_to_end() {
    let feed = "\
house;people in;people out
Elm St;Alice,Bob;-
Elm St;Carol;Bob
Oak Ave;Bob,Dave;-
# Dave leaves for Elm
Oak Ave;-;Dave
Elm St;Dave;-
";
    let events = parse_feed(feed, &FeedFormat::default()).expect("parse");
    assert_eq!(events.len(), 5);

    let graph = build_graph(&events).expect("build");
    // Alice-Bob, Alice-Carol (Elm); Bob-Dave (Oak);
    // Alice-Dave, Carol-Dave (Elm).
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.houses(), ["Elm St".to_string(), "Oak Ave".to_string()]);
}

#[test]
fn feed_error_reports_source_line() {
    let feed = "house;in;out\nA;Alice;-\nA;-;Frank\n";
    let events = parse_feed(feed, &FeedFormat::default()).expect("parse");
    let err = build_graph(&events).expect_err("Frank never moved in");
    assert!(err.to_string().starts_with("line 3: "), "got: {err}");
}
