//! Graph assembly from accumulated relation sets.
//!
//! # Overview
//!
//! Each non-sentinel person becomes one node. Each undirected
//! `(person, person, house)` triple becomes one edge, so two people who
//! shared several houses are joined by several parallel edges.
//!
//! ## Edge Deduplication
//!
//! Relations are stored on both endpoints. Emitting an edge for every entry
//! would double every cohabitation, so a relation is only turned into an edge
//! from the side with the lower [`PersonId`].
//!
//! ## Content Hash
//!
//! The graph carries a BLAKE3 hash of its sorted edge triples. Two builds of
//! the same log produce the same hash; any change in who-lived-with-whom
//! changes it.
//!
//! ## Labels
//!
//! Edges carry only the house name. Mapping houses to colours belongs to
//! [`crate::palette`]; a house with no colour is left for the consumer to
//! handle.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use tracing::{instrument, warn};

use crate::model::PersonId;
use crate::registry::Registry;

// ---------------------------------------------------------------------------
// Node and edge weights
// ---------------------------------------------------------------------------

/// Node weight: the person's id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonNode {
    pub id: PersonId,
    pub name: String,
}

/// Edge weight: the house where the two endpoints lived together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseEdge {
    pub house: String,
}

// ---------------------------------------------------------------------------
// CohabGraph
// ---------------------------------------------------------------------------

/// Undirected multigraph of people who lived together.
#[derive(Debug)]
pub struct CohabGraph {
    /// Nodes = people, edges = one per shared house.
    pub graph: UnGraph<PersonNode, HouseEdge>,
    /// Mapping from person id to petgraph `NodeIndex`.
    pub node_map: HashMap<PersonId, NodeIndex>,
    /// Every distinct house in the log, in first-mention order, including
    /// houses that never produced an edge.
    pub houses: Vec<String>,
    /// BLAKE3 content hash of the sorted edge triples.
    pub content_hash: String,
}

impl CohabGraph {
    /// Build the graph from everything `registry` has accumulated.
    ///
    /// The sentinel is not a node. A relation pointing at someone who is not
    /// a node cannot arise from the occupancy rules; if it does, it is
    /// skipped with a warning rather than creating a phantom node.
    #[instrument(skip(registry), fields(persons = registry.person_count()))]
    pub fn assemble(registry: &Registry) -> Self {
        let mut graph = UnGraph::<PersonNode, HouseEdge>::default();
        let mut node_map: HashMap<PersonId, NodeIndex> = HashMap::new();

        for person in registry.real_persons() {
            let idx = graph.add_node(PersonNode {
                id: person.id,
                name: person.name.clone(),
            });
            node_map.insert(person.id, idx);
        }

        // Relation sets iterate in (other, house) order and persons in id
        // order, so triples come out already sorted.
        let mut triples: Vec<(PersonId, PersonId, &str)> = Vec::new();
        for person in registry.real_persons() {
            for rel in &person.relations {
                if person.id >= rel.other {
                    continue;
                }
                if !node_map.contains_key(&rel.other) {
                    warn!(
                        person = %person.id,
                        other = %rel.other,
                        house = %rel.house,
                        "relation points outside the graph; skipped"
                    );
                    continue;
                }
                triples.push((person.id, rel.other, rel.house.as_str()));
            }
        }

        let content_hash = compute_edge_hash(&triples);

        for &(a, b, house) in &triples {
            graph.add_edge(
                node_map[&a],
                node_map[&b],
                HouseEdge {
                    house: house.to_string(),
                },
            );
        }

        Self {
            graph,
            node_map,
            houses: registry.house_names().to_vec(),
            content_hash,
        }
    }

    /// Number of people in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of (pair, house) cohabitation edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a person.
    #[must_use]
    pub fn node_index(&self, id: PersonId) -> Option<NodeIndex> {
        self.node_map.get(&id).copied()
    }

    #[must_use]
    pub fn person(&self, idx: NodeIndex) -> Option<&PersonNode> {
        self.graph.node_weight(idx)
    }

    /// Find a node by display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&PersonNode> {
        self.graph.node_weights().find(|n| n.name == name)
    }

    /// Distinct houses in first-mention order.
    #[must_use]
    pub fn houses(&self) -> &[String] {
        &self.houses
    }

    /// Houses shared by `a` and `b`, sorted. Empty if either is not a node.
    #[must_use]
    pub fn edges_between(&self, a: PersonId, b: PersonId) -> Vec<&str> {
        let (Some(ia), Some(ib)) = (self.node_index(a), self.node_index(b)) else {
            return Vec::new();
        };
        let mut houses: Vec<&str> = self
            .graph
            .edges_connecting(ia, ib)
            .map(|e| e.weight().house.as_str())
            .collect();
        houses.sort_unstable();
        houses
    }

    /// Every edge as `(lower id, higher id, house)`, sorted.
    #[must_use]
    pub fn edge_triples(&self) -> Vec<(PersonId, PersonId, &str)> {
        let mut out: Vec<_> = self
            .graph
            .edge_indices()
            .filter_map(|e| {
                let (ia, ib) = self.graph.edge_endpoints(e)?;
                let a = self.graph[ia].id;
                let b = self.graph[ib].id;
                let house = self.graph[e].house.as_str();
                Some(if a <= b { (a, b, house) } else { (b, a, house) })
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// Number of edges touching `id` (parallel edges counted separately).
    #[must_use]
    pub fn degree(&self, id: PersonId) -> usize {
        self.node_index(id)
            .map_or(0, |idx| self.graph.edges(idx).count())
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Compute a BLAKE3 hash of the sorted edge triples.
fn compute_edge_hash(triples: &[(PersonId, PersonId, &str)]) -> String {
    let mut hasher = blake3::Hasher::new();
    for (a, b, house) in triples {
        hasher.update(&a.0.to_le_bytes());
        hasher.update(&b.0.to_le_bytes());
        hasher.update(house.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SENTINEL;
    use crate::{connections, occupancy};

    fn move_in(reg: &mut Registry, house: &str, names: &[&str]) {
        let ids: Vec<_> = names.iter().map(|n| reg.resolve_person(n)).collect();
        occupancy::apply(reg, house, &ids, &[], None).expect("apply");
        connections::update(reg, house);
    }

    #[test]
    fn empty_registry_produces_empty_graph() {
        let graph = CohabGraph::assemble(&Registry::new());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.content_hash.starts_with("blake3:"));
    }

    #[test]
    fn people_without_housemates_are_nodes_only() {
        let mut reg = Registry::new();
        move_in(&mut reg, "A", &["Alice"]);
        move_in(&mut reg, "B", &["Bob"]);

        let graph = CohabGraph::assemble(&reg);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.houses(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn symmetric_relations_become_one_edge() {
        let mut reg = Registry::new();
        move_in(&mut reg, "A", &["Alice", "Bob"]);

        let graph = CohabGraph::assemble(&reg);
        assert_eq!(graph.edge_count(), 1);
        let alice = reg.person_by_name("Alice").expect("alice").id;
        let bob = reg.person_by_name("Bob").expect("bob").id;
        assert_eq!(graph.edges_between(alice, bob), vec!["A"]);
        assert_eq!(graph.edges_between(bob, alice), vec!["A"]);
    }

    #[test]
    fn shared_houses_become_parallel_edges() {
        let mut reg = Registry::new();
        move_in(&mut reg, "A", &["Dave", "Eve"]);
        move_in(&mut reg, "B", &["Dave", "Eve"]);

        let graph = CohabGraph::assemble(&reg);
        assert_eq!(graph.edge_count(), 2);
        let dave = reg.person_by_name("Dave").expect("dave").id;
        let eve = reg.person_by_name("Eve").expect("eve").id;
        assert_eq!(graph.edges_between(dave, eve), vec!["A", "B"]);
        assert_eq!(graph.degree(dave), 2);
    }

    #[test]
    fn sentinel_is_not_a_node() {
        let mut reg = Registry::new();
        move_in(&mut reg, "A", &["Alice", SENTINEL, "Bob"]);

        let graph = CohabGraph::assemble(&reg);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.find_by_name(SENTINEL).is_none());
        let dash = reg.sentinel().expect("sentinel registered");
        assert!(graph.node_index(dash).is_none());
    }

    #[test]
    fn content_hash_tracks_edges() {
        let mut reg = Registry::new();
        move_in(&mut reg, "A", &["Alice"]);
        let before = CohabGraph::assemble(&reg).content_hash;

        move_in(&mut reg, "A", &["Bob"]);
        let after = CohabGraph::assemble(&reg).content_hash;
        assert_ne!(before, after, "hash must change when edges are added");
        assert_eq!(after, CohabGraph::assemble(&reg).content_hash);
    }

    #[test]
    fn edge_triples_are_normalized_and_sorted() {
        let mut reg = Registry::new();
        move_in(&mut reg, "B", &["Alice", "Bob", "Carol"]);

        let graph = CohabGraph::assemble(&reg);
        let triples = graph.edge_triples();
        assert_eq!(
            triples,
            vec![
                (PersonId(0), PersonId(1), "B"),
                (PersonId(0), PersonId(2), "B"),
                (PersonId(1), PersonId(2), "B"),
            ]
        );
    }
}
