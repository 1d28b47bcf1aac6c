//! Summary statistics for the cohabitation graph.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: people and (pair, house) edges.
//! - **density**: distinct connected pairs over the maximum possible pairs,
//!   `pairs / (n * (n - 1) / 2)`. Parallel edges for the same pair count
//!   once, so density stays within `0.0..=1.0`.
//! - **component_count**: connected components. Isolated people each form
//!   their own component.
//! - **isolated_count**: people who never shared a house with anyone.
//! - **max_degree**: most edges on one person, parallel edges included.
//! - **edges_per_house**: edge count for every house, in first-mention order,
//!   including houses with no edges.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::connected_components;
use petgraph::visit::IntoNodeIdentifiers;
use serde::Serialize;

use crate::graph::build::CohabGraph;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a [`CohabGraph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Number of distinct person pairs joined by at least one edge.
    pub connected_pair_count: usize,
    pub density: f64,
    pub component_count: usize,
    pub isolated_count: usize,
    pub max_degree: usize,
    pub edges_per_house: Vec<HouseEdgeCount>,
    pub content_hash: String,
}

/// Edge count for one house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseEdgeCount {
    pub house: String,
    pub edges: usize,
}

impl GraphStats {
    /// Compute statistics from a [`CohabGraph`].
    #[must_use]
    pub fn from_graph(g: &CohabGraph) -> Self {
        let node_count = g.node_count();
        let edge_count = g.edge_count();

        let triples = g.edge_triples();
        let pairs: BTreeSet<_> = triples.iter().map(|&(a, b, _)| (a, b)).collect();
        let connected_pair_count = pairs.len();
        let density = compute_density(node_count, connected_pair_count);

        let component_count = connected_components(&g.graph);

        let degrees: Vec<usize> = g
            .graph
            .node_identifiers()
            .map(|idx| g.graph.edges(idx).count())
            .collect();
        let isolated_count = degrees.iter().filter(|&&d| d == 0).count();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);

        let mut per_house: BTreeMap<&str, usize> = BTreeMap::new();
        for &(_, _, house) in &triples {
            *per_house.entry(house).or_default() += 1;
        }
        let edges_per_house = g
            .houses()
            .iter()
            .map(|house| HouseEdgeCount {
                house: house.clone(),
                edges: per_house.get(house.as_str()).copied().unwrap_or(0),
            })
            .collect();

        Self {
            node_count,
            edge_count,
            connected_pair_count,
            density,
            component_count,
            isolated_count,
            max_degree,
            edges_per_house,
            content_hash: g.content_hash.clone(),
        }
    }

    /// Return `true` if nobody lived with anybody.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.edge_count == 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, pair_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_pairs = (node_count * (node_count - 1) / 2) as f64;
    pair_count as f64 / max_pairs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
