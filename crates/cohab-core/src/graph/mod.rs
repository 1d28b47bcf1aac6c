//! Cohabitation graph module.
//!
//! # Overview
//!
//! Once the event log is exhausted, the relation sets held by the
//! [`Registry`](crate::registry::Registry) are folded into an undirected
//! petgraph multigraph.
//!
//! ## Pipeline
//!
//! ```text
//! Registry (persons with relation sets)
//!        ↓  build::CohabGraph::assemble()
//! CohabGraph (UnGraph<PersonNode, HouseEdge>, parallel edges per house)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (density, components, edges per house, …)
//! ```
//!
//! ## Typical Usage
//!
//! ```rust,ignore
//! use cohab_core::builder::CohabBuilder;
//! use cohab_core::graph::GraphStats;
//!
//! let mut builder = CohabBuilder::new();
//! builder.ingest_all(&events)?;
//! let graph = builder.finish()?;
//! let stats = GraphStats::from_graph(&graph);
//!
//! println!("people={} edges={} density={:.3}",
//!     stats.node_count, stats.edge_count, stats.density);
//! ```

pub mod build;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use build::{CohabGraph, HouseEdge, PersonNode};
pub use stats::{GraphStats, HouseEdgeCount};
