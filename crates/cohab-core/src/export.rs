//! Hand-off documents for renderers.
//!
//! Layout and drawing happen elsewhere. This module only serializes the graph
//! into shapes other tools read: a JSON document with nodes, edges, and a
//! house legend, and a Graphviz `graph` in DOT syntax.

use std::fmt::Write as _;

use serde::Serialize;

use crate::graph::CohabGraph;
use crate::model::PersonId;
use crate::palette::{Palette, PaletteEntry};

/// Serializable form of a [`CohabGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeDoc>,
    pub edges: Vec<EdgeDoc>,
    pub houses: Vec<PaletteEntry>,
    pub content_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDoc {
    pub id: PersonId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeDoc {
    pub source: PersonId,
    pub target: PersonId,
    pub house: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Build the JSON-ready document. Nodes are sorted by id, edges by
/// `(source, target, house)`.
#[must_use]
pub fn to_document(graph: &CohabGraph, palette: &Palette) -> GraphDocument {
    let mut nodes: Vec<NodeDoc> = graph
        .graph
        .node_weights()
        .map(|n| NodeDoc {
            id: n.id,
            name: n.name.clone(),
        })
        .collect();
    nodes.sort_by_key(|n| n.id);

    let edges = graph
        .edge_triples()
        .into_iter()
        .map(|(source, target, house)| EdgeDoc {
            source,
            target,
            house: house.to_string(),
            color: palette.color_for(house).map(ToString::to_string),
        })
        .collect();

    GraphDocument {
        nodes,
        edges,
        houses: palette.entries().to_vec(),
        content_hash: graph.content_hash.clone(),
    }
}

/// Render the graph as Graphviz DOT.
///
/// Edges whose house has no colour are written without a `color` attribute.
#[must_use]
pub fn to_dot(graph: &CohabGraph, palette: &Palette) -> String {
    let doc = to_document(graph, palette);
    let mut out = String::from("graph cohab {\n");
    for node in &doc.nodes {
        let _ = writeln!(out, "    n{} [label=\"{}\"];", node.id, escape(&node.name));
    }
    for edge in &doc.edges {
        let _ = write!(
            out,
            "    n{} -- n{} [label=\"{}\"",
            edge.source,
            edge.target,
            escape(&edge.house)
        );
        if let Some(color) = &edge.color {
            let _ = write!(out, ", color=\"{}\"", escape(color));
        }
        out.push_str("];\n");
    }
    out.push_str("}\n");
    out
}

fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use crate::model::OccupancyEvent;

    fn sample() -> CohabGraph {
        build_graph(&[
            OccupancyEvent::move_in("A", ["Alice", "Bob"]),
            OccupancyEvent::move_in("B", ["Bob", "Carol"]),
        ])
        .expect("build")
    }

    #[test]
    fn document_lists_nodes_edges_and_houses() {
        let graph = sample();
        let palette = Palette::assign(graph.houses(), &["red"]);
        let doc = to_document(&graph, &palette);

        assert_eq!(doc.nodes.len(), 3);
        assert_eq!(doc.nodes[0].name, "Alice");
        assert_eq!(doc.edges.len(), 2);
        assert_eq!(doc.edges[0].house, "A");
        assert_eq!(doc.edges[0].color.as_deref(), Some("red"));
        // "B" ran out of palette.
        assert_eq!(doc.edges[1].color, None);
        assert_eq!(doc.houses.len(), 2);
    }

    #[test]
    fn json_omits_missing_color() {
        let graph = sample();
        let palette = Palette::assign(graph.houses(), &["red"]);
        let json = serde_json::to_value(to_document(&graph, &palette)).expect("json");
        assert_eq!(json["edges"][0]["color"], "red");
        assert!(json["edges"][1].get("color").is_none());
        assert_eq!(json["nodes"][1]["id"], 1);
    }

    #[test]
    fn dot_output_shape() {
        let graph = sample();
        let palette = Palette::assign(graph.houses(), &["red"]);
        let dot = to_dot(&graph, &palette);

        assert!(dot.starts_with("graph cohab {\n"));
        assert!(dot.contains("    n0 [label=\"Alice\"];\n"));
        assert!(dot.contains("    n0 -- n1 [label=\"A\", color=\"red\"];\n"));
        assert!(dot.contains("    n1 -- n2 [label=\"B\"];\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn dot_escapes_quotes() {
        let graph = build_graph(&[OccupancyEvent::move_in("The \"Big\" House", ["A", "B"])])
            .expect("build");
        let dot = to_dot(&graph, &Palette::with_defaults(graph.houses()));
        assert!(dot.contains("label=\"The \\\"Big\\\" House\""));
    }
}
