//! Pipeline driver: events in, graph out.
//!
//! [`CohabBuilder`] owns the [`Registry`] for one build. Each event is
//! resolved, applied to its house, and followed by a full relation
//! re-derivation for that house. The first error aborts the build: later
//! calls return the same error and no graph is ever produced from a log that
//! failed part-way.

use tracing::{debug, info, instrument};

use crate::connections;
use crate::error::CohabError;
use crate::graph::CohabGraph;
use crate::model::{OccupancyEvent, PersonId};
use crate::occupancy;
use crate::registry::Registry;

/// Incremental cohabitation-graph builder.
#[derive(Debug, Default)]
pub struct CohabBuilder {
    registry: Registry,
    events_applied: usize,
    failure: Option<CohabError>,
}

impl CohabBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// Returns [`CohabError::InconsistentState`] if the event moves out a
    /// non-occupant, or the earlier error if the builder already failed.
    pub fn ingest(&mut self, event: &OccupancyEvent) -> Result<(), CohabError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let incoming = self.resolve_all(&event.incoming);
        let outgoing = self.resolve_all(&event.outgoing);

        if let Err(err) =
            occupancy::apply(&mut self.registry, &event.house, &incoming, &outgoing, event.line)
        {
            self.failure = Some(err.clone());
            return Err(err);
        }

        let inserted = connections::update(&mut self.registry, &event.house);
        self.events_applied += 1;
        debug!(
            house = %event.house,
            line = event.line,
            new_relations = inserted,
            "ingested event"
        );
        Ok(())
    }

    /// Apply events in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`CohabBuilder::ingest`].
    pub fn ingest_all<'a, I>(&mut self, events: I) -> Result<(), CohabError>
    where
        I: IntoIterator<Item = &'a OccupancyEvent>,
    {
        for event in events {
            self.ingest(event)?;
        }
        Ok(())
    }

    /// Entities accumulated so far.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub const fn events_applied(&self) -> usize {
        self.events_applied
    }

    /// Assemble the final graph.
    ///
    /// # Errors
    ///
    /// Returns the error that aborted ingestion, if any.
    #[instrument(skip(self), fields(events = self.events_applied))]
    pub fn finish(self) -> Result<CohabGraph, CohabError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        let graph = CohabGraph::assemble(&self.registry);
        info!(
            people = graph.node_count(),
            edges = graph.edge_count(),
            houses = graph.houses().len(),
            "assembled cohabitation graph"
        );
        Ok(graph)
    }

    /// Like [`finish`](Self::finish) but keeps the registry for queries
    /// about individual people.
    ///
    /// # Errors
    ///
    /// Returns the error that aborted ingestion, if any.
    pub fn finish_with_registry(self) -> Result<(CohabGraph, Registry), CohabError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        let graph = CohabGraph::assemble(&self.registry);
        Ok((graph, self.registry))
    }

    fn resolve_all(&mut self, names: &[String]) -> Vec<PersonId> {
        names
            .iter()
            .map(|name| self.registry.resolve_person(name))
            .collect()
    }
}

/// Build a graph from a complete event log.
///
/// # Errors
///
/// Returns the first [`CohabError`] raised by any event.
pub fn build_graph<'a, I>(events: I) -> Result<CohabGraph, CohabError>
where
    I: IntoIterator<Item = &'a OccupancyEvent>,
{
    let mut builder = CohabBuilder::new();
    builder.ingest_all(events)?;
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_drive_relations() {
        let mut builder = CohabBuilder::new();
        builder
            .ingest(&OccupancyEvent::move_in("A", ["Alice", "Bob"]))
            .expect("ingest");
        assert_eq!(builder.events_applied(), 1);

        let alice = builder.registry().person_by_name("Alice").expect("alice");
        let bob = builder.registry().person_by_name("Bob").expect("bob");
        assert!(alice.lived_with(bob.id, "A"));
        assert!(bob.lived_with(alice.id, "A"));
    }

    #[test]
    fn failure_is_sticky() {
        let mut builder = CohabBuilder::new();
        let bad = OccupancyEvent::new("A", Vec::<String>::new(), ["Frank"]).at_line(9);
        let err = builder.ingest(&bad).expect_err("must fail");
        assert!(matches!(err, CohabError::InconsistentState { line: Some(9), .. }));

        // Valid events after the failure are refused with the original error.
        let again = builder
            .ingest(&OccupancyEvent::move_in("B", ["Alice"]))
            .expect_err("still failed");
        assert_eq!(again, err);
        assert_eq!(builder.events_applied(), 0);
        assert_eq!(builder.finish().expect_err("no graph"), err);
    }

    #[test]
    fn build_graph_happy_path() {
        let events = vec![
            OccupancyEvent::move_in("A", ["Alice", "Bob"]),
            OccupancyEvent::new("A", ["Carol"], ["Bob"]),
        ];
        let graph = build_graph(&events).expect("build");
        assert_eq!(graph.node_count(), 3);
        // Alice-Bob and Alice-Carol.
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn finish_with_registry_keeps_history() {
        let mut builder = CohabBuilder::new();
        builder
            .ingest_all(&[
                OccupancyEvent::move_in("A", ["Dave"]),
                OccupancyEvent::move_in("B", ["Dave", "Eve"]),
            ])
            .expect("ingest");
        let (graph, registry) = builder.finish_with_registry().expect("finish");
        assert_eq!(graph.edge_count(), 1);
        let dave = registry.person_by_name("Dave").expect("dave");
        assert_eq!(dave.houses, vec!["A".to_string(), "B".to_string()]);
    }
}
