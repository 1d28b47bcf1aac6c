pub mod build;
pub mod houses;
pub mod person;
pub mod stats;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cohab_core::config::CohabConfig;
use cohab_core::feed::parse_feed;
use cohab_core::{CohabBuilder, CohabError, CohabGraph, Palette, Registry};
use tracing::info;

/// Input file shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct FeedArgs {
    /// Occupancy log (`house;people in;people out` per line).
    pub file: PathBuf,
}

/// Everything a command needs after the log has been replayed.
pub struct Loaded {
    pub graph: CohabGraph,
    pub registry: Registry,
    pub palette: Palette,
}

/// Read, parse, and replay `path` under `config`.
pub fn load(path: &Path, config: &CohabConfig) -> Result<Loaded> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let events = parse_feed(&input, &config.feed.format()).map_err(coded)?;
    info!(path = %path.display(), events = events.len(), "loaded occupancy log");

    let mut builder = CohabBuilder::new();
    builder.ingest_all(&events).map_err(coded)?;
    let (graph, registry) = builder.finish_with_registry().map_err(coded)?;
    let palette = Palette::assign(graph.houses(), &config.palette.colors);

    Ok(Loaded {
        graph,
        registry,
        palette,
    })
}

/// Attach the stable error code so the renderer can surface it.
fn coded(err: CohabError) -> anyhow::Error {
    let code = err.code();
    anyhow::Error::new(err).context(code)
}
