//! `cohab houses` — every house with its legend colour and occupancy.

use std::io::Write;

use anyhow::Result;
use cohab_core::config::CohabConfig;
use cohab_core::graph::GraphStats;
use serde::Serialize;

use super::{FeedArgs, load};
use crate::output::{OutputMode, pretty_section, render_mode};

#[derive(Debug, Serialize)]
struct HouseRow {
    house: String,
    color: Option<String>,
    current_occupants: usize,
    edges: usize,
}

pub fn run_houses(args: &FeedArgs, config: &CohabConfig, mode: OutputMode) -> Result<()> {
    let loaded = load(&args.file, config)?;
    let stats = GraphStats::from_graph(&loaded.graph);

    let rows: Vec<HouseRow> = loaded
        .palette
        .entries()
        .iter()
        .zip(&stats.edges_per_house)
        .map(|(entry, count)| HouseRow {
            house: entry.house.clone(),
            color: entry.color.clone(),
            current_occupants: loaded
                .registry
                .house(&entry.house)
                .map_or(0, |h| h.occupant_count()),
            edges: count.edges,
        })
        .collect();

    render_mode(
        mode,
        &rows,
        |rows, w| {
            for r in rows {
                writeln!(
                    w,
                    "{}\t{}\t{}\t{}",
                    r.house,
                    r.color.as_deref().unwrap_or("-"),
                    r.current_occupants,
                    r.edges
                )?;
            }
            Ok(())
        },
        |rows, w| {
            pretty_section(w, &format!("{} houses", rows.len()))?;
            writeln!(w, "{:<32} {:<10} {:>9} {:>6}", "HOUSE", "COLOR", "OCCUPANTS", "EDGES")?;
            for r in rows {
                writeln!(
                    w,
                    "{:<32} {:<10} {:>9} {:>6}",
                    r.house,
                    r.color.as_deref().unwrap_or("(none)"),
                    r.current_occupants,
                    r.edges
                )?;
            }
            Ok(())
        },
    )
}
