//! `cohab stats` — summary numbers for the cohabitation graph.

use std::io::Write;

use anyhow::Result;
use cohab_core::GraphStats;
use cohab_core::config::CohabConfig;

use super::{FeedArgs, load};
use crate::output::{OutputMode, pretty_kv, pretty_rule, pretty_section, render_mode};

pub fn run_stats(args: &FeedArgs, config: &CohabConfig, mode: OutputMode) -> Result<()> {
    let loaded = load(&args.file, config)?;
    let stats = GraphStats::from_graph(&loaded.graph);

    render_mode(
        mode,
        &stats,
        |s, w| {
            writeln!(w, "people\t{}", s.node_count)?;
            writeln!(w, "edges\t{}", s.edge_count)?;
            writeln!(w, "pairs\t{}", s.connected_pair_count)?;
            writeln!(w, "density\t{:.4}", s.density)?;
            writeln!(w, "components\t{}", s.component_count)?;
            writeln!(w, "isolated\t{}", s.isolated_count)?;
            writeln!(w, "max_degree\t{}", s.max_degree)?;
            for h in &s.edges_per_house {
                writeln!(w, "house\t{}\t{}", h.house, h.edges)?;
            }
            Ok(())
        },
        |s, w| {
            pretty_section(w, "Cohabitation graph")?;
            pretty_kv(w, "People", s.node_count.to_string())?;
            pretty_kv(w, "Edges", s.edge_count.to_string())?;
            pretty_kv(w, "Pairs", s.connected_pair_count.to_string())?;
            pretty_kv(w, "Density", format!("{:.3}", s.density))?;
            pretty_kv(w, "Components", s.component_count.to_string())?;
            pretty_kv(w, "Isolated", s.isolated_count.to_string())?;
            pretty_kv(w, "Max degree", s.max_degree.to_string())?;
            writeln!(w)?;
            pretty_section(w, "Edges per house")?;
            for h in &s.edges_per_house {
                writeln!(w, "{:<40} {:>6}", h.house, h.edges)?;
            }
            pretty_rule(w)
        },
    )
}
