//! `cohab build` — replay a log and emit the graph for a renderer.
//!
//! - default: JSON graph document (nodes, edges, house legend)
//! - `--dot`: Graphviz DOT, ready for `dot -Tpng`
//!
//! With `-o`, the document goes to a file and a short summary is printed in
//! the selected output mode.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cohab_core::config::CohabConfig;
use cohab_core::export::{to_document, to_dot};
use serde::Serialize;

use super::{FeedArgs, load};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `cohab build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Emit Graphviz DOT instead of the JSON document.
    #[arg(long)]
    pub dot: bool,

    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct BuildSummary {
    output: String,
    format: &'static str,
    people: usize,
    edges: usize,
    houses: usize,
    content_hash: String,
}

pub fn run_build(args: &BuildArgs, config: &CohabConfig, mode: OutputMode) -> Result<()> {
    let loaded = load(&args.feed.file, config)?;

    let body = if args.dot {
        to_dot(&loaded.graph, &loaded.palette)
    } else {
        let doc = to_document(&loaded.graph, &loaded.palette);
        let mut json = serde_json::to_string_pretty(&doc)?;
        json.push('\n');
        json
    };

    let Some(path) = &args.output else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(body.as_bytes())?;
        return Ok(());
    };

    std::fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;

    let summary = BuildSummary {
        output: path.display().to_string(),
        format: if args.dot { "dot" } else { "json" },
        people: loaded.graph.node_count(),
        edges: loaded.graph.edge_count(),
        houses: loaded.graph.houses().len(),
        content_hash: loaded.graph.content_hash.clone(),
    };

    render_mode(
        mode,
        &summary,
        |s, w| {
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}",
                s.output, s.format, s.people, s.edges, s.houses
            )
        },
        |s, w| {
            pretty_section(w, &format!("Wrote {}", s.output))?;
            pretty_kv(w, "Format", s.format)?;
            pretty_kv(w, "People", s.people.to_string())?;
            pretty_kv(w, "Edges", s.edges.to_string())?;
            pretty_kv(w, "Houses", s.houses.to_string())?;
            pretty_kv(w, "Hash", &s.content_hash)
        },
    )
}
