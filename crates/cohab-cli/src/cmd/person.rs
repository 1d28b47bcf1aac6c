//! `cohab person` — one person's residence history and housemates.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;
use cohab_core::config::CohabConfig;
use cohab_core::{PersonId, SENTINEL};
use serde::Serialize;

use super::{FeedArgs, load};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `cohab person`.
#[derive(Args, Debug)]
pub struct PersonArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Display name as written in the log.
    pub name: String,
}

#[derive(Debug, Serialize)]
struct PersonReport {
    id: PersonId,
    name: String,
    history: Vec<String>,
    housemates: Vec<Housemate>,
}

#[derive(Debug, Serialize)]
struct Housemate {
    id: PersonId,
    name: String,
    houses: Vec<String>,
}

pub fn run_person(args: &PersonArgs, config: &CohabConfig, mode: OutputMode) -> Result<()> {
    if args.name == SENTINEL {
        bail!("'{SENTINEL}' means nobody and has no record");
    }
    let loaded = load(&args.feed.file, config)?;
    let Some(person) = loaded.registry.person_by_name(&args.name) else {
        bail!("no one called '{}' appears in {}", args.name, args.feed.file.display());
    };

    let mut by_mate: BTreeMap<PersonId, Vec<String>> = BTreeMap::new();
    for rel in &person.relations {
        by_mate.entry(rel.other).or_default().push(rel.house.clone());
    }
    let housemates = by_mate
        .into_iter()
        .map(|(id, houses)| Housemate {
            id,
            name: loaded
                .registry
                .person(id)
                .map_or_else(|| id.to_string(), |p| p.name.clone()),
            houses,
        })
        .collect();

    let report = PersonReport {
        id: person.id,
        name: person.name.clone(),
        history: person.houses.clone(),
        housemates,
    };

    render_mode(
        mode,
        &report,
        |r, w| {
            writeln!(w, "history\t{}", r.history.join(","))?;
            for m in &r.housemates {
                writeln!(w, "{}\t{}", m.name, m.houses.join(","))?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("{} (#{})", r.name, r.id))?;
            pretty_kv(w, "Lived in", r.history.join(" → "))?;
            pretty_kv(w, "Housemates", r.housemates.len().to_string())?;
            for m in &r.housemates {
                writeln!(w, "  {:<30} {}", m.name, m.houses.join(", "))?;
            }
            Ok(())
        },
    )
}
