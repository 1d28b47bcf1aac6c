#![forbid(unsafe_code)]
//! cohab-core library.
//!
//! Turns an ordered log of move-ins and move-outs into a graph of who lived
//! with whom, and where.
//!
//! # Conventions
//!
//! - **Errors**: [`CohabError`] for pipeline failures; `anyhow::Result` for
//!   config loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod builder;
pub mod config;
pub mod connections;
pub mod error;
pub mod export;
pub mod feed;
pub mod graph;
pub mod model;
pub mod occupancy;
pub mod palette;
pub mod registry;

pub use builder::{CohabBuilder, build_graph};
pub use error::{CohabError, ErrorCode};
pub use graph::{CohabGraph, GraphStats};
pub use model::{House, OccupancyEvent, Person, PersonId, Relation, SENTINEL};
pub use palette::Palette;
pub use registry::Registry;
