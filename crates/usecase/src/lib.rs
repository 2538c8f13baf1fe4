//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`resolver`]: expands war, quest, script and path inputs into script units
//! - [`engine`]: fetches or reads the units and aggregates their counts
//! - [`pipeline`]: validates a request, runs every item and publishes the report
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod engine;
pub mod pipeline;
pub mod resolver;

pub use pipeline::{ParseOutcome, ParsePipeline, PipelinePorts};
pub use resolver::{LocalItem, LocalResolver, RemoteResolver, ResolvedItem};
