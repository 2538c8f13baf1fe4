//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`atlas`]: remote script catalog, script body fetcher and the API payloads
//! - [`filesystem`]: local file and directory access
//! - [`report`]: publishing the result table
//!
//! These ports let the use-case layer run against stubs in tests and against the
//! real adapters from `script_lines_infra` in the binary.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod atlas;
pub mod filesystem;
pub mod report;

pub use atlas::{PhaseScriptDto, QuestDto, ScriptCatalog, ScriptFetcher, ScriptRefDto, SpotDto, WarDto};
pub use filesystem::{DirEntryDto, EntryKind, ScriptFileSystem};
pub use report::{ReportDestination, ReportSink};
