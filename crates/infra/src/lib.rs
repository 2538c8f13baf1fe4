// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod atlas;
pub mod filesystem;
pub mod persistence;
pub mod report;

pub use atlas::{AtlasClient, AtlasEndpoints};
pub use filesystem::LocalScriptFileSystem;
pub use report::{ConsoleTarget, TsvReportSink};
