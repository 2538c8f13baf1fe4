//! # Domain
//!
//! Pure logic for counting script lines: the two-pass text counter, the data model
//! shared by every layer, input parsing, the supplementary ID rule table and the
//! report rows produced from parse results. Nothing in this crate performs I/O.

pub mod counter;
pub mod input;
pub mod model;
pub mod options;
pub mod report;
pub mod rules;

pub use counter::count;
pub use model::{Count, ParseResult, ResolutionBatch, ScriptUnit};
pub use options::{AtlasIdType, Options, ParseRequest, Source};
pub use report::{ReportRow, ReportTable};
