//! # script_lines
//!
//! Interactive counter for dialogue lines and characters in FGO scripts, fetched from
//! Atlas Academy or read from local files. The wizard state machine lives in
//! [`wizard`], the terminal runtime in [`tui`]; [`headless`] runs the same pipeline
//! without a terminal UI.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod tui;
pub mod wizard;

pub use bootstrap::run;
