// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use script_lines::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    match script_lines::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
