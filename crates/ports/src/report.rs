// crates/ports/src/report.rs
use std::{fmt, path::PathBuf};

use script_lines_domain::{Options, ReportTable};
use script_lines_shared_kernel::Result;

/// Where a published table ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    File(PathBuf),
    Console,
}

impl fmt::Display for ReportDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Console => f.write_str("standard output"),
        }
    }
}

pub trait ReportSink: Send + Sync {
    fn publish(&self, table: &ReportTable, options: &Options) -> Result<ReportDestination>;
}
