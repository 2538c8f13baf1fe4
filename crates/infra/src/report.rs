// crates/infra/src/report.rs
//! Tab-separated report output.

use std::{
    io::{self, Write},
    path::PathBuf,
    sync::{Arc, Mutex},
};

use script_lines_domain::{Options, ReportTable};
use script_lines_ports::{ReportDestination, ReportSink};
use script_lines_shared_kernel::{InfraResult, InfrastructureError, Result};
use tracing::info;

use crate::persistence::FileWriter;

/// Stem of the report file name. The extension stays `.csv` for spreadsheet tools.
pub const REPORT_STEM: &str = "script-length";

/// Where rows go when file output is skipped.
#[derive(Debug, Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    /// Collected in memory, e.g. while a full-screen terminal UI owns stdout.
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl ConsoleTarget {
    pub fn buffer() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (Self::Buffer(Arc::clone(&buffer)), buffer)
    }

    fn write(&self, data: &[u8]) -> InfraResult<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(data)?;
                out.flush()?;
            }
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock().map_err(|_| InfrastructureError::OutputError {
                    message: "console buffer lock poisoned".to_string(),
                    source: None,
                })?;
                buffer.extend_from_slice(data);
            }
        }
        Ok(())
    }
}

/// [`ReportSink`] writing TSV to a file in `output_dir`, or to the console target.
#[derive(Debug, Clone)]
pub struct TsvReportSink {
    output_dir: PathBuf,
    console: ConsoleTarget,
}

impl TsvReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), console: ConsoleTarget::default() }
    }

    pub fn with_console(mut self, console: ConsoleTarget) -> Self {
        self.console = console;
        self
    }

    /// `script-length.csv`, or `script-length-<8 hex>.csv` when `unique` is set.
    pub fn output_path(&self, unique: bool) -> PathBuf {
        let file_name = if unique {
            let id = uuid::Uuid::new_v4().simple().to_string();
            format!("{REPORT_STEM}-{}.csv", &id[..8])
        } else {
            format!("{REPORT_STEM}.csv")
        };
        self.output_dir.join(file_name)
    }
}

impl ReportSink for TsvReportSink {
    fn publish(&self, table: &ReportTable, options: &Options) -> Result<ReportDestination> {
        let data = render_tsv(table)?;

        if options.skip_file_output {
            self.console.write(&data)?;
            return Ok(ReportDestination::Console);
        }

        let path = self.output_path(options.unique_output_name);
        FileWriter::atomic_write(&path, &data).map_err(|source| InfrastructureError::OutputError {
            message: format!("failed to write report to {}", path.display()),
            source: Some(Box::new(source)),
        })?;
        info!(path = %path.display(), rows = table.rows.len(), "report written");
        Ok(ReportDestination::File(path))
    }
}

/// Header plus one record per row, tab-delimited.
pub fn render_tsv(table: &ReportTable) -> InfraResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(Vec::new());
    writer.write_record(table.header()).map_err(csv_error)?;
    for row in &table.rows {
        writer.write_record(row.cells()).map_err(csv_error)?;
    }
    writer
        .into_inner()
        .map_err(|err| InfrastructureError::OutputError { message: err.to_string(), source: None })
}

fn csv_error(err: csv::Error) -> InfrastructureError {
    InfrastructureError::OutputError { message: "failed to encode report row".to_string(), source: Some(Box::new(err)) }
}
