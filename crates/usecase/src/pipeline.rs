// crates/usecase/src/pipeline.rs
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use script_lines_domain::{
    AtlasIdType, ParseRequest, ParseResult, ReportTable, Source,
    input::{require_entries, validate_script_id},
    rules::SupplementRules,
};
use script_lines_ports::{ReportDestination, ReportSink, ScriptCatalog, ScriptFetcher, ScriptFileSystem};
use script_lines_shared_kernel::{ApplicationError, Result};
use tokio::task;
use tracing::info;

use crate::{
    engine::{aggregate_local, aggregate_remote},
    resolver::{LocalResolver, RemoteResolver},
};

/// Adapters the pipeline runs against.
#[derive(Clone)]
pub struct PipelinePorts {
    pub catalog: Arc<dyn ScriptCatalog>,
    pub fetcher: Arc<dyn ScriptFetcher>,
    pub filesystem: Arc<dyn ScriptFileSystem>,
    pub report_sink: Arc<dyn ReportSink>,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub results: Vec<ParseResult>,
    pub table: ReportTable,
    /// `None` when there was nothing to publish.
    pub destination: Option<ReportDestination>,
    pub elapsed: Duration,
}

/// Validates a request, resolves and counts every item, then publishes the table.
///
/// Items are processed one after another in input order. Any error ends the run and
/// nothing is published.
#[derive(Clone)]
pub struct ParsePipeline {
    ports: PipelinePorts,
    rules: SupplementRules,
}

impl ParsePipeline {
    pub fn new(ports: PipelinePorts) -> Self {
        Self { ports, rules: SupplementRules::default() }
    }

    pub async fn run(&self, request: ParseRequest) -> Result<ParseOutcome> {
        let started = Instant::now();
        let entries = require_entries(&request.raw_input)?;
        if request.source == Source::Atlas && request.id_type == AtlasIdType::Script {
            entries.iter().try_for_each(|id| validate_script_id(id))?;
        }
        info!(
            source = request.source.label(),
            id_type = request.id_type.label(),
            items = entries.len(),
            "starting parse"
        );

        let results = match request.source {
            Source::Atlas => self.run_remote(request.id_type, &entries).await?,
            Source::Local => self.run_local(entries).await?,
        };

        let table = ReportTable::from_results(&results, request.options.include_word_count);
        let destination = if table.is_empty() {
            None
        } else {
            Some(self.ports.report_sink.publish(&table, &request.options)?)
        };

        let elapsed = started.elapsed();
        info!(results = results.len(), ?elapsed, "parse finished");
        Ok(ParseOutcome { results, table, destination, elapsed })
    }

    async fn run_remote(&self, id_type: AtlasIdType, entries: &[String]) -> Result<Vec<ParseResult>> {
        let resolver = RemoteResolver::new(Arc::clone(&self.ports.catalog), self.rules);
        let mut results = Vec::with_capacity(entries.len());
        for id in entries {
            let item = resolver.resolve(id_type, id).await?;
            results.push(aggregate_remote(Arc::clone(&self.ports.fetcher), item).await?);
        }
        Ok(results)
    }

    async fn run_local(&self, entries: Vec<String>) -> Result<Vec<ParseResult>> {
        let filesystem = Arc::clone(&self.ports.filesystem);
        task::spawn_blocking(move || count_local(filesystem.as_ref(), &entries))
            .await
            .map_err(|err| ApplicationError::TaskFailed { reason: err.to_string() })?
    }
}

fn count_local(filesystem: &dyn ScriptFileSystem, entries: &[String]) -> Result<Vec<ParseResult>> {
    let resolver = LocalResolver::new(filesystem);
    let mut results = Vec::new();
    for entry in entries {
        for item in resolver.resolve(entry)? {
            results.push(aggregate_local(filesystem, item)?);
        }
    }
    Ok(results)
}
