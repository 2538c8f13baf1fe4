// crates/usecase/src/engine.rs
//! Runs the text counter over every unit of a resolved item and folds the counts.

use std::sync::Arc;

use script_lines_domain::{Count, ParseResult, counter};
use script_lines_ports::{ScriptFetcher, ScriptFileSystem};
use script_lines_shared_kernel::{ApplicationError, ErrorContext, Result, ScriptLinesError};
use tokio::task::JoinSet;
use tracing::{debug, trace};

use crate::resolver::{LocalItem, ResolvedItem};

/// Fetch and count every unit concurrently, one task per unit.
///
/// The first failure is returned as soon as it is observed; dropping the task set
/// aborts the units still in flight.
pub async fn aggregate_remote(fetcher: Arc<dyn ScriptFetcher>, item: ResolvedItem) -> Result<ParseResult> {
    let ResolvedItem { id, name, batch } = item;
    let mut tasks = JoinSet::new();

    for unit in batch.into_units() {
        let fetcher = Arc::clone(&fetcher);
        tasks.spawn(async move {
            let body = fetcher.fetch(&unit.locator).await.with_context(|| format!("script {}", unit.id))?;
            let count = counter::count(&body);
            trace!(script = %unit.id, lines = %count.lines, "counted script");
            Ok::<_, ScriptLinesError>(count)
        });
    }

    let mut total = Count::ZERO;
    while let Some(joined) = tasks.join_next().await {
        total += joined.map_err(|err| ApplicationError::TaskFailed { reason: err.to_string() })??;
    }

    debug!(item = %id, lines = %total.lines, characters = %total.characters, "aggregated remote item");
    Ok(ParseResult::new(id, name, total))
}

/// Read and count every unit in turn.
pub fn aggregate_local(filesystem: &dyn ScriptFileSystem, item: LocalItem) -> Result<ParseResult> {
    let total = item
        .files
        .iter()
        .map(|path| filesystem.read_to_string(path).map(|body| counter::count(&body)))
        .sum::<Result<Count>>()?;

    debug!(item = %item.id, lines = %total.lines, characters = %total.characters, "aggregated local item");
    Ok(ParseResult::new(item.id, item.name, total))
}
