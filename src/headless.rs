// src/headless.rs
use anyhow::Result;
use script_lines_domain::ParseRequest;
use script_lines_ports::ReportDestination;
use script_lines_usecase::ParsePipeline;

/// Runs one request to completion and prints a short summary to stderr.
pub async fn run(pipeline: &ParsePipeline, request: ParseRequest) -> Result<()> {
    let outcome = pipeline.run(request).await?;

    match &outcome.destination {
        Some(ReportDestination::File(path)) => eprintln!("Report written to {}", path.display()),
        Some(ReportDestination::Console) => {}
        None => eprintln!("No scripts found"),
    }
    eprintln!("Parsed {} item(s) in {:.2?}", outcome.results.len(), outcome.elapsed);
    Ok(())
}
