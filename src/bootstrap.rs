// src/bootstrap.rs
use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::{Context, Result, anyhow};
use script_lines_infra::{AtlasClient, ConsoleTarget, LocalScriptFileSystem, TsvReportSink};
use script_lines_usecase::{ParsePipeline, PipelinePorts};
use tokio::runtime::Runtime;
use tracing::info;

use crate::{
    cli::{Args, Command},
    config::AppConfig,
    headless, logging,
    tui::TuiRuntime,
};

/// Entry point shared by `main`: headless when a subcommand is given, the wizard otherwise.
pub fn run(args: Args) -> Result<()> {
    let config = AppConfig::try_from(&args)?;

    match &args.command {
        Some(Command::Run(run)) => {
            logging::init_stderr();
            let pipeline = build_pipeline(&config, ConsoleTarget::Stdout)?;
            let runtime = build_runtime()?;
            runtime.block_on(headless::run(&pipeline, run.to_request()))
        }
        None => {
            logging::init_file(&config.log_file)?;
            let (console, buffer) = ConsoleTarget::buffer();
            let pipeline = build_pipeline(&config, console)?;
            let runtime = build_runtime()?;

            let result = TuiRuntime::new(pipeline, runtime.handle().clone(), config.timeouts()).run();
            // 実行中のタスクは待たずに破棄する
            runtime.shutdown_background();
            result?;

            let rows = buffer.lock().map_err(|_| anyhow!("console buffer lock poisoned"))?;
            if !rows.is_empty() {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&rows)?;
                stdout.flush()?;
            }
            Ok(())
        }
    }
}

fn build_pipeline(config: &AppConfig, console: ConsoleTarget) -> Result<ParsePipeline> {
    let client = Arc::new(
        AtlasClient::new(config.endpoints(), config.request_timeout).context("failed to create Atlas client")?,
    );
    info!(api = %config.api_base_url, region = %config.region, "atlas client ready");

    Ok(ParsePipeline::new(PipelinePorts {
        catalog: client.clone(),
        fetcher: client,
        filesystem: Arc::new(LocalScriptFileSystem::new()),
        report_sink: Arc::new(TsvReportSink::new(&config.output_dir).with_console(console)),
    }))
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread().enable_all().build().context("failed to start async runtime")
}
