// src/config.rs
use std::{env, path::PathBuf, time::Duration};

use anyhow::{Result, bail};
use script_lines_infra::AtlasEndpoints;

use crate::{cli::Args, wizard::Timeouts};

const DEFAULT_LOG_FILE: &str = "script-lines.log";

/// Runtime settings derived from CLI arguments and environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub static_base_url: String,
    pub region: String,
    pub language: String,
    pub output_dir: PathBuf,
    pub request_timeout: Duration,
    pub error_timeout: Duration,
    pub notification_timeout: Duration,
    pub log_file: PathBuf,
}

impl TryFrom<&Args> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self> {
        if args.region.trim().is_empty() {
            bail!("--region must not be empty");
        }
        if args.request_timeout == 0 {
            bail!("--request-timeout must be at least 1 second");
        }

        Ok(Self {
            api_base_url: args.api_base_url.clone(),
            static_base_url: args.static_base_url.clone(),
            region: args.region.trim().to_string(),
            language: args.language.trim().to_string(),
            output_dir: args.output_dir.clone(),
            request_timeout: Duration::from_secs(args.request_timeout),
            error_timeout: Duration::from_secs(args.error_timeout),
            notification_timeout: Duration::from_secs(args.notification_timeout),
            log_file: args.log_file.clone().unwrap_or_else(|| env::temp_dir().join(DEFAULT_LOG_FILE)),
        })
    }
}

impl AppConfig {
    pub fn endpoints(&self) -> AtlasEndpoints {
        AtlasEndpoints {
            api_base: self.api_base_url.clone(),
            static_base: self.static_base_url.clone(),
            region: self.region.clone(),
            language: self.language.clone(),
        }
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts { error: self.error_timeout, notification: self.notification_timeout }
    }
}
