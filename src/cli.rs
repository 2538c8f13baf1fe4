// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use script_lines_domain::{AtlasIdType, Options, ParseRequest, Source};
use script_lines_infra::atlas::{DEFAULT_API_BASE, DEFAULT_LANGUAGE, DEFAULT_REGION, DEFAULT_STATIC_BASE};

#[derive(Parser, Debug)]
#[command(name = "script-lines", version, about = "FGO script line and character counter")]
pub struct Args {
    /// Atlas API base URL
    #[arg(long, env = "SCRIPT_LINES_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base_url: String,

    /// Static host serving script bodies
    #[arg(long, env = "SCRIPT_LINES_STATIC_BASE", default_value = DEFAULT_STATIC_BASE)]
    pub static_base_url: String,

    /// Game region (JP, NA, ...)
    #[arg(long, env = "SCRIPT_LINES_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Language for war and quest names
    #[arg(long, env = "SCRIPT_LINES_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Directory the report file is written to
    #[arg(long, env = "SCRIPT_LINES_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, env = "SCRIPT_LINES_REQUEST_TIMEOUT", default_value_t = 30, value_name = "SECS")]
    pub request_timeout: u64,

    /// Seconds an error message stays visible
    #[arg(long, default_value_t = 5, value_name = "SECS")]
    pub error_timeout: u64,

    /// Seconds a notification stays visible
    #[arg(long, default_value_t = 2, value_name = "SECS")]
    pub notification_timeout: u64,

    /// Log file used while the terminal UI is active
    #[arg(long, env = "SCRIPT_LINES_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse without the interactive wizard
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    #[arg(long, value_enum, default_value = "atlas")]
    pub source: SourceArg,

    /// Kind of Atlas ID (ignored for local sources)
    #[arg(long, value_enum, default_value = "war")]
    pub id_type: IdTypeArg,

    /// Print rows to stdout instead of writing a file
    #[arg(long)]
    pub no_file: bool,

    /// Add a Words column (characters / 2)
    #[arg(long)]
    pub words: bool,

    /// Append a random suffix to the report file name
    #[arg(long, conflicts_with = "no_file")]
    pub unique_name: bool,

    /// IDs or paths to parse
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Atlas,
    Local,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IdTypeArg {
    War,
    Quest,
    Script,
}

impl From<SourceArg> for Source {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Atlas => Self::Atlas,
            SourceArg::Local => Self::Local,
        }
    }
}

impl From<IdTypeArg> for AtlasIdType {
    fn from(value: IdTypeArg) -> Self {
        match value {
            IdTypeArg::War => Self::War,
            IdTypeArg::Quest => Self::Quest,
            IdTypeArg::Script => Self::Script,
        }
    }
}

impl RunArgs {
    pub fn to_request(&self) -> ParseRequest {
        let options = Options::default()
            .with_include_word_count(self.words)
            .with_skip_file_output(self.no_file)
            .with_unique_output_name(self.unique_name);
        ParseRequest {
            source: self.source.into(),
            id_type: self.id_type.into(),
            raw_input: self.ids.join("\n"),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_atlas() {
        let args = Args::try_parse_from(["script-lines"]).unwrap();
        assert_eq!(args.api_base_url, DEFAULT_API_BASE);
        assert_eq!(args.region, "JP");
        assert_eq!(args.request_timeout, 30);
        assert!(args.command.is_none());
    }

    #[test]
    fn run_subcommand_builds_a_request() {
        let args =
            Args::try_parse_from(["script-lines", "run", "--id-type", "quest", "--words", "1000001", "1000002"])
                .unwrap();
        let Some(Command::Run(run)) = args.command else { panic!("expected run") };
        let request = run.to_request();
        assert_eq!(request.source, Source::Atlas);
        assert_eq!(request.id_type, AtlasIdType::Quest);
        assert_eq!(request.raw_input, "1000001\n1000002");
        assert!(request.options.include_word_count);
        assert!(!request.options.skip_file_output);
    }

    #[test]
    fn unique_name_conflicts_with_no_file() {
        assert!(Args::try_parse_from(["script-lines", "run", "--no-file", "--unique-name", "100"]).is_err());
    }

    #[test]
    fn run_requires_ids() {
        assert!(Args::try_parse_from(["script-lines", "run"]).is_err());
    }
}
