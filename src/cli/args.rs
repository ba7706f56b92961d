//! CLI argument definitions using clap

use crate::config::Settings;
use crate::utils::ConfigError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssllabs")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (API v3)"))]
#[command(about = "Query the Qualys SSL Labs assessment API", long_about = None)]
pub struct Cli {
    /// Host to assess
    #[arg(value_name = "HOST")]
    pub host: Option<String>,

    /// Get a detailed report
    #[arg(short, long)]
    pub detailed: bool,

    /// Show cached data for the host's endpoint only
    #[arg(short, long, conflicts_with = "detailed")]
    pub endpoint: bool,

    /// Discard cached results and start a fresh assessment
    #[arg(short, long)]
    pub force: bool,

    /// Get SSL Labs engine info
    #[arg(short = 'I', long)]
    pub info: bool,

    /// List status code translations
    #[arg(long)]
    pub status_codes: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug mode
    #[arg(short = 'D', long)]
    pub debug: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Number of polls before giving up
    #[arg(long)]
    pub retries: Option<u32>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// 0 = silent, 1 = verbose, 2 = debug
    pub fn verbosity(&self) -> u8 {
        if self.debug {
            2
        } else if self.verbose {
            1
        } else {
            0
        }
    }

    /// The host with any scheme, path, port and trailing dot removed
    pub fn normalized_host(&self) -> Option<String> {
        let raw = self.host.as_deref()?.trim();
        let without_scheme = raw
            .strip_prefix("https://")
            .or_else(|| raw.strip_prefix("http://"))
            .unwrap_or(raw);
        let host = without_scheme
            .split(['/', '?', '#'])
            .next()
            .unwrap_or("")
            .split(':')
            .next()
            .unwrap_or("")
            .trim_end_matches('.')
            .to_lowercase();
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Settings from the config file (or defaults), overridden by flags
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::load_default()?,
        };

        if let Some(url) = &self.base_url {
            settings.api.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.api.timeout_secs = timeout;
        }
        if let Some(retries) = self.retries {
            settings.api.retries = retries;
        }
        settings.api.verbosity = settings.api.verbosity.max(self.verbosity());
        Ok(settings)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rich terminal output (default)
    Table,
    /// JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
