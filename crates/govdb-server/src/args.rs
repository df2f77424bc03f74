// crates/govdb-server/src/args.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for govdb-server
#[derive(Debug, Parser)]
#[command(
    name = "govdb-server",
    version,
    about = "Versioned HTTP API serving governorate and city reference data"
)]
pub struct ServerArgs {
    /// Address to bind to
    #[arg(long, env = "GOVDB_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, env = "GOVDB_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding cities.json and governments.json (default: current directory)
    #[arg(short = 'd', long = "data-dir", env = "GOVDB_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Hosting environment; the OpenAPI documents are only served in development
    #[arg(long, env = "GOVDB_ENVIRONMENT", value_enum, default_value_t = Environment::Production)]
    pub environment: Environment,

    /// Log output format
    #[arg(long = "log-format", env = "GOVDB_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
