//! # CLI
//!
//! This module defines the command-line interface of `plm-meta` using `clap`.
//!
//! The connection options may come from a JSON options file (`--config`), from flags, or
//! both. Flags take precedence over the file. `host` and `port` have no defaults.
use clap::{ArgAction, Parser};
use registry_client::{ClientConfig, ConfigError, RegistryOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "plm-meta",
    version,
    about = "Fetch library metadata from a PLM registry"
)]
pub struct Cli {
    /// Library to look up (e.g. @cncf/udpa)
    pub library: String,

    /// Registry host (e.g. localhost)
    #[arg(long)]
    pub host: Option<String>,

    /// Registry port (e.g. 7575)
    #[arg(long)]
    pub port: Option<i64>,

    /// Path to a JSON options file, e.g. {"host": "localhost", "port": 7575}
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Deadline for the Metadata call, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Deadline for establishing the connection, in milliseconds
    #[arg(long)]
    pub connect_timeout_ms: Option<u64>,

    /// Extra gRPC metadata sent with the request (key:value)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Merges the options file with the flags and validates the result.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let file = match &self.config {
            Some(path) => RegistryOptions::load(path)?,
            None => RegistryOptions::default(),
        };

        let flags = RegistryOptions {
            host: self.host.clone(),
            port: self.port,
            timeout_ms: self.timeout_ms,
            connect_timeout_ms: self.connect_timeout_ms,
        };

        let config = ClientConfig::try_from(file.merge(flags))?;

        Ok(self
            .headers
            .iter()
            .cloned()
            .fold(config, |config, (k, v)| config.with_header(k, v)))
    }
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once(':')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| "Format must be 'key:value'".to_string())
}
