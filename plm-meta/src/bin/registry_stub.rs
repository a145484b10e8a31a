//! # registry-stub
//!
//! Serves fixed library metadata over the PLM registry gRPC API, for smoke testing
//! clients against a deterministic registry.
//!
//! The fixtures file is a JSON object mapping library names to metadata records:
//!
//! ```json
//! {
//!   "@cncf/udpa": {
//!     "name": "@cncf/udpa",
//!     "description": "Universal Data Plane API",
//!     "versions": { "0.0.1": { "name": "@cncf/udpa", "version": "0.0.1" } }
//!   }
//! }
//! ```
use anyhow::Context;
use clap::{ArgAction, Parser};
use plm_meta::logging;
use registry_proto::stub::{self, StubRegistry};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "registry-stub",
    version,
    about = "Serve fixed library metadata over the PLM registry gRPC API"
)]
struct Args {
    /// Path to the JSON fixtures file
    #[arg(long)]
    fixtures: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = 7575)]
    port: u16,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // Served requests are logged at INFO by default.
    logging::init(args.quiet, args.verbose.saturating_add(1));

    let json = std::fs::read_to_string(&args.fixtures)
        .with_context(|| format!("Failed to read fixtures '{}'", args.fixtures.display()))?;
    let registry = StubRegistry::from_json(&json)?;
    info!(libraries = registry.libraries().count(), "loaded fixtures");

    let listener = TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.host, args.port))?;

    tokio::select! {
        res = stub::serve(listener, registry) => res?,
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }

    Ok(())
}
