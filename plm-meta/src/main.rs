//! # plm-meta
//!
//! Fetches the metadata of one library from a PLM registry and prints it:
//!
//! 1. **Initialization**: Parses command-line arguments and options file into a `ClientConfig`.
//! 2. **Connection**: Connects a `MetadataClient` to the registry.
//! 3. **Execution**: Sends a single `Metadata` request.
//! 4. **Presentation**: Prints the response as JSON, or the failure on stderr with exit code 1.
use clap::Parser;
use plm_meta::{cli::Cli, formatter::FormattedString, logging};
use registry_client::{ClientConfig, MetadataClient, MetadataRequest};
use std::process;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    logging::init(args.quiet, args.verbose);

    let config = match args.client_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    let mut client = connect_or_exit(config).await;

    let request = MetadataRequest {
        library: args.library,
    };

    match client.metadata(request).await {
        Ok(response) => println!("{}", FormattedString::from(response)),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn connect_or_exit(config: ClientConfig) -> MetadataClient {
    match MetadataClient::connect(config).await {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}
