//! # Registry Client
//!
//! `registry-client` is a thin gRPC client for the PLM registry. It exposes a single
//! operation, fetching the metadata of a named library:
//!
//! ```rust,no_run
//! use registry_client::{ClientConfig, MetadataClient, MetadataRequest};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("localhost", 7575)?;
//! let mut client = MetadataClient::new(None, config).await?;
//!
//! let response = client
//!     .metadata(MetadataRequest {
//!         library: "@cncf/udpa".to_string(),
//!     })
//!     .await?;
//! println!("{response:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Components
//!
//! * **[`ClientConfig`]:** Immutable, validated connection settings (endpoint, deadlines, headers).
//! * **[`MetadataClient`]:** The async client. Generic over the transport so any `tonic`
//!   service (a `Channel`, an in-process server, an intercepted service) can be injected.
//! * **[`blocking::MetadataClient`]:** A synchronous facade that owns its own runtime.
//! * **[`grpc::client::GrpcClient`]:** The typed unary transport the clients are built on.
//!
//! ## Re-exports
//!
//! The message types are re-exported from `registry-proto`, and `tonic` is re-exported so
//! callers injecting their own transport use a compatible version.
pub mod blocking;
pub mod client;
pub mod config;
pub mod grpc;

pub use client::{MetadataClient, MetadataError};
pub use config::{ClientConfig, ConfigError, Endpoint, RegistryOptions};
pub use registry_proto::{MetadataRequest, MetadataResponse, Version};

// Re-exports
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
