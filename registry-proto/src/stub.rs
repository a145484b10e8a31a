//! # Stub Registry
//!
//! A deterministic, in-memory implementation of [`RegistryService`] holding a fixed set
//! of `library -> MetadataResponse` records.
//!
//! It mirrors the lookup semantics of the real registry: a known library returns its
//! record untouched, an unknown one is reported as `NOT_FOUND`.
use crate::{
    FILE_DESCRIPTOR_SET, MetadataRequest, MetadataResponse, RegistryService, RegistryServiceServer,
};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Request, Response, Status, transport::Server};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum StubError {
    #[error("Invalid fixtures: '{0}'")]
    InvalidFixtures(#[from] serde_json::Error),
    #[error("Failed to build the reflection service: '{0}'")]
    Reflection(#[from] tonic_reflection::server::Error),
    #[error("Server transport error: '{0}'")]
    Transport(#[from] tonic::transport::Error),
}

#[derive(Debug, Clone, Default)]
pub struct StubRegistry {
    records: Arc<HashMap<String, MetadataResponse>>,
    delay: Option<Duration>,
}

impl StubRegistry {
    pub fn new(records: HashMap<String, MetadataResponse>) -> Self {
        Self {
            records: Arc::new(records),
            delay: None,
        }
    }

    /// Parses a JSON object mapping library names to metadata records.
    ///
    /// ```json
    /// { "@cncf/udpa": { "name": "@cncf/udpa", "description": "...", "versions": {} } }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, StubError> {
        let records: HashMap<String, MetadataResponse> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Delays every response, used to exercise client deadlines.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

#[tonic::async_trait]
impl RegistryService for StubRegistry {
    async fn metadata(
        &self,
        request: Request<MetadataRequest>,
    ) -> Result<Response<MetadataResponse>, Status> {
        let md_req = request.into_inner();
        info!(library = %md_req.library, "metadata request");

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if md_req.library.is_empty() {
            return Err(Status::invalid_argument("library name must not be empty"));
        }

        match self.records.get(&md_req.library) {
            Some(record) => Ok(Response::new(record.clone())),
            None => {
                warn!(library = %md_req.library, "unknown library");
                Err(Status::not_found(format!(
                    "Library: {} doesn't exist, bug the author - or grab the package name.",
                    md_req.library
                )))
            }
        }
    }
}

/// Serves `registry` on an already bound listener until the server fails.
///
/// The gRPC server reflection service is registered alongside it, so generic
/// tools can discover `plm.registry.v1.RegistryService`.
pub async fn serve(listener: TcpListener, registry: StubRegistry) -> Result<(), StubError> {
    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "stub registry listening");
    }

    Server::builder()
        .add_service(RegistryServiceServer::new(registry))
        .add_service(reflection)
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await?;

    Ok(())
}
