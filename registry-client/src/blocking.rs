//! # Blocking Client
//!
//! A synchronous facade over [`crate::MetadataClient`] for callers without an async runtime.
//! The client owns a current-thread `tokio` runtime and blocks on every call.
//!
//! Do not use it from within an async context, blocking inside a runtime panics.
use crate::{ClientConfig, MetadataError, MetadataRequest, MetadataResponse};
use tokio::runtime::{Builder, Runtime};
use tonic::transport::Channel;

#[derive(Debug)]
pub struct MetadataClient {
    inner: crate::MetadataClient<Channel>,
    rt: Runtime,
}

impl MetadataClient {
    /// Connects to the configured endpoint, blocking until the connection is established.
    pub fn connect(config: ClientConfig) -> Result<Self, MetadataError> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(MetadataError::Runtime)?;

        let inner = rt.block_on(crate::MetadataClient::connect(config))?;

        Ok(Self { inner, rt })
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Fetches the metadata of `request.library`, blocking until the call completes.
    pub fn metadata(&mut self, request: MetadataRequest) -> Result<MetadataResponse, MetadataError> {
        self.rt.block_on(self.inner.metadata(request))
    }
}
