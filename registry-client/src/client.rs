//! # Metadata Client
//!
//! This module implements the client for the registry `Metadata` RPC.
//!
//! A [`MetadataClient`] pairs a validated [`ClientConfig`] with a transport. The transport
//! is any `tonic` service, a [`Channel`] unless another one is injected:
//!
//! * [`MetadataClient::new`] uses the given channel, or connects to the configured endpoint.
//! * [`MetadataClient::connect`] connects eagerly, failing fast when the endpoint is unreachable.
//! * [`MetadataClient::connect_lazy`] defers the connection to the first call.
//! * [`MetadataClient::from_service`] accepts any `GrpcService`, e.g. an in-process server.
//!
//! Each call is a single attempt bounded by the configured timeout. Nothing is retried.
mod error;

pub use error::MetadataError;

use crate::{
    BoxError,
    config::ClientConfig,
    grpc::client::{GrpcClient, GrpcRequestError},
};
use http_body::Body as HttpBody;
use registry_proto::{METADATA_PATH, MetadataRequest, MetadataResponse};
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

/// Client for the `plm.registry.v1.RegistryService/Metadata` RPC.
#[derive(Debug, Clone)]
pub struct MetadataClient<S = Channel> {
    grpc_client: GrpcClient<S>,
    config: ClientConfig,
}

impl MetadataClient<Channel> {
    /// Builds a client from an optional pre-built channel.
    ///
    /// When `transport` is `None` a new connection to the configured endpoint is opened.
    pub async fn new(
        transport: Option<Channel>,
        config: ClientConfig,
    ) -> Result<Self, MetadataError> {
        match transport {
            Some(channel) => Ok(Self::from_service(channel, config)),
            None => Self::connect(config).await,
        }
    }

    /// Connects to the configured endpoint.
    ///
    /// # Returns
    ///
    /// * `Ok(MetadataClient)` - The connected client.
    /// * `Err(MetadataError::Connection)` - If the endpoint could not be reached within the
    ///   connect timeout.
    pub async fn connect(config: ClientConfig) -> Result<Self, MetadataError> {
        let endpoint = tonic_endpoint(&config)?;
        debug!(endpoint = %config.endpoint(), "connecting to registry");

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| MetadataError::Connection {
                addr: config.endpoint().to_string(),
                source: e.into(),
            })?;

        Ok(Self::from_service(channel, config))
    }

    /// Creates a client whose connection is established on the first call.
    pub fn connect_lazy(config: ClientConfig) -> Result<Self, MetadataError> {
        let channel = tonic_endpoint(&config)?.connect_lazy();
        Ok(Self::from_service(channel, config))
    }
}

impl<S> MetadataClient<S>
where
    S: tonic::client::GrpcService<tonic::body::Body>,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Creates a client from an existing Tonic service/channel.
    pub fn from_service(service: S, config: ClientConfig) -> Self {
        Self {
            grpc_client: GrpcClient::new(service),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the metadata of `request.library`.
    ///
    /// The response is returned exactly as the registry sent it.
    ///
    /// # Returns
    ///
    /// * `Ok(MetadataResponse)` - The registry's record for the library.
    /// * `Err(MetadataError::InvalidRequest)` - The library name is empty, nothing was sent.
    /// * `Err(MetadataError::Connection)` - The registry could not be reached.
    /// * `Err(MetadataError::Timeout)` - No response within the configured timeout.
    /// * `Err(MetadataError::Remote)` - The registry answered with an error status.
    pub async fn metadata(
        &mut self,
        request: MetadataRequest,
    ) -> Result<MetadataResponse, MetadataError> {
        if request.library.is_empty() {
            return Err(MetadataError::InvalidRequest(
                "library name must not be empty".to_string(),
            ));
        }

        let addr = self.config.endpoint().to_string();
        let timeout = self.config.timeout();
        debug!(library = %request.library, %addr, "sending metadata request");

        let call = self.grpc_client.unary::<MetadataRequest, MetadataResponse>(
            METADATA_PATH,
            request,
            self.config.headers(),
        );

        let result = tokio::time::timeout(timeout, call)
            .await
            .map_err(|_| MetadataError::Timeout {
                addr: addr.clone(),
                timeout,
            })?;

        match result {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(status)) => Err(MetadataError::from_status(addr, timeout, status)),
            Err(GrpcRequestError::ClientNotReady(source)) => {
                Err(MetadataError::Connection { addr, source })
            }
            Err(err) => Err(MetadataError::Request(err)),
        }
    }
}

fn tonic_endpoint(config: &ClientConfig) -> Result<Endpoint, MetadataError> {
    let uri = config.endpoint().uri();
    let endpoint = Endpoint::new(uri.clone())
        .map_err(|source| MetadataError::InvalidEndpoint { uri, source })?;

    Ok(endpoint.connect_timeout(config.connect_timeout()))
}
