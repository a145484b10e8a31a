//! # Typed gRPC Client
//!
//! This module wraps a standard `tonic` client to provide a generic interface for
//! unary gRPC calls. It is agnostic to the service being called: the method path is
//! given at call time and the messages are encoded with `tonic_prost::ProstCodec`.
//!
//! ## Features
//!
//! * **Pluggable transport**: Works over any `GrpcService`, a `Channel` by default.
//! * **Metadata Handling**: Converts standard Rust string tuples into Tonic's `MetadataMap` for headers.
use crate::BoxError;
use http_body::Body as HttpBody;
use std::str::FromStr;
use tonic::{
    client::GrpcService,
    metadata::{
        MetadataKey, MetadataValue,
        errors::{InvalidMetadataKey, InvalidMetadataValue},
    },
    transport::Channel,
};
use tonic_prost::ProstCodec;

#[derive(thiserror::Error, Debug)]
pub enum GrpcRequestError {
    #[error("Internal error, the client was not ready: '{0}'")]
    ClientNotReady(#[source] BoxError),
    #[error("Invalid gRPC method path '{path}': '{source}'")]
    InvalidPath {
        path: String,
        source: http::uri::InvalidUri,
    },
    #[error("Invalid metadata (header) key '{key}': '{source}'")]
    InvalidMetadataKey {
        key: String,
        source: InvalidMetadataKey,
    },
    #[error("Invalid metadata (header) value for key '{key}': '{source}'")]
    InvalidMetadataValue {
        key: String,
        source: InvalidMetadataValue,
    },
}

/// A unary gRPC client over an arbitrary transport.
#[derive(Debug, Clone)]
pub struct GrpcClient<S = Channel> {
    client: tonic::client::Grpc<S>,
}

impl<S> GrpcClient<S>
where
    S: GrpcService<tonic::body::Body>,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    pub fn new(service: S) -> Self {
        let client = tonic::client::Grpc::new(service);
        Self { client }
    }

    /// Performs a Unary gRPC call (Single Request -> Single Response).
    ///
    /// # Arguments
    /// * `path` - The method path, e.g. `/package.Service/Method`.
    /// * `payload` - The request message.
    /// * `headers` - Custom metadata attached to the request.
    ///
    /// # Returns
    /// * `Ok(Ok(Res))` - Successful RPC execution.
    /// * `Ok(Err(Status))` - RPC executed, but server returned an error.
    /// * `Err(GrpcRequestError)` - Failed to build the request or the transport was not ready.
    pub async fn unary<Req, Res>(
        &mut self,
        path: &str,
        payload: Req,
        headers: &[(String, String)],
    ) -> Result<Result<Res, tonic::Status>, GrpcRequestError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        let path = http_path(path)?;
        let request = build_request(payload, headers)?;

        self.client
            .ready()
            .await
            .map_err(|e| GrpcRequestError::ClientNotReady(e.into()))?;

        let codec = ProstCodec::<Req, Res>::default();

        match self.client.unary(request, path, codec).await {
            Ok(response) => Ok(Ok(response.into_inner())),
            Err(status) => Ok(Err(status)),
        }
    }
}

fn http_path(path: &str) -> Result<http::uri::PathAndQuery, GrpcRequestError> {
    http::uri::PathAndQuery::from_str(path).map_err(|source| GrpcRequestError::InvalidPath {
        path: path.to_string(),
        source,
    })
}

fn build_request<T>(
    payload: T,
    headers: &[(String, String)],
) -> Result<tonic::Request<T>, GrpcRequestError> {
    let mut request = tonic::Request::new(payload);
    for (k, v) in headers {
        let key =
            MetadataKey::from_str(k).map_err(|source| GrpcRequestError::InvalidMetadataKey {
                key: k.clone(),
                source,
            })?;
        let val = MetadataValue::from_str(v).map_err(|source| {
            GrpcRequestError::InvalidMetadataValue {
                key: k.clone(),
                source,
            }
        })?;
        request.metadata_mut().insert(key, val);
    }
    Ok(request)
}
