use crate::{BoxError, grpc::client::GrpcRequestError};
use std::time::Duration;
use tonic::Code;
use tracing::debug;

/// Errors surfaced by a Metadata call. None of them are recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invalid registry URI '{uri}': '{source}'")]
    InvalidEndpoint {
        uri: String,
        source: tonic::transport::Error,
    },
    #[error("Failed to connect to '{addr}': '{source}'")]
    Connection {
        addr: String,
        #[source]
        source: BoxError,
    },
    #[error("No response from '{addr}' within {timeout:?}")]
    Timeout { addr: String, timeout: Duration },
    #[error("Registry returned an error: code={:?} message={:?}", .0.code(), .0.message())]
    Remote(#[source] tonic::Status),
    #[error("Failed to build the request: '{0}'")]
    Request(#[source] GrpcRequestError),
    #[error("Failed to start the client runtime: '{0}'")]
    Runtime(#[source] std::io::Error),
}

impl MetadataError {
    /// Classifies a status returned by the transport or the server.
    ///
    /// `UNAVAILABLE` is what tonic reports when the connection cannot be established, so it
    /// is treated as a connection failure. `DEADLINE_EXCEEDED` maps to a timeout.
    pub(crate) fn from_status(addr: String, timeout: Duration, status: tonic::Status) -> Self {
        debug!(code = ?status.code(), message = status.message(), "metadata call failed");

        match status.code() {
            Code::Unavailable => MetadataError::Connection {
                addr,
                source: Box::new(status),
            },
            Code::DeadlineExceeded => MetadataError::Timeout { addr, timeout },
            _ => MetadataError::Remote(status),
        }
    }

    /// Returns the status reported by the registry, if it reported one.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            MetadataError::Remote(status) => Some(status),
            _ => None,
        }
    }
}
