use registry_client::{
    ClientConfig, MetadataClient, MetadataError, MetadataRequest, MetadataResponse,
    grpc::client::GrpcRequestError,
};
use registry_fixtures::{GOOGLEAPIS, UDPA, googleapis, stub_registry, udpa};
use registry_proto::{RegistryService, RegistryServiceServer};
use std::time::Duration;
use tonic::{Code, Request, Response, Status};

mod registry_fixtures;

fn config() -> ClientConfig {
    ClientConfig::new("localhost", 7575).unwrap()
}

fn request(library: &str) -> MetadataRequest {
    MetadataRequest {
        library: library.to_string(),
    }
}

#[tokio::test]
async fn test_returns_udpa_record_unmodified() {
    let mut client =
        MetadataClient::from_service(RegistryServiceServer::new(stub_registry()), config());

    let res = client.metadata(request(UDPA)).await.unwrap();

    assert_eq!(res, udpa());
}

#[tokio::test]
async fn test_returns_googleapis_record_unmodified() {
    let mut client =
        MetadataClient::from_service(RegistryServiceServer::new(stub_registry()), config());

    let res = client.metadata(request(GOOGLEAPIS)).await.unwrap();

    assert_eq!(res, googleapis());
    assert_ne!(res, udpa());
}

#[tokio::test]
async fn test_identical_requests_return_identical_responses() {
    let mut client =
        MetadataClient::from_service(RegistryServiceServer::new(stub_registry()), config());

    let first = client.metadata(request(UDPA)).await.unwrap();
    let second = client.metadata(request(UDPA)).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_library_is_a_remote_error() {
    let mut client =
        MetadataClient::from_service(RegistryServiceServer::new(stub_registry()), config());

    let err = client.metadata(request("@nope/nothing")).await.unwrap_err();

    match err {
        MetadataError::Remote(status) => {
            assert_eq!(status.code(), Code::NotFound);
            assert!(status.message().contains("@nope/nothing"));
        }
        other => panic!("expected a remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_library_fails_locally() {
    let mut client = MetadataClient::from_service(RegistryServiceServer::new(Unreachable), config());

    let err = client.metadata(request("")).await.unwrap_err();

    assert!(matches!(err, MetadataError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_slow_registry_times_out() {
    let registry = stub_registry().with_delay(Duration::from_millis(500));
    let timeout = Duration::from_millis(50);
    let mut client = MetadataClient::from_service(
        RegistryServiceServer::new(registry),
        config().with_timeout(timeout).unwrap(),
    );

    let err = client.metadata(request(UDPA)).await.unwrap_err();

    assert!(
        matches!(err, MetadataError::Timeout { timeout: t, ref addr } if t == timeout && addr == "localhost:7575")
    );
}

#[tokio::test]
async fn test_headers_are_sent_to_the_registry() {
    let mut client = MetadataClient::from_service(
        RegistryServiceServer::new(HeaderEcho),
        config().with_header("x-client", "plm-meta"),
    );

    let res = client.metadata(request(UDPA)).await.unwrap();

    assert_eq!(res.name, UDPA);
    assert_eq!(res.description, "plm-meta");
}

#[tokio::test]
async fn test_invalid_header_is_a_request_error() {
    let mut client = MetadataClient::from_service(
        RegistryServiceServer::new(HeaderEcho),
        config().with_header("bad key", "value"),
    );

    let err = client.metadata(request(UDPA)).await.unwrap_err();

    assert!(matches!(
        err,
        MetadataError::Request(GrpcRequestError::InvalidMetadataKey { .. })
    ));
}

#[tokio::test]
async fn test_unavailable_status_is_a_connection_error() {
    let mut client = MetadataClient::from_service(RegistryServiceServer::new(Unavailable), config());

    let err = client.metadata(request(UDPA)).await.unwrap_err();

    assert!(matches!(err, MetadataError::Connection { .. }));
}

// Replies with the `x-client` header as the description.
struct HeaderEcho;

#[tonic::async_trait]
impl RegistryService for HeaderEcho {
    async fn metadata(
        &self,
        req: Request<MetadataRequest>,
    ) -> Result<Response<MetadataResponse>, Status> {
        let description = req
            .metadata()
            .get("x-client")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(Response::new(MetadataResponse {
            name: req.into_inner().library,
            description,
            ..Default::default()
        }))
    }
}

struct Unavailable;

#[tonic::async_trait]
impl RegistryService for Unavailable {
    async fn metadata(
        &self,
        _req: Request<MetadataRequest>,
    ) -> Result<Response<MetadataResponse>, Status> {
        Err(Status::unavailable("registry is restarting"))
    }
}

struct Unreachable;

#[tonic::async_trait]
impl RegistryService for Unreachable {
    async fn metadata(
        &self,
        _req: Request<MetadataRequest>,
    ) -> Result<Response<MetadataResponse>, Status> {
        unreachable!("invalid requests must not reach the registry")
    }
}
