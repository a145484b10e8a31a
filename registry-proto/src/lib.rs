//! # Registry Proto
//!
//! Protobuf schema and generated bindings for the `plm.registry.v1.RegistryService`
//! Metadata RPC.
//!
//! * **[`pb`]:** Generated message types and the server-side service trait.
//! * **[`stub`]:** An in-memory [`StubRegistry`] serving fixed metadata records,
//!   used by integration tests and by the `registry-stub` binary.
//!
//! Only the server half is generated. Clients reach the service through the generic
//! transport in `registry-client`, using [`METADATA_PATH`] as the method path.

pub mod pb {
    include!(concat!(env!("OUT_DIR"), "/plm.registry.v1.rs"));
}

pub mod stub;

pub use pb::registry_service_server::{RegistryService, RegistryServiceServer};
pub use pb::{MetadataRequest, MetadataResponse, Version};
pub use stub::StubRegistry;

/// Fully qualified name of the registry service.
pub const SERVICE_NAME: &str = "plm.registry.v1.RegistryService";

/// HTTP/2 path of the unary Metadata method.
pub const METADATA_PATH: &str = "/plm.registry.v1.RegistryService/Metadata";

/// Encoded `FileDescriptorSet` of the registry schema.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("descriptors");
