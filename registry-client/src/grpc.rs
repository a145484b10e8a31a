//! # Generic gRPC Transport
//!
//! Low-level building blocks for performing unary gRPC calls with any pair of
//! Protobuf message types, independently of generated client stubs.
pub mod client;
