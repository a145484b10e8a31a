//! Shared pieces of the `plm-meta` and `registry-stub` binaries.
pub mod cli;
pub mod formatter;
pub mod logging;
