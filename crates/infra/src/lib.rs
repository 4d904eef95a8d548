//! # graphlist Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP client and per-call Graph session
//! - Token exchange, paginated reads and bulk writes against list endpoints
//! - Configuration loading and the environment secret source
//!
//! ## Architecture
//! - Implements traits defined in `graphlist-core`
//! - Contains all "impure" code (network and environment I/O)

pub mod config;
pub mod errors;
pub mod graph;
pub mod http;
pub mod observability;
pub mod secrets;

// Re-export commonly used items
pub use errors::InfraError;
pub use graph::*;
pub use http::*;
pub use secrets::EnvSecretSource;
