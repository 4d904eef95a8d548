//! # graphlist Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for tokens, reads, writes and secrets
//! - Aggregate classification of bulk write results
//! - The list sync service composing those ports
//!
//! ## Architecture Principles
//! - Only depends on `graphlist-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod classification;
pub mod lists;

// Infrastructure ports
pub mod secret_ports;

// Re-export specific items to avoid ambiguity
pub use classification::{classify, contains_failure_marker, ResultClassifier};
pub use lists::ports::{ListReader, ListWriter, TokenProvider};
pub use lists::ListSyncService;
pub use secret_ports::SecretSource;
