//! Microsoft Graph list endpoints
//!
//! - [`TokenClient`]: client-credentials token exchange
//! - [`PageFetcher`]: cursor-following paginated reads
//! - [`BulkMutator`]: concurrent creates and field updates
//! - [`GraphListClient`]: the above behind the core list ports

pub mod auth;
pub mod bulk;
pub mod client;
pub mod pages;
pub mod session;

pub use auth::TokenClient;
pub use bulk::BulkMutator;
pub use client::GraphListClient;
pub use pages::PageFetcher;
pub use session::GraphSession;
