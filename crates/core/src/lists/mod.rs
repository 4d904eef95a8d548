//! Reading and writing remote lists

pub mod ports;
pub mod service;

pub use ports::{ListReader, ListWriter, TokenProvider};
pub use service::ListSyncService;
