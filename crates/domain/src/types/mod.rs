//! Domain types and models
//!
//! Everything a caller hands to, or receives from, the token, read and write
//! paths.

pub mod auth;
pub mod list;
pub mod lookup;
pub mod write;

pub use auth::{AccessToken, CredentialProfile, Credentials};
pub use list::{AggregatedCollection, PageQuery, ResourceLocator};
pub use lookup::{find_lookup_id, UserLookupFields, UserLookupItem};
pub use write::{
    AggregateResult, BulkReport, CreateItem, ItemKey, ItemOutcome, NewItem, UpdateItem, WriteItem,
};
