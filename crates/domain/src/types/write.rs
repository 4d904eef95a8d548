//! Bulk write inputs and outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::FRAGMENT_SEPARATOR;

/// Anything that can be sent as the JSON body of a list write.
///
/// Rendering the body from domain objects is the caller's concern; the write
/// path only needs the finished text.
pub trait WriteItem: Send + Sync {
    /// The pre-rendered JSON request body.
    fn json_body(&self) -> &str;
}

/// A write that lands as a new item at the collection root.
///
/// Updates carry an item id and must not satisfy this bound, otherwise a
/// partial update would be posted as a create.
pub trait CreateItem: WriteItem {}

/// A list item to create, body supplied wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    body: String,
}

impl NewItem {
    /// Wrap an already rendered create body.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Render a serializable value as the create body.
    pub fn from_json<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_string(value).map(Self::new)
    }
}

impl WriteItem for NewItem {
    fn json_body(&self) -> &str {
        &self.body
    }
}

impl CreateItem for NewItem {}

/// A partial update of an existing item's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    item_id: String,
    body: String,
}

impl UpdateItem {
    /// Patch `body` onto the fields of item `item_id`.
    pub fn new(item_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self { item_id: item_id.into(), body: body.into() }
    }

    /// Id of the item being patched.
    pub fn item_id(&self) -> &str {
        &self.item_id
    }
}

impl WriteItem for UpdateItem {
    fn json_body(&self) -> &str {
        &self.body
    }
}

/// Identity of the request an outcome belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKey {
    /// Position in the submitted create batch.
    Index(usize),
    /// Item id of an update.
    Id(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Result of one request inside a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    /// Which submitted item this outcome belongs to.
    pub key: ItemKey,
    /// HTTP status, absent when the request never got a response.
    pub status: Option<u16>,
    /// Response body, or the transport error message.
    pub result: Result<String, String>,
}

impl ItemOutcome {
    /// An outcome with a response, whatever its status.
    pub fn response(key: ItemKey, status: u16, body: String) -> Self {
        Self { key, status: Some(status), result: Ok(body) }
    }

    /// An outcome where no response arrived.
    pub fn transport_failure(key: ItemKey, message: String) -> Self {
        Self { key, status: None, result: Err(message) }
    }

    /// Whether the request never got a response.
    pub fn is_transport_failure(&self) -> bool {
        self.result.is_err()
    }

    /// Response body, if a response arrived.
    pub fn body(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }
}

/// Every outcome of a bulk operation, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReport {
    outcomes: Vec<ItemOutcome>,
}

impl BulkReport {
    /// Wrap outcomes collected in completion order.
    pub fn new(outcomes: Vec<ItemOutcome>) -> Self {
        Self { outcomes }
    }

    /// Outcomes in completion order.
    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<ItemOutcome> {
        self.outcomes
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Response bodies joined in completion order. Transport failures
    /// contribute nothing.
    pub fn combined_text(&self) -> String {
        self.outcomes
            .iter()
            .filter_map(ItemOutcome::body)
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR)
    }

    /// Outcomes that never got a response.
    pub fn transport_failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_transport_failure())
    }

    /// Outcome of the item identified by `key`.
    pub fn outcome_for(&self, key: &ItemKey) -> Option<&ItemOutcome> {
        self.outcomes.iter().find(|outcome| &outcome.key == key)
    }
}

/// Coarse verdict over a bulk operation's combined text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateResult {
    /// No failure detected; carries the combined text.
    Success(String),
    /// A failure was detected; carries the combined text.
    Failure(String),
}

impl AggregateResult {
    /// Whether the batch was judged successful.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The combined text, whatever the verdict.
    pub fn payload(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn into_payload(self) -> String {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }
}
