//! User lookup rows
//!
//! SharePoint stores person columns as lookups into the site's user
//! information list. Writing a person field needs that list's item id, which
//! these types decode from an aggregated read of the list.

use serde::{Deserialize, Serialize};

/// One row of the user information list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLookupItem {
    /// Row etag.
    #[serde(rename = "@odata.etag", default)]
    pub etag: Option<String>,
    /// Lookup id of the row.
    pub id: String,
    /// OData context of the expanded fields.
    #[serde(rename = "fields@odata.context", default)]
    pub fields_context: Option<String>,
    /// Expanded fields, when requested.
    #[serde(default)]
    pub fields: Option<UserLookupFields>,
}

/// Expanded fields of a user lookup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLookupFields {
    /// Fields etag.
    #[serde(rename = "@odata.etag", default)]
    pub etag: Option<String>,
    /// Id repeated inside the fields.
    #[serde(default)]
    pub id: Option<String>,
    /// User e-mail address.
    #[serde(rename = "EMail", default)]
    pub email: Option<String>,
}

/// Lookup id of the row whose e-mail matches, ignoring ASCII case.
pub fn find_lookup_id<'a>(items: &'a [UserLookupItem], email: &str) -> Option<&'a str> {
    let needle = email.trim();
    items
        .iter()
        .find(|item| {
            item.fields
                .as_ref()
                .and_then(|fields| fields.email.as_deref())
                .is_some_and(|candidate| candidate.trim().eq_ignore_ascii_case(needle))
        })
        .map(|item| item.id.as_str())
}
