//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to share a snippet.
///
/// Every field is optional on the wire so that missing and empty values
/// are rejected with the same validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response to a successful share.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub share_id: String,
}

/// Public view of a shared snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetResponse {
    pub title: String,
    pub category: String,
    pub code: String,
    pub description: String,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub created_at: String,
}

/// One entry of the category listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub value: String,
    pub label: String,
    pub language: String,
}
