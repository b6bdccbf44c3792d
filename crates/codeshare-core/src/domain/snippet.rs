use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ShareId;

/// Snippet entity - a shared piece of code and its metadata.
///
/// `share_id` and `created_at` never change after creation; `views` only grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub share_id: ShareId,
    pub title: String,
    pub category: String,
    pub code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub views: u64,
}

impl Snippet {
    /// Create a new, never-viewed snippet stamped with the current time.
    pub fn new(
        share_id: ShareId,
        title: String,
        category: String,
        code: String,
        description: String,
    ) -> Self {
        Self {
            share_id,
            title,
            category,
            code,
            description,
            created_at: Utc::now(),
            views: 0,
        }
    }
}

/// Reader-facing fields of a snippet. Internal bookkeeping stays out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetView {
    pub title: String,
    pub category: String,
    pub code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Snippet> for SnippetView {
    fn from(snippet: Snippet) -> Self {
        Self {
            title: snippet.title,
            category: snippet.category,
            code: snippet.code,
            description: snippet.description,
            created_at: snippet.created_at,
        }
    }
}
