use async_trait::async_trait;

use crate::domain::{ShareId, Snippet};
use crate::error::RepoError;

/// Snippet store - the persistence collaborator behind both services.
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Append a new snippet. A taken share id is a `RepoError::Constraint`.
    async fn insert_one(&self, snippet: Snippet) -> Result<(), RepoError>;

    /// Find a snippet by share id. Absence is `Ok(None)`, never an error.
    async fn find_one(&self, share_id: &ShareId) -> Result<Option<Snippet>, RepoError>;

    /// Atomically add one to the view counter.
    /// Returns `false` when no snippet matched.
    async fn increment_views(&self, share_id: &ShareId) -> Result<bool, RepoError>;

    /// Find a snippet and count the view in one step.
    ///
    /// The returned snippet carries the incremented counter.
    async fn find_one_and_increment(
        &self,
        share_id: &ShareId,
    ) -> Result<Option<Snippet>, RepoError> {
        let Some(mut snippet) = self.find_one(share_id).await? else {
            return Ok(None);
        };
        if self.increment_views(share_id).await? {
            snippet.views += 1;
        }
        Ok(Some(snippet))
    }

    /// Number of stored snippets.
    async fn count(&self) -> Result<u64, RepoError>;
}
