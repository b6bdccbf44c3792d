//! In-memory snippet store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use codeshare_core::domain::{ShareId, Snippet};
use codeshare_core::error::RepoError;
use codeshare_core::ports::SnippetRepository;

/// Snippet store using a HashMap behind an async RwLock.
///
/// View increments take the write lock, so concurrent readers never lose a count.
/// Note: Data is lost on process restart.
pub struct InMemorySnippetRepository {
    store: RwLock<HashMap<ShareId, Snippet>>,
}

impl InMemorySnippetRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySnippetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnippetRepository for InMemorySnippetRepository {
    async fn insert_one(&self, snippet: Snippet) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&snippet.share_id) {
            return Err(RepoError::Constraint(format!(
                "share id {} already exists",
                snippet.share_id
            )));
        }
        store.insert(snippet.share_id.clone(), snippet);
        Ok(())
    }

    async fn find_one(&self, share_id: &ShareId) -> Result<Option<Snippet>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(share_id).cloned())
    }

    async fn increment_views(&self, share_id: &ShareId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        Ok(store
            .get_mut(share_id)
            .map(|snippet| snippet.views += 1)
            .is_some())
    }

    async fn find_one_and_increment(
        &self,
        share_id: &ShareId,
    ) -> Result<Option<Snippet>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.get_mut(share_id).map(|snippet| {
            snippet.views += 1;
            snippet.clone()
        }))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}
