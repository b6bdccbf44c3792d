//! Test doubles for the service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{ShareId, Snippet};
use crate::error::{DomainError, RepoError};
use crate::ports::{ShareIdGenerator, SnippetRepository};

/// Store backed by a mutex-guarded map, with an optional forced failure.
#[derive(Default)]
pub struct FakeRepository {
    pub rows: Mutex<HashMap<ShareId, Snippet>>,
    pub fail_with_connection_error: bool,
}

impl FakeRepository {
    pub fn failing() -> Self {
        Self {
            fail_with_connection_error: true,
            ..Self::default()
        }
    }

    pub fn views(&self, id: &str) -> Option<u64> {
        self.rows.lock().unwrap().get(&ShareId::from(id)).map(|s| s.views)
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.fail_with_connection_error {
            return Err(RepoError::Connection("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SnippetRepository for FakeRepository {
    async fn insert_one(&self, snippet: Snippet) -> Result<(), RepoError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&snippet.share_id) {
            return Err(RepoError::Constraint("duplicate share id".into()));
        }
        rows.insert(snippet.share_id.clone(), snippet);
        Ok(())
    }

    async fn find_one(&self, share_id: &ShareId) -> Result<Option<Snippet>, RepoError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(share_id).cloned())
    }

    async fn increment_views(&self, share_id: &ShareId) -> Result<bool, RepoError> {
        self.check()?;
        match self.rows.lock().unwrap().get_mut(share_id) {
            Some(snippet) => {
                snippet.views += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

/// Hands out a fixed sequence of identifiers, then repeats the last one.
pub struct SequenceGenerator {
    ids: Vec<&'static str>,
    next: AtomicUsize,
}

impl SequenceGenerator {
    pub fn new(ids: Vec<&'static str>) -> Self {
        Self {
            ids,
            next: AtomicUsize::new(0),
        }
    }
}

impl ShareIdGenerator for SequenceGenerator {
    fn generate(&self) -> Result<ShareId, DomainError> {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        let id = self.ids.get(i).or(self.ids.last()).copied().unwrap_or("");
        Ok(ShareId::from(id))
    }
}
