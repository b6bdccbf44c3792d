use std::sync::Arc;

use crate::domain::{ShareId, SnippetView};
use crate::error::DomainError;
use crate::ports::SnippetRepository;

/// Looks snippets up for readers and counts each successful read.
pub struct RetrievalService {
    repo: Arc<dyn SnippetRepository>,
}

impl RetrievalService {
    pub fn new(repo: Arc<dyn SnippetRepository>) -> Self {
        Self { repo }
    }

    /// Fetch the public fields of a snippet, recording one view.
    ///
    /// The id is used verbatim; malformed ids simply do not match.
    pub async fn get_share(&self, share_id: &str) -> Result<SnippetView, DomainError> {
        let id = ShareId::from(share_id);

        let snippet = self
            .repo
            .find_one_and_increment(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "snippet",
                id: share_id.to_string(),
            })?;

        tracing::debug!(share_id = %id, views = snippet.views, "Snippet viewed");
        Ok(snippet.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Snippet;
    use crate::error::RepoError;
    use crate::services::testing::FakeRepository;
    use crate::services::{CategoryPolicy, ShareService, ShareSubmission};
    use chrono::Utc;

    async fn seeded(id: &str) -> Arc<FakeRepository> {
        let repo = Arc::new(FakeRepository::default());
        repo.insert_one(Snippet::new(
            ShareId::from(id),
            "Hello".into(),
            "python".into(),
            "print(1)".into(),
            String::new(),
        ))
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn returns_public_fields_and_counts_the_view() {
        let repo = seeded("abc1234567").await;
        let service = RetrievalService::new(repo.clone());

        let view = service.get_share("abc1234567").await.unwrap();

        assert_eq!(view.title, "Hello");
        assert_eq!(view.category, "python");
        assert_eq!(view.code, "print(1)");
        assert_eq!(view.description, "");
        assert_eq!(repo.views("abc1234567"), Some(1));
    }

    #[tokio::test]
    async fn sequential_reads_count_every_view() {
        let repo = seeded("abc1234567").await;
        let service = RetrievalService::new(repo.clone());

        for _ in 0..3 {
            service.get_share("abc1234567").await.unwrap();
        }
        assert_eq!(repo.views("abc1234567"), Some(3));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_reads_do_not_lose_views() {
        let repo = seeded("hot").await;
        let service = Arc::new(RetrievalService::new(repo.clone()));

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.get_share("hot").await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.views("hot"), Some(64));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found_and_mutate_nothing() {
        let repo = seeded("abc1234567").await;
        let service = RetrievalService::new(repo.clone());

        let err = service.get_share("doesnotexist").await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { ref id, .. } if id == "doesnotexist"));
        assert_eq!(repo.views("abc1234567"), Some(0));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let service = RetrievalService::new(Arc::new(FakeRepository::failing()));
        let err = service.get_share("abc").await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(RepoError::Connection(_))));
    }

    #[tokio::test]
    async fn share_then_get_round_trips() {
        let repo = Arc::new(FakeRepository::default());
        let share = ShareService::new(
            repo.clone(),
            Arc::new(crate::domain::RandomShareIdGenerator::default()),
            CategoryPolicy::Permissive,
        );
        let retrieval = RetrievalService::new(repo.clone());

        let before = Utc::now();
        let id = share
            .create_share(ShareSubmission {
                title: Some("Sort".into()),
                category: Some("java".into()),
                code: Some("Arrays.sort(a);".into()),
                description: Some("in place".into()),
            })
            .await
            .unwrap();
        let view = retrieval.get_share(id.as_str()).await.unwrap();

        assert_eq!(view.title, "Sort");
        assert_eq!(view.category, "java");
        assert_eq!(view.code, "Arrays.sort(a);");
        assert_eq!(view.description, "in place");
        assert!(view.created_at >= before && view.created_at <= Utc::now());
    }
}
