use std::sync::Arc;

use crate::domain::{Category, ShareId, Snippet};
use crate::error::DomainError;
use crate::ports::{ShareIdGenerator, SnippetRepository};

/// How submitted categories are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryPolicy {
    /// Any non-empty category is stored as given.
    #[default]
    Permissive,
    /// Only the known [`Category`] values are accepted.
    Strict,
}

/// Raw share request. Absent and empty fields are treated alike.
#[derive(Debug, Clone, Default)]
pub struct ShareSubmission {
    pub title: Option<String>,
    pub category: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

struct ValidSubmission {
    title: String,
    category: String,
    code: String,
    description: String,
}

impl ShareSubmission {
    fn validate(self, policy: CategoryPolicy) -> Result<ValidSubmission, DomainError> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        let (title, category, code) = match (
            present(self.title),
            present(self.category),
            present(self.code),
        ) {
            (Some(title), Some(category), Some(code)) => (title, category, code),
            (title, category, code) => {
                let missing = [
                    ("title", title.is_none()),
                    ("category", category.is_none()),
                    ("code", code.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(DomainError::MissingFields(missing));
            }
        };

        if policy == CategoryPolicy::Strict && category.parse::<Category>().is_err() {
            return Err(DomainError::UnsupportedCategory(category));
        }

        Ok(ValidSubmission {
            title,
            category,
            code,
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Creates snippet records and hands back their share ids.
pub struct ShareService {
    repo: Arc<dyn SnippetRepository>,
    ids: Arc<dyn ShareIdGenerator>,
    policy: CategoryPolicy,
}

impl ShareService {
    pub fn new(
        repo: Arc<dyn SnippetRepository>,
        ids: Arc<dyn ShareIdGenerator>,
        policy: CategoryPolicy,
    ) -> Self {
        Self { repo, ids, policy }
    }

    /// Validate, stamp and persist a submission with a single insert.
    pub async fn create_share(&self, submission: ShareSubmission) -> Result<ShareId, DomainError> {
        let valid = submission.validate(self.policy)?;

        let share_id = self.ids.generate()?;
        let snippet = Snippet::new(
            share_id.clone(),
            valid.title,
            valid.category,
            valid.code,
            valid.description,
        );
        let category = snippet.category.clone();

        self.repo.insert_one(snippet).await?;

        tracing::info!(share_id = %share_id, category = %category, "Snippet shared");
        Ok(share_id)
    }
}
