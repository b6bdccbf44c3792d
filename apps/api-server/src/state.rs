//! Application state - shared across all handlers.

use std::sync::Arc;

use codeshare_core::domain::RandomShareIdGenerator;
use codeshare_core::ports::{ShareIdGenerator, SnippetRepository};
use codeshare_core::services::{CategoryPolicy, RetrievalService, ShareService};
use codeshare_infra::database::DatabaseConnections;
use codeshare_infra::store::InMemorySnippetRepository;

#[cfg(feature = "postgres")]
use codeshare_infra::database::PostgresSnippetRepository;

use crate::config::AppConfig;

/// Failures while wiring the application together.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[cfg(feature = "postgres")]
    #[error("database unavailable: {0}")]
    Database(#[from] migration::DbErr),
}

/// Shared application state.
///
/// Built once at startup; the services hold the only handle to the store.
#[derive(Clone)]
pub struct AppState {
    pub share: Arc<ShareService>,
    pub retrieval: Arc<RetrievalService>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with the configured snippet store.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        let ids: Arc<dyn ShareIdGenerator> =
            Arc::new(RandomShareIdGenerator::new(config.share_id_length));

        #[cfg(feature = "postgres")]
        let (db, repo): (Option<Arc<DatabaseConnections>>, Arc<dyn SnippetRepository>) = {
            if let Some(db_config) = &config.database {
                let connections = DatabaseConnections::init(db_config).await?;
                if config.migrate_on_start {
                    use migration::{Migrator, MigratorTrait};
                    Migrator::up(connections.main.as_ref(), None).await?;
                    tracing::info!("Database migrations applied");
                }
                let repo = Arc::new(PostgresSnippetRepository::new(Arc::clone(&connections.main)));
                (Some(Arc::new(connections)), repo)
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemorySnippetRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, repo): (Option<Arc<DatabaseConnections>>, Arc<dyn SnippetRepository>) = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            (None, Arc::new(InMemorySnippetRepository::new()))
        };

        tracing::info!(
            share_id_length = config.share_id_length,
            category_policy = ?config.category_policy,
            "Application state initialized"
        );

        Ok(Self::from_parts(repo, ids, config.category_policy, db))
    }

    /// Assemble the services around an existing store.
    pub fn from_parts(
        repo: Arc<dyn SnippetRepository>,
        ids: Arc<dyn ShareIdGenerator>,
        policy: CategoryPolicy,
        db: Option<Arc<DatabaseConnections>>,
    ) -> Self {
        Self {
            share: Arc::new(ShareService::new(repo.clone(), ids, policy)),
            retrieval: Arc::new(RetrievalService::new(repo)),
            db,
        }
    }
}
