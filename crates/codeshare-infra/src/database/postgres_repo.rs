//! PostgreSQL snippet repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, SqlErr};

use codeshare_core::domain::{ShareId, Snippet};
use codeshare_core::error::RepoError;
use codeshare_core::ports::SnippetRepository;

use super::entity::snippet::{self, Entity as SnippetEntity};

/// Snippet store on the `snippets` table.
pub struct PostgresSnippetRepository {
    db: Arc<DbConn>,
}

impl PostgresSnippetRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl SnippetRepository for PostgresSnippetRepository {
    async fn insert_one(&self, snippet: Snippet) -> Result<(), RepoError> {
        let active_model: snippet::ActiveModel = snippet.into();
        SnippetEntity::insert(active_model)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn find_one(&self, share_id: &ShareId) -> Result<Option<Snippet>, RepoError> {
        let result = SnippetEntity::find_by_id(share_id.as_str())
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn increment_views(&self, share_id: &ShareId) -> Result<bool, RepoError> {
        let result = SnippetEntity::update_many()
            .col_expr(snippet::Column::Views, Expr::col(snippet::Column::Views).add(1))
            .filter(snippet::Column::ShareId.eq(share_id.as_str()))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    /// Single `UPDATE .. SET views = views + 1 .. RETURNING` statement.
    async fn find_one_and_increment(
        &self,
        share_id: &ShareId,
    ) -> Result<Option<Snippet>, RepoError> {
        let updated = SnippetEntity::update_many()
            .col_expr(snippet::Column::Views, Expr::col(snippet::Column::Views).add(1))
            .filter(snippet::Column::ShareId.eq(share_id.as_str()))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(updated.into_iter().next().map(Into::into))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        SnippetEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
