//! Snippet entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use codeshare_core::domain::{ShareId, Snippet};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "snippets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub share_id: String,
    pub title: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub code: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub views: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Snippet.
impl From<Model> for Snippet {
    fn from(model: Model) -> Self {
        Self {
            share_id: ShareId::new(model.share_id),
            title: model.title,
            category: model.category,
            code: model.code,
            description: model.description,
            created_at: model.created_at.into(),
            views: u64::try_from(model.views).unwrap_or(0),
        }
    }
}

/// Conversion from Domain Snippet to SeaORM ActiveModel.
impl From<Snippet> for ActiveModel {
    fn from(snippet: Snippet) -> Self {
        Self {
            share_id: Set(snippet.share_id.into_inner()),
            title: Set(snippet.title),
            category: Set(snippet.category),
            code: Set(snippet.code),
            description: Set(snippet.description),
            created_at: Set(snippet.created_at.into()),
            views: Set(i64::try_from(snippet.views).unwrap_or(i64::MAX)),
        }
    }
}
