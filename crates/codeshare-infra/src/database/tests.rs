use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Transaction, Value,
};

use codeshare_core::domain::{ShareId, Snippet};
use codeshare_core::error::RepoError;
use codeshare_core::ports::SnippetRepository;

use crate::database::entity::snippet;
use crate::database::DatabaseConnections;
use crate::database::postgres_repo::PostgresSnippetRepository;

fn model(share_id: &str, views: i64) -> snippet::Model {
    snippet::Model {
        share_id: share_id.to_owned(),
        title: "Hello".to_owned(),
        category: "python".to_owned(),
        code: "print(1)".to_owned(),
        description: String::new(),
        created_at: Utc::now().into(),
        views,
    }
}

#[tokio::test]
async fn test_insert_snippet() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let repo = PostgresSnippetRepository::new(Arc::new(db));

    let snippet = Snippet::new(
        ShareId::from("abc1234567"),
        "Hello".into(),
        "python".into(),
        "print(1)".into(),
        String::new(),
    );
    repo.insert_one(snippet).await.unwrap();
}

#[tokio::test]
async fn test_insert_failure_maps_to_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_errors([DbErr::Custom("disk full".to_owned())])
        .into_connection();
    let repo = PostgresSnippetRepository::new(Arc::new(db));

    let snippet = Snippet::new(
        ShareId::from("abc1234567"),
        "t".into(),
        "c".into(),
        "x".into(),
        String::new(),
    );
    let err = repo.insert_one(snippet).await.unwrap_err();
    assert!(matches!(err, RepoError::Query(_)));
}

#[tokio::test]
async fn test_find_snippet_by_share_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("abc1234567", 4)]])
        .append_query_results([Vec::<snippet::Model>::new()])
        .into_connection();
    let repo = PostgresSnippetRepository::new(Arc::new(db));

    let found = repo
        .find_one(&ShareId::from("abc1234567"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.share_id.as_str(), "abc1234567");
    assert_eq!(found.title, "Hello");
    assert_eq!(found.views, 4);

    let missing = repo.find_one(&ShareId::from("nope")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_increment_views_reports_match() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let repo = PostgresSnippetRepository::new(Arc::new(db));

    assert!(repo.increment_views(&ShareId::from("abc")).await.unwrap());
    assert!(!repo.increment_views(&ShareId::from("gone")).await.unwrap());
}

#[tokio::test]
async fn test_find_one_and_increment_returns_updated_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("abc1234567", 3)]])
        .append_query_results([Vec::<snippet::Model>::new()])
        .into_connection();
    let repo = PostgresSnippetRepository::new(Arc::new(db));

    let hit = repo
        .find_one_and_increment(&ShareId::from("abc1234567"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(hit.views, 3);

    let miss = repo
        .find_one_and_increment(&ShareId::from("doesnotexist"))
        .await
        .unwrap();
    assert!(miss.is_none());
}

#[tokio::test]
async fn test_connection_errors_are_classified() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_owned(),
        ))])
        .into_connection();
    let repo = PostgresSnippetRepository::new(Arc::new(db));

    let err = repo.find_one(&ShareId::from("abc")).await.unwrap_err();
    assert!(matches!(err, RepoError::Connection(_)));
}

#[tokio::test]
async fn test_count_snippets() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([(
            "num_items",
            Value::BigInt(Some(3)),
        )])]])
        .into_connection();
    let repo = PostgresSnippetRepository::new(Arc::new(db));

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_find_one_and_increment_is_a_single_update_returning() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("abc1234567", 1)]])
            .into_connection(),
    );
    let repo = PostgresSnippetRepository::new(Arc::clone(&db));

    repo.find_one_and_increment(&ShareId::from("abc1234567"))
        .await
        .unwrap()
        .unwrap();
    drop(repo);

    let db = Arc::try_unwrap(db).ok().expect("repository released its handle");
    assert_eq!(
        db.into_transaction_log(),
        [Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE "snippets" SET "views" = "views" + $1 WHERE "snippets"."share_id" = $2 RETURNING "share_id", "title", "category", "code", "description", "created_at", "views""#,
            [1i32.into(), "abc1234567".into()],
        )]
    );
}

#[tokio::test]
async fn test_repository_shares_the_connection_handle() {
    let connections = DatabaseConnections {
        main: Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![model("abc1234567", 0)]])
                .into_connection(),
        ),
    };
    let repo = PostgresSnippetRepository::new(Arc::clone(&connections.main));

    assert_eq!(Arc::strong_count(&connections.main), 2);
    let found = repo.find_one(&ShareId::from("abc1234567")).await.unwrap();
    assert!(found.is_some());
}
