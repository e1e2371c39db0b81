use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use inkpost_core::domain::{Attachment, Post, PostStatus};
use inkpost_core::error::RepoError;
use inkpost_core::ports::{
    BaseRepository, PageRequest, PermissionChecker, PostFilter, PostRepository,
};

use crate::database::entity::post;
use crate::database::postgres_repo::{PostgresPermissionChecker, PostgresPostRepository};

fn post_model(title: &str, status: post::Status) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        slug: inkpost_core::slug::slugify(title),
        category_id: Uuid::new_v4(),
        author_id: Uuid::new_v4(),
        content: "Content".to_owned(),
        tags: serde_json::json!(["rust", "admin"]),
        attachments: serde_json::json!(["post/a.jpg", "post/b.jpg"]),
        attachment_file_names: serde_json::json!({ "post/a.jpg": "holiday.jpg" }),
        status,
        published_at: None,
        bring_to_light: false,
        created_at: now.into(),
        updated_at: now.into(),
        deleted_at: None,
    }
}

fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
}

#[tokio::test]
async fn test_find_post_by_id() {
    let model = post_model("Test Post", post::Status::Reviewing);
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.status, PostStatus::Reviewing);
    assert_eq!(post.tags, vec!["rust", "admin"]);
    assert_eq!(
        post.attachments,
        vec![
            Attachment {
                path: "post/a.jpg".into(),
                original_name: "holiday.jpg".into()
            },
            // no recorded original name falls back to the stored path
            Attachment {
                path: "post/b.jpg".into(),
                original_name: "post/b.jpg".into()
            },
        ]
    );
}

#[tokio::test]
async fn test_create_post_inserts() {
    let model = post_model("Hello World!", post::Status::Draft);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post: Post = model.clone().into();
    let saved = repo.create(post).await.unwrap();

    assert_eq!(saved.id, model.id);
    assert_eq!(saved.slug, "hello-world");
}

#[tokio::test]
async fn test_list_published_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(2)]])
        .append_query_results([vec![
            post_model("One", post::Status::Published),
            post_model("Two", post::Status::Published),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let filter = PostFilter {
        status: Some(PostStatus::Published),
        ..Default::default()
    };
    let page = repo.list(&filter, PageRequest::default()).await.unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().all(|p| p.status == PostStatus::Published));
}

#[tokio::test]
async fn test_list_filters_by_author_and_category() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(0)]])
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db.clone());
    let filter = PostFilter {
        author_id: Some(Uuid::new_v4()),
        category_id: Some(Uuid::new_v4()),
        status: None,
    };
    let page = repo.list(&filter, PageRequest::new(u64::MAX, 10)).await.unwrap();
    assert!(page.items.is_empty());

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains(r#"author_id\" = $"#), "{log}");
    assert!(log.contains(r#"category_id\" = $"#), "{log}");
    assert!(!log.contains(r#"status\" = $"#), "{log}");
}

#[tokio::test]
async fn test_count_by_status() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(7)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert_eq!(repo.count_by_status(PostStatus::Draft).await.unwrap(), 7);
}

#[tokio::test]
async fn test_trash_missing_post_is_not_found() {
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

    let repo = PostgresPostRepository::new(db);
    let base: &dyn BaseRepository<Post, Uuid> = &repo;
    assert!(base.trash(Uuid::new_v4()).await.is_ok());
    assert!(matches!(
        base.trash(Uuid::new_v4()).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_trash_many_skips_empty_input() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresPostRepository::new(db);
    assert_eq!(repo.trash_many(&[]).await.unwrap(), 0);
}

#[tokio::test]
async fn test_permission_checker() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_query_results([vec![count_row(0)]])
        .into_connection();

    let checker = PostgresPermissionChecker::new(db);
    let actor = Uuid::new_v4();
    assert!(checker.has(actor, "edit categories").await.unwrap());
    assert!(!checker.has(actor, "delete categories").await.unwrap());
}
