use std::io::Cursor;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use tempfile::TempDir;
use uuid::Uuid;

use inkpost_core::domain::{Category, User};
use inkpost_core::ports::{BaseRepository, PasswordService, TokenService};
use inkpost_core::resource::SlugMode;
use inkpost_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
use inkpost_infra::{InMemoryPermissionChecker, PublicDiskStorage};

use super::configure_routes;
use crate::state::{AppState, Repositories};

const PASSWORD: &str = "correct horse battery";

struct Harness {
    state: AppState,
    checker: Arc<InMemoryPermissionChecker>,
    user: User,
    category: Category,
    storage: TempDir,
}

impl Harness {
    async fn new() -> Self {
        let (repos, checker) = Repositories::in_memory();
        let storage = tempfile::tempdir().unwrap();
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "handler-tests".into(),
            expiration_hours: 1,
            issuer: "inkpost-test".into(),
        }));
        let state = AppState::new(
            repos,
            Arc::new(PublicDiskStorage::new(storage.path(), "/storage")),
            tokens,
            SlugMode::Always,
        );

        let hash = Argon2PasswordService::new().hash(PASSWORD).unwrap();
        let user = state
            .repos
            .users
            .create(User::new("Editor".into(), "editor@example.com".into(), hash))
            .await
            .unwrap();
        let category = state
            .repos
            .categories
            .create(Category::new("News".into(), "news".into()))
            .await
            .unwrap();

        Self {
            state,
            checker,
            user,
            category,
            storage,
        }
    }

    fn bearer(&self) -> (&'static str, String) {
        let token = self
            .state
            .tokens
            .generate_token(self.user.id, &self.user.email)
            .unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    async fn grant(&self, permission: &str) {
        self.checker.grant(self.user.id, permission).await.unwrap();
    }

    fn post_body(&self, title: &str, status: &str) -> Value {
        json!({
            "title": title,
            "category_id": self.category.id,
            "author_id": self.user.id,
            "content": "Some *markdown*",
            "status": status,
        })
    }
}

macro_rules! init_app {
    ($harness:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($harness.state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

fn noise_png(width: u32, height: u32) -> Vec<u8> {
    let mut seed: u32 = 0x2545_f491;
    let img = image::RgbImage::from_fn(width, height, |_, _| {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [r, g, b, _] = seed.to_le_bytes();
        image::Rgb([r, g, b])
    });
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageOutputFormat::Png)
        .unwrap();
    out.into_inner()
}

#[actix_rt::test]
async fn test_health_is_public() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["backend"], "memory");
}

#[actix_rt::test]
async fn test_login_then_me() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "Editor@example.com", "password": PASSWORD }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let token = body["access_token"].as_str().unwrap().to_string();
    assert_eq!(body["token_type"], "Bearer");

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let me: Value = test::read_body_json(res).await;
    assert_eq!(me["email"], "editor@example.com");
    assert!(me.get("password_hash").is_none());
}

#[actix_rt::test]
async fn test_wrong_password_is_unauthorized() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "editor@example.com", "password": "nope" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_unknown_and_trashed_accounts_look_alike() {
    let h = Harness::new().await;
    let app = init_app!(h);
    let login = |email: &str| {
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": email, "password": PASSWORD }))
            .to_request()
    };

    let res = test::call_service(&app, login("nobody@example.com")).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let unknown: Value = test::read_body_json(res).await;

    h.state.repos.users.trash(h.user.id).await.unwrap();
    let res = test::call_service(&app, login("editor@example.com")).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let trashed: Value = test::read_body_json(res).await;

    assert_eq!(unknown, trashed);
}

#[actix_rt::test]
async fn test_admin_routes_require_token() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::get().uri("/admin/posts").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_create_post_with_only_required_fields() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/admin/posts")
        .insert_header(h.bearer())
        .set_json(h.post_body("Hello World!", "draft"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["slug"], "hello-world");
    assert_eq!(body["data"]["status"], "draft");
    assert_eq!(body["data"]["bring_to_light"], false);
    assert!(body["data"]["published_at"].is_null());
}

#[actix_rt::test]
async fn test_missing_title_is_unprocessable() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let mut body = h.post_body("x", "draft");
    body["title"] = Value::Null;
    let req = test::TestRequest::post()
        .uri("/admin/posts")
        .insert_header(h.bearer())
        .set_json(body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let problem: Value = test::read_body_json(res).await;
    assert_eq!(problem["errors"]["title"][0], "The title field is required.");
}

#[actix_rt::test]
async fn test_status_filter_and_widget() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let seeded = [
        ("A", "draft"),
        ("B", "published"),
        ("C", "reviewing"),
        ("D", "published"),
    ];
    for (title, status) in seeded {
        let req = test::TestRequest::post()
            .uri("/admin/posts")
            .insert_header(h.bearer())
            .set_json(h.post_body(title, status))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/admin/posts?status=published")
        .insert_header(h.bearer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rows = body["data"]["posts"]["items"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["status"] == "published"));
    assert!(rows.iter().all(|r| r["category_name"] == "News"));

    let req = test::TestRequest::get()
        .uri("/admin/widgets/blog-post-overview")
        .insert_header(h.bearer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let values: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["label"].as_str().unwrap().to_string(), s["value"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("Draft".to_string(), 1),
            ("Reviewing".to_string(), 1),
            ("Published".to_string(), 2)
        ]
    );
}

#[actix_rt::test]
async fn test_unknown_status_filter_is_rejected() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::get()
        .uri("/admin/posts?status=archived")
        .insert_header(h.bearer())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn test_form_state_derives_slug_and_visibility() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/admin/posts/form/state")
        .insert_header(h.bearer())
        .set_json(json!({
            "state": { "title": "Rust & Actix: a Tour", "status": "draft" },
            "changed": "title",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["state"]["slug"], "rust-actix-a-tour");
    assert_eq!(body["data"]["hidden"], json!(["published_at", "bring_to_light"]));
}

#[actix_rt::test]
async fn test_category_form_state_derives_slug_from_name() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/admin/categories/form/state")
        .insert_header(h.bearer())
        .set_json(json!({
            "state": { "name": "Release Notes", "slug": "hand-made" },
            "changed": "name",
            "slug_overridden": true,
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    // always mode overwrites a hand-edited slug
    assert_eq!(body["data"]["slug"], "release-notes");

    let req = test::TestRequest::post()
        .uri("/admin/categories/form/state")
        .insert_header(h.bearer())
        .set_json(json!({
            "state": { "name": "Release Notes", "slug": "hand-made" },
            "changed": "slug",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["slug"], "hand-made");
}

#[actix_rt::test]
async fn test_huge_page_number_returns_empty_page() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/admin/posts")
        .insert_header(h.bearer())
        .set_json(h.post_body("Only one", "draft"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/admin/posts?page={}", u64::MAX))
        .insert_header(h.bearer())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["posts"]["items"], json!([]));
    assert_eq!(body["data"]["posts"]["total"], 1);
}

#[actix_rt::test]
async fn test_author_and_category_filters_are_exact() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let other_author = h
        .state
        .repos
        .users
        .create(User::new("Guest".into(), "guest@example.com".into(), "x".into()))
        .await
        .unwrap();
    let other_category = h
        .state
        .repos
        .categories
        .create(Category::new("Tutorials".into(), "tutorials".into()))
        .await
        .unwrap();

    let bodies = [
        h.post_body("Mine in news", "draft"),
        json!({
            "title": "Guest in news",
            "category_id": h.category.id,
            "author_id": other_author.id,
            "content": "c",
        }),
        json!({
            "title": "Mine in tutorials",
            "category_id": other_category.id,
            "author_id": h.user.id,
            "content": "c",
        }),
    ];
    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/admin/posts")
            .insert_header(h.bearer())
            .set_json(body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let titles = |body: Value| -> Vec<String> {
        let mut titles: Vec<String> = body["data"]["posts"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["title"].as_str().unwrap().to_string())
            .collect();
        titles.sort();
        titles
    };

    let req = test::TestRequest::get()
        .uri(&format!("/admin/posts?author={}", other_author.id))
        .insert_header(h.bearer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(body), vec!["Guest in news"]);

    let req = test::TestRequest::get()
        .uri(&format!("/admin/posts?category={}", h.category.id))
        .insert_header(h.bearer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(body), vec!["Guest in news", "Mine in news"]);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/admin/posts?author={}&category={}",
            h.user.id, other_category.id
        ))
        .insert_header(h.bearer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(body), vec!["Mine in tutorials"]);
}

#[actix_rt::test]
async fn test_edit_then_update_releases_dropped_files() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/admin/uploads?file_name=cover.png")
        .insert_header(h.bearer())
        .set_payload(noise_png(300, 300))
        .to_request();
    let upload: Value = test::call_and_read_body_json(&app, req).await;
    let path = upload["path"].as_str().unwrap().to_string();
    assert!(h.storage.path().join(&path).exists());

    let mut body = h.post_body("With cover", "published");
    body["attachments"] = json!([{ "path": path, "original_name": "cover.png" }]);
    let req = test::TestRequest::post()
        .uri("/admin/posts")
        .insert_header(h.bearer())
        .set_json(body)
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/admin/posts/{id}/edit"))
        .insert_header(h.bearer())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = test::read_body_json(res).await;
    assert_eq!(page["data"]["record"]["title"], "With cover");
    assert_eq!(page["data"]["record"]["attachments"][0]["path"], path.as_str());
    assert_eq!(page["data"]["hidden"], json!([]));
    assert!(page["data"]["schema"]["sections"].is_array());

    let mut record = page["data"]["record"].clone();
    record["title"] = json!("Without cover");
    record["attachments"] = json!([]);
    record["status"] = json!("draft");
    let req = test::TestRequest::put()
        .uri(&format!("/admin/posts/{id}"))
        .insert_header(h.bearer())
        .set_json(record)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated["data"]["title"], "Without cover");
    assert_eq!(updated["data"]["slug"], "with-cover");
    assert_eq!(updated["data"]["status"], "draft");
    assert_eq!(updated["data"]["attachments"], json!([]));
    assert!(!h.storage.path().join(&path).exists());
}

#[actix_rt::test]
async fn test_update_unknown_post_is_not_found() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::put()
        .uri(&format!("/admin/posts/{}", Uuid::new_v4()))
        .insert_header(h.bearer())
        .set_json(h.post_body("Ghost", "draft"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_category_routes_follow_policy() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let create = || {
        test::TestRequest::post()
            .uri("/admin/categories")
            .insert_header(h.bearer())
            .set_json(json!({ "name": "Rust Tips" }))
            .to_request()
    };

    assert_eq!(test::call_service(&app, create()).await.status(), StatusCode::FORBIDDEN);

    h.grant("create categories").await;
    let res = test::call_service(&app, create()).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["slug"], "rust-tips");

    let list = test::TestRequest::get()
        .uri("/admin/categories")
        .insert_header(h.bearer())
        .to_request();
    assert_eq!(test::call_service(&app, list).await.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn test_denied_actor_gets_forbidden_for_any_id() {
    let h = Harness::new().await;
    let app = init_app!(h);

    for uri in [
        format!("/admin/categories/{}", h.category.id),
        format!("/admin/categories/{}", Uuid::new_v4()),
        format!("/admin/users/{}", h.user.id),
        format!("/admin/users/{}", Uuid::new_v4()),
        format!("/admin/permissions/{}", Uuid::new_v4()),
    ] {
        let req = test::TestRequest::get().uri(&uri).insert_header(h.bearer()).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[actix_rt::test]
async fn test_category_soft_delete_and_restore() {
    let h = Harness::new().await;
    h.grant("delete categories").await;
    h.grant("restore categories").await;
    h.grant("view categories").await;
    let app = init_app!(h);

    let uri = format!("/admin/categories/{}", h.category.id);
    let req = test::TestRequest::delete().uri(&uri).insert_header(h.bearer()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&uri).insert_header(h.bearer()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri(&format!("{uri}/restore"))
        .insert_header(h.bearer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri(&uri).insert_header(h.bearer()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_permission_view_needs_create_permission() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let list = || {
        test::TestRequest::get()
            .uri("/admin/permissions")
            .insert_header(h.bearer())
            .to_request()
    };
    assert_eq!(test::call_service(&app, list()).await.status(), StatusCode::FORBIDDEN);

    h.grant("create permissions").await;
    let body: Value = test::call_and_read_body_json(&app, list()).await;
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["create permissions"]);
}

#[actix_rt::test]
async fn test_users_have_no_listing() {
    let h = Harness::new().await;
    h.grant("view users").await;
    let app = init_app!(h);

    let req = test::TestRequest::get()
        .uri("/admin/users")
        .insert_header(h.bearer())
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_client_error());

    let req = test::TestRequest::get()
        .uri(&format!("/admin/users/{}", h.user.id))
        .insert_header(h.bearer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_create_user_hashes_password_and_rejects_duplicates() {
    let h = Harness::new().await;
    h.grant("create users").await;
    let app = init_app!(h);

    let create = |email: &str| {
        test::TestRequest::post()
            .uri("/admin/users")
            .insert_header(h.bearer())
            .set_json(json!({ "name": "Writer", "email": email, "password": "long enough" }))
            .to_request()
    };

    let res = test::call_service(&app, create("writer@example.com")).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    let id: Uuid = serde_json::from_value(body["data"]["id"].clone()).unwrap();

    let stored = h.state.repos.users.find_by_id(id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "long enough");

    let res = test::call_service(&app, create("editor@example.com")).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn test_upload_stores_cropped_image() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/admin/uploads?file_name=cover.png")
        .insert_header(h.bearer())
        .set_payload(noise_png(300, 300))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(res).await;
    let path = body["path"].as_str().unwrap();
    assert!(path.starts_with("post/") && path.ends_with(".png"));
    assert_eq!(body["original_name"], "cover.png");
    assert_eq!(body["url"], format!("/storage/{path}"));

    let stored = image::open(h.storage.path().join(path)).unwrap();
    assert_eq!((stored.width(), stored.height()), (1920, 1080));
}

#[actix_rt::test]
async fn test_upload_rejects_small_files_and_full_forms() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/admin/uploads?file_name=tiny.png")
        .insert_header(h.bearer())
        .set_payload(noise_png(4, 4))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let problem: Value = test::read_body_json(res).await;
    assert!(problem["errors"]["attachments"].is_array());

    let req = test::TestRequest::post()
        .uri("/admin/uploads?file_name=third.png&existing=2")
        .insert_header(h.bearer())
        .set_payload(noise_png(300, 300))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[actix_rt::test]
async fn test_upload_rejects_corrupt_image_body() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend(std::iter::repeat_n(0xAB, 50 * 1024));
    let req = test::TestRequest::post()
        .uri("/admin/uploads?file_name=broken.png")
        .insert_header(h.bearer())
        .set_payload(bytes)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let problem: Value = test::read_body_json(res).await;
    assert_eq!(
        problem["errors"]["attachments"][0],
        "The file broken.png must be an image."
    );
    assert!(!h.storage.path().join("post").exists());
}

#[actix_rt::test]
async fn test_upload_rejects_non_images() {
    let h = Harness::new().await;
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/admin/uploads?file_name=notes.png")
        .insert_header(h.bearer())
        .set_payload(vec![b'a'; 20 * 1024])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let problem: Value = test::read_body_json(res).await;
    assert_eq!(
        problem["errors"]["attachments"][0],
        "The file notes.png must be an image."
    );
}
