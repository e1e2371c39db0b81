//! Post resource pages: table, create/edit forms, row and bulk actions.
//!
//! Posts are guarded by authentication alone.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use inkpost_core::FieldErrors;
use inkpost_core::domain::{Post, PostStatus};
use inkpost_core::ports::{CategoryRepository, PageRequest, Paginated, PostFilter};
use inkpost_core::resource::schema::{FormSchema, TableSchema, post_form, post_table};
use inkpost_core::resource::{PUBLISHING_FIELDS, PostForm};
use inkpost_shared::ApiResponse;
use inkpost_shared::dto::{BulkDeleteRequest, BulkDeleteResponse, PostListQuery, ToggleRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// One table row: the post plus what its columns display.
#[derive(Debug, Serialize)]
pub struct PostRow {
    #[serde(flatten)]
    pub post: Post,
    pub category_name: Option<String>,
    pub attachment_urls: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PostTable {
    pub table: TableSchema,
    pub posts: Paginated<PostRow>,
}

/// A form page: schema, current values and the fields hidden for them.
#[derive(Debug, Serialize)]
pub struct FormPage {
    pub schema: FormSchema,
    pub record: PostForm,
    pub hidden: Vec<String>,
}

impl FormPage {
    fn new(record: PostForm) -> Self {
        let hidden = PUBLISHING_FIELDS
            .iter()
            .filter(|field| !record.is_visible(field))
            .map(|field| field.to_string())
            .collect();

        Self {
            schema: post_form(),
            record,
            hidden,
        }
    }
}

fn parse_filter(query: &PostListQuery) -> AppResult<PostFilter> {
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(raw.parse::<PostStatus>().map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.add("status", "The selected status is invalid.");
            AppError::Validation(errors)
        })?),
        None => None,
    };

    Ok(PostFilter {
        author_id: query.author,
        category_id: query.category,
        status,
    })
}

/// GET /admin/posts
pub async fn index(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = parse_filter(&query)?;
    let page = PageRequest::new(query.page.unwrap_or(1), query.per_page.unwrap_or(10));

    let listed = state.posts.list(&filter, page).await?;
    let category_names: HashMap<Uuid, String> = state
        .repos
        .categories
        .list()
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let rows = listed
        .items
        .into_iter()
        .map(|post| PostRow {
            category_name: category_names.get(&post.category_id).cloned(),
            attachment_urls: post
                .attachments
                .iter()
                .map(|a| state.storage.url(&a.path))
                .collect(),
            post,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostTable {
        table: post_table(),
        posts: Paginated {
            items: rows,
            total: listed.total,
            page: listed.page,
            per_page: listed.per_page,
        },
    })))
}

/// GET /admin/posts/create
pub async fn create(_identity: Identity) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(FormPage::new(PostForm::default())))
}

/// POST /admin/posts
pub async fn store(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<PostForm>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// GET /admin/posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// GET /admin/posts/{id}/edit
pub async fn edit(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(FormPage::new(PostForm::from_post(&post)))))
}

/// Delete files that `after` no longer references. Trashed posts keep their
/// files so that restore brings them back intact.
async fn release_detached(state: &AppState, before: &Post, after: &Post) {
    let kept: Vec<&str> = after.attachments.iter().map(|a| a.path.as_str()).collect();
    for attachment in &before.attachments {
        if kept.contains(&attachment.path.as_str()) {
            continue;
        }
        match state.storage.delete(&attachment.path).await {
            Ok(()) => tracing::info!(
                post_id = %after.id,
                path = %attachment.path,
                "Detached file removed"
            ),
            Err(e) => tracing::warn!(
                post_id = %after.id,
                path = %attachment.path,
                error = %e,
                "Detached file could not be removed"
            ),
        }
    }
}

/// PUT /admin/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let before = state.posts.find(id).await?;
    let post = state.posts.update(id, body.into_inner()).await?;
    release_detached(&state, &before, &post).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// DELETE /admin/posts/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /admin/posts/{id}/restore
pub async fn restore(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.restore(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// POST /admin/posts/bulk-delete
pub async fn bulk_delete(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<BulkDeleteRequest>,
) -> AppResult<HttpResponse> {
    let deleted = state.posts.delete_many(&body.ids).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(BulkDeleteResponse { deleted })))
}

/// PATCH /admin/posts/{id}/bring-to-light
pub async fn bring_to_light(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<ToggleRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.set_bring_to_light(id, body.value).await?;
    let post = state.posts.find(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}
