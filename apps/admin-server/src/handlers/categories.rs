//! Category management, guarded by `CategoryPolicy`.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkpost_core::domain::Category;
use inkpost_core::policy::{Ability, CategoryPolicy};
use inkpost_core::ports::{BaseRepository, CategoryRepository};
use inkpost_core::resource::CategoryForm;
use inkpost_shared::ApiResponse;

use super::{authorize, existing, live};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

const ENTITY: &str = "category";

/// GET /admin/categories
pub async fn index(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    authorize(&state, &CategoryPolicy, &identity, Ability::ViewAny).await?;
    let categories = state.repos.categories.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(categories)))
}

/// GET /admin/categories/{id}
pub async fn show(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &CategoryPolicy, &identity, Ability::View).await?;
    let category = live(state.repos.categories.find_by_id(id).await?, ENTITY, id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category)))
}

/// POST /admin/categories
///
/// Also serves the inline "create category" form of the post editor.
pub async fn store(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CategoryForm>,
) -> AppResult<HttpResponse> {
    authorize(&state, &CategoryPolicy, &identity, Ability::Create).await?;
    let (name, slug) = body.into_inner().validate_input()?;

    let category = state
        .repos
        .categories
        .create(Category::new(name, slug))
        .await?;
    tracing::info!(category_id = %category.id, "Category created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(category)))
}

/// PUT /admin/categories/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CategoryForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &CategoryPolicy, &identity, Ability::Update).await?;
    let mut category = live(state.repos.categories.find_by_id(id).await?, ENTITY, id)?;

    let (name, slug) = body.into_inner().validate_input()?;
    CategoryForm::apply_to(name, slug, &mut category);
    let category = state.repos.categories.update(category).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category)))
}

/// DELETE /admin/categories/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &CategoryPolicy, &identity, Ability::Delete).await?;
    live(state.repos.categories.find_by_id(id).await?, ENTITY, id)?;

    state.repos.categories.trash(id).await?;
    tracing::info!(category_id = %id, "Category moved to trash");
    Ok(HttpResponse::NoContent().finish())
}

/// POST /admin/categories/{id}/restore
pub async fn restore(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &CategoryPolicy, &identity, Ability::Restore).await?;
    existing(state.repos.categories.find_by_id(id).await?, ENTITY, id)?;

    state.repos.categories.restore(id).await?;
    let category = live(state.repos.categories.find_by_id(id).await?, ENTITY, id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category)))
}
