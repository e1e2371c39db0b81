//! Permission catalog management, guarded by `PermissionPolicy`.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkpost_core::FieldErrors;
use inkpost_core::domain::Permission;
use inkpost_core::policy::{Ability, PermissionPolicy};
use inkpost_core::ports::{BaseRepository, PermissionRepository};
use inkpost_core::resource::PermissionForm;
use inkpost_shared::ApiResponse;
use inkpost_shared::dto::PermissionRequest;

use super::{authorize, existing, live};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

const ENTITY: &str = "permission";

/// Validated name that no other permission uses.
async fn unique_name(
    state: &AppState,
    req: PermissionRequest,
    current: Option<Uuid>,
) -> AppResult<String> {
    let name = PermissionForm { name: req.name }.validate_input()?;

    if let Some(other) = state.repos.permissions.find_by_name(&name).await?
        && Some(other.id) != current
    {
        let mut errors = FieldErrors::new();
        errors.add("name", "The name has already been taken.");
        return Err(errors.into());
    }
    Ok(name)
}

/// GET /admin/permissions
pub async fn index(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    authorize(&state, &PermissionPolicy, &identity, Ability::ViewAny).await?;
    let permissions = state.repos.permissions.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(permissions)))
}

/// GET /admin/permissions/{id}
pub async fn show(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &PermissionPolicy, &identity, Ability::View).await?;
    let permission = live(state.repos.permissions.find_by_id(id).await?, ENTITY, id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(permission)))
}

/// POST /admin/permissions
pub async fn store(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PermissionRequest>,
) -> AppResult<HttpResponse> {
    authorize(&state, &PermissionPolicy, &identity, Ability::Create).await?;
    let name = unique_name(&state, body.into_inner(), None).await?;

    let permission = state.repos.permissions.create(Permission::new(name)).await?;
    tracing::info!(permission = %permission.name, "Permission created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(permission)))
}

/// PUT /admin/permissions/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PermissionRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &PermissionPolicy, &identity, Ability::Update).await?;
    let mut permission = live(state.repos.permissions.find_by_id(id).await?, ENTITY, id)?;

    permission.name = unique_name(&state, body.into_inner(), Some(id)).await?;
    permission.updated_at = chrono::Utc::now();
    let permission = state.repos.permissions.update(permission).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(permission)))
}

/// DELETE /admin/permissions/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &PermissionPolicy, &identity, Ability::Delete).await?;
    let permission = live(state.repos.permissions.find_by_id(id).await?, ENTITY, id)?;

    state.repos.permissions.trash(id).await?;
    tracing::info!(permission = %permission.name, "Permission moved to trash");
    Ok(HttpResponse::NoContent().finish())
}

/// POST /admin/permissions/{id}/restore
pub async fn restore(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &PermissionPolicy, &identity, Ability::Restore).await?;
    existing(state.repos.permissions.find_by_id(id).await?, ENTITY, id)?;

    state.repos.permissions.restore(id).await?;
    let permission = live(state.repos.permissions.find_by_id(id).await?, ENTITY, id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(permission)))
}
