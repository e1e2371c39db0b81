//! User account management, guarded by `UserPolicy`.
//!
//! There is no listing route: the user policy grants no `viewAny`.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkpost_core::FieldErrors;
use inkpost_core::domain::User;
use inkpost_core::policy::{Ability, UserPolicy};
use inkpost_core::ports::{BaseRepository, UserRepository};
use inkpost_core::resource::{UserForm, UserInput};
use inkpost_shared::ApiResponse;
use inkpost_shared::dto::{UserRequest, UserResponse};

use super::{authorize, existing, live};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "user";

pub(crate) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: user.created_at,
        updated_at: user.updated_at,
        deleted_at: user.deleted_at,
    }
}

async fn validated(
    state: &AppState,
    req: UserRequest,
    current: Option<Uuid>,
) -> AppResult<UserInput> {
    let form = UserForm {
        name: req.name,
        email: req.email,
        password: req.password,
    };
    let input = form.validate_input(current.is_none())?;

    if let Some(other) = state.repos.users.find_by_email(&input.email).await?
        && Some(other.id) != current
    {
        let mut errors = FieldErrors::new();
        errors.add("email", "The email has already been taken.");
        return Err(errors.into());
    }
    Ok(input)
}

fn hash(state: &AppState, password: &str) -> AppResult<String> {
    state
        .passwords
        .hash(password)
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// GET /admin/users/{id}
pub async fn show(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &UserPolicy, &identity, Ability::View).await?;
    let user = live(state.repos.users.find_by_id(id).await?, ENTITY, id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(&user))))
}

/// POST /admin/users
pub async fn store(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UserRequest>,
) -> AppResult<HttpResponse> {
    authorize(&state, &UserPolicy, &identity, Ability::Create).await?;
    let input = validated(&state, body.into_inner(), None).await?;

    let password = input
        .password
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Password is required".to_string()))?;
    let user = User::new(input.name, input.email, hash(&state, password)?);

    let user = state.repos.users.create(user).await?;
    tracing::info!(user_id = %user.id, "User created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(user_response(&user))))
}

/// PUT /admin/users/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UserRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &UserPolicy, &identity, Ability::Update).await?;
    let mut user = live(state.repos.users.find_by_id(id).await?, ENTITY, id)?;

    let input = validated(&state, body.into_inner(), Some(id)).await?;
    user.name = input.name;
    user.email = input.email;
    if let Some(password) = input.password.as_deref() {
        user.password_hash = hash(&state, password)?;
    }
    user.updated_at = chrono::Utc::now();

    let user = state.repos.users.update(user).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(&user))))
}

/// DELETE /admin/users/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &UserPolicy, &identity, Ability::Delete).await?;
    live(state.repos.users.find_by_id(id).await?, ENTITY, id)?;

    state.repos.users.trash(id).await?;
    tracing::info!(user_id = %id, "User moved to trash");
    Ok(HttpResponse::NoContent().finish())
}

/// POST /admin/users/{id}/restore
pub async fn restore(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    authorize(&state, &UserPolicy, &identity, Ability::Restore).await?;
    existing(state.repos.users.find_by_id(id).await?, ENTITY, id)?;

    state.repos.users.restore(id).await?;
    let user = live(state.repos.users.find_by_id(id).await?, ENTITY, id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(&user))))
}
