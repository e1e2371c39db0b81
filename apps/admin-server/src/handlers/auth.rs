//! Authentication handlers.

use actix_web::{HttpResponse, web};

use inkpost_core::domain::SoftDeletes;
use inkpost_core::ports::{BaseRepository, UserRepository};
use inkpost_shared::dto::{AuthResponse, LoginRequest};

use super::users::user_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let email = req.email.trim().to_lowercase();

    let Some(user) = state
        .repos
        .users
        .find_by_email(&email)
        .await?
        .filter(|u| !u.is_trashed())
    else {
        state.passwords.verify_absent(&req.password);
        tracing::info!("Rejected login for unknown account");
        return Err(AppError::Unauthorized);
    };

    let valid = state
        .passwords
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        tracing::info!(user_id = %user.id, "Rejected login attempt");
        return Err(AppError::Unauthorized);
    }

    let token = state
        .tokens
        .generate_token(user.id, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(HttpResponse::Ok().json(AuthResponse::bearer(
        token,
        state.tokens.expiration_seconds().max(0) as u64,
    )))
}

/// GET /api/auth/me
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .repos
        .users
        .find_by_id(identity.user_id)
        .await?
        .filter(|u| !u.is_trashed())
        .ok_or(AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
