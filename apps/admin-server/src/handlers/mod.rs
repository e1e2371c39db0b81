//! HTTP handlers and route configuration.

mod auth;
mod categories;
mod forms;
mod health;
mod permissions;
mod posts;
mod uploads;
mod users;
mod widgets;

#[cfg(test)]
mod tests;

use actix_web::web;
use uuid::Uuid;

use inkpost_core::domain::SoftDeletes;
use inkpost_core::policy::{Ability, Policy};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            ),
    )
    .service(
        web::scope("/admin")
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::index))
                    .route("", web::post().to(posts::store))
                    .route("/create", web::get().to(posts::create))
                    .route("/form/state", web::post().to(forms::form_state))
                    .route("/bulk-delete", web::post().to(posts::bulk_delete))
                    .route("/{id}", web::get().to(posts::show))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::destroy))
                    .route("/{id}/edit", web::get().to(posts::edit))
                    .route("/{id}/restore", web::post().to(posts::restore))
                    .route("/{id}/bring-to-light", web::patch().to(posts::bring_to_light)),
            )
            .service(
                web::resource("/uploads")
                    .app_data(web::PayloadConfig::new(uploads::MAX_BODY_BYTES))
                    .route(web::post().to(uploads::upload)),
            )
            .route(
                "/widgets/blog-post-overview",
                web::get().to(widgets::blog_post_overview),
            )
            .route("/slug", web::get().to(forms::slug_preview))
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::index))
                    .route("", web::post().to(categories::store))
                    .route("/form/state", web::post().to(forms::category_form_state))
                    .route("/{id}", web::get().to(categories::show))
                    .route("/{id}", web::put().to(categories::update))
                    .route("/{id}", web::delete().to(categories::destroy))
                    .route("/{id}/restore", web::post().to(categories::restore)),
            )
            .service(
                web::scope("/permissions")
                    .route("", web::get().to(permissions::index))
                    .route("", web::post().to(permissions::store))
                    .route("/{id}", web::get().to(permissions::show))
                    .route("/{id}", web::put().to(permissions::update))
                    .route("/{id}", web::delete().to(permissions::destroy))
                    .route("/{id}/restore", web::post().to(permissions::restore)),
            )
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::store))
                    .route("/{id}", web::get().to(users::show))
                    .route("/{id}", web::put().to(users::update))
                    .route("/{id}", web::delete().to(users::destroy))
                    .route("/{id}/restore", web::post().to(users::restore)),
            ),
    );
}

/// Deny with 403 unless the gate allows `ability` on the subject type.
///
/// Runs before any lookup so that a denied actor cannot tell existing ids
/// from missing ones.
pub(crate) async fn authorize<P: Policy>(
    state: &AppState,
    policy: &P,
    identity: &Identity,
    ability: Ability,
) -> AppResult<()> {
    if state
        .gate
        .allows(policy, identity.user_id, ability, None)
        .await
    {
        Ok(())
    } else {
        tracing::warn!(
            actor = %identity.user_id,
            subject = P::SUBJECT,
            %ability,
            "Access denied"
        );
        Err(AppError::Forbidden)
    }
}

/// A stored record that is not in the trash.
pub(crate) fn live<T: SoftDeletes>(
    found: Option<T>,
    entity_type: &'static str,
    id: Uuid,
) -> AppResult<T> {
    match found {
        Some(record) if !record.is_trashed() => Ok(record),
        _ => Err(AppError::NotFound(format!(
            "{} with id {} not found",
            entity_type, id
        ))),
    }
}

/// A stored record, trashed or not.
pub(crate) fn existing<T>(found: Option<T>, entity_type: &'static str, id: Uuid) -> AppResult<T> {
    found.ok_or_else(|| AppError::NotFound(format!("{} with id {} not found", entity_type, id)))
}
