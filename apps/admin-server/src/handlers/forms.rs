//! Live form support: slug preview and reactive state evaluation.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use inkpost_core::resource::{CategoryForm, PostForm, evaluate, evaluate_category};
use inkpost_core::slug::slugify;
use inkpost_shared::ApiResponse;
use inkpost_shared::dto::{SlugQuery, SlugResponse};

use crate::middleware::auth::Identity;
use crate::state::AppState;

/// An in-progress form after the user's quiet period on `changed` elapsed.
#[derive(Debug, Deserialize)]
pub struct FormStateRequest<F> {
    pub state: F,
    pub changed: String,
    /// Whether the slug was edited by hand since the form opened.
    #[serde(default)]
    pub slug_overridden: bool,
}

/// GET /admin/slug?text=
pub async fn slug_preview(_identity: Identity, query: web::Query<SlugQuery>) -> HttpResponse {
    HttpResponse::Ok().json(SlugResponse {
        slug: slugify(&query.text),
    })
}

/// POST /admin/posts/form/state
pub async fn form_state(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<FormStateRequest<PostForm>>,
) -> HttpResponse {
    let req = body.into_inner();
    let evaluation = evaluate(req.state, &req.changed, state.slug_mode, req.slug_overridden);
    HttpResponse::Ok().json(ApiResponse::ok(evaluation))
}

/// POST /admin/categories/form/state
///
/// Backs the inline "create category" form of the post editor.
pub async fn category_form_state(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<FormStateRequest<CategoryForm>>,
) -> HttpResponse {
    let req = body.into_inner();
    let form = evaluate_category(req.state, &req.changed, state.slug_mode, req.slug_overridden);
    HttpResponse::Ok().json(ApiResponse::ok(form))
}
