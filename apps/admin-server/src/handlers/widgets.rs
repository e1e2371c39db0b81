//! Dashboard widgets.

use actix_web::{HttpResponse, web};

use inkpost_shared::ApiResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /admin/widgets/blog-post-overview
pub async fn blog_post_overview(
    state: web::Data<AppState>,
    _identity: Identity,
) -> AppResult<HttpResponse> {
    let stats = state.overview.stats().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(stats)))
}
