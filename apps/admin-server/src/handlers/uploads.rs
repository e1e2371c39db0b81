//! Attachment upload for the post form.
//!
//! The raw file is the request body; its name comes from the query string.
//! The stored file exists before any post references it.

use actix_web::{HttpResponse, web};

use inkpost_core::resource::{UploadCandidate, UploadRules};
use inkpost_infra::storage::{detect_mime, prepare_cover};
use inkpost_shared::dto::{UploadQuery, UploadResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Body limit of the upload route. Larger than the accepted maximum so that
/// oversized files get a validation message instead of a bare 413.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// POST /admin/uploads?file_name=&existing=
pub async fn upload(
    state: web::Data<AppState>,
    identity: Identity,
    request_id: RequestId,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let UploadQuery {
        file_name,
        existing,
    } = query.into_inner();
    let rules = UploadRules::post_images();

    let candidate = UploadCandidate {
        mime_type: detect_mime(&file_name, &body),
        size_bytes: body.len() as u64,
        file_name: file_name.clone(),
    };
    rules.check_batch(existing, std::slice::from_ref(&candidate))?;

    let (width, height) = (rules.target_width, rules.target_height);
    let prepared = match web::block(move || prepare_cover(&body, width, height))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    {
        Ok(prepared) => prepared,
        // right signature, broken body
        Err(e) if e.is_rejected_input() => {
            tracing::info!(
                request_id = %request_id.0,
                file_name = %file_name,
                reason = %e,
                "Upload rejected"
            );
            return Err(UploadRules::not_an_image(&file_name).into());
        }
        Err(e) => return Err(e.into()),
    };

    let path = state
        .storage
        .put(rules.directory, prepared.extension, prepared.bytes)
        .await?;

    tracing::info!(
        request_id = %request_id.0,
        actor = %identity.user_id,
        path = %path,
        mime = %candidate.mime_type,
        "Attachment uploaded"
    );

    Ok(HttpResponse::Created().json(UploadResponse {
        url: state.storage.url(&path),
        path,
        original_name: file_name,
    }))
}
