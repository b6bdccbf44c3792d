//! Snippet sharing.

use actix_web::{HttpResponse, web};

use codeshare_core::services::ShareSubmission;
use codeshare_shared::dto::{ShareRequest, ShareResponse};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /share
pub async fn create_share(
    state: web::Data<AppState>,
    body: web::Json<ShareRequest>,
    request_id: RequestId,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let share_id = state
        .share
        .create_share(ShareSubmission {
            title: req.title,
            category: req.category,
            code: req.code,
            description: req.description,
        })
        .await?;

    tracing::debug!(
        request_id = %request_id.as_str(),
        share_id = %share_id.as_str(),
        "Returning share id"
    );

    Ok(HttpResponse::Ok().json(ShareResponse {
        share_id: share_id.into_inner(),
    }))
}
