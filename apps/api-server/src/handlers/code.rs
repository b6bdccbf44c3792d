//! Snippet retrieval.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;

use codeshare_shared::dto::SnippetResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /code/{id} - counts a view on every hit.
pub async fn get_code(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let share_id = path.into_inner();
    let view = state.retrieval.get_share(&share_id).await?;

    Ok(HttpResponse::Ok().json(SnippetResponse {
        title: view.title,
        category: view.category,
        code: view.code,
        description: view.description,
        created_at: view.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
