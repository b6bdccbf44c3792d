//! HTTP handlers and route configuration.

mod categories;
mod code;
mod health;
mod share;


use actix_web::error::JsonPayloadError;
use actix_web::{HttpResponse, web};
use codeshare_shared::ErrorResponse;
use codeshare_shared::response::{INVALID_BODY, ROUTE_NOT_FOUND};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, max_body_bytes: usize) {
    cfg.app_data(json_config(max_body_bytes))
        .route("/health", web::get().to(health::health_check))
        .route("/categories", web::get().to(categories::list_categories))
        .route("/share", web::post().to(share::create_share))
        .route("/code/{id}", web::get().to(code::get_code))
        .default_service(web::to(not_found));
}

/// JSON extractor settings: size limit and `{error}` bodies for bad payloads.
///
/// Bodies are parsed as JSON whatever their `Content-Type` says.
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected request body");
            let app_err = match err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    AppError::PayloadTooLarge
                }
                _ => AppError::BadRequest(INVALID_BODY.to_string()),
            };
            app_err.into()
        })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(ROUTE_NOT_FOUND))
}
