use actix_web::HttpResponse;

use codeshare_core::domain::Category;
use codeshare_shared::dto::CategoryResponse;

/// GET /categories - the categories offered by the share form.
pub async fn list_categories() -> HttpResponse {
    let categories: Vec<CategoryResponse> = Category::ALL
        .into_iter()
        .map(|c| CategoryResponse {
            value: c.as_str().to_string(),
            label: c.label().to_string(),
            language: c.language().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(categories)
}
