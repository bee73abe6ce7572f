//! Category and tag listings.

use actix_web::{HttpResponse, web};
use folio_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.content.list_categories().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(categories)))
}

/// GET /api/tags
pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.content.list_tags().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(tags)))
}
