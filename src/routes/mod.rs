use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod doc;
pub mod health;
pub mod params;
pub mod profile;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/canteens", catalog::canteen_router())
        .nest("/search", catalog::search_router())
        .nest("/cart", cart::router())
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/owner", profile::owner_router())
        .nest("/checkout", checkout::router())
}

/// Health, API and docs routes bound to `state`, without transport layers.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
