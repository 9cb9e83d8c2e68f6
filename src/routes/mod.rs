use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{pages, response::ApiResponse, state::AppState};

pub mod couriers;
pub mod deliveries;
pub mod doc;
pub mod health;
pub mod kitchen;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod restaurants;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/orders", orders::router())
        .nest("/restaurants", restaurants::router())
        .nest("/kitchen", kitchen::router())
        .nest("/deliveries", deliveries::router())
        .nest("/couriers", couriers::router())
        .nest("/payments", payments::router())
        .nest("/notifications", notifications::router())
}

/// Proxy API, pages and docs under one router. Middleware is layered on by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(pages::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success("Not Found", serde_json::json!({ "path": uri.path() }));
    (StatusCode::NOT_FOUND, Json(body))
}
