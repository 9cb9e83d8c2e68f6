use axum::{
    Router,
    extract::{Path, Request, State},
    http::Method,
    response::Response,
    routing::{get, put},
};

use crate::{
    error::AppResult,
    models::{CreateOrderRequest, OrderResponse},
    proxy::forward,
    state::AppState,
    upstream::Service,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order))
        .route("/{id}/cancel", put(cancel_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses((status = 200, description = "Orders, relayed from the order service", body = [OrderResponse])),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>, request: Request) -> AppResult<Response> {
    forward(&state, Service::Orders, "/api/orders", request, None).await
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses((status = 200, description = "Created order", body = OrderResponse)),
    tag = "Orders"
)]
pub async fn create_order(State(state): State<AppState>, request: Request) -> AppResult<Response> {
    forward(&state, Service::Orders, "/api/orders", request, None).await
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses((status = 200, description = "Order", body = OrderResponse)),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    forward(&state, Service::Orders, &format!("/api/orders/{id}"), request, None).await
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/cancel",
    params(("id" = String, Path, description = "Order id")),
    responses((status = 200, description = "Cancelled order", body = OrderResponse)),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/orders/{id}/cancel");
    forward(&state, Service::Orders, &path, request, Some(Method::PUT)).await
}
