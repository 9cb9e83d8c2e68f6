use axum::{
    Router,
    extract::{Path, Request, State},
    http::Method,
    response::Response,
    routing::{get, put},
};

use crate::{
    error::AppResult, models::Delivery, proxy::forward, state::AppState, upstream::Service,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_deliveries))
        .route("/courier/{id}", get(list_courier_deliveries))
        .route("/{id}/assign/{courier_id}", put(assign_courier))
        .route("/{id}/pickup", put(pickup_delivery))
        .route("/{id}/deliver", put(complete_delivery))
}

#[utoipa::path(
    get,
    path = "/api/deliveries",
    responses((status = 200, description = "Deliveries", body = [Delivery])),
    tag = "Deliveries"
)]
pub async fn list_deliveries(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<Response> {
    forward(&state, Service::Deliveries, "/api/deliveries", request, None).await
}

#[utoipa::path(
    get,
    path = "/api/deliveries/courier/{id}",
    params(("id" = String, Path, description = "Courier id")),
    responses((status = 200, description = "Deliveries assigned to the courier", body = [Delivery])),
    tag = "Deliveries"
)]
pub async fn list_courier_deliveries(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/deliveries/courier/{id}");
    forward(&state, Service::Deliveries, &path, request, None).await
}

#[utoipa::path(
    put,
    path = "/api/deliveries/{id}/assign/{courier_id}",
    params(
        ("id" = String, Path, description = "Delivery id"),
        ("courier_id" = String, Path, description = "Courier id")
    ),
    responses((status = 200, description = "Assigned delivery", body = Delivery)),
    tag = "Deliveries"
)]
pub async fn assign_courier(
    State(state): State<AppState>,
    Path((id, courier_id)): Path<(String, String)>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/deliveries/{id}/assign/{courier_id}");
    forward(&state, Service::Deliveries, &path, request, Some(Method::PUT)).await
}

#[utoipa::path(
    put,
    path = "/api/deliveries/{id}/pickup",
    params(("id" = String, Path, description = "Delivery id")),
    responses((status = 200, description = "Picked-up delivery", body = Delivery)),
    tag = "Deliveries"
)]
pub async fn pickup_delivery(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/deliveries/{id}/pickup");
    forward(&state, Service::Deliveries, &path, request, Some(Method::PUT)).await
}

#[utoipa::path(
    put,
    path = "/api/deliveries/{id}/deliver",
    params(("id" = String, Path, description = "Delivery id")),
    responses((status = 200, description = "Delivered", body = Delivery)),
    tag = "Deliveries"
)]
pub async fn complete_delivery(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/deliveries/{id}/deliver");
    forward(&state, Service::Deliveries, &path, request, Some(Method::PUT)).await
}
