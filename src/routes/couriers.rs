use axum::{
    Router,
    extract::{Path, Request, State},
    response::Response,
    routing::get,
};

use crate::{
    error::AppResult, models::Courier, proxy::forward, state::AppState, upstream::Service,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_couriers))
        .route("/{id}", get(get_courier))
}

#[utoipa::path(
    get,
    path = "/api/couriers",
    responses((status = 200, description = "Couriers", body = [Courier])),
    tag = "Couriers"
)]
pub async fn list_couriers(State(state): State<AppState>, request: Request) -> AppResult<Response> {
    forward(&state, Service::Couriers, "/api/couriers", request, None).await
}

#[utoipa::path(
    get,
    path = "/api/couriers/{id}",
    params(("id" = String, Path, description = "Courier id")),
    responses((status = 200, description = "Courier", body = Courier)),
    tag = "Couriers"
)]
pub async fn get_courier(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    forward(&state, Service::Couriers, &format!("/api/couriers/{id}"), request, None).await
}
