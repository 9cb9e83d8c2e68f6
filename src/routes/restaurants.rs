use axum::{
    Router,
    extract::{Path, Request, State},
    response::Response,
    routing::get,
};

use crate::{
    error::AppResult,
    models::{MenuItem, Restaurant},
    proxy::forward,
    state::AppState,
    upstream::Service,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_restaurants))
        .route("/{id}", get(get_restaurant))
        .route("/{id}/menu", get(get_menu))
}

#[utoipa::path(
    get,
    path = "/api/restaurants",
    responses((status = 200, description = "Restaurants", body = [Restaurant])),
    tag = "Restaurants"
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<Response> {
    forward(&state, Service::Restaurants, "/api/restaurants", request, None).await
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(("id" = String, Path, description = "Restaurant id")),
    responses((status = 200, description = "Restaurant", body = Restaurant)),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/restaurants/{id}");
    forward(&state, Service::Restaurants, &path, request, None).await
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}/menu",
    params(("id" = String, Path, description = "Restaurant id")),
    responses((status = 200, description = "Menu items", body = [MenuItem])),
    tag = "Restaurants"
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/restaurants/{id}/menu");
    forward(&state, Service::Restaurants, &path, request, None).await
}
