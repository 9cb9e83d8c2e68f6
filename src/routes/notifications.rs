use axum::{
    Router,
    extract::{Path, Request, State},
    response::Response,
    routing::get,
};

use crate::{
    error::AppResult, models::Notification, proxy::forward, state::AppState, upstream::Service,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/order/{id}", get(list_order_notifications))
}

#[utoipa::path(
    get,
    path = "/api/notifications/order/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses((status = 200, description = "Notifications sent for the order", body = [Notification])),
    tag = "Notifications"
)]
pub async fn list_order_notifications(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/notifications/order/{id}");
    forward(&state, Service::Notifications, &path, request, None).await
}
