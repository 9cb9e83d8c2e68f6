use axum::{
    Router,
    extract::{Path, Request, State},
    response::Response,
    routing::get,
};

use crate::{
    error::AppResult, models::Payment, proxy::forward, state::AppState, upstream::Service,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/order/{id}", get(get_order_payment))
}

#[utoipa::path(
    get,
    path = "/api/payments/order/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses((status = 200, description = "Payment for the order", body = Payment)),
    tag = "Payments"
)]
pub async fn get_order_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/payments/order/{id}");
    forward(&state, Service::Payments, &path, request, None).await
}
