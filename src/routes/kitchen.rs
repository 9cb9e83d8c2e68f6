use axum::{
    Router,
    extract::{Path, Request, State},
    http::Method,
    response::Response,
    routing::{get, put},
};

use crate::{
    error::AppResult, models::KitchenTicket, proxy::forward, state::AppState, upstream::Service,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(list_tickets))
        .route("/tickets/{id}/accept", put(accept_ticket))
        .route("/tickets/{id}/preparing", put(start_preparing))
        .route("/tickets/{id}/ready", put(mark_ready))
}

/// The `restaurantId` filter travels upstream with the rest of the query string.
#[utoipa::path(
    get,
    path = "/api/kitchen/tickets",
    params(("restaurantId" = Option<i64>, Query, description = "Only tickets for this restaurant")),
    responses((status = 200, description = "Kitchen tickets", body = [KitchenTicket])),
    tag = "Kitchen"
)]
pub async fn list_tickets(State(state): State<AppState>, request: Request) -> AppResult<Response> {
    forward(&state, Service::Kitchen, "/api/kitchen/tickets", request, None).await
}

#[utoipa::path(
    put,
    path = "/api/kitchen/tickets/{id}/accept",
    params(("id" = String, Path, description = "Ticket id")),
    responses((status = 200, description = "Accepted ticket", body = KitchenTicket)),
    tag = "Kitchen"
)]
pub async fn accept_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    ticket_action(&state, &id, "accept", request).await
}

#[utoipa::path(
    put,
    path = "/api/kitchen/tickets/{id}/preparing",
    params(("id" = String, Path, description = "Ticket id")),
    responses((status = 200, description = "Ticket in preparation", body = KitchenTicket)),
    tag = "Kitchen"
)]
pub async fn start_preparing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    ticket_action(&state, &id, "preparing", request).await
}

#[utoipa::path(
    put,
    path = "/api/kitchen/tickets/{id}/ready",
    params(("id" = String, Path, description = "Ticket id")),
    responses((status = 200, description = "Ticket ready for pickup", body = KitchenTicket)),
    tag = "Kitchen"
)]
pub async fn mark_ready(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> AppResult<Response> {
    ticket_action(&state, &id, "ready", request).await
}

async fn ticket_action(
    state: &AppState,
    id: &str,
    action: &str,
    request: Request,
) -> AppResult<Response> {
    let path = format!("/api/kitchen/tickets/{id}/{action}");
    forward(state, Service::Kitchen, &path, request, Some(Method::PUT)).await
}
