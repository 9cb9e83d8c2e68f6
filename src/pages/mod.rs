use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

pub mod consumer;
pub mod courier;
pub mod home;
pub mod restaurant;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/consumer", get(|| async { Redirect::to("/consumer/restaurants") }))
        .route("/consumer/restaurants", get(consumer::restaurants))
        .route(
            "/consumer/restaurants/{id}/menu",
            get(consumer::menu).post(consumer::place_order),
        )
        .route("/consumer/orders", get(consumer::orders))
        .route("/consumer/orders/{id}", get(consumer::order_detail))
        .route("/consumer/orders/{id}/cancel", post(consumer::cancel_order))
        .route("/consumer/orders/{id}/live", get(consumer::order_live))
        .route("/restaurant", get(restaurant::dashboard))
        .route("/restaurant/{id}/tickets", get(restaurant::tickets))
        .route(
            "/restaurant/{id}/tickets/{ticket_id}/{action}",
            post(restaurant::ticket_action),
        )
        .route("/courier", get(courier::dashboard))
        .route("/courier/{id}/deliveries", get(courier::deliveries))
        .route(
            "/courier/{id}/deliveries/{delivery_id}/{action}",
            post(courier::delivery_action),
        )
}
