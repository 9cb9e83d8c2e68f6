#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{body::Body, http::Request, response::Response};
use ftgo_web::{client::ApiClient, routes::create_app, state::AppState, upstream::ServiceRegistry};
use tower::ServiceExt;

pub fn state(services: ServiceRegistry, api_base: &str) -> AppState {
    let http = reqwest::Client::new();
    AppState {
        services: Arc::new(services),
        api: ApiClient::new(api_base, http.clone()),
        http,
        poll_interval: Duration::from_secs(15),
    }
}

/// Every upstream routed to one mock server.
pub fn gateway_state(upstream: &str) -> AppState {
    state(ServiceRegistry::Gateway(upstream.to_string()), upstream)
}

pub async fn send(state: AppState, request: Request<Body>) -> Response {
    create_app(state).oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A local address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
