mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use ftgo_web::upstream::ServiceRegistry;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_bytes, header as header_is, method, path, query_param},
};

use common::{body_text, closed_port_url, gateway_state, send, state};

#[tokio::test]
async fn relays_upstream_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Order not found: 99"))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        Request::get("/api/orders/99").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    assert_eq!(body_text(response).await, "Order not found: 99");
}

#[tokio::test]
async fn post_body_is_forwarded_byte_for_byte() {
    let server = MockServer::start().await;
    let payload = br#"{"consumerId":1,"restaurantId":2,"items":[{"menuItemId":5,"quantity":2}],  "note":"ring twice"}"#;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(header_is("content-type", "application/json"))
        .and(header_is("cache-control", "no-store"))
        .and(body_bytes(payload.to_vec()))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":7,"status":"PENDING"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        Request::post("/api/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_vec()))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_text(response).await, r#"{"id":7,"status":"PENDING"}"#);
}

#[tokio::test]
async fn get_sends_no_body_and_forwards_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/kitchen/tickets"))
        .and(query_param("restaurantId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        Request::get("/api/kitchen/tickets?restaurantId=3")
            .body(Body::from("ignored"))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn cancel_is_sent_as_put_without_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/orders/4/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":4,"status":"CANCELLED"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        Request::builder()
            .method(Method::PUT)
            .uri("/api/orders/4/cancel")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn assign_interpolates_both_path_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/deliveries/12/assign/4"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Delivery already assigned"))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        Request::put("/api/deliveries/12/assign/4").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_text(response).await, "Delivery already assigned");
}

#[tokio::test]
async fn request_id_is_propagated_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/couriers"))
        .and(header_is("x-request-id", "req-42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        Request::get("/api/couriers")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn direct_registry_routes_each_service_to_its_own_host() {
    let orders = MockServer::start().await;
    let payments = MockServer::start().await;
    Mock::given(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&orders)
        .await;
    Mock::given(path("/api/payments/order/8"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":1}"#))
        .expect(1)
        .mount(&payments)
        .await;

    let (orders_url, payments_url) = (orders.uri(), payments.uri());
    let services = ServiceRegistry::from_lookup(|key| match key {
        "ORDER_SERVICE_URL" => Some(orders_url.clone()),
        "ACCOUNTING_SERVICE_URL" => Some(payments_url.clone()),
        _ => None,
    });
    let app_state = state(services, &orders.uri());

    let response = send(
        app_state.clone(),
        Request::get("/api/orders").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        app_state,
        Request::get("/api/payments/order/8").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(body_text(response).await, r#"{"id":1}"#);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let response = send(
        gateway_state(&closed_port_url()),
        Request::get("/api/restaurants").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["message"], "Upstream unreachable");
    assert!(body["data"]["error"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_envelope() {
    let response = send(
        gateway_state(&closed_port_url()),
        Request::get("/api/nowhere").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["data"]["path"], "/api/nowhere");
}
