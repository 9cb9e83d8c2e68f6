mod common;

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use futures_util::StreamExt;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

use common::{body_text, gateway_state, send};

async fn mount_kitchen(server: &MockServer, status: &str) {
    Mock::given(method("GET"))
        .and(path("/api/restaurants/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "name": "Curry House", "address": "1 Main St", "phone": "555", "open": true
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/kitchen/tickets"))
        .and(query_param("restaurantId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 9, "orderId": 30, "restaurantId": 1, "items": "2x Dal", "status": status, "createdAt": "2024-05-01T12:30:00"}
        ])))
        .mount(server)
        .await;
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn ticket_table_offers_the_next_transition() {
    let server = MockServer::start().await;
    mount_kitchen(&server, "CREATED").await;

    let response = send(
        gateway_state(&server.uri()),
        Request::get("/restaurant/1/tickets").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Curry House - Kitchen Tickets"));
    assert!(html.contains(r#"action="/restaurant/1/tickets/9/accept""#));
    assert!(html.contains(r#"content="15;url=/restaurant/1/tickets""#));
    assert!(html.contains("Auto-refreshes every 15 seconds"));
}

#[tokio::test]
async fn successful_ticket_action_redirects_back_to_the_table() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/kitchen/tickets/9/accept"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9, "orderId": 30, "restaurantId": 1, "items": "2x Dal", "status": "ACCEPTED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        form_post("/restaurant/1/tickets/9/accept", ""),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/restaurant/1/tickets");
}

#[tokio::test]
async fn rejected_ticket_action_is_shown_inline() {
    let server = MockServer::start().await;
    mount_kitchen(&server, "PREPARING").await;
    Mock::given(method("PUT"))
        .and(path("/api/kitchen/tickets/9/ready"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Ticket 9 is not in PREPARING state"))
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        form_post("/restaurant/1/tickets/9/ready", ""),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Ticket 9 is not in PREPARING state"));
    assert!(html.contains("2x Dal"));
}

#[tokio::test]
async fn unknown_ticket_action_is_not_found() {
    let server = MockServer::start().await;
    let response = send(
        gateway_state(&server.uri()),
        form_post("/restaurant/1/tickets/9/incinerate", ""),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn mount_courier_board(server: &MockServer) {
    Mock::given(path("/api/couriers/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4, "name": "Sam Rider", "phone": "555", "available": true
        })))
        .mount(server)
        .await;
    Mock::given(path("/api/deliveries/courier/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 12, "orderId": 30, "courierId": 4, "pickupAddress": "Curry House", "deliveryAddress": "1 Main St", "status": "COURIER_ASSIGNED"}
        ])))
        .mount(server)
        .await;
    Mock::given(path("/api/deliveries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 12, "orderId": 30, "courierId": 4, "pickupAddress": "Curry House", "deliveryAddress": "1 Main St", "status": "COURIER_ASSIGNED"},
            {"id": 13, "orderId": 31, "pickupAddress": "Noodle Bar", "deliveryAddress": "2 Main St", "status": "PENDING"}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn courier_board_splits_mine_from_pending() {
    let server = MockServer::start().await;
    mount_courier_board(&server).await;

    let response = send(
        gateway_state(&server.uri()),
        Request::get("/courier/4/deliveries").body(Body::empty()).unwrap(),
    )
    .await;

    let html = body_text(response).await;
    assert!(html.contains("Sam Rider - Deliveries"));
    assert!(html.contains(r#"action="/courier/4/deliveries/12/pickup""#));
    assert!(html.contains(r#"action="/courier/4/deliveries/13/assign""#));
    assert!(!html.contains(r#"action="/courier/4/deliveries/12/assign""#));
}

#[tokio::test]
async fn placing_an_order_redirects_to_its_detail_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/restaurants/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "name": "Noodle Bar", "open": true
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/restaurants/2/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "name": "Pho", "price": 10.75},
            {"id": 6, "name": "Bao", "price": 4.0}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(json!({
            "consumerId": 1,
            "consumerName": "Ada",
            "consumerContact": "ada@example.com",
            "restaurantId": 2,
            "deliveryAddress": "1 Main St",
            "paymentMethod": "CREDIT_CARD",
            "items": [{"menuItemId": 5, "quantity": 2}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 77, "status": "PENDING"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        form_post(
            "/consumer/restaurants/2/menu",
            "consumer_name=Ada&consumer_contact=ada%40example.com&delivery_address=1+Main+St&payment_method=CREDIT_CARD&qty_5=2&qty_6=0",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/consumer/orders/77");
}

#[tokio::test]
async fn empty_order_is_rejected_before_reaching_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/restaurants/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2, "name": "Noodle Bar"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/restaurants/2/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 5, "name": "Pho", "price": 10.75}])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        form_post("/consumer/restaurants/2/menu", "consumer_name=Ada&qty_5=0"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Select at least one menu item."));
}

#[tokio::test]
async fn order_detail_tolerates_missing_payment() {
    let server = MockServer::start().await;
    Mock::given(path("/api/orders/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "restaurantName": "Curry House", "status": "APPROVED", "totalAmount": 21.5,
            "items": [{"menuItemName": "Dal", "price": 10.75, "quantity": 2}]
        })))
        .mount(&server)
        .await;
    Mock::given(path("/api/payments/order/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No payment"))
        .mount(&server)
        .await;
    Mock::given(path("/api/notifications/order/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        Request::get("/consumer/orders/7").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Order #7"));
    assert!(html.contains("Curry House"));
    assert!(html.contains(r#"action="/consumer/orders/7/cancel""#));
    assert!(!html.contains("No payment"));
}

/// Page to client to this server's proxy routes to the upstream, over real sockets.
#[tokio::test]
async fn pages_reach_upstreams_through_the_proxy() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 41, "restaurantName": "Noodle Bar", "status": "PENDING", "totalAmount": 12.0}
        ])))
        .expect(1)
        .mount(&upstream)
        .await;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    let state = common::state(
        ftgo_web::upstream::ServiceRegistry::Gateway(upstream.uri()),
        &origin,
    );
    tokio::spawn(async move {
        axum::serve(listener, ftgo_web::routes::create_app(state))
            .await
            .unwrap();
    });

    let html = reqwest::get(format!("{origin}/consumer/orders"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Noodle Bar"));
    assert!(html.contains("/consumer/orders/41"));
}

#[tokio::test]
async fn rejected_delivery_action_is_shown_inline() {
    let server = MockServer::start().await;
    mount_courier_board(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/deliveries/12/deliver"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Delivery 12 has not been picked up"))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        form_post("/courier/4/deliveries/12/deliver", ""),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Delivery 12 has not been picked up"));
    assert!(html.contains(r#"content="15;url=/courier/4/deliveries""#));
    assert!(html.contains("Noodle Bar"));
}

fn order_json(status: &str) -> serde_json::Value {
    json!({
        "id": 7, "restaurantName": "Curry House", "status": status, "totalAmount": 21.5,
        "items": [{"menuItemName": "Dal", "price": 10.75, "quantity": 2}]
    })
}

#[tokio::test]
async fn cancelling_redirects_back_to_the_order() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/orders/7/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("CANCELLED")))
        .expect(1)
        .mount(&server)
        .await;

    let response = send(
        gateway_state(&server.uri()),
        form_post("/consumer/orders/7/cancel", ""),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/consumer/orders/7");
}

#[tokio::test]
async fn rejected_cancel_redirects_with_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/orders/7/cancel"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Order 7 is already DELIVERED"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("DELIVERED")))
        .mount(&server)
        .await;

    let state = gateway_state(&server.uri());
    let response = send(state.clone(), form_post("/consumer/orders/7/cancel", "")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with("/consumer/orders/7?error="));

    let response = send(state, Request::get(location.as_str()).body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Order 7 is already DELIVERED"));
    assert!(html.contains("Curry House"));
    assert!(!html.contains(r#"action="/consumer/orders/7/cancel""#));
}

#[tokio::test]
async fn live_order_stream_pushes_status_changes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("PENDING")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("APPROVED")))
        .mount(&server)
        .await;

    let mut state = gateway_state(&server.uri());
    state.poll_interval = Duration::from_millis(50);
    let response = send(
        state,
        Request::get("/consumer/orders/7/live").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/event-stream")
    );

    let mut body = response.into_body().into_data_stream();
    let mut frames = String::new();
    tokio::time::timeout(Duration::from_secs(5), async {
        while frames.matches("event: order").count() < 3 {
            let chunk = body.next().await.unwrap().unwrap();
            frames.push_str(std::str::from_utf8(&chunk).unwrap());
        }
    })
    .await
    .expect("three order events");

    let events: Vec<&str> = frames.split("event: order").skip(1).collect();
    // The badge carries the status colour; the stepper only lists names.
    let pending = "bg-yellow-100 text-yellow-800\">PENDING";
    let approved = "bg-blue-100 text-blue-800\">APPROVED";
    assert!(events[0].contains(pending));
    assert!(events[1].contains(approved));
    assert!(!events[1].contains(pending));
}
