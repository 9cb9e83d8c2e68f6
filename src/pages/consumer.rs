use std::{collections::HashMap, convert::Infallible};

use axum::{
    Form,
    extract::{Path, Query, State},
    response::{
        IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures_util::{Stream, stream};
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;

use crate::{
    client::{ApiClient, ClientError},
    components::{
        Refresh, error_box,
        cards::restaurant_card,
        format::{money, timestamp},
        page, status_badge,
        stepper::{ORDER_FLOW, steps_for},
        workflow_stepper,
    },
    models::{
        CreateOrderRequest, MenuItem, Notification, OrderLineRequest, OrderResponse, Payment,
        Restaurant,
    },
    poll::{Poller, Snapshot},
    state::AppState,
};

// There is no sign-in; every order is placed as the demo consumer.
const DEMO_CONSUMER_ID: i64 = 1;

const PAYMENT_METHODS: [(&str, &str); 3] = [
    ("CREDIT_CARD", "Credit Card"),
    ("DEBIT_CARD", "Debit Card"),
    ("CASH", "Cash"),
];

pub async fn restaurants(State(state): State<AppState>) -> Markup {
    let content = match state.api.restaurants().list().await {
        Ok(restaurants) => html! {
            h1 class="text-2xl font-bold text-gray-900 mb-2" { "Restaurants" }
            p class="text-gray-500 mb-6" { "Pick a restaurant to browse its menu." }
            @if restaurants.is_empty() {
                div class="text-center py-12 text-gray-500" { "No restaurants available." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                    @for restaurant in &restaurants {
                        (restaurant_card(restaurant))
                    }
                }
            }
        },
        Err(err) => error_box(&err.to_string()),
    };
    page("Restaurants", None, content)
}

/// Fields of the menu page's order form. Quantities arrive as `qty_<menu item id>`.
#[derive(Debug, Default, Clone)]
pub struct OrderForm {
    pub consumer_name: String,
    pub consumer_contact: String,
    pub delivery_address: String,
    pub payment_method: String,
    pub quantities: HashMap<i64, u32>,
}

impl OrderForm {
    pub fn from_fields(mut fields: HashMap<String, String>) -> Self {
        let quantities = fields
            .iter()
            .filter_map(|(key, value)| {
                let id = key.strip_prefix("qty_")?.parse::<i64>().ok()?;
                let quantity = value.trim().parse::<u32>().ok()?;
                Some((id, quantity))
            })
            .collect();
        let mut take = |key: &str| fields.remove(key).unwrap_or_default().trim().to_string();

        Self {
            consumer_name: take("consumer_name"),
            consumer_contact: take("consumer_contact"),
            delivery_address: take("delivery_address"),
            payment_method: take("payment_method"),
            quantities,
        }
    }

    fn quantity(&self, item_id: i64) -> u32 {
        self.quantities.get(&item_id).copied().unwrap_or(0)
    }

    /// Menu items with a positive quantity, in menu order.
    pub fn selected<'a>(&self, menu: &'a [MenuItem]) -> Vec<(&'a MenuItem, u32)> {
        menu.iter()
            .map(|item| (item, self.quantity(item.id)))
            .filter(|(_, quantity)| *quantity > 0)
            .collect()
    }

    pub fn to_request(&self, restaurant_id: i64, menu: &[MenuItem]) -> CreateOrderRequest {
        let payment_method = if self.payment_method.is_empty() {
            PAYMENT_METHODS[0].0.to_string()
        } else {
            self.payment_method.clone()
        };
        CreateOrderRequest {
            consumer_id: DEMO_CONSUMER_ID,
            consumer_name: self.consumer_name.clone(),
            consumer_contact: self.consumer_contact.clone(),
            restaurant_id,
            delivery_address: self.delivery_address.clone(),
            payment_method,
            items: self
                .selected(menu)
                .into_iter()
                .map(|(item, quantity)| OrderLineRequest {
                    menu_item_id: item.id,
                    quantity,
                })
                .collect(),
        }
    }
}

async fn load_menu(api: &ApiClient, id: i64) -> Result<(Restaurant, Vec<MenuItem>), ClientError> {
    let restaurants = api.restaurants();
    tokio::try_join!(restaurants.get(id), restaurants.menu(id))
}

pub async fn menu(State(state): State<AppState>, Path(id): Path<i64>) -> Markup {
    let loaded = load_menu(&state.api, id).await;
    menu_page(id, loaded, &OrderForm::default(), None)
}

pub async fn place_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let form = OrderForm::from_fields(fields);

    let (restaurant, items) = match load_menu(&state.api, id).await {
        Ok(loaded) => loaded,
        Err(err) => return menu_page(id, Err(err), &form, None).into_response(),
    };

    if form.selected(&items).is_empty() {
        let message = "Select at least one menu item.";
        return menu_page(id, Ok((restaurant, items)), &form, Some(message)).into_response();
    }

    let request = form.to_request(id, &items);
    match state.api.orders().create(&request).await {
        Ok(order) => {
            tracing::info!(order_id = order.id, restaurant_id = id, "order placed");
            Redirect::to(&format!("/consumer/orders/{}", order.id)).into_response()
        }
        Err(err) => {
            let message = err.to_string();
            menu_page(id, Ok((restaurant, items)), &form, Some(&message)).into_response()
        }
    }
}

fn menu_page(
    id: i64,
    loaded: Result<(Restaurant, Vec<MenuItem>), ClientError>,
    form: &OrderForm,
    error: Option<&str>,
) -> Markup {
    let (restaurant, items) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => return page("Menu", None, error_box(&err.to_string())),
    };
    let selected = form.selected(&items);
    let total: f64 = selected
        .iter()
        .map(|(item, quantity)| item.price * f64::from(*quantity))
        .sum();
    let chosen_method = if form.payment_method.is_empty() {
        PAYMENT_METHODS[0].0
    } else {
        form.payment_method.as_str()
    };

    let content = html! {
        div class="flex items-center justify-between mb-6" {
            div {
                h1 class="text-2xl font-bold text-gray-900" { (restaurant.name) }
                p class="text-gray-500 text-sm mt-1" { (restaurant.address) " \u{00B7} " (restaurant.phone) }
            }
            a href="/consumer/restaurants" class="text-orange-600 hover:underline text-sm font-medium" { "Back to Restaurants" }
        }
        @if let Some(error) = error {
            (error_box(error))
        }
        form method="post" action={ "/consumer/restaurants/" (id) "/menu" } class="grid grid-cols-1 lg:grid-cols-3 gap-6" {
            div class="lg:col-span-2 bg-white rounded-lg shadow-md p-6" {
                h2 class="text-lg font-semibold text-gray-900 mb-4" { "Menu" }
                @if items.is_empty() {
                    p class="text-gray-500" { "This restaurant has no menu items yet." }
                } @else {
                    div class="divide-y" {
                        @for item in &items {
                            div class="flex items-center justify-between py-4" {
                                div {
                                    div class="font-medium text-gray-900" { (item.name) }
                                    div class="text-sm text-gray-500" { (item.description) }
                                    div class="text-sm font-semibold text-orange-600 mt-1" { (money(item.price)) }
                                }
                                input type="number" min="0" name={ "qty_" (item.id) }
                                    value=(form.quantity(item.id))
                                    class="w-20 border border-gray-300 rounded-md px-2 py-1 text-center";
                            }
                        }
                    }
                }
            }
            div class="bg-white rounded-lg shadow-md p-6 h-fit" {
                h2 class="text-lg font-semibold text-gray-900 mb-4" { "Place Order" }
                div class="space-y-4" {
                    (text_field("consumer_name", "Name", "Your name", &form.consumer_name))
                    (text_field("consumer_contact", "Contact", "Phone or email", &form.consumer_contact))
                    (text_field("delivery_address", "Delivery Address", "123 Main St", &form.delivery_address))
                    div {
                        label class="block text-sm font-medium text-gray-700 mb-1" for="payment_method" { "Payment Method" }
                        select id="payment_method" name="payment_method" class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm" {
                            @for (value, label) in &PAYMENT_METHODS {
                                option value=(value) selected[*value == chosen_method] { (label) }
                            }
                        }
                    }
                    @if !selected.is_empty() {
                        div class="border rounded-md divide-y text-sm" {
                            @for (item, quantity) in &selected {
                                div class="flex justify-between px-3 py-2" {
                                    span { (quantity) "x " (item.name) }
                                    span { (money(item.price * f64::from(*quantity))) }
                                }
                            }
                            div class="flex justify-between px-3 py-2 font-semibold bg-gray-50" {
                                span { "Total" }
                                span { (money(total)) }
                            }
                        }
                    }
                    button type="submit" class="w-full bg-orange-500 text-white py-2 px-4 rounded-md text-sm font-medium hover:bg-orange-600 transition-colors" {
                        "Place Order"
                    }
                }
            }
        }
    };
    page(&restaurant.name, None, content)
}

fn text_field(name: &str, label: &str, placeholder: &str, value: &str) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700 mb-1" for=(name) { (label) }
            input type="text" required id=(name) name=(name) placeholder=(placeholder) value=(value)
                class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
        }
    }
}

pub async fn orders(State(state): State<AppState>) -> Markup {
    let refresh = Refresh::new(state.poll_interval, "/consumer/orders");
    let content = match state.api.orders().list().await {
        Ok(orders) => html! {
            div class="flex items-center justify-between mb-6" {
                h1 class="text-2xl font-bold text-gray-900" { "My Orders" }
                a href="/consumer/restaurants" class="bg-orange-500 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-orange-600 transition-colors" { "New Order" }
            }
            @if orders.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-500 mb-4" { "No orders yet." }
                    a href="/consumer/restaurants" class="text-orange-600 font-medium hover:underline" {
                        "Browse restaurants to place your first order"
                    }
                }
            } @else {
                div class="bg-white rounded-lg shadow-md overflow-hidden" {
                    table class="min-w-full divide-y divide-gray-200" {
                        thead class="bg-gray-50" {
                            tr {
                                @for heading in ["Order #", "Restaurant", "Status", "Total", "Created", ""] {
                                    th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase" { (heading) }
                                }
                            }
                        }
                        tbody class="divide-y divide-gray-200" {
                            @for order in &orders {
                                tr class="hover:bg-gray-50" {
                                    td class="px-6 py-4 text-sm font-medium text-gray-900" { "#" (order.id) }
                                    td class="px-6 py-4 text-sm text-gray-600" { (order.restaurant_name) }
                                    td class="px-6 py-4" { (status_badge(&order.status)) }
                                    td class="px-6 py-4 text-sm text-gray-900" { (money(order.total_amount)) }
                                    td class="px-6 py-4 text-sm text-gray-500" { (timestamp(&order.created_at)) }
                                    td class="px-6 py-4 text-sm" {
                                        a href={ "/consumer/orders/" (order.id) } class="text-orange-600 hover:underline font-medium" { "View" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        Err(err) => error_box(&err.to_string()),
    };
    page("My Orders", Some(&refresh), content)
}

/// Everything the order page shows. Payment and notifications are best-effort.
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: OrderResponse,
    pub payment: Option<Payment>,
    pub notifications: Vec<Notification>,
}

pub async fn load_order_detail(api: &ApiClient, id: i64) -> Result<OrderDetail, ClientError> {
    let (orders, payments, notifications) = (api.orders(), api.payments(), api.notifications());
    let (order, payment, notifications) = tokio::join!(
        orders.get(id),
        payments.by_order(id),
        notifications.by_order(id),
    );
    Ok(OrderDetail {
        order: order?,
        payment: payment.ok(),
        notifications: notifications.unwrap_or_default(),
    })
}

fn can_cancel(status: &str) -> bool {
    matches!(status, "PENDING" | "APPROVED")
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderPageParams {
    /// Message from a rejected action, carried across the redirect.
    pub error: Option<String>,
}

pub async fn order_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<OrderPageParams>,
) -> Markup {
    let snapshot = match load_order_detail(&state.api, id).await {
        Ok(detail) => Snapshot {
            data: Some(detail),
            error: None,
        },
        Err(err) => Snapshot {
            data: None,
            error: Some(err.to_string()),
        },
    };
    order_page(id, &snapshot, params.error.as_deref())
}

/// Cancels, then redirects back to the order page either way so a reload never
/// repeats the post. A rejection travels as the `error` query parameter.
pub async fn cancel_order(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let order_path = format!("/consumer/orders/{id}");
    match state.api.orders().cancel(id).await {
        Ok(_) => Redirect::to(&order_path),
        Err(err) => {
            tracing::warn!(order_id = id, error = %err, "cancel rejected");
            Redirect::to(&with_error(state.api.base_url(), &order_path, &err.to_string()))
        }
    }
}

fn with_error(origin: &str, path: &str, message: &str) -> String {
    match reqwest::Url::parse(&format!("{origin}{path}")) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("error", message);
            format!("{}?{}", url.path(), url.query().unwrap_or_default())
        }
        Err(_) => path.to_string(),
    }
}

/// Streams the re-rendered order panel every poll interval for as long as the
/// client stays connected.
pub async fn order_live(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let api = state.api.clone();
    let poller = Poller::spawn(state.poll_interval, move || {
        let api = api.clone();
        async move { load_order_detail(&api, id).await }
    });

    let events = stream::unfold(poller, move |mut poller| async move {
        let snapshot = poller.changed().await?;
        let event = Event::default()
            .event("order")
            .data(order_panel(id, &snapshot).into_string());
        Some((Ok(event), poller))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn order_page(id: i64, snapshot: &Snapshot<OrderDetail>, action_error: Option<&str>) -> Markup {
    let script = format!(
        "new EventSource('/consumer/orders/{id}/live').addEventListener('order', \
         (e) => {{ document.getElementById('order-panel').innerHTML = e.data; }});"
    );
    let content = html! {
        div class="flex items-center justify-between mb-6" {
            h1 class="text-2xl font-bold text-gray-900" { "Order #" (id) }
            a href="/consumer/orders" class="text-orange-600 hover:underline text-sm font-medium" { "Back to Orders" }
        }
        @if let Some(error) = action_error {
            (error_box(error))
        }
        div id="order-panel" { (order_panel(id, snapshot)) }
        script { (PreEscaped(script)) }
    };
    page(&format!("Order #{id}"), None, content)
}

/// The live part of the order page: stepper, details, payment and notifications.
pub fn order_panel(id: i64, snapshot: &Snapshot<OrderDetail>) -> Markup {
    let Some(detail) = &snapshot.data else {
        return match &snapshot.error {
            Some(error) => error_box(error),
            None => html! { div class="text-center py-12 text-gray-500" { "Order not found." } },
        };
    };
    let order = &detail.order;

    html! {
        @if let Some(error) = &snapshot.error {
            (error_box(error))
        }
        @if order.status != "CANCELLED" && order.status != "REJECTED" {
            div class="bg-white rounded-lg shadow-md p-6 mb-6" {
                h2 class="text-sm font-medium text-gray-500 mb-4" { "Order Progress" }
                (workflow_stepper(&steps_for(ORDER_FLOW, &order.status)))
            }
        }
        div class="grid grid-cols-1 lg:grid-cols-2 gap-6" {
            div class="bg-white rounded-lg shadow-md p-6" {
                h2 class="text-lg font-semibold text-gray-900 mb-4" { "Order Details" }
                dl class="space-y-3" {
                    (detail_row("Status", status_badge(&order.status)))
                    (detail_row("Customer", html! { (order.consumer_name) }))
                    (detail_row("Restaurant", html! { (order.restaurant_name) }))
                    (detail_row("Delivery Address", html! { (order.delivery_address) }))
                    (detail_row("Created", html! { (timestamp(&order.created_at)) }))
                }
                h3 class="text-sm font-medium text-gray-700 mt-6 mb-2" { "Items" }
                div class="border rounded-md divide-y" {
                    @for item in &order.items {
                        div class="flex justify-between px-4 py-2 text-sm" {
                            span class="text-gray-700" { (item.quantity) "x " (item.menu_item_name) }
                            span class="text-gray-900 font-medium" { (money(item.price * f64::from(item.quantity))) }
                        }
                    }
                    div class="flex justify-between px-4 py-2 text-sm font-semibold bg-gray-50" {
                        span { "Total" }
                        span { (money(order.total_amount)) }
                    }
                }
                @if can_cancel(&order.status) {
                    form method="post" action={ "/consumer/orders/" (id) "/cancel" } {
                        button type="submit" class="mt-4 w-full bg-red-500 text-white py-2 px-4 rounded-md text-sm font-medium hover:bg-red-600 transition-colors" {
                            "Cancel Order"
                        }
                    }
                }
            }
            div class="space-y-6" {
                @if let Some(payment) = &detail.payment {
                    div class="bg-white rounded-lg shadow-md p-6" {
                        h2 class="text-lg font-semibold text-gray-900 mb-4" { "Payment" }
                        dl class="space-y-3" {
                            (detail_row("Status", status_badge(&payment.status)))
                            (detail_row("Method", html! { (payment.payment_method) }))
                            (detail_row("Amount", html! { (money(payment.amount)) }))
                            (detail_row("Transaction ID", html! { span class="font-mono text-xs" { (payment.transaction_id) } }))
                        }
                    }
                }
                @if !detail.notifications.is_empty() {
                    div class="bg-white rounded-lg shadow-md p-6" {
                        h2 class="text-lg font-semibold text-gray-900 mb-4" { "Notifications" }
                        div class="space-y-3" {
                            @for notification in &detail.notifications {
                                div class="bg-gray-50 rounded-md p-3" {
                                    div class="flex items-center justify-between mb-1" {
                                        span class="text-xs font-medium text-gray-500" { (notification.kind) }
                                        span class="text-xs text-gray-400" { (timestamp(&notification.sent_at)) }
                                    }
                                    p class="text-sm text-gray-700" { (notification.message) }
                                    p class="text-xs text-gray-400 mt-1" { "To: " (notification.recipient) }
                                }
                            }
                        }
                    }
                }
                div class="bg-white rounded-lg shadow-md p-6" {
                    h2 class="text-lg font-semibold text-gray-900 mb-4" { "What Happens Next" }
                    div class="space-y-2 text-sm text-gray-600" {
                        p { "1. The " strong { "restaurant" } " will accept and prepare your order." }
                        p { "2. A " strong { "courier" } " will be assigned to deliver it." }
                        p { "3. Progress on this page updates live." }
                    }
                    div class="mt-4 flex gap-3" {
                        a href="/restaurant" class="text-green-600 text-sm font-medium hover:underline" { "Switch to Restaurant view" }
                        a href="/courier" class="text-blue-600 text-sm font-medium hover:underline" { "Switch to Courier view" }
                    }
                }
            }
        }
    }
}

fn detail_row(label: &str, value: Markup) -> Markup {
    html! {
        div class="flex justify-between" {
            dt class="text-sm text-gray-500" { (label) }
            dd class="text-sm text-gray-900" { (value) }
        }
    }
}
