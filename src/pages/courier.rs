use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    client::{ApiClient, ClientError},
    components::{
        Refresh,
        badge::status_style,
        cards::courier_card,
        error_box,
        layout::refresh_note,
        page, status_badge,
        stepper::{DELIVERY_FLOW, legend},
        workflow_stepper,
    },
    error::{AppError, AppResult},
    models::{Courier, Delivery},
    state::AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryAction {
    Assign,
    Pickup,
    Deliver,
}

impl DeliveryAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "assign" => Some(DeliveryAction::Assign),
            "pickup" => Some(DeliveryAction::Pickup),
            "deliver" => Some(DeliveryAction::Deliver),
            _ => None,
        }
    }

    async fn run(
        self,
        api: &ApiClient,
        delivery_id: i64,
        courier_id: i64,
    ) -> Result<Delivery, ClientError> {
        let deliveries = api.deliveries();
        match self {
            DeliveryAction::Assign => deliveries.assign(delivery_id, courier_id).await,
            DeliveryAction::Pickup => deliveries.pickup(delivery_id).await,
            DeliveryAction::Deliver => deliveries.deliver(delivery_id).await,
        }
    }
}

pub async fn dashboard(State(state): State<AppState>) -> Markup {
    let content = match state.api.deliveries().couriers().await {
        Ok(couriers) => html! {
            h1 class="text-2xl font-bold text-gray-900 mb-2" { "Courier Dashboard" }
            p class="text-gray-500 mb-6" { "Select your courier identity to manage deliveries." }
            div class="bg-white rounded-lg shadow-md p-6 mb-6" {
                h2 class="text-sm font-medium text-gray-500 mb-3" { "Delivery Workflow" }
                div class="flex items-center space-x-4 text-sm text-gray-600" {
                    @for (i, status) in DELIVERY_FLOW.iter().enumerate() {
                        @if i > 0 { span { "\u{2192}" } }
                        span class={ (status_style(status)) " px-2 py-1 rounded" } { (status.replace('_', " ")) }
                    }
                }
            }
            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                @for courier in &couriers {
                    (courier_card(courier))
                }
            }
        },
        Err(err) => error_box(&err.to_string()),
    };
    page("Courier Dashboard", None, content)
}

pub struct CourierBoard {
    pub courier: Option<Courier>,
    pub mine: Vec<Delivery>,
    pub pending: Vec<Delivery>,
}

/// The courier record is optional; both delivery lists are required.
pub async fn load_board(api: &ApiClient, courier_id: i64) -> Result<CourierBoard, ClientError> {
    let deliveries = api.deliveries();
    let (courier, mine, all) = tokio::join!(
        deliveries.courier(courier_id),
        deliveries.by_courier(courier_id),
        deliveries.list(),
    );
    Ok(CourierBoard {
        courier: courier.ok(),
        mine: mine?,
        pending: all?
            .into_iter()
            .filter(|delivery| delivery.status == "PENDING")
            .collect(),
    })
}

pub async fn deliveries(State(state): State<AppState>, Path(id): Path<i64>) -> Markup {
    let board = load_board(&state.api, id).await;
    deliveries_page(&state, id, board, None)
}

pub async fn delivery_action(
    State(state): State<AppState>,
    Path((id, delivery_id, action)): Path<(i64, i64, String)>,
) -> AppResult<Response> {
    let action = DeliveryAction::parse(&action).ok_or(AppError::NotFound)?;

    match action.run(&state.api, delivery_id, id).await {
        Ok(delivery) => {
            tracing::info!(delivery_id, courier_id = id, status = %delivery.status, "delivery updated");
            Ok(Redirect::to(&format!("/courier/{id}/deliveries")).into_response())
        }
        Err(err) => {
            let message = err.to_string();
            let board = load_board(&state.api, id).await;
            Ok(deliveries_page(&state, id, board, Some(&message)).into_response())
        }
    }
}

fn deliveries_page(
    state: &AppState,
    id: i64,
    board: Result<CourierBoard, ClientError>,
    action_error: Option<&str>,
) -> Markup {
    let refresh = Refresh::new(state.poll_interval, format!("/courier/{id}/deliveries"));
    let board = match board {
        Ok(board) => board,
        Err(err) => return page("Deliveries", Some(&refresh), error_box(&err.to_string())),
    };
    let name = board
        .courier
        .as_ref()
        .map(|courier| courier.name.clone())
        .unwrap_or_else(|| format!("Courier #{id}"));

    let content = html! {
        div class="flex items-center justify-between mb-6" {
            div {
                h1 class="text-2xl font-bold text-gray-900" { (name) " - Deliveries" }
                (refresh_note(state.poll_interval))
            }
            a href="/courier" class="text-orange-600 hover:underline text-sm font-medium" { "Back to Dashboard" }
        }
        div class="bg-white rounded-lg shadow-md p-6 mb-6" {
            (workflow_stepper(&legend(DELIVERY_FLOW)))
        }
        @if let Some(error) = action_error {
            (error_box(error))
        }
        div class="mb-8" {
            h2 class="text-lg font-semibold text-gray-900 mb-4" { "My Deliveries" }
            @if board.mine.is_empty() {
                div class="text-center py-8 text-gray-500 bg-white rounded-lg shadow-sm" {
                    "No deliveries assigned to you yet."
                }
            } @else {
                (delivery_table(&board.mine, true, |delivery| my_controls(id, delivery)))
            }
        }
        div {
            h2 class="text-lg font-semibold text-gray-900 mb-4" { "Pending Deliveries" }
            @if board.pending.is_empty() {
                div class="text-center py-8 text-gray-500 bg-white rounded-lg shadow-sm" {
                    "No pending deliveries available."
                }
            } @else {
                (delivery_table(&board.pending, false, |delivery| action_button(id, delivery.id, DeliveryAction::Assign)))
            }
        }
    };
    page(&format!("{name} - Deliveries"), Some(&refresh), content)
}

fn delivery_table(
    deliveries: &[Delivery],
    with_status: bool,
    controls: impl Fn(&Delivery) -> Markup,
) -> Markup {
    html! {
        div class="bg-white rounded-lg shadow-md overflow-hidden" {
            table class="min-w-full divide-y divide-gray-200" {
                thead class="bg-gray-50" {
                    tr {
                        @for heading in ["ID", "Order #", "Pickup", "Delivery"] {
                            th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase" { (heading) }
                        }
                        @if with_status {
                            th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase" { "Status" }
                        }
                        th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase" { "Actions" }
                    }
                }
                tbody class="divide-y divide-gray-200" {
                    @for delivery in deliveries {
                        tr class="hover:bg-gray-50" {
                            td class="px-6 py-4 text-sm font-medium text-gray-900" { "#" (delivery.id) }
                            td class="px-6 py-4 text-sm text-gray-600" { "#" (delivery.order_id) }
                            td class="px-6 py-4 text-sm text-gray-600" { (delivery.pickup_address) }
                            td class="px-6 py-4 text-sm text-gray-600" { (delivery.delivery_address) }
                            @if with_status {
                                td class="px-6 py-4" { (status_badge(&delivery.status)) }
                            }
                            td class="px-6 py-4" { (controls(delivery)) }
                        }
                    }
                }
            }
        }
    }
}

fn my_controls(courier_id: i64, delivery: &Delivery) -> Markup {
    match delivery.status.as_str() {
        "COURIER_ASSIGNED" => action_button(courier_id, delivery.id, DeliveryAction::Pickup),
        "PICKED_UP" => action_button(courier_id, delivery.id, DeliveryAction::Deliver),
        "DELIVERED" => html! { span class="text-green-600 text-xs font-medium" { "Completed" } },
        _ => html! {},
    }
}

fn action_button(courier_id: i64, delivery_id: i64, action: DeliveryAction) -> Markup {
    let (path, label, style) = match action {
        DeliveryAction::Assign => ("assign", "Assign to Me", "bg-blue-500 hover:bg-blue-600"),
        DeliveryAction::Pickup => ("pickup", "Pick Up", "bg-cyan-500 hover:bg-cyan-600"),
        DeliveryAction::Deliver => ("deliver", "Deliver", "bg-green-500 hover:bg-green-600"),
    };
    html! {
        form method="post" action={ "/courier/" (courier_id) "/deliveries/" (delivery_id) "/" (path) } {
            button type="submit" class={ "text-white px-3 py-1 rounded text-xs font-medium " (style) } { (label) }
        }
    }
}
