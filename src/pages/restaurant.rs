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
        cards::kitchen_card,
        error_box,
        format::time_of_day,
        layout::refresh_note,
        page, status_badge,
        stepper::{TICKET_FLOW, legend},
        workflow_stepper,
    },
    error::{AppError, AppResult},
    models::{KitchenTicket, Restaurant},
    state::AppState,
};

/// Kitchen ticket transitions a restaurant can trigger from the ticket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    Accept,
    Preparing,
    Ready,
}

impl TicketAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "accept" => Some(TicketAction::Accept),
            "preparing" => Some(TicketAction::Preparing),
            "ready" => Some(TicketAction::Ready),
            _ => None,
        }
    }

    fn path(self) -> &'static str {
        match self {
            TicketAction::Accept => "accept",
            TicketAction::Preparing => "preparing",
            TicketAction::Ready => "ready",
        }
    }

    /// The action offered for a ticket in `status`, if any.
    pub fn offered_for(status: &str) -> Option<Self> {
        match status {
            "CREATED" => Some(TicketAction::Accept),
            "ACCEPTED" => Some(TicketAction::Preparing),
            "PREPARING" => Some(TicketAction::Ready),
            _ => None,
        }
    }

    fn button(self) -> (&'static str, &'static str) {
        match self {
            TicketAction::Accept => ("Accept", "bg-blue-500 hover:bg-blue-600"),
            TicketAction::Preparing => ("Start Preparing", "bg-indigo-500 hover:bg-indigo-600"),
            TicketAction::Ready => ("Mark Ready", "bg-green-500 hover:bg-green-600"),
        }
    }

    async fn run(self, api: &ApiClient, ticket_id: i64) -> Result<KitchenTicket, ClientError> {
        let kitchen = api.kitchen();
        match self {
            TicketAction::Accept => kitchen.accept(ticket_id).await,
            TicketAction::Preparing => kitchen.preparing(ticket_id).await,
            TicketAction::Ready => kitchen.ready(ticket_id).await,
        }
    }
}

pub async fn dashboard(State(state): State<AppState>) -> Markup {
    let content = match state.api.restaurants().list().await {
        Ok(restaurants) => html! {
            h1 class="text-2xl font-bold text-gray-900 mb-2" { "Restaurant Dashboard" }
            p class="text-gray-500 mb-6" { "Select your restaurant to manage kitchen tickets." }
            div class="bg-white rounded-lg shadow-md p-6 mb-6" {
                h2 class="text-sm font-medium text-gray-500 mb-3" { "Kitchen Ticket Workflow" }
                div class="flex items-center space-x-4 text-sm text-gray-600" {
                    @for (i, status) in TICKET_FLOW.iter().enumerate() {
                        @if i > 0 { span { "\u{2192}" } }
                        span class={ (status_style(status)) " px-2 py-1 rounded" } { (status.replace('_', " ")) }
                    }
                }
            }
            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                @for restaurant in &restaurants {
                    (kitchen_card(restaurant))
                }
            }
        },
        Err(err) => error_box(&err.to_string()),
    };
    page("Restaurant Dashboard", None, content)
}

async fn load_tickets(
    api: &ApiClient,
    id: i64,
) -> Result<(Restaurant, Vec<KitchenTicket>), ClientError> {
    let (restaurants, kitchen) = (api.restaurants(), api.kitchen());
    tokio::try_join!(restaurants.get(id), kitchen.tickets(Some(id)))
}

pub async fn tickets(State(state): State<AppState>, Path(id): Path<i64>) -> Markup {
    let loaded = load_tickets(&state.api, id).await;
    tickets_page(&state, id, loaded, None)
}

/// Runs a ticket transition, then shows the re-fetched table. On failure the
/// upstream message is shown above the table.
pub async fn ticket_action(
    State(state): State<AppState>,
    Path((id, ticket_id, action)): Path<(i64, i64, String)>,
) -> AppResult<Response> {
    let action = TicketAction::parse(&action).ok_or(AppError::NotFound)?;

    match action.run(&state.api, ticket_id).await {
        Ok(ticket) => {
            tracing::info!(ticket_id, status = %ticket.status, "ticket updated");
            Ok(Redirect::to(&format!("/restaurant/{id}/tickets")).into_response())
        }
        Err(err) => {
            let message = err.to_string();
            let loaded = load_tickets(&state.api, id).await;
            Ok(tickets_page(&state, id, loaded, Some(&message)).into_response())
        }
    }
}

fn tickets_page(
    state: &AppState,
    id: i64,
    loaded: Result<(Restaurant, Vec<KitchenTicket>), ClientError>,
    action_error: Option<&str>,
) -> Markup {
    let refresh = Refresh::new(state.poll_interval, format!("/restaurant/{id}/tickets"));
    let (restaurant, tickets) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => return page("Kitchen Tickets", Some(&refresh), error_box(&err.to_string())),
    };

    let content = html! {
        div class="flex items-center justify-between mb-6" {
            div {
                h1 class="text-2xl font-bold text-gray-900" { (restaurant.name) " - Kitchen Tickets" }
                (refresh_note(state.poll_interval))
            }
            a href="/restaurant" class="text-orange-600 hover:underline text-sm font-medium" { "Back to Dashboard" }
        }
        div class="bg-white rounded-lg shadow-md p-6 mb-6" {
            (workflow_stepper(&legend(TICKET_FLOW)))
        }
        @if let Some(error) = action_error {
            (error_box(error))
        }
        @if tickets.is_empty() {
            div class="text-center py-12 text-gray-500" {
                "No kitchen tickets yet. Place an order as a consumer first."
            }
        } @else {
            div class="bg-white rounded-lg shadow-md overflow-hidden" {
                table class="min-w-full divide-y divide-gray-200" {
                    thead class="bg-gray-50" {
                        tr {
                            @for heading in ["Ticket #", "Order #", "Items", "Status", "Created", "Actions"] {
                                th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase" { (heading) }
                            }
                        }
                    }
                    tbody class="divide-y divide-gray-200" {
                        @for ticket in &tickets {
                            tr class="hover:bg-gray-50" {
                                td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900" { "#" (ticket.id) }
                                td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600" { "#" (ticket.order_id) }
                                td class="px-6 py-4 text-sm text-gray-600 max-w-xs truncate" { (ticket.items) }
                                td class="px-6 py-4 whitespace-nowrap" { (status_badge(&ticket.status)) }
                                td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500" { (time_of_day(&ticket.created_at)) }
                                td class="px-6 py-4 whitespace-nowrap" { (ticket_controls(id, ticket)) }
                            }
                        }
                    }
                }
            }
        }
    };
    page(&format!("{} - Kitchen Tickets", restaurant.name), Some(&refresh), content)
}

fn ticket_controls(restaurant_id: i64, ticket: &KitchenTicket) -> Markup {
    html! {
        @if let Some(action) = TicketAction::offered_for(&ticket.status) {
            @let label = action.button().0;
            @let style = action.button().1;
            form method="post" action={ "/restaurant/" (restaurant_id) "/tickets/" (ticket.id) "/" (action.path()) } {
                button type="submit" class={ "text-white px-3 py-1 rounded text-xs font-medium " (style) } { (label) }
            }
        } @else if ticket.status == "READY_FOR_PICKUP" {
            span class="text-green-600 text-xs font-medium" { "Done" }
        }
    }
}
