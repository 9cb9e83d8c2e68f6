use axum::extract::State;
use maud::{Markup, html};

use crate::{components::page, state::AppState, upstream::Service};

struct Role {
    title: &'static str,
    description: &'static str,
    href: &'static str,
    color: &'static str,
    icon: &'static str,
}

const ROLES: [Role; 3] = [
    Role {
        title: "Consumer",
        description: "Browse restaurants, view menus, and place food orders.",
        href: "/consumer/restaurants",
        color: "bg-orange-500",
        icon: "\u{1F6D2}",
    },
    Role {
        title: "Restaurant",
        description: "Manage kitchen tickets: accept, prepare, and mark orders ready.",
        href: "/restaurant",
        color: "bg-green-500",
        icon: "\u{1F373}",
    },
    Role {
        title: "Courier",
        description: "View and manage deliveries: assign, pick up, and deliver orders.",
        href: "/courier",
        color: "bg-blue-500",
        icon: "\u{1F69A}",
    },
];

// Couriers are part of the delivery service, so they are not listed separately.
const SERVICES: [(Service, &str, &str); 6] = [
    (Service::Orders, "Order Service", "Order lifecycle"),
    (Service::Restaurants, "Restaurant Service", "Menus & restaurants"),
    (Service::Notifications, "Notification Service", "Kafka notifications"),
    (Service::Payments, "Accounting Service", "Payment auth"),
    (Service::Kitchen, "Kitchen Service", "Ticket management"),
    (Service::Deliveries, "Delivery Service", "Courier & delivery"),
];

pub async fn home(State(state): State<AppState>) -> Markup {
    let content = html! {
        div class="text-center mb-12" {
            h1 class="text-4xl font-bold text-gray-900 mb-4" { "Food To Go" }
            p class="text-lg text-gray-600 max-w-2xl mx-auto" {
                "A microservices training platform. Choose a role to get started."
            }
        }
        div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto" {
            @for role in &ROLES {
                a href=(role.href) class="group block bg-white rounded-xl shadow-md overflow-hidden hover:shadow-xl transition-all hover:-translate-y-1" {
                    div class={ (role.color) " h-2" } {}
                    div class="p-6" {
                        div class="text-4xl mb-4" { (role.icon) }
                        h2 class="text-xl font-semibold text-gray-900 group-hover:text-orange-600 transition-colors" { (role.title) }
                        p class="mt-2 text-sm text-gray-500" { (role.description) }
                    }
                }
            }
        }
        div class="mt-16 bg-white rounded-xl shadow-md p-8 max-w-4xl mx-auto" {
            h2 class="text-2xl font-bold text-gray-900 mb-4" { "Architecture" }
            p class="text-gray-600 mb-6" {
                "This app is a " strong { "server-rendered frontend" } " that talks to 6 backend microservices through "
                strong { "BFF (Backend For Frontend) API routes" } "."
                @if state.services.is_gateway() {
                    " All of them are reached through a single API gateway."
                }
            }
            div class="grid grid-cols-2 md:grid-cols-3 gap-4" {
                @for (service, name, description) in &SERVICES {
                    div class="bg-gray-50 rounded-lg p-4 border border-gray-200" {
                        div class="font-medium text-gray-900 text-sm" { (name) }
                        div class="text-xs text-gray-500 mt-1 font-mono" { (state.services.base_url(*service)) }
                        div class="text-xs text-gray-400 mt-0.5" { (description) }
                    }
                }
            }
        }
    };
    page("Home", None, content)
}
