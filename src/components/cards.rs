use maud::{Markup, html};

use crate::models::{Courier, Restaurant};

fn availability_pill(ok: bool, yes: &str, no: &str) -> Markup {
    let style = if ok {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    };
    html! {
        span class={ "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium " (style) } {
            (if ok { yes } else { no })
        }
    }
}

/// Consumer-facing card with the open flag and a link to the menu.
pub fn restaurant_card(restaurant: &Restaurant) -> Markup {
    html! {
        div class="bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow" {
            div class="p-5" {
                div class="flex items-start justify-between" {
                    div {
                        h3 class="text-lg font-semibold text-gray-900" { (restaurant.name) }
                        p class="text-sm text-gray-500 mt-1" { (restaurant.address) }
                        p class="text-sm text-gray-500" { (restaurant.phone) }
                    }
                    (availability_pill(restaurant.is_open, "Open", "Closed"))
                }
                div class="mt-4 flex items-center justify-between" {
                    span class="text-sm text-gray-500" { (restaurant.menu_items.len()) " menu items" }
                    a href={ "/consumer/restaurants/" (restaurant.id) "/menu" }
                        class="inline-flex items-center px-3 py-1.5 border border-orange-500 text-sm font-medium rounded-md text-orange-600 hover:bg-orange-50 transition-colors" {
                        "View Menu"
                    }
                }
            }
        }
    }
}

/// Restaurant-role card linking to the kitchen tickets.
pub fn kitchen_card(restaurant: &Restaurant) -> Markup {
    html! {
        a href={ "/restaurant/" (restaurant.id) "/tickets" }
            class="block bg-white rounded-lg shadow-md p-5 hover:shadow-lg transition-shadow" {
            h3 class="text-lg font-semibold text-gray-900" { (restaurant.name) }
            p class="text-sm text-gray-500 mt-1" { (restaurant.address) }
            p class="text-sm text-gray-500" { (restaurant.phone) }
            div class="mt-3 text-orange-600 text-sm font-medium" { "Manage Tickets \u{2192}" }
        }
    }
}

pub fn courier_card(courier: &Courier) -> Markup {
    html! {
        a href={ "/courier/" (courier.id) "/deliveries" }
            class="block bg-white rounded-lg shadow-md p-5 hover:shadow-lg transition-shadow" {
            div class="flex items-center justify-between" {
                h3 class="text-lg font-semibold text-gray-900" { (courier.name) }
                (availability_pill(courier.available, "Available", "Busy"))
            }
            p class="text-sm text-gray-500 mt-1" { (courier.phone) }
            div class="mt-3 text-orange-600 text-sm font-medium" { "View Deliveries \u{2192}" }
        }
    }
}
