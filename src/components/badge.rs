use maud::{Markup, html};

const NEUTRAL: &str = "bg-gray-100 text-gray-800";

/// Colour classes for a status. Statuses are owned upstream, so anything
/// unrecognised gets the neutral style.
pub fn status_style(status: &str) -> &'static str {
    match status {
        "PENDING" | "CREATED" => "bg-yellow-100 text-yellow-800",
        "APPROVED" | "ACCEPTED" | "COURIER_ASSIGNED" => "bg-blue-100 text-blue-800",
        "REJECTED" | "FAILED" => "bg-red-100 text-red-800",
        "PREPARING" => "bg-indigo-100 text-indigo-800",
        "READY_FOR_PICKUP" => "bg-purple-100 text-purple-800",
        "PICKED_UP" => "bg-cyan-100 text-cyan-800",
        "DELIVERED" | "AUTHORIZED" | "CHARGED" => "bg-green-100 text-green-800",
        _ => NEUTRAL,
    }
}

pub fn status_label(status: &str) -> String {
    status.replace('_', " ")
}

pub fn status_badge(status: &str) -> Markup {
    html! {
        span class={ "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium " (status_style(status)) } {
            (status_label(status))
        }
    }
}
