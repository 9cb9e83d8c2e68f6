use maud::{Markup, html};

use super::badge::status_label;

pub const ORDER_FLOW: &[&str] = &[
    "PENDING",
    "APPROVED",
    "PREPARING",
    "READY_FOR_PICKUP",
    "PICKED_UP",
    "DELIVERED",
];

pub const TICKET_FLOW: &[&str] = &["CREATED", "ACCEPTED", "PREPARING", "READY_FOR_PICKUP"];

pub const DELIVERY_FLOW: &[&str] = &["PENDING", "COURIER_ASSIGNED", "PICKED_UP", "DELIVERED"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub done: bool,
    pub active: bool,
}

/// Steps before `status` are done and `status` itself is active. A status
/// outside the flow marks nothing.
pub fn steps_for(flow: &[&str], status: &str) -> Vec<Step> {
    let current = flow.iter().position(|step| *step == status);
    flow.iter()
        .enumerate()
        .map(|(i, step)| Step {
            label: status_label(step),
            done: current.is_some_and(|idx| i < idx),
            active: current == Some(i),
        })
        .collect()
}

/// The flow with no progress, used as a legend.
pub fn legend(flow: &[&str]) -> Vec<Step> {
    steps_for(flow, "")
}

pub fn workflow_stepper(steps: &[Step]) -> Markup {
    html! {
        div class="flex items-center space-x-2 overflow-x-auto py-2" {
            @for (i, step) in steps.iter().enumerate() {
                div class="flex items-center" {
                    @if i > 0 {
                        div class={ "w-8 h-0.5 " (if step.done || step.active { "bg-orange-400" } else { "bg-gray-300" }) } {}
                    }
                    div class="flex flex-col items-center min-w-[80px]" {
                        @let circle = if step.done {
                            "bg-green-500 text-white"
                        } else if step.active {
                            "bg-orange-500 text-white ring-2 ring-orange-300"
                        } else {
                            "bg-gray-200 text-gray-500"
                        };
                        div class={ "w-8 h-8 rounded-full flex items-center justify-center text-sm font-medium " (circle) } {
                            @if step.done { "\u{2713}" } @else { (i + 1) }
                        }
                        span class={ "text-xs mt-1 text-center " (if step.active { "font-semibold text-orange-600" } else { "text-gray-500" }) } {
                            (step.label)
                        }
                    }
                }
            }
        }
    }
}
