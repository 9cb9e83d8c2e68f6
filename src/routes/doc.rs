use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::routes::{
    couriers, deliveries, health, kitchen, notifications, orders, payments, restaurants,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::cancel_order,
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::get_menu,
        kitchen::list_tickets,
        kitchen::accept_ticket,
        kitchen::start_preparing,
        kitchen::mark_ready,
        deliveries::list_deliveries,
        deliveries::list_courier_deliveries,
        deliveries::assign_courier,
        deliveries::pickup_delivery,
        deliveries::complete_delivery,
        couriers::list_couriers,
        couriers::get_courier,
        payments::get_order_payment,
        notifications::list_order_notifications
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Orders", description = "Relayed to the order service"),
        (name = "Restaurants", description = "Relayed to the restaurant service"),
        (name = "Kitchen", description = "Relayed to the kitchen service"),
        (name = "Deliveries", description = "Relayed to the delivery service"),
        (name = "Couriers", description = "Relayed to the delivery service"),
        (name = "Payments", description = "Relayed to the accounting service"),
        (name = "Notifications", description = "Relayed to the notification service"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
