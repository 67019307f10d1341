use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::garage::Garage;
use crate::handlers::{
    calculate_price, checkout_success, free_spaces, get_ticket, health_check, pay_ticket,
    ticket_state,
};

pub fn create_routes(garage: Arc<Garage>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/get-ticket", post(get_ticket))
        .route("/free-spaces", get(free_spaces))
        .route("/calculate-price", post(calculate_price))
        .route("/pay-ticket", post(pay_ticket))
        .route("/ticket-state", post(ticket_state))
        .route("/checkout-success", post(checkout_success))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(garage)
}
