use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::garage::{Garage, GarageError};
use crate::models::{Payment, PaymentMethod, PriceQuote, Ticket, TicketState};
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "garage-api",
    };

    success(payload, "Health check successful").into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    bar_code: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayTicketRequest {
    bar_code: String,
    payment_method: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketPayload {
    ticket: Ticket,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FreeSpacesPayload {
    free_spaces: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketStatePayload {
    ticket_state: TicketState,
}

#[derive(Serialize)]
struct CheckoutPayload {
    success: bool,
}

fn validated_bar_code(bar_code: &str) -> Result<&str, AppError> {
    if bar_code.is_empty() {
        return Err(AppError::ValidationError(
            "barCode must not be empty".to_string(),
        ));
    }
    Ok(bar_code)
}

/// `POST /get-ticket`: occupy a space and hand out a fresh ticket.
pub async fn get_ticket(State(garage): State<Arc<Garage>>) -> Result<Response, AppError> {
    let ticket = garage.issue_ticket(Utc::now())?;
    Ok(success(TicketPayload { ticket }, "Ticket issued").into_response())
}

/// `GET /free-spaces`: how many spaces are currently vacant.
pub async fn free_spaces(State(garage): State<Arc<Garage>>) -> Response {
    let payload = FreeSpacesPayload {
        free_spaces: garage.free_spaces(),
    };
    success(payload, "Free parking spaces counted").into_response()
}

/// `POST /calculate-price`: the amount due now, or a zero price with the
/// latest receipt while the ticket is inside its grace window.
pub async fn calculate_price(
    State(garage): State<Arc<Garage>>,
    Json(request): Json<TicketRequest>,
) -> Result<Response, AppError> {
    let bar_code = validated_bar_code(&request.bar_code)?;
    let quote: PriceQuote = garage.calculate_price(bar_code, Utc::now())?;
    Ok(success(quote, "Price calculated").into_response())
}

/// `POST /pay-ticket`: record a payment for the ticket.
pub async fn pay_ticket(
    State(garage): State<Arc<Garage>>,
    Json(request): Json<PayTicketRequest>,
) -> Result<Response, AppError> {
    let bar_code = validated_bar_code(&request.bar_code)?;
    let method = PaymentMethod::from_str(&request.payment_method)
        .map_err(|_| GarageError::InvalidPaymentMethod(request.payment_method.clone()))?;
    let payment: Payment = garage.record_payment(bar_code, method, Utc::now())?;
    Ok(success(payment, "Payment recorded").into_response())
}

/// `POST /ticket-state`: PAID while inside the grace window, UNPAID otherwise.
pub async fn ticket_state(
    State(garage): State<Arc<Garage>>,
    Json(request): Json<TicketRequest>,
) -> Result<Response, AppError> {
    let bar_code = validated_bar_code(&request.bar_code)?;
    let state = garage.ticket_state(bar_code, Utc::now())?;
    Ok(success(
        TicketStatePayload {
            ticket_state: state,
        },
        "Ticket state evaluated",
    )
    .into_response())
}

/// `POST /checkout-success`: open the gate if the ticket is paid, releasing
/// the ticket and its space together. An unpaid ticket keeps its space.
pub async fn checkout_success(
    State(garage): State<Arc<Garage>>,
    Json(request): Json<TicketRequest>,
) -> Result<Response, AppError> {
    let bar_code = validated_bar_code(&request.bar_code)?;
    let opened = garage.checkout(bar_code, Utc::now())?;
    let message = if opened {
        "Checkout complete, goodbye"
    } else {
        "Ticket is not paid"
    };
    Ok(success(CheckoutPayload { success: opened }, message).into_response())
}
