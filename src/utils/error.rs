use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::garage::GarageError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No free parking spaces left")]
    FullCapacity,

    #[error("Ticket '{0}' was not found")]
    TicketNotFound(String),

    #[error("Unknown payment method '{0}'")]
    InvalidPaymentMethod(String),
}

impl From<GarageError> for AppError {
    fn from(err: GarageError) -> Self {
        match err {
            GarageError::FullCapacity => AppError::FullCapacity,
            GarageError::TicketNotFound(bar_code) => AppError::TicketNotFound(bar_code),
            GarageError::InvalidPaymentMethod(method) => AppError::InvalidPaymentMethod(method),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::FullCapacity => StatusCode::CONFLICT,
            AppError::TicketNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidPaymentMethod(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::FullCapacity => "FULL_CAPACITY",
            AppError::TicketNotFound(_) => "TICKET_NOT_FOUND",
            AppError::InvalidPaymentMethod(_) => "INVALID_PAYMENT_METHOD",
        }
    }

    fn log(&self) {
        error!(error = ?self, code = self.code(), "Request failed");
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        // These are all caller-input errors; the Display message is safe to
        // expose as-is.
        error_response(self.code(), self.to_string(), None, self.status_code())
    }
}
