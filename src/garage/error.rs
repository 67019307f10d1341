use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GarageError {
    #[error("No free parking spaces left")]
    FullCapacity,

    #[error("Ticket '{0}' was not found")]
    TicketNotFound(String),

    #[error("Unknown payment method '{0}'")]
    InvalidPaymentMethod(String),
}
