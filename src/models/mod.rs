pub mod space;
pub mod ticket;

pub use space::ParkingSpace;
pub use ticket::{Payment, PaymentMethod, PriceQuote, Ticket, TicketState};
