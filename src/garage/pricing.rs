use chrono::{DateTime, Utc};

use crate::garage::{GRACE_PERIOD_SECS, HOURLY_RATE};
use crate::models::{Ticket, TicketState};

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Price for the time elapsed between `anchor` and `now`: every started hour
/// is billed in full. `anchor` is the issuance for an unpaid ticket, or the
/// most recent payment once one exists.
pub fn calculate_ticket_price(anchor: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed_millis = (now - anchor).num_milliseconds().abs();
    let billed_hours = (elapsed_millis + MILLIS_PER_HOUR - 1) / MILLIS_PER_HOUR;
    billed_hours * HOURLY_RATE
}

/// A ticket is PAID for the 15 minutes following its most recent payment.
/// The boundary is inclusive at second granularity: exactly 15:00 after the
/// payment is still PAID, 15:01 is not.
pub fn calculate_ticket_state(ticket: &Ticket, now: DateTime<Utc>) -> TicketState {
    let Some(payment) = ticket.last_payment() else {
        return TicketState::Unpaid;
    };
    let elapsed_secs = (now - payment.payment_date).num_seconds().abs();
    if elapsed_secs <= GRACE_PERIOD_SECS {
        TicketState::Paid
    } else {
        TicketState::Unpaid
    }
}
