use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::garage::barcode::generate_bar_code;
use crate::garage::error::GarageError;
use crate::garage::pricing::{calculate_ticket_price, calculate_ticket_state};
use crate::garage::receipt::format_receipt;
use crate::garage::PARKING_CAPACITY;
use crate::models::{ParkingSpace, Payment, PaymentMethod, PriceQuote, Ticket, TicketState};

struct GarageState {
    spaces: Vec<ParkingSpace>,
    tickets: HashMap<String, Ticket>,
    rng: StdRng,
}

/// The garage: the active ticket table plus the space table, guarded by a
/// single mutex so capacity checks and mutations cannot interleave.
pub struct Garage {
    state: Mutex<GarageState>,
}

impl Garage {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic construction for tests.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(GarageState {
                spaces: (0..PARKING_CAPACITY).map(ParkingSpace::vacant).collect(),
                tickets: HashMap::new(),
                rng,
            }),
        }
    }

    /// Issues a ticket for the lowest-numbered free space.
    pub fn issue_ticket(&self, now: DateTime<Utc>) -> Result<Ticket, GarageError> {
        let mut state = self.state.lock();
        let space_number = state
            .spaces
            .iter()
            .position(ParkingSpace::is_free)
            .ok_or(GarageError::FullCapacity)?;

        let mut bar_code = generate_bar_code(&mut state.rng);
        // Bar codes released earlier may come up again; active ones must not.
        while state.tickets.contains_key(&bar_code) {
            bar_code = generate_bar_code(&mut state.rng);
        }

        let ticket = Ticket {
            bar_code: bar_code.clone(),
            date_of_issuance: now,
            payments: Vec::new(),
        };
        state.spaces[space_number].bar_code = Some(bar_code.clone());
        state.tickets.insert(bar_code, ticket.clone());

        info!(bar_code = %ticket.bar_code, space_number, "ticket issued");
        Ok(ticket)
    }

    pub fn lookup_ticket(&self, bar_code: &str) -> Result<Ticket, GarageError> {
        self.state
            .lock()
            .tickets
            .get(bar_code)
            .cloned()
            .ok_or_else(|| GarageError::TicketNotFound(bar_code.to_string()))
    }

    /// Appends a payment to the ticket. Every call appends; earlier payments
    /// are never touched.
    pub fn record_payment(
        &self,
        bar_code: &str,
        payment_method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> Result<Payment, GarageError> {
        let mut state = self.state.lock();
        let ticket = state
            .tickets
            .get_mut(bar_code)
            .ok_or_else(|| GarageError::TicketNotFound(bar_code.to_string()))?;

        let payment = Payment {
            payment_date: now,
            payment_method,
        };
        ticket.payments.push(payment.clone());

        info!(bar_code, method = %payment_method, "payment recorded");
        Ok(payment)
    }

    /// Removes the ticket and frees its space in one step, so no space is
    /// ever left pointing at a ticket that no longer exists.
    pub fn release_ticket(&self, bar_code: &str) -> Result<(), GarageError> {
        let mut state = self.state.lock();
        if state.tickets.remove(bar_code).is_none() {
            return Err(GarageError::TicketNotFound(bar_code.to_string()));
        }
        Self::vacate_space(&mut state, bar_code);
        info!(bar_code, "ticket released");
        Ok(())
    }

    /// Gate checkout: releases the ticket only while it is PAID. Returns
    /// whether the gate opened; an UNPAID ticket stays in the store.
    pub fn checkout(&self, bar_code: &str, now: DateTime<Utc>) -> Result<bool, GarageError> {
        let mut state = self.state.lock();
        let ticket = state
            .tickets
            .get(bar_code)
            .ok_or_else(|| GarageError::TicketNotFound(bar_code.to_string()))?;

        if calculate_ticket_state(ticket, now) != TicketState::Paid {
            info!(bar_code, "checkout refused, ticket not paid");
            return Ok(false);
        }

        state.tickets.remove(bar_code);
        Self::vacate_space(&mut state, bar_code);
        info!(bar_code, "checkout complete");
        Ok(true)
    }

    fn vacate_space(state: &mut GarageState, bar_code: &str) {
        if let Some(space) = state
            .spaces
            .iter_mut()
            .find(|space| space.bar_code.as_deref() == Some(bar_code))
        {
            space.bar_code = None;
        }
    }

    pub fn free_spaces(&self) -> usize {
        self.state
            .lock()
            .spaces
            .iter()
            .filter(|space| space.is_free())
            .count()
    }

    pub fn ticket_state(
        &self,
        bar_code: &str,
        now: DateTime<Utc>,
    ) -> Result<TicketState, GarageError> {
        let state = self.state.lock();
        let ticket = state
            .tickets
            .get(bar_code)
            .ok_or_else(|| GarageError::TicketNotFound(bar_code.to_string()))?;
        Ok(calculate_ticket_state(ticket, now))
    }

    /// What the driver owes right now. Inside the grace window nothing is
    /// due and the quote carries the receipt of the settling payment; after
    /// the window a fresh billing cycle runs from that payment.
    pub fn calculate_price(
        &self,
        bar_code: &str,
        now: DateTime<Utc>,
    ) -> Result<PriceQuote, GarageError> {
        let state = self.state.lock();
        let ticket = state
            .tickets
            .get(bar_code)
            .ok_or_else(|| GarageError::TicketNotFound(bar_code.to_string()))?;

        let Some(last_payment) = ticket.last_payment() else {
            return Ok(PriceQuote::due(calculate_ticket_price(
                ticket.date_of_issuance,
                now,
            )));
        };

        match calculate_ticket_state(ticket, now) {
            TicketState::Paid => {
                let amount_paid = calculate_ticket_price(
                    ticket.anchor_before_last_payment(),
                    last_payment.payment_date,
                );
                Ok(PriceQuote::settled(format_receipt(
                    amount_paid,
                    last_payment.payment_date,
                    last_payment.payment_method,
                )))
            }
            TicketState::Unpaid => Ok(PriceQuote::due(calculate_ticket_price(
                ticket.billing_anchor(),
                now,
            ))),
        }
    }
}

impl Default for Garage {
    fn default() -> Self {
        Self::new()
    }
}
