use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A parking ticket, valid from the moment a space is occupied until the
/// driver checks out. Payments are appended in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub bar_code: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date_of_issuance: DateTime<Utc>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Ticket {
    pub fn last_payment(&self) -> Option<&Payment> {
        self.payments.last()
    }

    /// The instant from which elapsed time is currently billed: the most
    /// recent payment, or the issuance if nothing has been paid yet.
    pub fn billing_anchor(&self) -> DateTime<Utc> {
        self.last_payment()
            .map(|payment| payment.payment_date)
            .unwrap_or(self.date_of_issuance)
    }

    /// The anchor the most recent payment was billed against, i.e. the
    /// payment before it, or the issuance for a first payment.
    pub fn anchor_before_last_payment(&self) -> DateTime<Utc> {
        match self.payments.len() {
            0 | 1 => self.date_of_issuance,
            n => self.payments[n - 2].payment_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub payment_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketState {
    Paid,
    Unpaid,
}

/// Outcome of a price calculation. `Due` carries the amount owed for the
/// current billing cycle; `Settled` means the ticket is inside its grace
/// window and carries the receipt of the payment that settled it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PriceQuote {
    #[serde(rename_all = "camelCase")]
    Due { ticket_price: i64 },
    #[serde(rename_all = "camelCase")]
    Settled {
        ticket_price: i64,
        payment_receipt: [String; 3],
    },
}

impl PriceQuote {
    pub fn due(amount: i64) -> Self {
        PriceQuote::Due {
            ticket_price: amount,
        }
    }

    pub fn settled(receipt: [String; 3]) -> Self {
        PriceQuote::Settled {
            ticket_price: 0,
            payment_receipt: receipt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn payment_method_parses_wire_names() {
        assert_eq!(PaymentMethod::from_str("CASH"), Ok(PaymentMethod::Cash));
        assert_eq!(
            PaymentMethod::from_str("CREDIT_CARD"),
            Ok(PaymentMethod::CreditCard)
        );
        assert_eq!(
            PaymentMethod::from_str("DEBIT_CARD"),
            Ok(PaymentMethod::DebitCard)
        );
        assert!(PaymentMethod::from_str("BITCOIN").is_err());
    }

    #[test]
    fn payment_method_displays_wire_names() {
        assert_eq!(PaymentMethod::CreditCard.to_string(), "CREDIT_CARD");
    }

    #[test]
    fn billing_anchor_follows_last_payment() {
        let issued = Utc.with_ymd_and_hms(2020, 3, 10, 0, 0, 0).unwrap();
        let first = Utc.with_ymd_and_hms(2020, 3, 10, 3, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2020, 3, 10, 4, 0, 0).unwrap();

        let mut ticket = Ticket {
            bar_code: "1223352031944154".to_string(),
            date_of_issuance: issued,
            payments: vec![],
        };
        assert_eq!(ticket.billing_anchor(), issued);
        assert_eq!(ticket.anchor_before_last_payment(), issued);

        ticket.payments.push(Payment {
            payment_date: first,
            payment_method: PaymentMethod::Cash,
        });
        assert_eq!(ticket.billing_anchor(), first);
        assert_eq!(ticket.anchor_before_last_payment(), issued);

        ticket.payments.push(Payment {
            payment_date: second,
            payment_method: PaymentMethod::Cash,
        });
        assert_eq!(ticket.billing_anchor(), second);
        assert_eq!(ticket.anchor_before_last_payment(), first);
    }

    #[test]
    fn ticket_serializes_timestamps_as_millis() {
        let issued = Utc.timestamp_millis_opt(1583805600000).unwrap();
        let ticket = Ticket {
            bar_code: "1223352031944154".to_string(),
            date_of_issuance: issued,
            payments: vec![],
        };
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["barCode"], "1223352031944154");
        assert_eq!(json["dateOfIssuance"], 1583805600000i64);
    }

    #[test]
    fn price_quote_matches_the_two_wire_shapes() {
        let due = serde_json::to_value(PriceQuote::due(6)).unwrap();
        assert_eq!(due["ticketPrice"], 6);
        assert!(due.get("paymentReceipt").is_none());

        let settled = serde_json::to_value(PriceQuote::settled([
            "Paid: 6€".to_string(),
            "Payment date: Dienstag, 10. März 2020 um 03:00:00".to_string(),
            "Payment method: CASH".to_string(),
        ]))
        .unwrap();
        assert_eq!(settled["ticketPrice"], 0);
        assert_eq!(settled["paymentReceipt"].as_array().unwrap().len(), 3);
    }
}
