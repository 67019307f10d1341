use chrono::{DateTime, Locale, Utc};

use crate::models::PaymentMethod;

/// The three receipt lines shown to the driver after a payment.
pub fn format_receipt(
    amount: i64,
    payment_date: DateTime<Utc>,
    payment_method: PaymentMethod,
) -> [String; 3] {
    [
        format!("Paid: {amount}€"),
        format!("Payment date: {}", format_payment_date(payment_date)),
        format!("Payment method: {payment_method}"),
    ]
}

/// German long form, e.g. "Dienstag, 10. März 2020 um 03:00:00".
pub fn format_payment_date(payment_date: DateTime<Utc>) -> String {
    payment_date
        .format_localized("%A, %d. %B %Y um %H:%M:%S", Locale::de_DE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn payment_date_uses_german_long_form() {
        let date = Utc.with_ymd_and_hms(2020, 3, 10, 3, 0, 0).unwrap();
        assert_eq!(
            format_payment_date(date),
            "Dienstag, 10. März 2020 um 03:00:00"
        );
    }

    #[test]
    fn single_digit_days_are_zero_padded() {
        let date = Utc.with_ymd_and_hms(2020, 3, 1, 14, 5, 9).unwrap();
        assert_eq!(
            format_payment_date(date),
            "Sonntag, 01. März 2020 um 14:05:09"
        );
    }

    #[test]
    fn receipt_has_the_three_expected_lines() {
        let date = Utc.with_ymd_and_hms(2020, 3, 10, 3, 0, 0).unwrap();
        let receipt = format_receipt(6, date, PaymentMethod::Cash);
        assert_eq!(
            receipt,
            [
                "Paid: 6€".to_string(),
                "Payment date: Dienstag, 10. März 2020 um 03:00:00".to_string(),
                "Payment method: CASH".to_string(),
            ]
        );
    }
}
