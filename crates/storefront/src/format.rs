//! Display formatting for prices, phone numbers and timestamps.
//!
//! Everything here is pt-BR presentation only; values keep their typed
//! form ([`Decimal`], [`NaiveDateTime`]) everywhere else.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub use cardapio_core::types::phone::mask_partial as phone_mask;

/// Format an amount as Brazilian currency, e.g. `R$ 1.234,50`.
///
/// Rounds to cents (half away from zero), uses `.` for thousands and `,`
/// for decimals.
#[must_use]
pub fn brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let total_cents = (rounded * Decimal::ONE_HUNDRED).to_i128().unwrap_or(0);

    let sign = if total_cents < 0 { "-" } else { "" };
    let cents = total_cents.unsigned_abs();
    let reais = group_thousands(cents / 100);
    let frac = cents % 100;

    format!("R$ {sign}{reais},{frac:02}")
}

/// Delivery fee label: `Grátis` when the fee is zero, a price otherwise.
#[must_use]
pub fn delivery_label(fee: Decimal) -> String {
    if fee.is_zero() {
        "Grátis".to_owned()
    } else {
        brl(fee)
    }
}

/// Order timestamp as shown in the history, e.g. `Em 12/07/2025 às 19:17`.
#[must_use]
pub fn order_timestamp(date: NaiveDateTime) -> String {
    format!("Em {} às {}", date.format("%d/%m/%Y"), date.format("%H:%M"))
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_brl_basic() {
        assert_eq!(brl(dec!(19.90)), "R$ 19,90");
        assert_eq!(brl(dec!(42)), "R$ 42,00");
        assert_eq!(brl(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn test_brl_thousands_grouping() {
        assert_eq!(brl(dec!(1234.50)), "R$ 1.234,50");
        assert_eq!(brl(dec!(1234567.89)), "R$ 1.234.567,89");
    }

    #[test]
    fn test_brl_rounds_half_away_from_zero() {
        assert_eq!(brl(dec!(10.005)), "R$ 10,01");
        assert_eq!(brl(dec!(10.004)), "R$ 10,00");
    }

    #[test]
    fn test_brl_negative() {
        assert_eq!(brl(dec!(-5.50)), "R$ -5,50");
    }

    #[test]
    fn test_delivery_label() {
        assert_eq!(delivery_label(Decimal::ZERO), "Grátis");
        assert_eq!(delivery_label(dec!(5)), "R$ 5,00");
    }

    #[test]
    fn test_order_timestamp() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 12)
            .unwrap()
            .and_hms_opt(19, 17, 0)
            .unwrap();
        assert_eq!(order_timestamp(date), "Em 12/07/2025 às 19:17");
    }

    #[test]
    fn test_phone_mask_reexport() {
        assert_eq!(phone_mask("92984076278"), "(92) 98407-6278");
    }
}
