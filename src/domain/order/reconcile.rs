//! Reconstructing a finished order from its fill history.
//!
//! The venue has no single endpoint that reports a closed order together
//! with its executions, so the final picture is synthesized from the live
//! status lookup plus the matching history entries.

use super::{Order, OrderStatus};
use crate::domain::market::Market;
use crate::domain::trade::Trade;
use rust_decimal::Decimal;

/// Volume-weighted average fill price, zero when nothing filled.
pub(crate) fn average_price(fills: &[Trade]) -> Decimal {
    let volume: Decimal = fills.iter().map(|f| f.amount_filled).sum();
    if volume.is_zero() {
        return Decimal::ZERO;
    }
    let notional: Decimal = fills.iter().map(|f| f.price * f.amount_filled).sum();
    (notional / volume).round_dp(8)
}

/// Combine a live status lookup with the order's fills into one record.
///
/// A terminal live status is authoritative. When the live lookup could not
/// settle the state, the fill sum decides: covering the expected amount
/// means completed, anything less means the remainder was cancelled.
pub(crate) fn synthesize(
    order_id: &str,
    market: &Market,
    expected_amount: Decimal,
    live_status: OrderStatus,
    fills: &[Trade],
) -> Order {
    let filled: Decimal = fills.iter().map(|f| f.amount_filled).sum();
    let status = if live_status.is_terminal() {
        live_status
    } else if filled >= expected_amount {
        OrderStatus::Completed
    } else {
        OrderStatus::Cancelled
    };

    let first = fills.first();
    Order {
        id: order_id.to_string(),
        market: Some(market.clone()),
        timestamp: first.map(|f| f.timestamp),
        price: average_price(fills),
        amount: expected_amount,
        // History can double-report; never claim more than was asked for.
        amount_filled: filled.min(expected_amount),
        fee_cost: fills.iter().map(|f| f.fee_cost).sum(),
        fee_currency: first.and_then(|f| f.fee_currency.clone()),
        side: first.map(|f| f.side),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Side;
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fill(price: &str, filled: &str, fee: &str) -> Trade {
        Trade {
            market: Market::from_currencies("BTC", "USDT"),
            order_id: Some("uuid-1".to_string()),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            price: dec(price),
            amount: dec(filled),
            amount_filled: dec(filled),
            fee_cost: dec(fee),
            fee_currency: Some("USDT".to_string()),
            side: Side::Buy,
            status: OrderStatus::Unknown,
        }
    }

    #[test]
    fn average_price_is_volume_weighted() {
        // (10*1 + 60*3) / 4 = 47.5
        let fills = [fill("10", "1", "0"), fill("60", "3", "0")];
        assert_eq!(average_price(&fills), dec("47.5"));
    }

    #[test]
    fn average_price_of_no_volume_is_zero() {
        assert_eq!(average_price(&[]), Decimal::ZERO);
        assert_eq!(average_price(&[fill("10", "0", "0")]), Decimal::ZERO);
    }

    #[test]
    fn terminal_live_status_is_authoritative() {
        let market = Market::from_currencies("BTC", "USDT");
        // Fills cover the expected amount, but the venue says cancelled.
        let fills = [fill("10", "5", "0")];
        let order = synthesize("uuid-1", &market, dec("5"), OrderStatus::Cancelled, &fills);
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn covering_fills_complete_an_unsettled_order() {
        let market = Market::from_currencies("BTC", "USDT");
        let fills = [fill("10", "2", "0.01"), fill("11", "3", "0.02")];
        let order = synthesize("uuid-1", &market, dec("5"), OrderStatus::Unknown, &fills);
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.amount_filled, dec("5"));
        assert_eq!(order.fee_cost, dec("0.03"));
        assert_eq!(order.side, Some(Side::Buy));
        assert_eq!(order.fee_currency.as_deref(), Some("USDT"));
    }

    #[test]
    fn short_fills_on_an_unsettled_order_read_as_cancelled() {
        let market = Market::from_currencies("BTC", "USDT");
        let fills = [fill("10", "2", "0")];
        let order = synthesize("uuid-1", &market, dec("5"), OrderStatus::Unknown, &fills);
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.amount_filled, dec("2"));
    }

    #[test]
    fn over_reported_fills_are_clamped_to_the_expected_amount() {
        let market = Market::from_currencies("BTC", "USDT");
        let fills = [fill("10", "4", "0"), fill("10", "4", "0")];
        let order = synthesize("uuid-1", &market, dec("5"), OrderStatus::Completed, &fills);
        assert_eq!(order.amount_filled, dec("5"));
    }

    #[test]
    fn no_fills_leave_an_empty_cancelled_order() {
        let market = Market::from_currencies("BTC", "USDT");
        let order = synthesize("uuid-1", &market, dec("5"), OrderStatus::Unknown, &[]);
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.price, Decimal::ZERO);
        assert!(order.timestamp.is_none());
        assert!(order.side.is_none());
    }
}
