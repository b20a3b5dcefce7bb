//! Conversions: order wire types → Order, with status classification.

use super::wire::OrderResponse;
use super::{Order, OrderStatus};
use crate::domain::market::Market;
use crate::error::ParseError;
use crate::shared::{parse_side, parse_timestamp, split_market_pair};
use rust_decimal::Decimal;

/// An entry of the open-orders listing. Everything the venue lists there is
/// still executing.
pub(crate) fn open_order(raw: OrderResponse) -> Result<Order, ParseError> {
    let id = raw
        .order_uuid
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::missing("OrderUuid"))?;
    let pair = raw
        .exchange
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::missing("Exchange"))?;
    let (primary, secondary) = split_market_pair("Exchange", &pair)?;
    let market = Market::from_currencies(primary, secondary);

    let timestamp = match &raw.opened {
        Some(stamp) => Some(parse_timestamp("Opened", stamp)?),
        None => None,
    };
    let price = raw.limit.ok_or_else(|| ParseError::missing("Limit"))?;
    let amount = raw.quantity.ok_or_else(|| ParseError::missing("Quantity"))?;
    let remaining = raw.quantity_remaining.unwrap_or(Decimal::ZERO);
    if remaining > amount {
        return Err(ParseError::invalid(
            "QuantityRemaining",
            format!("remaining {remaining} exceeds quantity {amount}"),
        ));
    }
    let side = parse_side("OrderType", raw.order_type)?;
    let fee_currency = Some(market.secondary.clone());

    Ok(Order {
        id,
        market: Some(market),
        timestamp,
        price,
        amount,
        amount_filled: amount - remaining,
        fee_cost: raw.commission_paid.unwrap_or(Decimal::ZERO),
        fee_currency,
        side: Some(side),
        status: OrderStatus::Executing,
    })
}

/// A single-order lookup, which additionally carries the lifecycle flags.
/// A cancel in flight overrides everything, even a full fill; otherwise
/// fully filled wins over still-open.
pub(crate) fn single_order(raw: OrderResponse) -> Result<Order, ParseError> {
    let is_open = raw.is_open.ok_or_else(|| ParseError::missing("IsOpen"))?;
    let cancel_initiated = raw.cancel_initiated.unwrap_or(false);

    // This endpoint spells the side as `Type` where the listing uses
    // `OrderType`; fold the two before delegating.
    let kind = raw.order_kind.clone().or(raw.order_type.clone());
    let mut order = open_order(OrderResponse {
        order_type: kind,
        ..raw
    })?;

    order.status = if cancel_initiated {
        OrderStatus::Cancelled
    } else if order.amount_filled >= order.amount {
        OrderStatus::Completed
    } else if is_open {
        OrderStatus::Executing
    } else {
        OrderStatus::Cancelled
    };
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Side;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn raw() -> OrderResponse {
        OrderResponse {
            exchange: Some("USDT-BTC".to_string()),
            order_uuid: Some("uuid-9".to_string()),
            opened: Some("07/09/2014 03:21:20".to_string()),
            limit: Some(dec("100")),
            quantity: Some(dec("5")),
            quantity_remaining: Some(dec("2")),
            commission_paid: Some(dec("0.1")),
            order_type: Some("LIMIT_BUY".to_string()),
            order_kind: None,
            is_open: None,
            cancel_initiated: None,
        }
    }

    #[test]
    fn open_listing_entries_are_executing() {
        let order = open_order(raw()).unwrap();
        assert_eq!(order.status, OrderStatus::Executing);
        assert_eq!(order.amount_filled, dec("3"));
        assert_eq!(order.side, Some(Side::Buy));
        assert_eq!(order.market.unwrap().primary, "BTC");
        assert_eq!(order.fee_currency.as_deref(), Some("USDT"));
    }

    #[test]
    fn fully_filled_lookup_is_completed_even_while_open() {
        let mut r = raw();
        r.quantity_remaining = Some(Decimal::ZERO);
        r.is_open = Some(true);
        let order = single_order(r).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn open_lookup_with_remaining_quantity_is_executing() {
        let mut r = raw();
        r.is_open = Some(true);
        assert_eq!(single_order(r).unwrap().status, OrderStatus::Executing);
    }

    #[test]
    fn closed_lookup_with_remaining_quantity_is_cancelled() {
        let mut r = raw();
        r.is_open = Some(false);
        assert_eq!(single_order(r).unwrap().status, OrderStatus::Cancelled);
    }

    #[test]
    fn cancel_in_flight_reads_as_cancelled() {
        let mut r = raw();
        r.is_open = Some(true);
        r.cancel_initiated = Some(true);
        assert_eq!(single_order(r).unwrap().status, OrderStatus::Cancelled);
    }

    #[test]
    fn cancel_in_flight_overrides_a_full_fill() {
        let mut r = raw();
        r.quantity_remaining = Some(Decimal::ZERO);
        r.is_open = Some(false);
        r.cancel_initiated = Some(true);
        assert_eq!(single_order(r).unwrap().status, OrderStatus::Cancelled);
    }

    #[test]
    fn lookup_prefers_the_type_field_for_the_side() {
        let mut r = raw();
        r.is_open = Some(true);
        r.order_type = None;
        r.order_kind = Some("LIMIT_SELL".to_string());
        assert_eq!(single_order(r).unwrap().side, Some(Side::Sell));
    }

    #[test]
    fn lookup_without_the_open_flag_fails() {
        assert_eq!(single_order(raw()).unwrap_err().field, "IsOpen");
    }

    #[test]
    fn missing_limit_price_fails_instead_of_defaulting() {
        let mut r = raw();
        r.limit = None;
        assert_eq!(open_order(r).unwrap_err().field, "Limit");
    }

    #[test]
    fn remaining_above_quantity_is_rejected() {
        let mut r = raw();
        r.quantity = Some(dec("5"));
        r.quantity_remaining = Some(dec("6"));
        let err = open_order(r).unwrap_err();
        assert_eq!(err.field, "QuantityRemaining");
    }
}
