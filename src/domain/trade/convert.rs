//! Conversions from wire types to domain trades.

use super::wire::{PrivateTrade, PublicTrade};
use super::Trade;
use crate::domain::market::Market;
use crate::domain::order::OrderStatus;
use crate::error::ParseError;
use crate::shared::{parse_side, parse_timestamp, split_market_pair};
use rust_decimal::Decimal;

impl Trade {
    /// A public print: fully filled by definition, no fees, no order link.
    pub(crate) fn from_public(market: Market, raw: PublicTrade) -> Result<Self, ParseError> {
        let stamp = raw
            .time_stamp
            .ok_or_else(|| ParseError::missing("TimeStamp"))?;
        let timestamp = parse_timestamp("TimeStamp", &stamp)?;
        let price = raw.price.ok_or_else(|| ParseError::missing("Price"))?;
        let amount = raw.quantity.ok_or_else(|| ParseError::missing("Quantity"))?;
        let side = parse_side("OrderType", raw.order_type)?;

        Ok(Self {
            market,
            order_id: None,
            timestamp,
            price,
            amount,
            amount_filled: amount,
            fee_cost: Decimal::ZERO,
            fee_currency: None,
            side,
            status: OrderStatus::Unknown,
        })
    }

    /// A private fill from order history. The venue reports the total paid
    /// amount in `Price`; recover the unit price here and nowhere else.
    pub(crate) fn from_private(raw: PrivateTrade) -> Result<Self, ParseError> {
        let pair = raw
            .exchange
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseError::missing("Exchange"))?;
        let (primary, secondary) = split_market_pair("Exchange", &pair)?;
        let market = Market::from_currencies(primary, secondary);

        let order_id = raw
            .order_uuid
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseError::missing("OrderUuid"))?;
        let stamp = raw.closed.ok_or_else(|| ParseError::missing("Closed"))?;
        let timestamp = parse_timestamp("Closed", &stamp)?;

        let amount = raw.quantity.ok_or_else(|| ParseError::missing("Quantity"))?;
        let remaining = raw.quantity_remaining.unwrap_or(Decimal::ZERO);
        if remaining > amount {
            return Err(ParseError::invalid(
                "QuantityRemaining",
                format!("remaining {remaining} exceeds quantity {amount}"),
            ));
        }
        let amount_filled = amount - remaining;
        let total = raw.price.ok_or_else(|| ParseError::missing("Price"))?;
        let price = if amount_filled.is_zero() {
            Decimal::ZERO
        } else {
            (total / amount_filled).round_dp(8)
        };
        let side = parse_side("OrderType", raw.order_type)?;
        let fee_currency = Some(market.secondary.clone());

        Ok(Self {
            market,
            order_id: Some(order_id),
            timestamp,
            price,
            amount,
            amount_filled,
            fee_cost: raw.commission.unwrap_or(Decimal::ZERO),
            fee_currency,
            side,
            status: OrderStatus::Unknown,
        })
    }
}
