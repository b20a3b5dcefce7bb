//! Conversion: raw depth → OrderBook, with aggregation and validation.

use super::wire::{OrderBookResponse, WireLevel};
use super::{BookLevel, OrderBook};
use crate::error::ParseError;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

impl TryFrom<OrderBookResponse> for OrderBook {
    type Error = ParseError;

    fn try_from(raw: OrderBookResponse) -> Result<Self, Self::Error> {
        let asks: Vec<BookLevel> = aggregate(raw.sell)?
            .into_iter()
            .map(|(price, amount)| BookLevel { price, amount })
            .collect();
        let bids: Vec<BookLevel> = aggregate(raw.buy)?
            .into_iter()
            .rev()
            .map(|(price, amount)| BookLevel { price, amount })
            .collect();

        let book = OrderBook { asks, bids };
        if let (Some(ask), Some(bid)) = (book.best_ask(), book.best_bid()) {
            if bid.price >= ask.price {
                return Err(ParseError::invalid(
                    "buy",
                    format!("crossed book: bid {} at or above ask {}", bid.price, ask.price),
                ));
            }
        }
        Ok(book)
    }
}

/// Sum duplicate price levels; empty and zero-amount levels are dropped.
/// The map keeps prices in ascending order.
fn aggregate(levels: Vec<WireLevel>) -> Result<BTreeMap<Decimal, Decimal>, ParseError> {
    let mut merged = BTreeMap::new();
    for level in levels {
        let price = level.rate.ok_or_else(|| ParseError::missing("Rate"))?;
        let amount = level.quantity.ok_or_else(|| ParseError::missing("Quantity"))?;
        if amount.is_zero() {
            continue;
        }
        *merged.entry(price).or_insert(Decimal::ZERO) += amount;
    }
    Ok(merged)
}
