//! Ticker domain — last trade price and top-of-book quotes.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::market::Market;

/// A market snapshot: last traded price plus the best quotes.
///
/// `buy_price` is the best ask (what a buyer pays), `sell_price` the best
/// bid (what a seller receives).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub market: Market,
    pub close: Decimal,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
}
