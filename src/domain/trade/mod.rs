//! Trade domain — public market prints and the account's own fills.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::market::Market;
use crate::domain::order::OrderStatus;
use crate::shared::Side;

/// A single execution. Public prints carry no fees or order link; private
/// fills do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub market: Market,
    /// The order this fill belongs to. Absent for public prints.
    pub order_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
    pub amount: Decimal,
    pub amount_filled: Decimal,
    pub fee_cost: Decimal,
    /// Currency the fee was charged in; the quote currency for this venue.
    pub fee_currency: Option<String>,
    pub side: Side,
    pub status: OrderStatus,
}

/// Recent public prints for one market, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTrades {
    pub market: Market,
    pub trades: Vec<Trade>,
}
