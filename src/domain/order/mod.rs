//! Order domain — open orders, status lookups, reconciliation.

pub mod client;
mod convert;
pub(crate) mod reconcile;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::market::Market;
use crate::shared::Side;

/// Lifecycle state of an order as the venue reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Not determinable from the venue's response.
    #[default]
    Unknown,
    Executing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// An order as reconstructed from the venue. Every field except the id and
/// status may be absent when the venue's response did not carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub market: Option<Market>,
    pub timestamp: Option<DateTime<Utc>>,
    pub price: Decimal,
    pub amount: Decimal,
    pub amount_filled: Decimal,
    pub fee_cost: Decimal,
    pub fee_currency: Option<String>,
    pub side: Option<Side>,
    pub status: OrderStatus,
}

impl Order {
    /// A bare order carrying only its status, for lookups that resolve the
    /// lifecycle state before any fills are known.
    pub fn with_status(id: impl Into<String>, status: OrderStatus) -> Self {
        Self {
            id: id.into(),
            market: None,
            timestamp: None,
            price: Decimal::ZERO,
            amount: Decimal::ZERO,
            amount_filled: Decimal::ZERO,
            fee_cost: Decimal::ZERO,
            fee_currency: None,
            side: None,
            status,
        }
    }
}
