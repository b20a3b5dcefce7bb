//! Market domain — pair metadata and per-market precision rules.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tradable spot market with the venue's precision rules attached.
///
/// `primary` is the traded asset, `secondary` the quote currency the pair is
/// priced in. The venue's pair notation is `SECONDARY-PRIMARY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub primary: String,
    pub secondary: String,
    /// Taker fee percentage, venue-fixed.
    pub fee: Decimal,
    pub price_decimals: u32,
    pub amount_decimals: u32,
    pub minimum_trade_amount: Decimal,
    pub minimum_trade_volume: Decimal,
}

impl Market {
    /// Lightweight market recovered from a pair string: venue-fixed fee and
    /// price precision, no listing metadata.
    pub fn from_currencies(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            fee: Decimal::new(25, 2),
            price_decimals: 8,
            amount_decimals: 0,
            minimum_trade_amount: Decimal::ZERO,
            minimum_trade_volume: Decimal::ZERO,
        }
    }

    /// The venue's pair notation: `SECONDARY-PRIMARY`, upper-case.
    pub fn pair(&self) -> String {
        format!(
            "{}-{}",
            self.secondary.to_uppercase(),
            self.primary.to_uppercase()
        )
    }

    /// Round a price to this market's tick precision (banker's rounding,
    /// matching the venue's own tick sizing).
    pub fn round_price(&self, value: Decimal) -> Decimal {
        value.round_dp(self.price_decimals)
    }

    /// Round an amount to this market's lot precision (banker's rounding).
    pub fn round_amount(&self, value: Decimal) -> Decimal {
        value.round_dp(self.amount_decimals)
    }

    /// Whether an order of `amount` at `price` clears the venue minimums:
    /// the amount must strictly exceed the minimum trade amount and the
    /// notional must reach the minimum trade volume.
    pub fn is_amount_enough(&self, price: Decimal, amount: Decimal) -> bool {
        amount > self.minimum_trade_amount && amount * price >= self.minimum_trade_volume
    }
}
