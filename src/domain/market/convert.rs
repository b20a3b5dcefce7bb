//! Conversion: market metadata wire → Market, with precision inference.

use super::wire::MarketInfo;
use super::Market;
use crate::error::ParseError;
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<MarketInfo> for Market {
    type Error = ParseError;

    fn try_from(raw: MarketInfo) -> Result<Self, Self::Error> {
        let primary = raw
            .market_currency
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseError::missing("MarketCurrency"))?;
        let secondary = raw
            .base_currency
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseError::missing("BaseCurrency"))?;
        if primary.eq_ignore_ascii_case(&secondary) {
            return Err(ParseError::invalid(
                "BaseCurrency",
                "pair trades a currency against itself",
            ));
        }

        let min_trade_size = raw
            .min_trade_size
            .ok_or_else(|| ParseError::missing("MinTradeSize"))?;
        let minimum_trade_amount = Decimal::from_str(min_trade_size.trim()).map_err(|e| {
            ParseError::invalid("MinTradeSize", format!("bad decimal `{min_trade_size}`: {e}"))
        })?;

        Ok(Market {
            primary,
            secondary,
            fee: Decimal::new(25, 2),                 // venue-fixed 0.25 %
            price_decimals: 8,                        // venue-fixed tick precision
            amount_decimals: amount_decimals(&min_trade_size),
            minimum_trade_amount,
            minimum_trade_volume: Decimal::new(5, 4), // venue-fixed 0.0005
        })
    }
}

/// Digits after the decimal point of the textual minimum trade size; zero
/// when the text carries no decimal point.
fn amount_decimals(min_trade_size: &str) -> u32 {
    min_trade_size
        .trim()
        .split_once('.')
        .map(|(_, frac)| frac.len() as u32)
        .unwrap_or(0)
}
