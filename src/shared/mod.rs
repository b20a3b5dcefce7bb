//! Shared primitives used across all domain modules.

pub mod serde_util;

use crate::error::ParseError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn is_buy(self) -> bool {
        matches!(self, Side::Buy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a venue side label. The venue spells sides as `BUY`/`SELL` or
/// `LIMIT_BUY`/`LIMIT_SELL`; anything mentioning "buy" is a buy, everything
/// else a sell.
pub(crate) fn parse_side(field: &'static str, raw: Option<String>) -> Result<Side, ParseError> {
    let kind = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::missing(field))?;
    if kind.to_lowercase().contains("buy") {
        Ok(Side::Buy)
    } else {
        Ok(Side::Sell)
    }
}

// ─── Pair parsing ────────────────────────────────────────────────────────────

/// Split an exchange pair string into `(primary, secondary)`.
///
/// The venue writes pairs as `SECONDARY-PRIMARY`: the quote currency first,
/// the traded asset second. `"USDT-BTC"` is the BTC market priced in USDT,
/// so primary = `BTC`, secondary = `USDT`.
pub fn split_market_pair(field: &'static str, pair: &str) -> Result<(String, String), ParseError> {
    let parts: Vec<&str> = pair.split('-').collect();
    match parts.as_slice() {
        [secondary, primary] if !primary.is_empty() && !secondary.is_empty() => {
            if primary.eq_ignore_ascii_case(secondary) {
                return Err(ParseError::invalid(
                    field,
                    format!("pair `{pair}` trades a currency against itself"),
                ));
            }
            Ok((primary.to_string(), secondary.to_string()))
        }
        _ => Err(ParseError::invalid(
            field,
            format!("malformed pair string `{pair}`"),
        )),
    }
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

/// Parse the venue's `MM/dd/yyyy HH:mm:ss` timestamp text as UTC.
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(raw, "%m/%d/%Y %H:%M:%S")
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .map_err(|e| ParseError::invalid(field, format!("bad timestamp `{raw}`: {e}")))
}
