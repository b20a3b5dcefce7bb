//! Wire types for the public ticker endpoints.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Result of `/public/getticker` for a single market.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TickerResponse {
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub last: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub ask: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub bid: Option<Decimal>,
}

/// One entry of `/public/getmarketsummaries`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    #[serde(default)]
    pub market_name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub last: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub ask: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub bid: Option<Decimal>,
}
