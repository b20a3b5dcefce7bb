//! Wire types for the public market metadata endpoint.

use crate::shared::serde_util;
use serde::Deserialize;

/// One entry of `/public/getmarkets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketInfo {
    #[serde(default)]
    pub market_currency: Option<String>,
    #[serde(default)]
    pub base_currency: Option<String>,
    /// Kept textual: amount precision is inferred from the digits after the
    /// decimal point.
    #[serde(default, deserialize_with = "serde_util::flex_string_opt")]
    pub min_trade_size: Option<String>,
}
