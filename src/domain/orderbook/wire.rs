//! Wire types for the public order book endpoint.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Result of `/public/getorderbook?type=both`. The side keys are lower-case
/// while the level fields are PascalCase.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBookResponse {
    #[serde(default)]
    pub buy: Vec<WireLevel>,
    #[serde(default)]
    pub sell: Vec<WireLevel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireLevel {
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub rate: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub quantity: Option<Decimal>,
}
