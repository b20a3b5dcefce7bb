//! Wire types for public market history and private order history.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of `/public/getmarkethistory`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublicTrade {
    #[serde(default)]
    pub time_stamp: Option<String>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub order_type: Option<String>,
}

/// One entry of `/account/getorderhistory`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrivateTrade {
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub order_uuid: Option<String>,
    #[serde(default)]
    pub closed: Option<String>,
    /// Total quote amount paid, not a unit price.
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub quantity_remaining: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub order_type: Option<String>,
}
