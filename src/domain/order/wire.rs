//! Wire types for open-order listings and single-order lookups.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One order as returned by `/market/getopenorders` and `/account/getorder`.
/// The two endpoints share most fields but spell the side differently:
/// open orders use `OrderType`, single lookups use `Type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderResponse {
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub order_uuid: Option<String>,
    #[serde(default)]
    pub opened: Option<String>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub limit: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub quantity_remaining: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub commission_paid: Option<Decimal>,
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(default, rename = "Type")]
    pub order_kind: Option<String>,
    #[serde(default)]
    pub is_open: Option<bool>,
    #[serde(default)]
    pub cancel_initiated: Option<bool>,
}
