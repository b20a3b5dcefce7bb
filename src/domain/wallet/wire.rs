//! Wire types for the account balances endpoint.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of `/account/getbalances`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceEntry {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "serde_util::flex_decimal_opt")]
    pub available: Option<Decimal>,
}
