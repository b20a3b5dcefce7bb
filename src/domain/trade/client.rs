//! Trades sub-client — public prints and the account's fill history.

use super::wire::{PrivateTrade, PublicTrade};
use super::{LastTrades, Trade};
use crate::client::BittrexClient;
use crate::domain::market::Market;
use crate::error::AdapterError;

/// Number of public prints requested per market.
const RECENT_TRADE_COUNT: &str = "100";
/// Number of history entries requested per page.
const HISTORY_COUNT: &str = "1000";

pub struct Trades<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl<'a> Trades<'a> {
    /// Recent public prints for a market, newest first.
    pub async fn recent(&self, market: &Market) -> Result<LastTrades, AdapterError> {
        let raw: Vec<PublicTrade> = self
            .client
            .dispatcher
            .query(
                false,
                "/public/getmarkethistory",
                &[
                    ("market", market.pair()),
                    ("count", RECENT_TRADE_COUNT.to_string()),
                ],
            )
            .await?;
        let mut trades = raw
            .into_iter()
            .map(|t| Trade::from_public(market.clone(), t).map_err(AdapterError::from))
            .collect::<Result<Vec<_>, _>>()?;
        trades.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(LastTrades {
            market: market.clone(),
            trades,
        })
    }

    /// The account's closed-order history across all markets.
    pub async fn history(&self) -> Result<Vec<Trade>, AdapterError> {
        let raw: Vec<PrivateTrade> = self
            .client
            .dispatcher
            .query(
                true,
                "/account/getorderhistory",
                &[("count", HISTORY_COUNT.to_string())],
            )
            .await?;
        raw.into_iter()
            .map(|t| Trade::from_private(t).map_err(AdapterError::from))
            .collect()
    }
}
