//! Tickers sub-client.

use super::wire::{MarketSummary, TickerResponse};
use super::Tick;
use crate::client::BittrexClient;
use crate::domain::market::Market;
use crate::error::AdapterError;

pub struct Tickers<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl<'a> Tickers<'a> {
    /// Current tick for a single market.
    pub async fn get(&self, market: &Market) -> Result<Tick, AdapterError> {
        let raw: TickerResponse = self
            .client
            .dispatcher
            .query(false, "/public/getticker", &[("market", market.pair())])
            .await?;
        Ok(Tick::from_response(market.clone(), raw)?)
    }

    /// Ticks for every listed market, from the summaries endpoint.
    pub async fn all(&self) -> Result<Vec<Tick>, AdapterError> {
        let raw: Vec<MarketSummary> = self
            .client
            .dispatcher
            .query(false, "/public/getmarketsummaries", &[])
            .await?;
        raw.into_iter()
            .map(|s| Tick::try_from(s).map_err(AdapterError::from))
            .collect()
    }
}
