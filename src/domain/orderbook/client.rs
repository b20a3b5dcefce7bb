//! Order books sub-client.

use super::wire::OrderBookResponse;
use super::OrderBook;
use crate::client::BittrexClient;
use crate::domain::market::Market;
use crate::error::AdapterError;

/// Depth requested from the venue for both sides of the book.
const BOOK_DEPTH: &str = "50";

pub struct OrderBooks<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl<'a> OrderBooks<'a> {
    /// Aggregated depth snapshot for a market, both sides at once.
    pub async fn get(&self, market: &Market) -> Result<OrderBook, AdapterError> {
        let raw: OrderBookResponse = self
            .client
            .dispatcher
            .query(
                false,
                "/public/getorderbook",
                &[
                    ("market", market.pair()),
                    ("type", "both".to_string()),
                    ("depth", BOOK_DEPTH.to_string()),
                ],
            )
            .await?;
        Ok(OrderBook::try_from(raw)?)
    }
}
