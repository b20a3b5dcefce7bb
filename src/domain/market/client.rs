//! Markets sub-client.

use super::wire::MarketInfo;
use super::Market;
use crate::client::BittrexClient;
use crate::error::AdapterError;

pub struct Markets<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl<'a> Markets<'a> {
    /// All listed spot markets with derived precision metadata.
    pub async fn all(&self) -> Result<Vec<Market>, AdapterError> {
        let raw: Vec<MarketInfo> = self
            .client
            .dispatcher
            .query(false, "/public/getmarkets", &[])
            .await?;
        raw.into_iter()
            .map(|m| Market::try_from(m).map_err(AdapterError::from))
            .collect()
    }
}
