//! Balances sub-client.

use super::wire::BalanceEntry;
use super::Wallet;
use crate::client::BittrexClient;
use crate::error::AdapterError;

pub struct Balances<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl<'a> Balances<'a> {
    /// All spendable balances on the account.
    pub async fn all(&self) -> Result<Wallet, AdapterError> {
        let raw: Vec<BalanceEntry> = self
            .client
            .dispatcher
            .query(true, "/account/getbalances", &[])
            .await?;
        Ok(Wallet::from_entries(raw)?)
    }
}
