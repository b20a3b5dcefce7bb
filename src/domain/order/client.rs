//! Orders sub-client — submit, cancel, status, reconciliation.

use super::wire::OrderResponse;
use super::{convert, reconcile, Order, OrderStatus};
use crate::client::BittrexClient;
use crate::domain::market::Market;
use crate::error::AdapterError;
use crate::shared::Side;
use rust_decimal::Decimal;
use serde::Deserialize;

pub struct Orders<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl<'a> Orders<'a> {
    /// All currently open orders across markets.
    pub async fn open(&self) -> Result<Vec<Order>, AdapterError> {
        let raw: Vec<OrderResponse> = self
            .client
            .dispatcher
            .query(true, "/market/getopenorders", &[])
            .await?;
        raw.into_iter()
            .map(|o| convert::open_order(o).map_err(AdapterError::from))
            .collect()
    }

    /// Submit a limit order, rounded to the market's precision. Returns the
    /// venue-assigned order id.
    pub async fn place_limit(
        &self,
        market: &Market,
        side: Side,
        price: Decimal,
        amount: Decimal,
    ) -> Result<String, AdapterError> {
        #[derive(Deserialize)]
        struct Placed {
            uuid: String,
        }

        let path = match side {
            Side::Buy => "/market/buylimit",
            Side::Sell => "/market/selllimit",
        };
        let placed: Placed = self
            .client
            .dispatcher
            .query(
                true,
                path,
                &[
                    ("market", market.pair()),
                    ("quantity", market.round_amount(amount).to_string()),
                    ("rate", market.round_price(price).to_string()),
                ],
            )
            .await?;
        Ok(placed.uuid)
    }

    /// Request cancellation of an open order.
    pub async fn cancel(&self, order_id: &str) -> Result<(), AdapterError> {
        self.client
            .dispatcher
            .execute(true, "/market/cancel", &[("uuid", order_id.to_string())])
            .await
    }

    /// Current lifecycle state of a single order.
    pub async fn status(&self, order_id: &str) -> Result<OrderStatus, AdapterError> {
        let raw: OrderResponse = self
            .client
            .dispatcher
            .query(true, "/account/getorder", &[("uuid", order_id.to_string())])
            .await?;
        Ok(convert::single_order(raw)?.status)
    }

    /// Full picture of an order: live status plus its fills from history.
    ///
    /// `expected_amount` is the amount the order was submitted with; the
    /// fill sum is validated against it.
    pub async fn details(
        &self,
        order_id: &str,
        market: &Market,
        expected_amount: Decimal,
    ) -> Result<Order, AdapterError> {
        let status = self.status(order_id).await?;
        if !status.is_terminal() {
            // Still in flight; stale history must not shadow a live order.
            return Ok(Order::with_status(order_id, status));
        }

        // History lags the status endpoint; give the venue a moment to
        // settle before reading the fills.
        tokio::time::sleep(self.client.settle_delay).await;

        let fills: Vec<_> = self
            .client
            .trades()
            .history()
            .await?
            .into_iter()
            .filter(|t| t.order_id.as_deref() == Some(order_id))
            .collect();
        Ok(reconcile::synthesize(
            order_id,
            market,
            expected_amount,
            status,
            &fills,
        ))
    }
}
