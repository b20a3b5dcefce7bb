//! High-level client — `BittrexClient` with nested sub-client accessors and
//! the fail-soft host surface.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::broadcast;

use crate::auth::ApiCredentials;
use crate::domain::market::client::Markets;
use crate::domain::market::Market;
use crate::domain::order::client::Orders;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::orderbook::client::OrderBooks;
use crate::domain::orderbook::OrderBook;
use crate::domain::ticker::client::Tickers;
use crate::domain::ticker::Tick;
use crate::domain::trade::client::Trades;
use crate::domain::trade::{LastTrades, Trade};
use crate::domain::wallet::client::Balances;
use crate::domain::wallet::Wallet;
use crate::error::AdapterError;
use crate::events::{AdapterEvent, EventBus};
use crate::http::Dispatcher;
use crate::network::{DEFAULT_API_URL, DEFAULT_PING_ADDRESS, DEFAULT_POLLING_SPEED};
use crate::shared::Side;
use crate::transport::{HttpTransport, Transport};

// ─── Capabilities ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    Spot,
    Margin,
    Leverage,
}

/// What the hosting system can expect from this venue.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub platform_type: PlatformType,
    /// Tickers can be fetched for all markets in one call.
    pub has_ticker_batch: bool,
    pub has_orderbook_batch: bool,
    pub has_last_trades_batch: bool,
    pub has_private_key: bool,
    pub has_extra_private_key: bool,
    /// Suggested polling interval in seconds.
    pub polling_speed: u32,
    pub ping_address: String,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            platform_type: PlatformType::Spot,
            has_ticker_batch: true,
            has_orderbook_batch: false,
            has_last_trades_batch: false,
            has_private_key: true,
            has_extra_private_key: false,
            polling_speed: DEFAULT_POLLING_SPEED,
            ping_address: DEFAULT_PING_ADDRESS.to_string(),
        }
    }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// The adapter facade.
///
/// Typed sub-clients (`markets()`, `orders()`, ...) return `Result` and are
/// the right surface for code that wants to handle errors itself. The
/// `get_*`/`place_*` methods implement the hosting system's fail-soft
/// contract instead: any failure is published as an [`AdapterEvent::Error`]
/// and the call yields an absent result.
pub struct BittrexClient {
    pub(crate) dispatcher: Dispatcher,
    pub(crate) events: EventBus,
    pub(crate) settle_delay: Duration,
    capabilities: Capabilities,
}

impl BittrexClient {
    pub fn builder() -> BittrexClientBuilder {
        BittrexClientBuilder::default()
    }

    /// Client with default transport and no credentials; public endpoints
    /// only.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Subscribe to adapter events. Every subscriber sees every event
    /// published after the call.
    pub fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.events.subscribe()
    }

    /// This venue is polling-only; there is no connection to establish.
    pub fn connect(&self) -> bool {
        true
    }

    pub fn disconnect(&self) -> bool {
        true
    }

    // ─── Sub-clients ─────────────────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn tickers(&self) -> Tickers<'_> {
        Tickers { client: self }
    }

    pub fn orderbooks(&self) -> OrderBooks<'_> {
        OrderBooks { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn balances(&self) -> Balances<'_> {
        Balances { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ─── Fail-soft host surface ──────────────────────────────────────────────

    pub async fn get_markets(&self) -> Option<Vec<Market>> {
        self.report("get_markets", self.markets().all().await)
    }

    /// The venue lists no margin markets.
    pub async fn get_margin_markets(&self) -> Option<Vec<Market>> {
        None
    }

    pub async fn get_ticker(&self, market: &Market) -> Option<Tick> {
        self.report("get_ticker", self.tickers().get(market).await)
    }

    pub async fn get_all_tickers(&self) -> Option<Vec<Tick>> {
        self.report("get_all_tickers", self.tickers().all().await)
    }

    pub async fn get_orderbook(&self, market: &Market) -> Option<OrderBook> {
        self.report("get_orderbook", self.orderbooks().get(market).await)
    }

    /// No batch depth endpoint on this venue.
    pub async fn get_all_orderbooks(&self) -> Option<Vec<OrderBook>> {
        None
    }

    pub async fn get_last_trades(&self, market: &Market) -> Option<LastTrades> {
        self.report("get_last_trades", self.trades().recent(market).await)
    }

    /// No batch trade-history endpoint on this venue.
    pub async fn get_all_last_trades(&self) -> Option<Vec<LastTrades>> {
        None
    }

    pub async fn get_wallet(&self) -> Option<Wallet> {
        self.report("get_wallet", self.balances().all().await)
    }

    /// No margin wallet on this venue.
    pub async fn get_margin_wallet(&self) -> Option<Wallet> {
        None
    }

    pub async fn get_open_orders(&self) -> Option<Vec<Order>> {
        self.report("get_open_orders", self.orders().open().await)
    }

    pub async fn get_trade_history(&self) -> Option<Vec<Trade>> {
        self.report("get_trade_history", self.trades().history().await)
    }

    /// Submit an order and return its id. Only limit orders exist on this
    /// venue; a market-order request fails without touching the network.
    pub async fn place_order(
        &self,
        market: &Market,
        side: Side,
        price: Decimal,
        amount: Decimal,
        is_market_order: bool,
    ) -> Option<String> {
        if is_market_order {
            self.fail("place_order", "market orders are not supported".to_string());
            return None;
        }
        self.report(
            "place_order",
            self.orders().place_limit(market, side, price, amount).await,
        )
    }

    /// Leveraged trading is not offered.
    pub async fn place_leveraged_order(
        &self,
        _market: &Market,
        _side: Side,
        _price: Decimal,
        _amount: Decimal,
    ) -> Option<String> {
        None
    }

    pub async fn cancel_order(&self, order_id: &str) -> bool {
        self.report("cancel_order", self.orders().cancel(order_id).await)
            .is_some()
    }

    /// Lifecycle state of an order; `Unknown` when the lookup fails.
    pub async fn get_order_status(&self, order_id: &str) -> OrderStatus {
        self.report("get_order_status", self.orders().status(order_id).await)
            .unwrap_or_default()
    }

    /// Reconciled view of an order: live status plus its fills.
    pub async fn get_order_details(
        &self,
        order_id: &str,
        market: &Market,
        _expected_price: Decimal,
        expected_amount: Decimal,
        _is_buy: bool,
    ) -> Option<Order> {
        self.report(
            "get_order_details",
            self.orders().details(order_id, market, expected_amount).await,
        )
    }

    // ─── Error reporting ─────────────────────────────────────────────────────

    fn report<T>(&self, operation: &'static str, result: Result<T, AdapterError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.fail(operation, err.to_string());
                None
            }
        }
    }

    fn fail(&self, operation: &'static str, message: String) {
        tracing::warn!(operation, %message, "exchange operation failed");
        self.events.publish(AdapterEvent::Error { operation, message });
    }
}

impl Default for BittrexClient {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Builder ─────────────────────────────────────────────────────────────────

pub struct BittrexClientBuilder {
    base_url: String,
    credentials: Option<ApiCredentials>,
    transport: Option<Arc<dyn Transport>>,
    lock_wait: Duration,
    settle_delay: Duration,
    event_capacity: usize,
}

impl Default for BittrexClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            credentials: None,
            transport: None,
            lock_wait: Duration::from_secs(30),
            settle_delay: Duration::from_millis(500),
            event_capacity: 64,
        }
    }
}

impl BittrexClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credentials(mut self, credentials: ApiCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// How long a request may wait for the serialization lock before it
    /// fails with `LockTimeout`.
    pub fn lock_wait(mut self, lock_wait: Duration) -> Self {
        self.lock_wait = lock_wait;
        self
    }

    /// Pause between a terminal status lookup and the history read during
    /// order reconciliation.
    pub fn settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    pub fn build(self) -> BittrexClient {
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(HttpTransport::new()));
        BittrexClient {
            dispatcher: Dispatcher::new(
                &self.base_url,
                transport,
                self.credentials,
                self.lock_wait,
            ),
            events: EventBus::new(self.event_capacity),
            settle_delay: self.settle_delay,
            capabilities: Capabilities::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use std::str::FromStr;
    use std::sync::Mutex;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Routes requests by path substring and records every URL it served.
    struct ScriptedTransport {
        routes: Vec<(&'static str, String)>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        fn new(routes: Vec<(&'static str, &str)>) -> Arc<Self> {
            Arc::new(Self {
                routes: routes
                    .into_iter()
                    .map(|(path, body)| (path, body.to_string()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn get(
            &self,
            url: &str,
            _headers: &[(&'static str, String)],
        ) -> Result<String, TransportError> {
            self.calls.lock().unwrap().push(url.to_string());
            for (path, body) in &self.routes {
                if url.contains(path) {
                    return Ok(body.clone());
                }
            }
            panic!("unscripted request: {url}");
        }
    }

    fn client(transport: Arc<ScriptedTransport>) -> BittrexClient {
        BittrexClient::builder()
            .transport(transport)
            .credentials(ApiCredentials::new("pub", "priv", None))
            .settle_delay(Duration::from_millis(0))
            .build()
    }

    fn market() -> Market {
        Market::from_currencies("BTC", "USDT")
    }

    #[tokio::test]
    async fn get_markets_converts_listing_metadata() {
        let transport = ScriptedTransport::new(vec![(
            "/public/getmarkets",
            r#"{"success":true,"result":[
                {"MarketCurrency":"BTC","BaseCurrency":"USDT","MinTradeSize":"0.001"},
                {"MarketCurrency":"ETH","BaseCurrency":"BTC","MinTradeSize":"0.05"}
            ]}"#,
        )]);
        let c = client(transport);

        let markets = c.get_markets().await.unwrap();
        assert_eq!(markets.len(), 2);
        assert_eq!(markets[0].pair(), "USDT-BTC");
        assert_eq!(markets[0].amount_decimals, 3);
        assert_eq!(markets[1].amount_decimals, 2);
    }

    #[tokio::test]
    async fn failures_publish_an_event_and_yield_none() {
        let transport = ScriptedTransport::new(vec![(
            "/public/getmarkets",
            r#"{"success":false,"message":"MARKET_OFFLINE","result":null}"#,
        )]);
        let c = client(transport);
        let mut events = c.subscribe();

        assert!(c.get_markets().await.is_none());

        let AdapterEvent::Error { operation, message } = events.recv().await.unwrap();
        assert_eq!(operation, "get_markets");
        assert!(message.contains("MARKET_OFFLINE"));
    }

    #[tokio::test]
    async fn live_order_short_circuits_reconciliation() {
        let transport = ScriptedTransport::new(vec![(
            "/account/getorder?",
            r#"{"success":true,"result":{
                "Exchange":"USDT-BTC","OrderUuid":"uuid-1","Type":"LIMIT_BUY",
                "Limit":100.0,"Quantity":5.0,"QuantityRemaining":2.0,"IsOpen":true
            }}"#,
        )]);
        let c = client(transport.clone());

        let order = c
            .get_order_details("uuid-1", &market(), dec("100"), dec("5"), true)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Executing);
        assert_eq!(order.amount_filled, Decimal::ZERO);

        // The history endpoint must not have been touched.
        assert!(transport.calls().iter().all(|u| !u.contains("getorderhistory")));
    }

    #[tokio::test]
    async fn terminal_order_is_reconciled_from_history() {
        // The history route is listed first: substring routing would
        // otherwise let the shorter single-order path shadow it.
        let transport = ScriptedTransport::new(vec![
            (
                "/account/getorderhistory",
                r#"{"success":true,"result":[
                    {"Exchange":"USDT-BTC","OrderUuid":"uuid-1","Closed":"07/09/2014 03:21:20",
                     "Price":10.0,"Quantity":1.0,"QuantityRemaining":0.0,
                     "Commission":0.01,"OrderType":"LIMIT_BUY"},
                    {"Exchange":"USDT-BTC","OrderUuid":"other","Closed":"07/09/2014 03:21:21",
                     "Price":999.0,"Quantity":9.0,"QuantityRemaining":0.0,
                     "Commission":0.5,"OrderType":"LIMIT_SELL"},
                    {"Exchange":"USDT-BTC","OrderUuid":"uuid-1","Closed":"07/09/2014 03:21:22",
                     "Price":60.0,"Quantity":3.0,"QuantityRemaining":0.0,
                     "Commission":0.02,"OrderType":"LIMIT_BUY"}
                ]}"#,
            ),
            (
                "/account/getorder?",
                r#"{"success":true,"result":{
                    "Exchange":"USDT-BTC","OrderUuid":"uuid-1","Type":"LIMIT_BUY",
                    "Limit":15.0,"Quantity":4.0,"QuantityRemaining":0.0,"IsOpen":false
                }}"#,
            ),
        ]);
        let c = client(transport);

        let order = c
            .get_order_details("uuid-1", &market(), dec("15"), dec("4"), true)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.amount_filled, dec("4"));
        // Unit prices 10 and 20 weighted 1:3 → 17.5. The foreign fill is
        // filtered out.
        assert_eq!(order.price, dec("17.5"));
        assert_eq!(order.fee_cost, dec("0.03"));
        assert_eq!(order.side, Some(Side::Buy));
    }

    #[tokio::test]
    async fn market_orders_are_rejected_without_io() {
        let transport = ScriptedTransport::new(vec![]);
        let c = client(transport.clone());
        let mut events = c.subscribe();

        let placed = c
            .place_order(&market(), Side::Buy, dec("100"), dec("1"), true)
            .await;
        assert!(placed.is_none());
        assert!(transport.calls().is_empty());

        let AdapterEvent::Error { operation, .. } = events.recv().await.unwrap();
        assert_eq!(operation, "place_order");
    }

    #[tokio::test]
    async fn limit_orders_round_to_market_precision() {
        let transport = ScriptedTransport::new(vec![(
            "/market/buylimit",
            r#"{"success":true,"result":{"uuid":"new-order"}}"#,
        )]);
        let c = client(transport.clone());

        let mut m = market();
        m.amount_decimals = 2;
        let placed = c
            .place_order(&m, Side::Buy, dec("100.123456789"), dec("1.005"), false)
            .await;
        assert_eq!(placed.as_deref(), Some("new-order"));

        let url = &transport.calls()[0];
        assert!(url.contains("market=USDT-BTC"));
        assert!(url.contains("rate=100.12345679"));
        // 1.005 rounds half-to-even at two decimals.
        assert!(url.contains("quantity=1.00"));
    }

    #[tokio::test]
    async fn cancel_order_reports_plain_success() {
        let transport = ScriptedTransport::new(vec![(
            "/market/cancel",
            r#"{"success":true,"result":null}"#,
        )]);
        let c = client(transport);
        assert!(c.cancel_order("uuid-1").await);
    }

    #[tokio::test]
    async fn failed_status_lookup_reads_as_unknown() {
        let transport = ScriptedTransport::new(vec![(
            "/account/getorder",
            r#"{"success":false,"message":"UUID_INVALID","result":null}"#,
        )]);
        let c = client(transport);
        assert_eq!(c.get_order_status("nope").await, OrderStatus::Unknown);
    }

    #[tokio::test]
    async fn last_trades_arrive_newest_first() {
        let transport = ScriptedTransport::new(vec![(
            "/public/getmarkethistory",
            r#"{"success":true,"result":[
                {"TimeStamp":"07/09/2014 03:21:20","Price":10.0,"Quantity":1.0,"OrderType":"BUY"},
                {"TimeStamp":"07/09/2014 03:21:22","Price":11.0,"Quantity":1.0,"OrderType":"SELL"},
                {"TimeStamp":"07/09/2014 03:21:21","Price":12.0,"Quantity":1.0,"OrderType":"BUY"}
            ]}"#,
        )]);
        let c = client(transport);

        let last = c.get_last_trades(&market()).await.unwrap();
        let prices: Vec<Decimal> = last.trades.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![dec("11"), dec("12"), dec("10")]);
    }

    #[tokio::test]
    async fn absent_surfaces_stay_absent() {
        let transport = ScriptedTransport::new(vec![]);
        let c = client(transport.clone());

        assert!(c.get_margin_markets().await.is_none());
        assert!(c.get_all_orderbooks().await.is_none());
        assert!(c.get_all_last_trades().await.is_none());
        assert!(c.get_margin_wallet().await.is_none());
        assert!(
            c.place_leveraged_order(&market(), Side::Buy, dec("1"), dec("1"))
                .await
                .is_none()
        );
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn capabilities_describe_a_spot_polling_venue() {
        let c = BittrexClient::new();
        let caps = c.capabilities();
        assert_eq!(caps.platform_type, PlatformType::Spot);
        assert!(caps.has_ticker_batch);
        assert!(!caps.has_orderbook_batch);
        assert_eq!(caps.polling_speed, DEFAULT_POLLING_SPEED);
        assert!(c.connect());
        assert!(c.disconnect());
    }
}
