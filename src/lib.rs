//! # Bittrex exchange adapter
//!
//! A typed client for the Bittrex v1.1 REST API that normalizes the venue's
//! loosely-typed JSON into validated domain entities.
//!
//! Layers, outside in:
//! - [`client::BittrexClient`] — facade with nested sub-client accessors and
//!   the fail-soft `get_*`/`place_*` surface (errors become events, results
//!   become `Option`).
//! - [`domain`] — vertical slices per entity: wire structs, fallible
//!   conversions, and the sub-client that calls the endpoints.
//! - [`http::Dispatcher`] — URL assembly, request signing, and the single
//!   bounded-wait lock that keeps nonces strictly monotonic.
//! - [`transport`] — the HTTP seam, swappable for tests.
//!
//! ```no_run
//! use bittrex_adapter::prelude::*;
//!
//! # async fn run() {
//! let client = BittrexClient::builder()
//!     .credentials(ApiCredentials::new("public", "private", None))
//!     .build();
//!
//! if let Some(markets) = client.get_markets().await {
//!     for market in &markets {
//!         println!("{} ({} amount decimals)", market.pair(), market.amount_decimals);
//!     }
//! }
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod domain;
pub mod error;
pub mod events;
pub mod http;
pub mod network;
pub mod shared;
pub mod transport;

/// Common imports for adapter users.
pub mod prelude {
    pub use crate::auth::ApiCredentials;
    pub use crate::client::{BittrexClient, BittrexClientBuilder, Capabilities, PlatformType};
    pub use crate::domain::market::Market;
    pub use crate::domain::order::{Order, OrderStatus};
    pub use crate::domain::orderbook::{BookLevel, OrderBook};
    pub use crate::domain::ticker::Tick;
    pub use crate::domain::trade::{LastTrades, Trade};
    pub use crate::domain::wallet::Wallet;
    pub use crate::error::{AdapterError, ParseError, ProtocolError, TransportError};
    pub use crate::events::AdapterEvent;
    pub use crate::network::DEFAULT_API_URL;
    pub use crate::shared::Side;
    pub use crate::transport::{HttpTransport, Transport};
}
