//! Signed request dispatch against the exchange REST API.

mod dispatch;

pub use dispatch::{Dispatcher, Envelope};
