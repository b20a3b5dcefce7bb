//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching exchange responses
//! - `convert.rs` — Fallible conversions from wire to domain types
//! - `client.rs` — The sub-client with the slice's endpoint calls

pub mod market;
pub mod order;
pub mod orderbook;
pub mod ticker;
pub mod trade;
pub mod wallet;
