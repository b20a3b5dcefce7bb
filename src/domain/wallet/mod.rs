//! Wallet domain — account balances.

pub mod client;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ParseError;
use wire::BalanceEntry;

/// Spendable balances by currency. Zero and negative balances are dropped
/// at construction, so every entry is spendable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    balances: HashMap<String, Decimal>,
}

impl Wallet {
    pub(crate) fn from_entries(entries: Vec<BalanceEntry>) -> Result<Self, ParseError> {
        let mut balances = HashMap::new();
        for entry in entries {
            let currency = entry
                .currency
                .filter(|s| !s.is_empty())
                .ok_or_else(|| ParseError::missing("Currency"))?;
            let available = entry
                .available
                .ok_or_else(|| ParseError::missing("Available"))?;
            if available > Decimal::ZERO {
                balances.insert(currency, available);
            }
        }
        Ok(Self { balances })
    }

    /// Spendable amount of a currency, zero when unlisted.
    pub fn available(&self, currency: &str) -> Decimal {
        self.balances.get(currency).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn balances(&self) -> &HashMap<String, Decimal> {
        &self.balances
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
