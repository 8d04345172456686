//! Currency value object.
//!
//! A purse of coins keyed by denomination (e.g., "pp", "gp", "sp", "cp").
//! Encumbrance only cares about the total coin count, so denominations are
//! carried opaquely.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A coin purse keyed by denomination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub coins: BTreeMap<String, u32>,
}

impl Currency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for seeding a denomination.
    pub fn with(mut self, denomination: impl Into<String>, amount: u32) -> Self {
        self.coins.insert(denomination.into(), amount);
        self
    }

    pub fn amount(&self, denomination: &str) -> u32 {
        self.coins.get(denomination).copied().unwrap_or(0)
    }

    /// Total coin count across all denominations. Widened so a purse of
    /// many maxed denominations cannot overflow the sum.
    pub fn total_coins(&self) -> u64 {
        self.coins.values().map(|amount| u64::from(*amount)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.values().all(|amount| *amount == 0)
    }
}
