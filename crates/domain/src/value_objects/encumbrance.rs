//! Encumbrance computation.
//!
//! Computed load ratio of carried weight (including currency-derived weight)
//! against a capacity maximum. Also used for container capacity bars, which
//! share the same value/max/pct shape.

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::weight::to_nearest;

/// System settings that feed encumbrance math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncumbranceConfig {
    /// How many coins weigh one weight unit
    pub currency_per_weight: f64,
    /// Divisor applied to vehicle cargo weight (vehicle weights are an order
    /// of magnitude greater than character weights)
    pub vehicle_weight_multiplier: f64,
}

impl EncumbranceConfig {
    /// Imperial units (pounds).
    pub fn imperial() -> Self {
        Self {
            currency_per_weight: 50.0,
            vehicle_weight_multiplier: 2000.0,
        }
    }

    /// Metric units (kilograms).
    pub fn metric() -> Self {
        Self {
            currency_per_weight: 110.0,
            vehicle_weight_multiplier: 1000.0,
        }
    }
}

impl Default for EncumbranceConfig {
    fn default() -> Self {
        Self::imperial()
    }
}

/// Encumbrance summary for display: {value, max, pct}.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Encumbrance {
    /// Carried weight, rounded to the nearest 0.1 unit
    pub value: f64,
    /// Capacity maximum
    pub max: f64,
    /// Percentage of capacity used, clamped to 0..=100
    pub pct: f64,
}

impl Default for Encumbrance {
    fn default() -> Self {
        Self::empty(0.0)
    }
}

impl Encumbrance {
    pub fn empty(max: f64) -> Self {
        Self {
            value: 0.0,
            max,
            pct: 0.0,
        }
    }
}

/// Computes encumbrance from accumulated item weight plus the coin purse.
///
/// Coins add `total_coins / currency_per_weight`; the sum is then divided by
/// `vehicle_weight_multiplier` (1.0 for non-vehicle subjects). A zero or
/// negative max yields pct 0 rather than a division by zero.
pub fn compute_encumbrance(
    total_weight: f64,
    currency: &Currency,
    config: &EncumbranceConfig,
    max: f64,
) -> Encumbrance {
    let mut weight = total_weight;
    if config.currency_per_weight > 0.0 {
        weight += currency.total_coins() as f64 / config.currency_per_weight;
    }
    if config.vehicle_weight_multiplier > 0.0 {
        weight /= config.vehicle_weight_multiplier;
    }

    let pct = if max > 0.0 {
        (weight * 100.0 / max).clamp(0.0, 100.0)
    } else {
        0.0
    };

    Encumbrance {
        value: to_nearest(weight, 0.1),
        max,
        pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_adds_weight() {
        // 150 carried + 100 coins at 50/coin-weight = 152, 76% of 200
        let config = EncumbranceConfig {
            currency_per_weight: 50.0,
            vehicle_weight_multiplier: 1.0,
        };
        let currency = Currency::new().with("gp", 100);
        let enc = compute_encumbrance(150.0, &currency, &config, 200.0);
        assert!((enc.value - 152.0).abs() < 1e-9);
        assert_eq!(enc.max, 200.0);
        assert!((enc.pct - 76.0).abs() < 1e-9);
    }

    #[test]
    fn test_vehicle_multiplier_divides() {
        let config = EncumbranceConfig {
            currency_per_weight: 50.0,
            vehicle_weight_multiplier: 2000.0,
        };
        let enc = compute_encumbrance(4000.0, &Currency::new(), &config, 10.0);
        assert!((enc.value - 2.0).abs() < 1e-9);
        assert!((enc.pct - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_pct_clamps_to_100() {
        let config = EncumbranceConfig {
            currency_per_weight: 50.0,
            vehicle_weight_multiplier: 1.0,
        };
        let enc = compute_encumbrance(500.0, &Currency::new(), &config, 100.0);
        assert_eq!(enc.pct, 100.0);
    }

    #[test]
    fn test_zero_max_does_not_divide_by_zero() {
        let enc = compute_encumbrance(
            10.0,
            &Currency::new(),
            &EncumbranceConfig {
                currency_per_weight: 50.0,
                vehicle_weight_multiplier: 1.0,
            },
            0.0,
        );
        assert_eq!(enc.pct, 0.0);
    }
}
