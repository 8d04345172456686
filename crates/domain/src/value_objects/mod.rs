//! Value objects shared across the sheet display model.

mod currency;
mod encumbrance;
mod weight;

pub use currency::Currency;
pub use encumbrance::{compute_encumbrance, Encumbrance, EncumbranceConfig};
pub use weight::to_nearest;
