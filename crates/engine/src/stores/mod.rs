//! Ephemeral UI state stores.

mod expanded_items;
mod preferences;
mod sheet_state;

pub use expanded_items::ExpandedItemCache;
pub use preferences::{SheetPreferences, SheetPreferencesStore, SortMode};
pub use sheet_state::SheetState;
