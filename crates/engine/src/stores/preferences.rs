//! Per-kind sheet preferences.
//!
//! Window sizing and tab sort modes the user has chosen, keyed by sheet
//! kind so all character sheets share one preference set. Persistence to
//! host storage is an adapter concern; this store is the in-process copy.

use dashmap::DashMap;

use loresheet_domain::ActorKind;

/// How a sheet orders its tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Registration order, possibly rearranged by the user
    #[default]
    Manual,
    Alphabetical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetPreferences {
    pub width: f64,
    pub height: f64,
    pub sort_mode: SortMode,
}

impl Default for SheetPreferences {
    fn default() -> Self {
        Self {
            width: 740.0,
            height: 810.0,
            sort_mode: SortMode::default(),
        }
    }
}

/// Concurrent store of sheet preferences, one entry per sheet kind.
#[derive(Debug, Default)]
pub struct SheetPreferencesStore {
    entries: DashMap<ActorKind, SheetPreferences>,
}

impl SheetPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferences for a kind, falling back to defaults when the user has
    /// never adjusted this sheet kind.
    pub fn get(&self, kind: ActorKind) -> SheetPreferences {
        self.entries
            .get(&kind)
            .map(|entry| *entry.value())
            .unwrap_or_default()
    }

    pub fn set_window_size(&self, kind: ActorKind, width: f64, height: f64) {
        let mut entry = self.entries.entry(kind).or_default();
        entry.width = width;
        entry.height = height;
    }

    pub fn set_sort_mode(&self, kind: ActorKind, sort_mode: SortMode) {
        self.entries.entry(kind).or_default().sort_mode = sort_mode;
    }
}
