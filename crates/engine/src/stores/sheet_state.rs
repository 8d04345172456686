//! Per-sheet UI state.
//!
//! Created when a sheet opens, mutated by user interaction events and by
//! every render pass, discarded when the sheet closes. Nothing here is
//! persisted by the host.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use loresheet_domain::ItemId;

/// Mutable UI state for one open sheet instance.
#[derive(Debug, Clone, Default)]
pub struct SheetState {
    current_tab_id: String,
    /// Item id -> UI locations where the item's detail row is expanded
    expanded_items: HashMap<ItemId, HashSet<String>>,
    /// User toggle states, e.g. "show uses column" per table
    table_toggles: HashMap<String, bool>,
    /// Search text per filter location
    search_filters: HashMap<String, String>,
    last_submission_time: Option<DateTime<Utc>>,
}

impl SheetState {
    pub fn new(initial_tab_id: impl Into<String>) -> Self {
        Self {
            current_tab_id: initial_tab_id.into(),
            ..Self::default()
        }
    }

    pub fn current_tab_id(&self) -> &str {
        &self.current_tab_id
    }

    pub fn on_tab_selected(&mut self, tab_id: impl Into<String>) {
        self.current_tab_id = tab_id.into();
    }

    /// Records an item detail row being expanded or collapsed at a location.
    pub fn on_item_toggled(&mut self, item_id: ItemId, expanded: bool, location: impl Into<String>) {
        let locations = self.expanded_items.entry(item_id).or_default();
        if expanded {
            locations.insert(location.into());
        } else {
            locations.remove(&location.into());
            if locations.is_empty() {
                self.expanded_items.remove(&item_id);
            }
        }
    }

    /// Item ids with at least one expanded detail row.
    pub fn expanded_item_ids(&self) -> Vec<ItemId> {
        self.expanded_items.keys().copied().collect()
    }

    pub fn expanded_locations(&self, item_id: ItemId) -> Option<&HashSet<String>> {
        self.expanded_items.get(&item_id)
    }

    pub fn on_table_toggled(&mut self, key: impl Into<String>, value: bool) {
        self.table_toggles.insert(key.into(), value);
    }

    pub fn table_toggle(&self, key: &str) -> Option<bool> {
        self.table_toggles.get(key).copied()
    }

    pub fn on_search(&mut self, location: impl Into<String>, text: impl Into<String>) {
        self.search_filters.insert(location.into(), text.into());
    }

    pub fn search_text(&self, location: &str) -> Option<&str> {
        self.search_filters.get(location).map(String::as_str)
    }

    pub fn on_submitted(&mut self, at: DateTime<Utc>) {
        self.last_submission_time = Some(at);
    }

    pub fn last_submission_time(&self) -> Option<DateTime<Utc>> {
        self.last_submission_time
    }
}
