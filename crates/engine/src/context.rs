//! Typed render-context schema.
//!
//! The context is the single object handed to the host's UI composition
//! layer on every render pass. It is an explicit, versioned struct rather
//! than an ad-hoc bag of fields; the host should reject contexts whose
//! `schema_version` it does not understand.

use std::collections::HashMap;

use serde::Serialize;

use loresheet_domain::{
    Actor, ActorKind, Attunement, Currency, Encumbrance, ItemId, Section, SheetId,
};

use crate::infrastructure::ports::ItemDetail;

/// Version of the [`SheetContext`] schema.
pub const CONTEXT_SCHEMA_VERSION: u32 = 1;

/// A tab resolved for rendering: visible, with its display title evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub id: String,
    pub title: String,
    pub layout: String,
}

/// Where injected custom content lands relative to its selector target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectPosition {
    BeforeBegin,
    AfterBegin,
    BeforeEnd,
    AfterEnd,
}

/// A custom content block resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentView {
    pub id: String,
    /// Host-side selector the content is injected at
    pub selector: String,
    pub position: InjectPosition,
    pub layout: String,
}

/// Per-item derived display data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemRenderContext {
    /// Total weight of the stack, rounded to the nearest 0.1 unit
    pub total_weight: f64,
    /// Whether the row is displayed as a stack (quantity above one)
    pub is_stack: bool,
    /// Attunement display status, if the item attunes
    pub attunement: Option<Attunement>,
    /// Matching favorite-entry id within the owning actor's favorites list
    pub favorite_id: Option<String>,
    /// Nested contents, when the item is itself a container
    pub container_contents: Option<ContainerContents>,
}

/// Displayed contents of a container item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainerContents {
    /// Remaining/maximum capacity bar
    pub capacity: Encumbrance,
    /// Coin purse carried inside the container
    pub currency: Currency,
    /// Classified inventory of immediate children
    pub contents: Vec<Section>,
    /// Per-child derived display data
    pub item_contexts: HashMap<ItemId, ItemRenderContext>,
}

/// The assembled context for one render pass of one sheet.
#[derive(Debug, Clone, Serialize)]
pub struct SheetContext {
    pub schema_version: u32,
    pub sheet_id: SheetId,
    pub kind: ActorKind,
    pub actor: Actor,
    /// Visible tabs, in registration order, titles resolved
    pub tabs: Vec<TabView>,
    /// Visible injected content blocks, in registration order
    pub custom_content: Vec<ContentView>,
    pub inventory: Vec<Section>,
    pub features: Vec<Section>,
    pub spellbook: Vec<Section>,
    pub cargo: Vec<Section>,
    pub item_contexts: HashMap<ItemId, ItemRenderContext>,
    /// Detail data for rows the user has expanded, refreshed every pass
    pub expanded_item_details: HashMap<ItemId, ItemDetail>,
    pub encumbrance: Encumbrance,
    pub owner: bool,
    pub editable: bool,
}

impl SheetContext {
    /// Empty context skeleton for an actor; use-case builders fill it in.
    pub fn empty(sheet_id: SheetId, actor: Actor) -> Self {
        Self {
            schema_version: CONTEXT_SCHEMA_VERSION,
            sheet_id,
            kind: actor.kind,
            actor,
            tabs: Vec::new(),
            custom_content: Vec::new(),
            inventory: Vec::new(),
            features: Vec::new(),
            spellbook: Vec::new(),
            cargo: Vec::new(),
            item_contexts: HashMap::new(),
            expanded_item_details: HashMap::new(),
            encumbrance: Encumbrance::empty(0.0),
            owner: false,
            editable: false,
        }
    }
}
