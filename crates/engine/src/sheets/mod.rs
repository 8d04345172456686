//! Composed sheet types.
//!
//! A sheet ties one open window to an actor: it knows how to assemble its
//! render context and how to adjust items dropped onto it. The render
//! coordinator drives sheets through the [`Sheet`] trait.

mod character;
mod vehicle;

pub use character::CharacterSheet;
pub use vehicle::VehicleSheet;

use async_trait::async_trait;

use loresheet_domain::{ActorKind, Item, SheetId};

use crate::context::SheetContext;
use crate::use_cases::sheet_context::ContextError;

/// Capabilities the render coordinator needs from an open sheet.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Sheet: Send + Sync {
    fn id(&self) -> SheetId;

    fn kind(&self) -> ActorKind;

    /// Assembles the render context for one pass.
    async fn prepare_context(&self) -> Result<SheetContext, ContextError>;

    /// Adjusts an item dropped onto the sheet before the host creates it.
    async fn handle_drop(&self, item: Item) -> Item;
}
