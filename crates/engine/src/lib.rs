//! Loresheet Engine library.
//!
//! This crate contains the sheet-side logic of the Loresheet module:
//!
//! - `context` - Typed render-context schema handed to the host view layer
//! - `infrastructure/` - Port traits to the host platform (documents, view)
//! - `use_cases/` - Container aggregation and sheet context assembly
//! - `runtime/` - Tab and custom-content registries per sheet kind
//! - `stores/` - Per-sheet UI state and process-wide preferences
//! - `render/` - Serialized render coordinator and render observers
//! - `sheets/` - Composed sheet types (character, vehicle)

pub mod context;
pub mod infrastructure;
pub mod render;
pub mod runtime;
pub mod sheets;
pub mod stores;
pub mod use_cases;

pub use context::{ContainerContents, ItemRenderContext, SheetContext};
pub use infrastructure::ports::{ActorDocs, DocError, ItemDetail, ItemDocs, SheetView, ViewError};
pub use render::{RenderCoordinator, RenderError, RenderMode, RenderObservers};
pub use runtime::{RegisteredContent, RegisteredTab, RegistrationOptions, SheetRuntime, TabTitle};
pub use sheets::{CharacterSheet, Sheet, VehicleSheet};
pub use stores::{SheetPreferences, SheetPreferencesStore, SheetState, SortMode};
pub use use_cases::container_contents::{ContainerContentsUseCase, ContainerError};
pub use use_cases::sheet_context::{ContextError, SheetContextUseCases};
