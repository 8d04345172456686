//! Port traits for host-platform boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Document access (the host owns actors/items and their persistence)
//! - The render target (the host owns the DOM and window chrome)

mod docs;
mod error;
mod view;

pub use docs::{ActorDocs, ItemDetail, ItemDocs};
pub use error::{DocError, ViewError};
pub use view::SheetView;

#[cfg(test)]
pub use docs::{MockActorDocs, MockItemDocs};
#[cfg(test)]
pub use view::MockSheetView;
