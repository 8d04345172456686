//! Render target port.

use async_trait::async_trait;

use crate::context::SheetContext;

use super::error::ViewError;

/// The host-side render target for one open sheet.
///
/// `mount` rebuilds the target (full render: the host reapplies window
/// attributes and restores scroll position); `patch` updates the existing
/// markup in place, preserving input focus.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetView: Send + Sync {
    async fn mount(&self, context: &SheetContext) -> Result<(), ViewError>;

    async fn patch(&self, context: &SheetContext) -> Result<(), ViewError>;

    /// Reapplies persisted window sizing ahead of a full render.
    fn apply_window_size(&self, width: f64, height: f64);

    /// Detaches the render target; called exactly once on close.
    fn detach(&self);
}
