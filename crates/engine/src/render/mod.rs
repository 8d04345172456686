//! Render coordination.
//!
//! Every open sheet gets one render worker that serializes its render
//! passes; callers request passes through the coordinator handle and can
//! observe completed passes through [`RenderObservers`].

mod coordinator;
mod observers;

pub use coordinator::{RenderCoordinator, RenderError, RenderMode};
pub use observers::RenderObservers;
