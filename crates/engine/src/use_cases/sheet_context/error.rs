//! Context assembly errors.

use loresheet_domain::ActorId;

use crate::infrastructure::ports::DocError;

/// Errors that can occur while assembling a sheet context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),

    #[error("Document access error: {0}")]
    Docs(#[from] DocError),
}
