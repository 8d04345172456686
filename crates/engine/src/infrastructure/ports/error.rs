//! Port error types.

#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("Not found")]
    NotFound,
    #[error("Document access error: {0}")]
    Access(String),
    #[error("Computation failed: {0}")]
    Computation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Render target detached")]
    Detached,
    #[error("View error: {0}")]
    Failed(String),
}
