//! Container aggregation errors.

use loresheet_domain::ItemId;

use crate::infrastructure::ports::DocError;

/// Errors that can occur while aggregating a container's contents.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("Item is not a container: {0}")]
    NotAContainer(ItemId),

    #[error("Capacity computation failed for item {item_id}")]
    Capacity {
        item_id: ItemId,
        #[source]
        source: DocError,
    },

    #[error("Document access error: {0}")]
    Docs(#[from] DocError),
}
