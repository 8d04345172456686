//! Document access ports.
//!
//! Read-only views over the host platform's actor and item documents.
//! Weight and capacity are async because the host may compute them lazily,
//! cascading across a container's descendants.

use async_trait::async_trait;
use serde::Serialize;

use loresheet_domain::{Actor, ActorId, Encumbrance, Item, ItemId};

use super::error::DocError;

/// Detail data for an expanded item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetail {
    pub item_id: ItemId,
    pub name: String,
    /// Pre-rendered description markup
    pub description: String,
    /// Property chips shown under the description
    pub properties: Vec<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorDocs: Send + Sync {
    async fn get(&self, id: ActorId) -> Result<Option<Actor>, DocError>;

    /// All items owned directly by the actor (container children excluded).
    async fn items(&self, id: ActorId) -> Result<Vec<Item>, DocError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemDocs: Send + Sync {
    /// Immediate children of a container item.
    async fn contents(&self, container_id: ItemId) -> Result<Vec<Item>, DocError>;

    /// Computes a container's capacity bar. May cascade weight computation
    /// over all descendants.
    async fn compute_capacity(&self, container_id: ItemId) -> Result<Encumbrance, DocError>;

    /// Total weight of an item stack (quantity included).
    async fn total_weight(&self, item_id: ItemId) -> Result<f64, DocError>;

    /// Detail data for an expanded row. `None` when the item no longer
    /// exists.
    async fn detail(&self, item_id: ItemId) -> Result<Option<ItemDetail>, DocError>;

    /// The item's identifier relative to the given actor, as used by the
    /// actor's favorites list.
    fn relative_id(&self, item_id: ItemId, actor_id: ActorId) -> String;
}
