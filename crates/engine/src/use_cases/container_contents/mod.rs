//! Container contents aggregation use case.
//!
//! Recursively computes a container's displayed contents: capacity bar,
//! carried currency, the classified inventory of immediate children, and a
//! per-child display context. Depth is bounded only by the host's guarantee
//! that the ownership graph is acyclic.

mod error;

pub use error::ContainerError;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use loresheet_domain::{classify_inventory, to_nearest, Actor, Item, ItemId};

use crate::context::{ContainerContents, ItemRenderContext};
use crate::infrastructure::ports::ItemDocs;

/// Container contents aggregation use case.
///
/// Favorites are resolved through an index built once per call, so lookup
/// cost does not grow with the favorites list for every nested item.
pub struct ContainerContentsUseCase {
    item_docs: Arc<dyn ItemDocs>,
}

impl ContainerContentsUseCase {
    pub fn new(item_docs: Arc<dyn ItemDocs>) -> Self {
        Self { item_docs }
    }

    /// Aggregates the displayed contents of `container`.
    ///
    /// # Arguments
    /// * `container` - The container item to walk
    /// * `actor` - The owning actor, when one exists (favorites source)
    ///
    /// # Returns
    /// * `Ok(ContainerContents)` - Aggregated display data
    /// * `Err(ContainerError)` - The item is not a container, or a capacity
    ///   computation failed (typed with the offending item id)
    pub async fn execute(
        &self,
        container: &Item,
        actor: Option<&Actor>,
    ) -> Result<ContainerContents, ContainerError> {
        if !container.is_container() {
            return Err(ContainerError::NotAContainer(container.id));
        }

        let favorites_index = actor
            .and_then(|a| a.favorites.as_ref())
            .map(|favorites| {
                favorites
                    .iter()
                    .map(|favorite| favorite.id.clone())
                    .collect::<HashSet<String>>()
            });

        self.contents_of(container, actor, favorites_index.as_ref())
            .await
    }

    fn contents_of<'a>(
        &'a self,
        container: &'a Item,
        actor: Option<&'a Actor>,
        favorites_index: Option<&'a HashSet<String>>,
    ) -> BoxFuture<'a, Result<ContainerContents, ContainerError>> {
        async move {
            let capacity = self
                .item_docs
                .compute_capacity(container.id)
                .await
                .map_err(|source| ContainerError::Capacity {
                    item_id: container.id,
                    source,
                })?;

            let children = self.item_docs.contents(container.id).await?;
            let contents = classify_inventory(children.iter().cloned()).into_sections();

            let mut item_contexts: HashMap<ItemId, ItemRenderContext> = HashMap::new();
            for child in &children {
                let mut ctx = ItemRenderContext {
                    is_stack: child.is_stack(),
                    attunement: child.attunement,
                    ..ItemRenderContext::default()
                };

                ctx.total_weight = match self.item_docs.total_weight(child.id).await {
                    Ok(weight) => to_nearest(weight, 0.1),
                    Err(error) => {
                        tracing::warn!(
                            item_id = %child.id,
                            %error,
                            "Weight computation failed; showing zero weight"
                        );
                        0.0
                    }
                };

                if let (Some(actor), Some(index)) = (actor, favorites_index) {
                    let relative = self.item_docs.relative_id(child.id, actor.id);
                    ctx.favorite_id = index.contains(&relative).then_some(relative);
                }

                if child.is_container() {
                    ctx.container_contents = Some(
                        self.contents_of(child, actor, favorites_index).await?,
                    );
                }

                item_contexts.insert(child.id, ctx);
            }

            let currency = container
                .container
                .as_ref()
                .map(|data| data.currency.clone())
                .unwrap_or_default();

            Ok(ContainerContents {
                capacity,
                currency,
                contents,
                item_contexts,
            })
        }
        .boxed()
    }
}
