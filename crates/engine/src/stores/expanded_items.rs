//! Expanded-item detail cache.
//!
//! Detail markup for expanded rows is fetched from the host lazily. The
//! cache is refreshed at the start of every render pass so expanded rows
//! survive a full re-render without flashing empty.

use std::collections::HashMap;
use std::sync::Arc;

use loresheet_domain::ItemId;

use crate::infrastructure::ports::{ItemDetail, ItemDocs};

#[derive(Default)]
pub struct ExpandedItemCache {
    details: HashMap<ItemId, ItemDetail>,
}

impl ExpandedItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: ItemId) -> Option<&ItemDetail> {
        self.details.get(&item_id)
    }

    /// Copy of the cached details, for handing to the render context.
    pub fn snapshot(&self) -> HashMap<ItemId, ItemDetail> {
        self.details.clone()
    }

    /// Re-fetches detail data for every given item. Items the host no
    /// longer knows are dropped from the cache; fetch failures keep any
    /// stale entry rather than blanking the row.
    pub async fn refresh(&mut self, item_docs: &Arc<dyn ItemDocs>, item_ids: &[ItemId]) {
        for &item_id in item_ids {
            match item_docs.detail(item_id).await {
                Ok(Some(detail)) => {
                    self.details.insert(item_id, detail);
                }
                Ok(None) => {
                    self.details.remove(&item_id);
                }
                Err(error) => {
                    tracing::warn!(%item_id, %error, "Failed to refresh item detail");
                }
            }
        }
        self.details.retain(|id, _| item_ids.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{DocError, MockItemDocs};

    fn detail_for(item_id: ItemId, name: &str) -> ItemDetail {
        ItemDetail {
            item_id,
            name: name.to_string(),
            description: format!("<p>{name}</p>"),
            properties: vec![],
        }
    }

    #[tokio::test]
    async fn refresh_fetches_details_for_expanded_items() {
        let item_id = ItemId::new();
        let mut item_docs = MockItemDocs::new();
        item_docs
            .expect_detail()
            .returning(move |id| Ok(Some(detail_for(id, "Rope"))));
        let item_docs: Arc<dyn ItemDocs> = Arc::new(item_docs);

        let mut cache = ExpandedItemCache::new();
        cache.refresh(&item_docs, &[item_id]).await;

        assert_eq!(cache.get(item_id).map(|d| d.name.as_str()), Some("Rope"));
    }

    #[tokio::test]
    async fn deleted_items_are_evicted() {
        let item_id = ItemId::new();
        let mut item_docs = MockItemDocs::new();
        item_docs
            .expect_detail()
            .returning(move |id| Ok(Some(detail_for(id, "Rope"))));
        let item_docs: Arc<dyn ItemDocs> = Arc::new(item_docs);

        let mut cache = ExpandedItemCache::new();
        cache.refresh(&item_docs, &[item_id]).await;

        let mut gone = MockItemDocs::new();
        gone.expect_detail().returning(|_| Ok(None));
        let gone: Arc<dyn ItemDocs> = Arc::new(gone);
        cache.refresh(&gone, &[item_id]).await;

        assert!(cache.get(item_id).is_none());
    }

    #[tokio::test]
    async fn fetch_failure_keeps_the_stale_entry() {
        let item_id = ItemId::new();
        let mut item_docs = MockItemDocs::new();
        item_docs
            .expect_detail()
            .returning(move |id| Ok(Some(detail_for(id, "Rope"))));
        let item_docs: Arc<dyn ItemDocs> = Arc::new(item_docs);

        let mut cache = ExpandedItemCache::new();
        cache.refresh(&item_docs, &[item_id]).await;

        let mut failing = MockItemDocs::new();
        failing
            .expect_detail()
            .returning(|_| Err(DocError::Computation("host unavailable".to_string())));
        let failing: Arc<dyn ItemDocs> = Arc::new(failing);
        cache.refresh(&failing, &[item_id]).await;

        assert_eq!(cache.get(item_id).map(|d| d.name.as_str()), Some("Rope"));
    }

    #[tokio::test]
    async fn collapsed_items_are_dropped() {
        let kept = ItemId::new();
        let collapsed = ItemId::new();
        let mut item_docs = MockItemDocs::new();
        item_docs
            .expect_detail()
            .returning(move |id| Ok(Some(detail_for(id, "Rope"))));
        let item_docs: Arc<dyn ItemDocs> = Arc::new(item_docs);

        let mut cache = ExpandedItemCache::new();
        cache.refresh(&item_docs, &[kept, collapsed]).await;
        cache.refresh(&item_docs, &[kept]).await;

        assert!(cache.get(kept).is_some());
        assert!(cache.get(collapsed).is_none());
    }
}
