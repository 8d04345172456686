//! Vehicle sheet.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use loresheet_domain::{ActorId, ActorKind, Item, SheetId, INVENTORY_ITEM_TYPES};

use crate::context::SheetContext;
use crate::runtime::tab_ids;
use crate::stores::SheetState;
use crate::use_cases::sheet_context::{ContextError, SheetContextUseCases};

use super::Sheet;

/// A vehicle sheet bound to one actor.
pub struct VehicleSheet {
    sheet_id: SheetId,
    actor_id: ActorId,
    contexts: Arc<SheetContextUseCases>,
    state: Arc<Mutex<SheetState>>,
    owner: bool,
    editable: bool,
}

impl VehicleSheet {
    pub fn new(
        actor_id: ActorId,
        contexts: Arc<SheetContextUseCases>,
        state: Arc<Mutex<SheetState>>,
        owner: bool,
        editable: bool,
    ) -> Self {
        Self {
            sheet_id: SheetId::new(),
            actor_id,
            contexts,
            state,
            owner,
            editable,
        }
    }

    pub fn state(&self) -> Arc<Mutex<SheetState>> {
        Arc::clone(&self.state)
    }
}

#[async_trait]
impl Sheet for VehicleSheet {
    fn id(&self) -> SheetId {
        self.sheet_id
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Vehicle
    }

    async fn prepare_context(&self) -> Result<SheetContext, ContextError> {
        self.contexts
            .prepare_vehicle(self.sheet_id, self.actor_id, self.owner, self.editable)
            .await
    }

    /// Inventory-typed items dropped while the cargo tab is open are flagged
    /// as cargo, so a ballista dropped there stows instead of arming.
    async fn handle_drop(&self, mut item: Item) -> Item {
        let on_cargo_tab =
            self.state.lock().await.current_tab_id() == tab_ids::CARGO_AND_CREW;
        if on_cargo_tab && INVENTORY_ITEM_TYPES.contains(&item.item_type) {
            item.vehicle_cargo = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockActorDocs, MockItemDocs};
    use crate::runtime::SheetRuntime;
    use loresheet_domain::{Actor, EncumbranceConfig, ItemType};

    fn sheet_on_tab(tab_id: &str) -> VehicleSheet {
        let actor = Actor::new("Sailing Ship", ActorKind::Vehicle);
        let actor_id = actor.id;
        let mut actor_docs = MockActorDocs::new();
        actor_docs
            .expect_get()
            .returning(move |_| Ok(Some(actor.clone())));
        actor_docs.expect_items().returning(|_| Ok(vec![]));

        let contexts = Arc::new(SheetContextUseCases::new(
            Arc::new(actor_docs),
            Arc::new(MockItemDocs::new()),
            Arc::new(SheetRuntime::new()),
            EncumbranceConfig::imperial(),
        ));
        VehicleSheet::new(
            actor_id,
            contexts,
            Arc::new(Mutex::new(SheetState::new(tab_id))),
            true,
            true,
        )
    }

    #[tokio::test]
    async fn drop_on_cargo_tab_flags_the_item_as_cargo() {
        let sheet = sheet_on_tab(tab_ids::CARGO_AND_CREW);
        let ballista = Item::new("Ballista", ItemType::Weapon);
        assert!(!ballista.vehicle_cargo);

        let dropped = sheet.handle_drop(ballista).await;
        assert!(dropped.vehicle_cargo);
    }

    #[tokio::test]
    async fn drop_on_another_tab_leaves_the_item_alone() {
        let sheet = sheet_on_tab(tab_ids::ATTRIBUTES);
        let ballista = Item::new("Ballista", ItemType::Weapon);
        let dropped = sheet.handle_drop(ballista).await;
        assert!(!dropped.vehicle_cargo);
    }

    #[tokio::test]
    async fn non_inventory_drops_are_never_flagged() {
        let sheet = sheet_on_tab(tab_ids::CARGO_AND_CREW);
        let feat = Item::new("Full Sail", ItemType::Feat);
        let dropped = sheet.handle_drop(feat).await;
        assert!(!dropped.vehicle_cargo);
    }

    #[tokio::test]
    async fn prepare_context_builds_a_vehicle_context() {
        let sheet = sheet_on_tab(tab_ids::CARGO_AND_CREW);
        let context = sheet.prepare_context().await.expect("context assembles");
        assert_eq!(context.kind, ActorKind::Vehicle);
        assert!(context.cargo.iter().any(|s| s.key == "cargo"));
    }
}
