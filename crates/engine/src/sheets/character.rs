//! Character and NPC sheet.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use loresheet_domain::{ActorId, ActorKind, Item, SheetId};

use crate::context::SheetContext;
use crate::stores::SheetState;
use crate::use_cases::sheet_context::{ContextError, SheetContextUseCases};

use super::Sheet;

/// A character or NPC sheet bound to one actor.
pub struct CharacterSheet {
    sheet_id: SheetId,
    actor_id: ActorId,
    kind: ActorKind,
    contexts: Arc<SheetContextUseCases>,
    state: Arc<Mutex<SheetState>>,
    owner: bool,
    editable: bool,
}

impl CharacterSheet {
    pub fn new(
        actor_id: ActorId,
        kind: ActorKind,
        contexts: Arc<SheetContextUseCases>,
        state: Arc<Mutex<SheetState>>,
        owner: bool,
        editable: bool,
    ) -> Self {
        Self {
            sheet_id: SheetId::new(),
            actor_id,
            kind,
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
impl Sheet for CharacterSheet {
    fn id(&self) -> SheetId {
        self.sheet_id
    }

    fn kind(&self) -> ActorKind {
        self.kind
    }

    async fn prepare_context(&self) -> Result<SheetContext, ContextError> {
        self.contexts
            .prepare_character(self.sheet_id, self.actor_id, self.owner, self.editable)
            .await
    }

    /// Characters take dropped items as-is.
    async fn handle_drop(&self, item: Item) -> Item {
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockActorDocs, MockItemDocs};
    use crate::runtime::{tab_ids, SheetRuntime};
    use loresheet_domain::{Actor, EncumbranceConfig, ItemType};

    fn sheet_for(actor: Actor) -> CharacterSheet {
        let actor_id = actor.id;
        let kind = actor.kind;
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
        CharacterSheet::new(
            actor_id,
            kind,
            contexts,
            Arc::new(Mutex::new(SheetState::new(tab_ids::ATTRIBUTES))),
            true,
            true,
        )
    }

    #[tokio::test]
    async fn prepare_context_builds_for_the_bound_actor() {
        let actor = Actor::new("Nyx", ActorKind::Character);
        let actor_id = actor.id;
        let sheet = sheet_for(actor);

        let context = sheet.prepare_context().await.expect("context assembles");
        assert_eq!(context.actor.id, actor_id);
        assert_eq!(context.kind, ActorKind::Character);
        assert_eq!(context.sheet_id, sheet.id());
    }

    #[tokio::test]
    async fn dropped_items_pass_through_unchanged() {
        let sheet = sheet_for(Actor::new("Nyx", ActorKind::Character));
        let sword = Item::new("Sword", ItemType::Weapon);
        let dropped = sheet.handle_drop(sword.clone()).await;
        assert_eq!(dropped, sword);
    }
}
