//! Sheet context assembly use cases.
//!
//! Builds the full [`SheetContext`] for one render pass: fetch the actor and
//! its items from the host, classify them into sections, derive per-item
//! display data, compute encumbrance, then resolve tabs and injected content
//! against the assembled context.

mod error;

pub use error::ContextError;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use loresheet_domain::{
    classify_features, classify_inventory, classify_spellbook, compute_encumbrance,
    partition_items, to_nearest, vehicle_bucket, Actor, ActorId, EncumbranceConfig, Item, ItemId,
    ItemType, Section, SheetId, VehicleBucket,
};

use crate::context::{ItemRenderContext, SheetContext};
use crate::infrastructure::ports::{ActorDocs, ItemDocs};
use crate::runtime::SheetRuntime;
use crate::use_cases::container_contents::ContainerContentsUseCase;

/// Use cases assembling render contexts per sheet kind.
pub struct SheetContextUseCases {
    actor_docs: Arc<dyn ActorDocs>,
    item_docs: Arc<dyn ItemDocs>,
    containers: ContainerContentsUseCase,
    runtime: Arc<SheetRuntime>,
    encumbrance_config: EncumbranceConfig,
}

impl SheetContextUseCases {
    pub fn new(
        actor_docs: Arc<dyn ActorDocs>,
        item_docs: Arc<dyn ItemDocs>,
        runtime: Arc<SheetRuntime>,
        encumbrance_config: EncumbranceConfig,
    ) -> Self {
        Self {
            actor_docs,
            containers: ContainerContentsUseCase::new(Arc::clone(&item_docs)),
            item_docs,
            runtime,
            encumbrance_config,
        }
    }

    /// Assembles the render context for a character or NPC sheet.
    ///
    /// # Returns
    /// * `Ok(SheetContext)` - Complete context for the pass
    /// * `Err(ContextError)` - The actor is gone or its items were unreadable
    pub async fn prepare_character(
        &self,
        sheet_id: SheetId,
        actor_id: ActorId,
        owner: bool,
        editable: bool,
    ) -> Result<SheetContext, ContextError> {
        let actor = self.fetch_actor(actor_id).await?;
        let items = self.actor_docs.items(actor_id).await?;

        let favorites_index = favorites_index(&actor);
        let partitions = partition_items(items);

        let mut item_contexts: HashMap<ItemId, ItemRenderContext> = HashMap::new();
        let mut carried_weight = 0.0;
        for item in &partitions.inventory {
            let (ctx, raw_weight) = self
                .item_context(item, &actor, favorites_index.as_ref())
                .await;
            carried_weight += raw_weight;
            item_contexts.insert(item.id, ctx);
        }

        // Character loads never apply the vehicle divisor.
        let config = EncumbranceConfig {
            vehicle_weight_multiplier: 1.0,
            ..self.encumbrance_config
        };
        let encumbrance =
            compute_encumbrance(carried_weight, &actor.currency, &config, actor.capacity_max);

        let mut context = SheetContext::empty(sheet_id, actor);
        context.inventory = classify_inventory(partitions.inventory).into_sections();
        context.features = classify_features(partitions.feats).into_sections();
        context.spellbook = classify_spellbook(partitions.spells).into_sections();
        context.item_contexts = item_contexts;
        context.encumbrance = encumbrance;
        context.owner = owner;
        context.editable = editable;

        self.resolve_registrations(&mut context);
        Ok(context)
    }

    /// Assembles the render context for a vehicle sheet.
    ///
    /// Items route by vehicle bucket: the explicit cargo flag wins, then
    /// weapons, equipment, and features split by activation; everything else
    /// lands in cargo. Encumbrance divides by the vehicle weight multiplier.
    pub async fn prepare_vehicle(
        &self,
        sheet_id: SheetId,
        actor_id: ActorId,
        owner: bool,
        editable: bool,
    ) -> Result<SheetContext, ContextError> {
        let actor = self.fetch_actor(actor_id).await?;
        let items = self.actor_docs.items(actor_id).await?;

        let favorites_index = favorites_index(&actor);

        let mut actions = Vec::new();
        let mut reactions = Vec::new();
        let mut passive = Vec::new();
        let mut weapons = Vec::new();
        let mut equipment = Vec::new();
        let mut cargo = Vec::new();

        let mut item_contexts: HashMap<ItemId, ItemRenderContext> = HashMap::new();
        let mut cargo_weight = 0.0;
        for item in items {
            let bucket = vehicle_bucket(&item);
            let (ctx, raw_weight) = self
                .item_context(&item, &actor, favorites_index.as_ref())
                .await;
            if bucket == VehicleBucket::Cargo {
                cargo_weight += raw_weight;
            }
            item_contexts.insert(item.id, ctx);

            match bucket {
                VehicleBucket::Actions => actions.push(item),
                VehicleBucket::Reactions => reactions.push(item),
                VehicleBucket::Passive => passive.push(item),
                VehicleBucket::Weapons => weapons.push(item),
                VehicleBucket::Equipment => equipment.push(item),
                VehicleBucket::Cargo => cargo.push(item),
            }
        }

        let encumbrance = compute_encumbrance(
            cargo_weight,
            &actor.currency,
            &self.encumbrance_config,
            actor.capacity_max,
        );

        let mut context = SheetContext::empty(sheet_id, actor);
        context.features = vec![
            vehicle_section("actions", "Actions", vec![ItemType::Feat], actions),
            vehicle_section("reactions", "Reactions", vec![ItemType::Feat], reactions),
            vehicle_section("passive", "Passive Features", vec![ItemType::Feat], passive),
            vehicle_section("weapons", "Weapons", vec![ItemType::Weapon], weapons),
            vehicle_section(
                "equipment",
                "Equipment",
                vec![ItemType::Equipment],
                equipment,
            ),
        ];
        context.cargo = vec![vehicle_section(
            "cargo",
            "Cargo",
            vec![ItemType::Loot],
            cargo,
        )];
        context.item_contexts = item_contexts;
        context.encumbrance = encumbrance;
        context.owner = owner;
        context.editable = editable;

        self.resolve_registrations(&mut context);
        Ok(context)
    }

    async fn fetch_actor(&self, actor_id: ActorId) -> Result<Actor, ContextError> {
        self.actor_docs
            .get(actor_id)
            .await?
            .ok_or(ContextError::ActorNotFound(actor_id))
    }

    /// Derives one item's display context. Returns the raw (unrounded) stack
    /// weight alongside so callers can accumulate totals without compounding
    /// rounding error.
    async fn item_context(
        &self,
        item: &Item,
        actor: &Actor,
        favorites_index: Option<&HashSet<String>>,
    ) -> (ItemRenderContext, f64) {
        let mut ctx = ItemRenderContext {
            is_stack: item.is_stack(),
            attunement: item.attunement,
            ..ItemRenderContext::default()
        };

        let raw_weight = match self.item_docs.total_weight(item.id).await {
            Ok(weight) => weight,
            Err(error) => {
                tracing::warn!(
                    item_id = %item.id,
                    %error,
                    "Weight computation failed; showing zero weight"
                );
                0.0
            }
        };
        ctx.total_weight = to_nearest(raw_weight, 0.1);

        if let Some(index) = favorites_index {
            let relative = self.item_docs.relative_id(item.id, actor.id);
            ctx.favorite_id = index.contains(&relative).then_some(relative);
        }

        if item.is_container() {
            ctx.container_contents = match self.containers.execute(item, Some(actor)).await {
                Ok(contents) => Some(contents),
                Err(error) => {
                    tracing::warn!(
                        item_id = %item.id,
                        %error,
                        "Container aggregation failed; rendering without contents"
                    );
                    None
                }
            };
        }

        (ctx, raw_weight)
    }

    fn resolve_registrations(&self, context: &mut SheetContext) {
        context.tabs = self.runtime.tabs_for_render(context.kind, context);
        context.custom_content = self.runtime.content_for_render(context.kind, context);
    }
}

fn favorites_index(actor: &Actor) -> Option<HashSet<String>> {
    actor.favorites.as_ref().map(|favorites| {
        favorites
            .iter()
            .map(|favorite| favorite.id.clone())
            .collect()
    })
}

fn vehicle_section(
    key: &str,
    label: &str,
    creation_item_types: Vec<ItemType>,
    items: Vec<Item>,
) -> Section {
    Section {
        key: key.to_string(),
        label: label.to_string(),
        items,
        can_create: true,
        creation_item_types,
        custom: false,
    }
}
