//! Sheet runtime: per-kind tab and content registries.

use dashmap::DashMap;

use loresheet_domain::ActorKind;

use crate::context::{ContentView, SheetContext, TabView};

use super::types::{
    tab_ids, ContentVisibility, RegisteredContent, RegisteredTab, RegistrationOptions, TabTitle,
};

/// Process-scoped registries mapping a sheet kind to its ordered tab and
/// custom-content definitions.
pub struct SheetRuntime {
    tabs: DashMap<ActorKind, Vec<RegisteredTab>>,
    content: DashMap<ActorKind, Vec<RegisteredContent>>,
}

impl SheetRuntime {
    /// An empty runtime with no registered tabs (mainly for tests).
    pub fn empty() -> Self {
        Self {
            tabs: DashMap::new(),
            content: DashMap::new(),
        }
    }

    /// A runtime seeded with the built-in tab sets per sheet kind.
    pub fn new() -> Self {
        let runtime = Self::empty();
        for tab in default_character_tabs() {
            runtime.register_tab(ActorKind::Character, tab, RegistrationOptions::default());
        }
        for tab in default_npc_tabs() {
            runtime.register_tab(ActorKind::Npc, tab, RegistrationOptions::default());
        }
        for tab in default_vehicle_tabs() {
            runtime.register_tab(ActorKind::Vehicle, tab, RegistrationOptions::default());
        }
        runtime
    }

    /// Registers a tab for a sheet kind.
    ///
    /// A duplicate id without `override_existing` is a warned no-op; with
    /// the flag, the prior entry is removed and the new one appended (the
    /// overriding tab moves to the end of the list).
    pub fn register_tab(&self, kind: ActorKind, tab: RegisteredTab, options: RegistrationOptions) {
        let mut tabs = self.tabs.entry(kind).or_default();

        let exists = tabs.iter().any(|t| t.id == tab.id);
        if exists && !options.override_existing {
            tracing::warn!(tab_id = %tab.id, ?kind, "Tab with this id already exists");
            return;
        }
        if exists {
            tabs.retain(|t| t.id != tab.id);
        }
        tabs.push(tab);
    }

    /// Registers a custom content block for a sheet kind.
    pub fn register_content(&self, kind: ActorKind, content: RegisteredContent) {
        self.content.entry(kind).or_default().push(content);
    }

    /// All registered tabs for a kind, in registration order.
    pub fn all_registered_tabs(&self, kind: ActorKind) -> Vec<RegisteredTab> {
        self.tabs
            .get(&kind)
            .map(|tabs| tabs.value().clone())
            .unwrap_or_default()
    }

    /// Resolves the tabs to paint for the given context: visible entries in
    /// registration order, with display titles evaluated.
    pub fn tabs_for_render(&self, kind: ActorKind, context: &SheetContext) -> Vec<TabView> {
        self.all_registered_tabs(kind)
            .into_iter()
            .filter(|tab| {
                tab.enabled
                    .as_ref()
                    .map(|predicate| predicate.is_visible(context))
                    .unwrap_or(true)
            })
            .map(|tab| TabView {
                id: tab.id.clone(),
                title: tab.title.resolve(),
                layout: tab.layout.clone(),
            })
            .collect()
    }

    /// Resolves the custom content blocks to paint for the given context.
    pub fn content_for_render(&self, kind: ActorKind, context: &SheetContext) -> Vec<ContentView> {
        self.content
            .get(&kind)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| {
                        entry
                            .enabled
                            .as_ref()
                            .map(|predicate| predicate.is_visible(context))
                            .unwrap_or(true)
                    })
                    .map(|entry| ContentView {
                        id: entry.id.clone(),
                        selector: entry.selector.clone(),
                        position: entry.position,
                        layout: entry.layout.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Display title for a tab id, falling back to the id itself when the
    /// tab is unknown.
    pub fn tab_title(&self, kind: ActorKind, tab_id: &str) -> String {
        self.tabs
            .get(&kind)
            .and_then(|tabs| {
                tabs.iter()
                    .find(|t| t.id == tab_id)
                    .map(|t| t.title.resolve())
            })
            .unwrap_or_else(|| tab_id.to_string())
    }
}

impl Default for SheetRuntime {
    fn default() -> Self {
        Self::new()
    }
}

fn default_character_tabs() -> Vec<RegisteredTab> {
    vec![
        RegisteredTab::new(tab_ids::ACTIONS, "Actions"),
        RegisteredTab::new(tab_ids::ATTRIBUTES, "Attributes"),
        RegisteredTab::new(tab_ids::INVENTORY, "Inventory"),
        RegisteredTab::new(tab_ids::SPELLBOOK, "Spellbook"),
        RegisteredTab::new(tab_ids::FEATURES, "Features"),
        RegisteredTab::new(tab_ids::EFFECTS, "Effects"),
        RegisteredTab::new(tab_ids::BIOGRAPHY, "Biography"),
        RegisteredTab::new(tab_ids::JOURNAL, "Journal")
            .with_enabled(ContentVisibility::new(|context| context.owner)),
    ]
}

fn default_npc_tabs() -> Vec<RegisteredTab> {
    vec![
        RegisteredTab::new(tab_ids::ATTRIBUTES, "Attributes"),
        RegisteredTab::new(tab_ids::SPELLBOOK, "Spellbook"),
        RegisteredTab::new(tab_ids::EFFECTS, "Effects"),
        RegisteredTab::new(tab_ids::BIOGRAPHY, "Biography"),
        RegisteredTab::new(tab_ids::JOURNAL, "Journal")
            .with_enabled(ContentVisibility::new(|context| context.owner)),
    ]
}

fn default_vehicle_tabs() -> Vec<RegisteredTab> {
    vec![
        RegisteredTab::new(tab_ids::ATTRIBUTES, "Attributes"),
        RegisteredTab::new(tab_ids::CARGO_AND_CREW, "Cargo & Crew"),
        RegisteredTab::new(tab_ids::EFFECTS, "Effects"),
        RegisteredTab::new(tab_ids::VEHICLE_DESCRIPTION, "Description"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::InjectPosition;
    use loresheet_domain::{Actor, SheetId};

    fn test_context(owner: bool) -> SheetContext {
        let mut actor = Actor::new("Nyx", ActorKind::Character);
        actor.owner = owner;
        let mut context = SheetContext::empty(SheetId::new(), actor);
        context.owner = owner;
        context
    }

    fn tab_ids_of(runtime: &SheetRuntime, kind: ActorKind) -> Vec<String> {
        runtime
            .all_registered_tabs(kind)
            .into_iter()
            .map(|t| t.id)
            .collect()
    }

    #[test]
    fn duplicate_registration_without_override_is_a_noop() {
        let runtime = SheetRuntime::empty();
        runtime.register_tab(
            ActorKind::Character,
            RegisteredTab::new("foo", "First"),
            RegistrationOptions::default(),
        );
        runtime.register_tab(
            ActorKind::Character,
            RegisteredTab::new("bar", "Bar"),
            RegistrationOptions::default(),
        );
        runtime.register_tab(
            ActorKind::Character,
            RegisteredTab::new("foo", "Second"),
            RegistrationOptions::default(),
        );

        // First definition survives, at its original position
        assert_eq!(tab_ids_of(&runtime, ActorKind::Character), vec!["foo", "bar"]);
        let tabs = runtime.all_registered_tabs(ActorKind::Character);
        assert_eq!(tabs[0].title.resolve(), "First");
    }

    #[test]
    fn override_replaces_and_moves_to_end() {
        let runtime = SheetRuntime::empty();
        runtime.register_tab(
            ActorKind::Character,
            RegisteredTab::new("foo", "First"),
            RegistrationOptions::default(),
        );
        runtime.register_tab(
            ActorKind::Character,
            RegisteredTab::new("bar", "Bar"),
            RegistrationOptions::default(),
        );
        runtime.register_tab(
            ActorKind::Character,
            RegisteredTab::new("foo", "Second"),
            RegistrationOptions {
                override_existing: true,
            },
        );

        assert_eq!(tab_ids_of(&runtime, ActorKind::Character), vec!["bar", "foo"]);
        let tabs = runtime.all_registered_tabs(ActorKind::Character);
        assert_eq!(tabs[1].title.resolve(), "Second");
    }

    #[test]
    fn tabs_for_render_respects_visibility_and_order() {
        let runtime = SheetRuntime::new();

        let for_owner = runtime.tabs_for_render(ActorKind::Character, &test_context(true));
        let for_visitor = runtime.tabs_for_render(ActorKind::Character, &test_context(false));

        assert!(for_owner.iter().any(|t| t.id == tab_ids::JOURNAL));
        assert!(for_visitor.iter().all(|t| t.id != tab_ids::JOURNAL));

        // Registration order is preserved
        let ids: Vec<&str> = for_owner.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids[0], tab_ids::ACTIONS);
        assert_eq!(ids[1], tab_ids::ATTRIBUTES);
    }

    #[test]
    fn resolver_titles_are_evaluated_at_render_time() {
        let runtime = SheetRuntime::empty();
        runtime.register_tab(
            ActorKind::Vehicle,
            RegisteredTab {
                id: "shipyard".to_string(),
                title: TabTitle::resolver(|| "Shipyard".to_string()),
                layout: "classic".to_string(),
                enabled: None,
            },
            RegistrationOptions::default(),
        );

        let mut context = test_context(true);
        context.kind = ActorKind::Vehicle;
        let tabs = runtime.tabs_for_render(ActorKind::Vehicle, &context);
        assert_eq!(tabs[0].title, "Shipyard");
    }

    #[test]
    fn content_for_render_filters_by_predicate() {
        let runtime = SheetRuntime::empty();
        runtime.register_content(
            ActorKind::Character,
            RegisteredContent::new("banner", ".sheet-header", InjectPosition::AfterBegin),
        );
        runtime.register_content(
            ActorKind::Character,
            RegisteredContent::new("gm-notes", ".sheet-body", InjectPosition::BeforeEnd)
                .with_enabled(ContentVisibility::new(|context| context.owner)),
        );

        let visible = runtime.content_for_render(ActorKind::Character, &test_context(false));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "banner");
    }

    #[test]
    fn tab_title_falls_back_to_id() {
        let runtime = SheetRuntime::new();
        assert_eq!(
            runtime.tab_title(ActorKind::Character, tab_ids::INVENTORY),
            "Inventory"
        );
        assert_eq!(runtime.tab_title(ActorKind::Character, "nonesuch"), "nonesuch");
    }
}
