//! Registration entry types.

use std::fmt;
use std::sync::Arc;

use crate::context::{InjectPosition, SheetContext};

/// Well-known tab ids.
pub mod tab_ids {
    pub const ACTIONS: &str = "actions";
    pub const ATTRIBUTES: &str = "attributes";
    pub const INVENTORY: &str = "inventory";
    pub const SPELLBOOK: &str = "spellbook";
    pub const FEATURES: &str = "features";
    pub const EFFECTS: &str = "effects";
    pub const BIOGRAPHY: &str = "biography";
    pub const JOURNAL: &str = "journal";
    pub const CARGO_AND_CREW: &str = "cargo-and-crew";
    pub const VEHICLE_DESCRIPTION: &str = "description";
}

/// A tab title: either a literal string or a resolver evaluated at render
/// time (e.g., for titles that depend on late-loaded localization).
#[derive(Clone)]
pub enum TabTitle {
    Literal(String),
    Resolver(Arc<dyn Fn() -> String + Send + Sync>),
}

impl TabTitle {
    pub fn literal(title: impl Into<String>) -> Self {
        Self::Literal(title.into())
    }

    pub fn resolver(resolve: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::Resolver(Arc::new(resolve))
    }

    /// Evaluates the display title.
    pub fn resolve(&self) -> String {
        match self {
            Self::Literal(title) => title.clone(),
            Self::Resolver(resolve) => resolve(),
        }
    }
}

impl fmt::Debug for TabTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(title) => f.debug_tuple("Literal").field(title).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<&str> for TabTitle {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

/// Visibility predicate evaluated against the current render context.
#[derive(Clone)]
pub struct ContentVisibility(Arc<dyn Fn(&SheetContext) -> bool + Send + Sync>);

impl ContentVisibility {
    pub fn new(predicate: impl Fn(&SheetContext) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    pub fn is_visible(&self, context: &SheetContext) -> bool {
        (self.0)(context)
    }
}

impl fmt::Debug for ContentVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentVisibility(..)")
    }
}

/// A registered tab definition.
#[derive(Debug, Clone)]
pub struct RegisteredTab {
    pub id: String,
    pub title: TabTitle,
    pub layout: String,
    /// `None` means always visible
    pub enabled: Option<ContentVisibility>,
}

impl RegisteredTab {
    pub fn new(id: impl Into<String>, title: impl Into<TabTitle>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            layout: "classic".to_string(),
            enabled: None,
        }
    }

    pub fn with_enabled(mut self, predicate: ContentVisibility) -> Self {
        self.enabled = Some(predicate);
        self
    }
}

/// A registered custom content block.
#[derive(Debug, Clone)]
pub struct RegisteredContent {
    pub id: String,
    /// Host-side selector the content is injected at
    pub selector: String,
    pub position: InjectPosition,
    pub layout: String,
    /// `None` means always visible
    pub enabled: Option<ContentVisibility>,
}

impl RegisteredContent {
    pub fn new(
        id: impl Into<String>,
        selector: impl Into<String>,
        position: InjectPosition,
    ) -> Self {
        Self {
            id: id.into(),
            selector: selector.into(),
            position,
            layout: "classic".to_string(),
            enabled: None,
        }
    }

    pub fn with_enabled(mut self, predicate: ContentVisibility) -> Self {
        self.enabled = Some(predicate);
        self
    }
}

/// Options for tab registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationOptions {
    /// Replace an existing tab with the same id. The replacement is removed
    /// then appended, so an overriding tab moves to the end of the list.
    pub override_existing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_and_resolver_titles_resolve() {
        assert_eq!(TabTitle::literal("Inventory").resolve(), "Inventory");
        let title = TabTitle::resolver(|| "Cargo & Crew".to_string());
        assert_eq!(title.resolve(), "Cargo & Crew");
    }
}
