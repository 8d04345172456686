//! Actor entity - a character, NPC, or vehicle owning items and stats.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::ids::ActorId;
use crate::value_objects::Currency;

/// Kind of actor, selects which sheet type is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Character,
    Npc,
    Vehicle,
}

impl FromStr for ActorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" => Ok(Self::Character),
            "npc" => Ok(Self::Npc),
            "vehicle" => Ok(Self::Vehicle),
            _ => Err(DomainError::parse(format!("Unknown actor kind: {}", s))),
        }
    }
}

/// A user-marked item reference surfaced for quick access.
///
/// The id is the item's relative identifier within the owning actor, as
/// produced by the host's relative-identifier resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
}

/// An actor as presented to this crate by the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    /// Coin purse carried directly by the actor
    pub currency: Currency,
    /// Maximum cargo/carry capacity in weight units
    pub capacity_max: f64,
    /// Favorites list, if the actor kind maintains one
    pub favorites: Option<Vec<Favorite>>,
    /// Whether the current user owns this actor
    pub owner: bool,
}

impl Actor {
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
            currency: Currency::default(),
            capacity_max: 0.0,
            favorites: None,
            owner: false,
        }
    }

    pub fn with_id(mut self, id: ActorId) -> Self {
        self.id = id;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_capacity_max(mut self, capacity_max: f64) -> Self {
        self.capacity_max = capacity_max;
        self
    }

    pub fn with_favorites(mut self, favorites: Vec<Favorite>) -> Self {
        self.favorites = Some(favorites);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_kind_parse() {
        assert_eq!(
            "vehicle".parse::<ActorKind>().ok(),
            Some(ActorKind::Vehicle)
        );
        assert!("starship".parse::<ActorKind>().is_err());
    }

    #[test]
    fn test_actor_defaults() {
        let actor = Actor::new("Wagon", ActorKind::Vehicle);
        assert!(actor.favorites.is_none());
        assert_eq!(actor.capacity_max, 0.0);
        assert!(!actor.owner);
    }
}
