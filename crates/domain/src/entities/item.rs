//! Item entity - an owned object displayed on a sheet
//!
//! Items are owned by exactly one parent at a time: an actor, or a container
//! item. Containers nest to arbitrary depth; the host platform guarantees the
//! ownership graph is acyclic. This crate never mutates items - it only
//! classifies them into display sections and derives per-item render data.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::ids::ItemId;
use crate::value_objects::Currency;

/// The host platform's item type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Weapon,
    Equipment,
    Consumable,
    Tool,
    Container,
    Loot,
    Spell,
    Feat,
    Race,
    Background,
    Class,
    Subclass,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ItemType {
    /// The stable key used for this type's default display section.
    pub fn section_key(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Equipment => "equipment",
            Self::Consumable => "consumable",
            Self::Tool => "tool",
            Self::Container => "container",
            Self::Loot => "loot",
            Self::Spell => "spell",
            Self::Feat => "feat",
            Self::Race => "race",
            Self::Background => "background",
            Self::Class => "class",
            Self::Subclass => "subclass",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weapon" => Ok(Self::Weapon),
            "equipment" => Ok(Self::Equipment),
            "consumable" => Ok(Self::Consumable),
            "tool" => Ok(Self::Tool),
            "container" => Ok(Self::Container),
            "loot" => Ok(Self::Loot),
            "spell" => Ok(Self::Spell),
            "feat" => Ok(Self::Feat),
            "race" => Ok(Self::Race),
            "background" => Ok(Self::Background),
            "class" => Ok(Self::Class),
            "subclass" => Ok(Self::Subclass),
            _ => Err(DomainError::parse(format!("Unknown item type: {}", s))),
        }
    }
}

/// Attunement state for magic items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attunement {
    /// Requires attunement but is not currently attuned
    Required,
    /// Currently attuned
    Attuned,
}

/// Activation mode for feature items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Action,
    Reaction,
    /// Requires crew to operate (vehicle features)
    Crew,
}

/// Capacity descriptor for container items.
///
/// The actual capacity computation is a host operation (it may cascade weight
/// computation across all descendants) and is reached through a port.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum CapacityDescriptor {
    /// Limited by item count
    Items { max: u32 },
    /// Limited by carried weight
    Weight { max: f64 },
}

/// Container-specific data carried by items of type `Container`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerData {
    /// Coin purse carried inside the container
    pub currency: Currency,
    /// How the container's capacity is measured
    pub capacity: CapacityDescriptor,
}

/// An item as presented to this crate by the host platform.
///
/// Optional fields apply only to some types (`activation` to feats,
/// `spell_level` to spells, `container` to containers) and are ignored
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub item_type: ItemType,
    pub quantity: u32,
    /// Base weight of a single unit
    pub weight: f64,
    /// User-assigned custom section label, if any
    pub custom_section: Option<String>,
    pub attunement: Option<Attunement>,
    pub activation: Option<Activation>,
    pub spell_level: Option<u8>,
    /// Host flag marking this item as vehicle cargo
    pub vehicle_cargo: bool,
    pub container: Option<ContainerData>,
}

impl Item {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            item_type,
            quantity: 1,
            weight: 0.0,
            custom_section: None,
            attunement: None,
            activation: None,
            spell_level: None,
            vehicle_cargo: false,
            container: None,
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_custom_section(mut self, label: impl Into<String>) -> Self {
        self.custom_section = Some(label.into());
        self
    }

    pub fn with_container(mut self, container: ContainerData) -> Self {
        self.container = Some(container);
        self
    }

    /// Whether the item is displayed as a stack (quantity above one).
    pub fn is_stack(&self) -> bool {
        self.quantity > 1
    }

    pub fn is_container(&self) -> bool {
        self.item_type == ItemType::Container
    }
}
