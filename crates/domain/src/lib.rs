pub mod entities;
pub mod error;
pub mod ids;
pub mod sections;
pub mod value_objects;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{
    Activation, Actor, ActorKind, Attunement, CapacityDescriptor, ContainerData, Favorite, Item,
    ItemType,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ActorId, ItemId, SheetId, SubscriptionId};

// Re-export section/classifier types
pub use sections::{
    classify_features, classify_inventory, classify_spellbook, custom_section_tag,
    inventory_item_types, partition_items, vehicle_bucket, ItemPartitions, Section, SectionSet,
    SectionTemplate, VehicleBucket, INVENTORY_ITEM_TYPES,
};

// Re-export value objects
pub use value_objects::{
    compute_encumbrance, to_nearest, Currency, Encumbrance, EncumbranceConfig,
};
