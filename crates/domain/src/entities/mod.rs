//! Display-model entities mirrored from the host platform's documents.

mod actor;
mod item;

pub use actor::{Actor, ActorKind, Favorite};
pub use item::{Activation, Attunement, CapacityDescriptor, ContainerData, Item, ItemType};
