//! Item classification into display sections.
//!
//! Pure functions that bucket a flat list of owned items into named, ordered
//! sections: inventory categories, feature categories, and spellbook levels.
//! A user-assigned custom section tag always wins over type-based routing.
//! Classification is stable: items keep their input order within a bucket,
//! and classifying the same input twice yields identical sections.

use serde::{Deserialize, Serialize};

use crate::entities::{Activation, Item, ItemType};

/// Item types that belong to inventory sections.
pub const INVENTORY_ITEM_TYPES: [ItemType; 6] = [
    ItemType::Weapon,
    ItemType::Equipment,
    ItemType::Consumable,
    ItemType::Tool,
    ItemType::Container,
    ItemType::Loot,
];

/// Item types that belong to inventory sections.
pub fn inventory_item_types() -> &'static [ItemType] {
    &INVENTORY_ITEM_TYPES
}

/// Returns the item's custom section tag, if it has a meaningful one.
///
/// Empty and whitespace-only tags count as no tag at all and fall back to
/// type-based routing.
pub fn custom_section_tag(item: &Item) -> Option<&str> {
    item.custom_section
        .as_deref()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}

/// A named, ordered bucket of items for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable section key (type key, spell level key, or the custom label)
    pub key: String,
    /// Display label
    pub label: String,
    /// Items in input order
    pub items: Vec<Item>,
    /// Whether new items may be created directly into this section
    pub can_create: bool,
    /// Item types creatable in this section
    pub creation_item_types: Vec<ItemType>,
    /// Whether the section came from a user-defined custom tag
    pub custom: bool,
}

/// Configuration template a section is created from.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTemplate {
    pub key: String,
    pub label: String,
    pub can_create: bool,
    pub creation_item_types: Vec<ItemType>,
    pub custom: bool,
}

impl SectionTemplate {
    /// Template for a lazily-created custom section. Custom sections accept
    /// every creatable type of the partition they live in.
    pub fn custom(label: &str, creation_item_types: Vec<ItemType>) -> Self {
        Self {
            key: label.to_string(),
            label: label.to_string(),
            can_create: true,
            creation_item_types,
            custom: true,
        }
    }

    fn build(&self) -> Section {
        Section {
            key: self.key.clone(),
            label: self.label.clone(),
            items: Vec::new(),
            can_create: self.can_create,
            creation_item_types: self.creation_item_types.clone(),
            custom: self.custom,
        }
    }
}

/// Ordered collection of sections, keyed by section key.
///
/// Insertion order is display order: built-in sections first (template
/// order), custom sections appended as they are first encountered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionSet {
    sections: Vec<Section>,
}

impl SectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds built-in sections from templates, in template order.
    pub fn from_templates(templates: &[SectionTemplate]) -> Self {
        Self {
            sections: templates.iter().map(SectionTemplate::build).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.key == key)
    }

    /// Returns the section for `key`, lazily creating it from `template`.
    pub fn get_or_create(
        &mut self,
        key: &str,
        template: impl FnOnce() -> SectionTemplate,
    ) -> &mut Section {
        match self.sections.iter().position(|s| s.key == key) {
            Some(position) => &mut self.sections[position],
            None => {
                self.sections.push(template().build());
                let end = self.sections.len() - 1;
                &mut self.sections[end]
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}

fn default_inventory_templates() -> Vec<SectionTemplate> {
    INVENTORY_ITEM_TYPES
        .iter()
        .map(|item_type| SectionTemplate {
            key: item_type.section_key().to_string(),
            label: default_inventory_label(*item_type).to_string(),
            can_create: true,
            creation_item_types: vec![*item_type],
            custom: false,
        })
        .collect()
}

fn default_inventory_label(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Weapon => "Weapons",
        ItemType::Equipment => "Equipment",
        ItemType::Consumable => "Consumables",
        ItemType::Tool => "Tools",
        ItemType::Container => "Containers",
        ItemType::Loot => "Loot",
        _ => "Items",
    }
}

/// Result of splitting an actor's flat item list by top-level destination.
///
/// Spells, feats, and origin items (race/background/class/subclass) go to
/// their own partitions; inventory-typed items go to `inventory`. Items of
/// any other type are dropped here - routing them is the host's concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPartitions {
    pub inventory: Vec<Item>,
    pub spells: Vec<Item>,
    pub feats: Vec<Item>,
    pub races: Vec<Item>,
    pub backgrounds: Vec<Item>,
    pub classes: Vec<Item>,
    pub subclasses: Vec<Item>,
}

/// Splits items into top-level partitions, preserving input order.
pub fn partition_items(items: impl IntoIterator<Item = Item>) -> ItemPartitions {
    let mut partitions = ItemPartitions::default();
    for item in items {
        match item.item_type {
            ItemType::Spell => partitions.spells.push(item),
            ItemType::Feat => partitions.feats.push(item),
            ItemType::Race => partitions.races.push(item),
            ItemType::Background => partitions.backgrounds.push(item),
            ItemType::Class => partitions.classes.push(item),
            ItemType::Subclass => partitions.subclasses.push(item),
            other if INVENTORY_ITEM_TYPES.contains(&other) => partitions.inventory.push(item),
            _ => {}
        }
    }
    partitions
}

/// Classifies inventory-typed items into inventory sections.
///
/// Custom-tagged items route unconditionally to a section keyed by the tag,
/// created on first use and marked user-creatable for every inventory type.
/// Untagged items route by type; items whose type is not an inventory type
/// are dropped.
pub fn classify_inventory(items: impl IntoIterator<Item = Item>) -> SectionSet {
    let mut sections = SectionSet::from_templates(&default_inventory_templates());
    for item in items {
        if let Some(tag) = custom_section_tag(&item).map(str::to_string) {
            sections
                .get_or_create(&tag, || {
                    SectionTemplate::custom(&tag, INVENTORY_ITEM_TYPES.to_vec())
                })
                .items
                .push(item);
            continue;
        }
        if let Some(section) = sections.get_mut(item.item_type.section_key()) {
            section.items.push(item);
        }
        // Non-inventory types without a custom tag are silently excluded.
    }
    sections
}

fn default_feature_templates() -> Vec<SectionTemplate> {
    vec![
        SectionTemplate {
            key: "active".to_string(),
            label: "Active Features".to_string(),
            can_create: true,
            creation_item_types: vec![ItemType::Feat],
            custom: false,
        },
        SectionTemplate {
            key: "passive".to_string(),
            label: "Passive Features".to_string(),
            can_create: true,
            creation_item_types: vec![ItemType::Feat],
            custom: false,
        },
    ]
}

/// Classifies feature items into active/passive sections, with custom-tag
/// override. Non-feat items are dropped.
pub fn classify_features(items: impl IntoIterator<Item = Item>) -> SectionSet {
    let mut sections = SectionSet::from_templates(&default_feature_templates());
    for item in items {
        if let Some(tag) = custom_section_tag(&item).map(str::to_string) {
            sections
                .get_or_create(&tag, || SectionTemplate::custom(&tag, vec![ItemType::Feat]))
                .items
                .push(item);
            continue;
        }
        if item.item_type != ItemType::Feat {
            continue;
        }
        let key = if item.activation.is_some() {
            "active"
        } else {
            "passive"
        };
        if let Some(section) = sections.get_mut(key) {
            section.items.push(item);
        }
    }
    sections
}

fn spell_level_key(level: u8) -> String {
    format!("spell{}", level)
}

fn spell_level_label(level: u8) -> String {
    if level == 0 {
        "Cantrips".to_string()
    } else {
        format!("Level {}", level)
    }
}

/// Classifies spells into spellbook sections by level (0..=9), with
/// custom-tag override. Non-spell items are dropped; levels above 9 are
/// clamped to 9.
pub fn classify_spellbook(items: impl IntoIterator<Item = Item>) -> SectionSet {
    let templates: Vec<SectionTemplate> = (0..=9u8)
        .map(|level| SectionTemplate {
            key: spell_level_key(level),
            label: spell_level_label(level),
            can_create: true,
            creation_item_types: vec![ItemType::Spell],
            custom: false,
        })
        .collect();

    let mut sections = SectionSet::from_templates(&templates);
    for item in items {
        if let Some(tag) = custom_section_tag(&item).map(str::to_string) {
            sections
                .get_or_create(&tag, || {
                    SectionTemplate::custom(&tag, vec![ItemType::Spell])
                })
                .items
                .push(item);
            continue;
        }
        if item.item_type != ItemType::Spell {
            continue;
        }
        let level = item.spell_level.unwrap_or(0).min(9);
        if let Some(section) = sections.get_mut(&spell_level_key(level)) {
            section.items.push(item);
        }
    }
    sections
}

/// Destination bucket for an item owned by a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleBucket {
    Cargo,
    Weapons,
    Equipment,
    Actions,
    Reactions,
    Passive,
}

/// Routes a vehicle-owned item to its display bucket.
///
/// The explicit cargo flag wins; otherwise weapons and equipment go to their
/// own sections, feats split by activation, and everything else is cargo.
pub fn vehicle_bucket(item: &Item) -> VehicleBucket {
    if item.vehicle_cargo {
        return VehicleBucket::Cargo;
    }
    match item.item_type {
        ItemType::Weapon => VehicleBucket::Weapons,
        ItemType::Equipment => VehicleBucket::Equipment,
        ItemType::Feat => match item.activation {
            None => VehicleBucket::Passive,
            Some(Activation::Reaction) => VehicleBucket::Reactions,
            Some(_) => VehicleBucket::Actions,
        },
        _ => VehicleBucket::Cargo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items_in(sections: &SectionSet, key: &str) -> Vec<String> {
        sections
            .get(key)
            .map(|s| s.items.iter().map(|i| i.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn custom_tag_overrides_type_routing() {
        let items = vec![
            Item::new("w1", ItemType::Weapon),
            Item::new("l1", ItemType::Loot).with_custom_section("Stash"),
            Item::new("l2", ItemType::Loot),
        ];
        let sections = classify_inventory(items);

        assert_eq!(items_in(&sections, "weapon"), vec!["w1"]);
        assert_eq!(items_in(&sections, "loot"), vec!["l2"]);
        assert_eq!(items_in(&sections, "Stash"), vec!["l1"]);

        let stash = sections.get("Stash").expect("custom section created");
        assert!(stash.can_create);
        assert!(stash.custom);
        assert_eq!(stash.creation_item_types, INVENTORY_ITEM_TYPES.to_vec());
    }

    #[test]
    fn custom_tag_wins_regardless_of_type() {
        let items = vec![
            Item::new("sword", ItemType::Weapon).with_custom_section("Heirlooms"),
            Item::new("ring", ItemType::Equipment).with_custom_section("Heirlooms"),
        ];
        let sections = classify_inventory(items);
        assert_eq!(items_in(&sections, "Heirlooms"), vec!["sword", "ring"]);
        assert!(items_in(&sections, "weapon").is_empty());
        assert!(items_in(&sections, "equipment").is_empty());
    }

    #[test]
    fn blank_custom_tag_falls_back_to_type() {
        let empty = Item::new("a", ItemType::Loot).with_custom_section("");
        let whitespace = Item::new("b", ItemType::Loot).with_custom_section("   \t");
        let untagged = Item::new("c", ItemType::Loot);

        let sections = classify_inventory(vec![empty, whitespace, untagged]);
        assert_eq!(items_in(&sections, "loot"), vec!["a", "b", "c"]);
        // No blank-keyed custom section was created
        assert!(sections.keys().all(|k| !k.trim().is_empty()));
    }

    #[test]
    fn classification_is_idempotent() {
        let items = vec![
            Item::new("w1", ItemType::Weapon),
            Item::new("l1", ItemType::Loot).with_custom_section("Stash"),
            Item::new("t1", ItemType::Tool),
            Item::new("l2", ItemType::Loot),
        ];
        let first = classify_inventory(items.clone());
        let second = classify_inventory(items);
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_types_are_dropped_from_inventory() {
        let items = vec![
            Item::new("fireball", ItemType::Spell),
            Item::new("unknown", ItemType::Unknown),
            Item::new("rope", ItemType::Loot),
        ];
        let sections = classify_inventory(items);
        let total: usize = sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(items_in(&sections, "loot"), vec!["rope"]);
    }

    #[test]
    fn partition_routes_by_type() {
        let items = vec![
            Item::new("fireball", ItemType::Spell),
            Item::new("second wind", ItemType::Feat),
            Item::new("elf", ItemType::Race),
            Item::new("sage", ItemType::Background),
            Item::new("wizard", ItemType::Class),
            Item::new("evoker", ItemType::Subclass),
            Item::new("sword", ItemType::Weapon),
            Item::new("mystery", ItemType::Unknown),
        ];
        let partitions = partition_items(items);
        assert_eq!(partitions.spells.len(), 1);
        assert_eq!(partitions.feats.len(), 1);
        assert_eq!(partitions.races.len(), 1);
        assert_eq!(partitions.backgrounds.len(), 1);
        assert_eq!(partitions.classes.len(), 1);
        assert_eq!(partitions.subclasses.len(), 1);
        assert_eq!(partitions.inventory.len(), 1);
        // The unknown-typed item went nowhere
    }

    #[test]
    fn features_split_by_activation() {
        let mut active = Item::new("breath weapon", ItemType::Feat);
        active.activation = Some(Activation::Action);
        let passive = Item::new("darkvision", ItemType::Feat);
        let tagged = Item::new("blessing", ItemType::Feat).with_custom_section("Boons");

        let sections = classify_features(vec![active, passive, tagged]);
        assert_eq!(items_in(&sections, "active"), vec!["breath weapon"]);
        assert_eq!(items_in(&sections, "passive"), vec!["darkvision"]);
        assert_eq!(items_in(&sections, "Boons"), vec!["blessing"]);
    }

    #[test]
    fn spellbook_buckets_by_level() {
        let mut cantrip = Item::new("light", ItemType::Spell);
        cantrip.spell_level = Some(0);
        let mut third = Item::new("fireball", ItemType::Spell);
        third.spell_level = Some(3);
        let mut tagged = Item::new("mage hand", ItemType::Spell);
        tagged.spell_level = Some(0);
        tagged.custom_section = Some("Signature".to_string());

        let sections = classify_spellbook(vec![cantrip, third, tagged]);
        assert_eq!(items_in(&sections, "spell0"), vec!["light"]);
        assert_eq!(items_in(&sections, "spell3"), vec!["fireball"]);
        assert_eq!(items_in(&sections, "Signature"), vec!["mage hand"]);
        assert_eq!(sections.get("spell0").map(|s| s.label.as_str()), Some("Cantrips"));
    }

    #[test]
    fn vehicle_bucket_routing() {
        let cargo_flagged = {
            let mut item = Item::new("crate", ItemType::Weapon);
            item.vehicle_cargo = true;
            item
        };
        assert_eq!(vehicle_bucket(&cargo_flagged), VehicleBucket::Cargo);
        assert_eq!(
            vehicle_bucket(&Item::new("ballista", ItemType::Weapon)),
            VehicleBucket::Weapons
        );
        assert_eq!(
            vehicle_bucket(&Item::new("hull plating", ItemType::Equipment)),
            VehicleBucket::Equipment
        );

        let mut crew_action = Item::new("full sail", ItemType::Feat);
        crew_action.activation = Some(Activation::Crew);
        assert_eq!(vehicle_bucket(&crew_action), VehicleBucket::Actions);

        let mut reaction = Item::new("evasive turn", ItemType::Feat);
        reaction.activation = Some(Activation::Reaction);
        assert_eq!(vehicle_bucket(&reaction), VehicleBucket::Reactions);

        assert_eq!(
            vehicle_bucket(&Item::new("sturdy build", ItemType::Feat)),
            VehicleBucket::Passive
        );
        assert_eq!(
            vehicle_bucket(&Item::new("rations", ItemType::Loot)),
            VehicleBucket::Cargo
        );
    }
}
