//! Visual classification of entity ids.
//!
//! Classification is by shape suffix only: `_sword` says what the entity
//! looks like, `copper` does not. Material nouns never appear in the rule
//! table, so a `copper_sword` and a `jade_sword` classify identically and
//! pick up their material from the texture plan instead.

use crate::core::types::{EntityCategory, Slug};
use serde::{Deserialize, Serialize};

/// Broad visual shape of an entity, used to pick a model reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualKind {
    Sword,
    Tool,
    Ingot,
    Nugget,
    Gem,
    Rod,
    FoodItem,
    Boat,
    SignItem,
    FlatItem,
    Stairs,
    Slab,
    Fence,
    FenceGate,
    Door,
    Trapdoor,
    PressurePlate,
    Button,
    Pillar,
    Cube,
}

/// Ordered suffix rules, first match wins. Longer suffixes come before
/// shorter ones that would shadow them.
const SUFFIX_RULES: &[(&str, VisualKind)] = &[
    ("_sword", VisualKind::Sword),
    ("_pickaxe", VisualKind::Tool),
    ("_shovel", VisualKind::Tool),
    ("_hoe", VisualKind::Tool),
    ("_ingot", VisualKind::Ingot),
    ("_nugget", VisualKind::Nugget),
    ("_gem", VisualKind::Gem),
    ("_crystal", VisualKind::Gem),
    ("_shard", VisualKind::Gem),
    ("_wand", VisualKind::Rod),
    ("_staff", VisualKind::Rod),
    ("_rod", VisualKind::Rod),
    ("_chest_boat", VisualKind::Boat),
    ("_boat", VisualKind::Boat),
    ("_hanging_sign", VisualKind::SignItem),
    ("_sign", VisualKind::SignItem),
    ("_stairs", VisualKind::Stairs),
    ("_slab", VisualKind::Slab),
    ("_fence_gate", VisualKind::FenceGate),
    ("_fence", VisualKind::Fence),
    ("_trapdoor", VisualKind::Trapdoor),
    ("_door", VisualKind::Door),
    ("_pressure_plate", VisualKind::PressurePlate),
    ("_button", VisualKind::Button),
    ("_log", VisualKind::Pillar),
    ("_wood", VisualKind::Pillar),
    ("_axe", VisualKind::Tool),
];

impl VisualKind {
    /// Path of the curated model reference this kind renders with.
    pub fn default_reference(self) -> &'static str {
        match self {
            VisualKind::Sword => "reference/item/sword",
            VisualKind::Tool => "reference/item/handled_tool",
            VisualKind::Ingot => "reference/item/ingot",
            VisualKind::Nugget => "reference/item/nugget",
            VisualKind::Gem => "reference/item/gem",
            VisualKind::Rod => "reference/item/rod",
            VisualKind::FoodItem => "reference/item/food",
            VisualKind::Boat => "reference/item/boat",
            VisualKind::SignItem => "reference/item/sign",
            VisualKind::FlatItem => "reference/item/flat",
            VisualKind::Stairs => "reference/block/stairs",
            VisualKind::Slab => "reference/block/slab",
            VisualKind::Fence => "reference/block/fence",
            VisualKind::FenceGate => "reference/block/fence_gate",
            VisualKind::Door => "reference/block/door",
            VisualKind::Trapdoor => "reference/block/trapdoor",
            VisualKind::PressurePlate => "reference/block/pressure_plate",
            VisualKind::Button => "reference/block/button",
            VisualKind::Pillar => "reference/block/pillar",
            VisualKind::Cube => "reference/block/cube",
        }
    }
}

/// Classify an entity id. Suffix rules first, then a category fallback;
/// items tagged as food fall back to the food shape instead of the flat
/// sprite.
pub fn classify(id: &Slug, category: EntityCategory, food: bool) -> VisualKind {
    for (suffix, kind) in SUFFIX_RULES {
        if id.as_str().ends_with(suffix) {
            return *kind;
        }
    }
    match category {
        EntityCategory::Item if food => VisualKind::FoodItem,
        EntityCategory::Item => VisualKind::FlatItem,
        EntityCategory::Block => VisualKind::Cube,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_suffix_wins_over_material() {
        let copper = classify(&Slug::from_text("copper sword"), EntityCategory::Item, false);
        let jade = classify(&Slug::from_text("jade sword"), EntityCategory::Item, false);
        assert_eq!(copper, VisualKind::Sword);
        assert_eq!(jade, VisualKind::Sword);
    }

    #[test]
    fn test_pickaxe_is_tool_not_axe() {
        let kind = classify(&Slug::from_text("tin pickaxe"), EntityCategory::Item, false);
        assert_eq!(kind, VisualKind::Tool);
    }

    #[test]
    fn test_fence_gate_before_fence() {
        let kind = classify(&Slug::from_text("maple fence gate"), EntityCategory::Block, false);
        assert_eq!(kind, VisualKind::FenceGate);
    }

    #[test]
    fn test_unmatched_falls_back_by_category() {
        assert_eq!(
            classify(&Slug::from_text("mystery trinket"), EntityCategory::Item, false),
            VisualKind::FlatItem
        );
        assert_eq!(
            classify(&Slug::from_text("mystery lump"), EntityCategory::Block, false),
            VisualKind::Cube
        );
        assert_eq!(
            classify(&Slug::from_text("ice cream"), EntityCategory::Item, true),
            VisualKind::FoodItem
        );
    }
}
