//! Derived recipes for wood family members, generated from a fixed shape
//! table.

use crate::core::types::Slug;
use crate::expansion::wood::WoodMember;
use crate::intent::spec::{RecipeKind, RecipeResult, RecipeSpec};
use std::collections::BTreeMap;

/// Platform-provided identifiers that derived recipes may reference without
/// the spec declaring them.
pub const VANILLA_IDS: &[&str] = &["stick", "chest", "crafting_table"];

pub fn is_vanilla(id: &Slug) -> bool {
    VANILLA_IDS.contains(&id.as_str())
}

/// Ingredient role in a recipe pattern.
#[derive(Debug, Clone, Copy)]
enum Ing {
    Planks,
    Stick,
    StrippedLog,
}

/// One entry of the fixed shape table.
struct ShapeDef {
    member: WoodMember,
    pattern: &'static [&'static str],
    keys: &'static [(char, Ing)],
    count: u32,
}

/// Canonical variant shapes, keyed by family member. `P` is planks, `S` is
/// stick, `L` is stripped log.
const SHAPES: &[ShapeDef] = &[
    ShapeDef {
        member: WoodMember::Stairs,
        pattern: &["P  ", "PP ", "PPP"],
        keys: &[('P', Ing::Planks)],
        count: 4,
    },
    ShapeDef {
        member: WoodMember::Slab,
        pattern: &["PPP"],
        keys: &[('P', Ing::Planks)],
        count: 6,
    },
    ShapeDef {
        member: WoodMember::Fence,
        pattern: &["PSP", "PSP"],
        keys: &[('P', Ing::Planks), ('S', Ing::Stick)],
        count: 3,
    },
    ShapeDef {
        member: WoodMember::FenceGate,
        pattern: &["SPS", "SPS"],
        keys: &[('P', Ing::Planks), ('S', Ing::Stick)],
        count: 1,
    },
    ShapeDef {
        member: WoodMember::Door,
        pattern: &["PP", "PP", "PP"],
        keys: &[('P', Ing::Planks)],
        count: 3,
    },
    ShapeDef {
        member: WoodMember::Trapdoor,
        pattern: &["PPP", "PPP"],
        keys: &[('P', Ing::Planks)],
        count: 2,
    },
    ShapeDef {
        member: WoodMember::PressurePlate,
        pattern: &["PP"],
        keys: &[('P', Ing::Planks)],
        count: 1,
    },
    ShapeDef {
        member: WoodMember::Button,
        pattern: &["P"],
        keys: &[('P', Ing::Planks)],
        count: 1,
    },
    ShapeDef {
        member: WoodMember::Sign,
        pattern: &["PPP", "PPP", " S "],
        keys: &[('P', Ing::Planks), ('S', Ing::Stick)],
        count: 3,
    },
    ShapeDef {
        member: WoodMember::HangingSign,
        pattern: &["S S", "LLL", "LLL"],
        keys: &[('S', Ing::Stick), ('L', Ing::StrippedLog)],
        count: 6,
    },
    ShapeDef {
        member: WoodMember::Boat,
        pattern: &["P P", "PPP"],
        keys: &[('P', Ing::Planks)],
        count: 1,
    },
];

fn resolve(ing: Ing, wood: &Slug) -> Slug {
    match ing {
        Ing::Planks => wood.suffixed("planks"),
        Ing::StrippedLog => wood.suffixed("stripped_log"),
        // Stick is a platform-provided item.
        Ing::Stick => Slug::parse("stick").expect("vanilla id"),
    }
}

/// Generate the full derived recipe set for one wood type, in fixed order:
/// log→planks, planks→sticks, planks→crafting table, planks→chest, then the
/// variant shapes, then the chest boat combination.
pub fn wood_recipes(wood: &Slug) -> Vec<RecipeSpec> {
    let planks = wood.suffixed("planks");
    let mut out = Vec::new();

    // log -> planks x4 (shapeless)
    out.push(RecipeSpec {
        id: wood.suffixed("planks_from_log"),
        kind: RecipeKind::Shapeless,
        pattern: Vec::new(),
        key: BTreeMap::new(),
        ingredients: vec![wood.suffixed("log")],
        result: RecipeResult {
            identifier: planks.clone(),
            count: 4,
        },
    });

    // planks -> sticks x4
    out.push(shaped(
        wood.suffixed("sticks"),
        &["P", "P"],
        &[('P', planks.clone())],
        Slug::parse("stick").expect("vanilla id"),
        4,
    ));

    // planks -> crafting table
    out.push(shaped(
        wood.suffixed("crafting_table"),
        &["PP", "PP"],
        &[('P', planks.clone())],
        Slug::parse("crafting_table").expect("vanilla id"),
        1,
    ));

    // planks -> chest
    out.push(shaped(
        wood.suffixed("chest"),
        &["PPP", "P P", "PPP"],
        &[('P', planks.clone())],
        Slug::parse("chest").expect("vanilla id"),
        1,
    ));

    for def in SHAPES {
        let key: Vec<(char, Slug)> = def
            .keys
            .iter()
            .map(|(c, ing)| (*c, resolve(*ing, wood)))
            .collect();
        out.push(shaped(
            wood.suffixed(def.member.suffix()),
            def.pattern,
            &key,
            wood.suffixed(def.member.suffix()),
            def.count,
        ));
    }

    // boat + chest -> chest boat (shapeless)
    out.push(RecipeSpec {
        id: wood.suffixed("chest_boat"),
        kind: RecipeKind::Shapeless,
        pattern: Vec::new(),
        key: BTreeMap::new(),
        ingredients: vec![
            wood.suffixed("boat"),
            Slug::parse("chest").expect("vanilla id"),
        ],
        result: RecipeResult {
            identifier: wood.suffixed("chest_boat"),
            count: 1,
        },
    });

    out
}

fn shaped(
    id: Slug,
    pattern: &[&str],
    key: &[(char, Slug)],
    result: Slug,
    count: u32,
) -> RecipeSpec {
    RecipeSpec {
        id,
        kind: RecipeKind::Shaped,
        pattern: pattern.iter().map(|r| r.to_string()).collect(),
        key: key.iter().cloned().collect(),
        ingredients: Vec::new(),
        result: RecipeResult {
            identifier: result,
            count,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maple() -> Slug {
        Slug::from_text("maple")
    }

    #[test]
    fn test_core_recipes_present() {
        let recipes = wood_recipes(&maple());
        assert!(recipes.iter().any(|r| r.id.as_str() == "maple_planks_from_log"));
        assert!(recipes.iter().any(|r| r.id.as_str() == "maple_sticks"));
        assert!(recipes.iter().any(|r| r.id.as_str() == "maple_stairs"));
    }

    #[test]
    fn test_every_variant_block_is_craftable() {
        let recipes = wood_recipes(&maple());
        let craftable = |id: &Slug| recipes.iter().any(|r| &r.result.identifier == id);
        for member in [
            WoodMember::Stairs,
            WoodMember::Slab,
            WoodMember::Fence,
            WoodMember::FenceGate,
            WoodMember::Door,
            WoodMember::Trapdoor,
            WoodMember::PressurePlate,
            WoodMember::Button,
            WoodMember::Sign,
            WoodMember::HangingSign,
            WoodMember::Boat,
            WoodMember::ChestBoat,
        ] {
            let id = maple().suffixed(member.suffix());
            assert!(craftable(&id), "no recipe produces {id}");
        }
    }

    #[test]
    fn test_recipe_ids_unique() {
        let recipes = wood_recipes(&maple());
        let mut ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_no_self_loops() {
        for recipe in wood_recipes(&maple()) {
            for ingredient in recipe.referenced_ingredients() {
                assert_ne!(ingredient, &recipe.result.identifier, "{}", recipe.id);
            }
        }
    }

    #[test]
    fn test_pattern_keys_cover_pattern_chars() {
        for recipe in wood_recipes(&maple()) {
            for row in &recipe.pattern {
                for c in row.chars().filter(|c| *c != ' ') {
                    assert!(recipe.key.contains_key(&c), "{}: missing key {c}", recipe.id);
                }
            }
        }
    }
}
