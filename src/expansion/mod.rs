//! Spec expansion: shorthand declarations unfold into the full entity
//! families the target platform requires.
//!
//! Expansion is a pure function of the ContentSpec: identical input yields
//! identical, order-stable output (items then blocks, insertion order within
//! each).

pub mod loot;
pub mod recipes;
pub mod states;
pub mod tags;
pub mod wood;

use crate::core::types::{EntityCategory, Slug};
use crate::intent::spec::{BlockSpec, Constraint, ContentSpec, ItemSpec, RecipeSpec};
use crate::understanding::vocabulary::SemanticTag;
use loot::LootTable;
use states::{BlockStateDescriptor, MultiStateKind};
use tags::TagSet;
use wood::WoodMember;

/// ContentSpec plus everything derived from its shorthand declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedSpec {
    /// The originating spec, unchanged.
    pub content: ContentSpec,
    /// Original items followed by derived items, insertion order.
    pub items: Vec<ItemSpec>,
    /// Original blocks followed by derived blocks, insertion order.
    pub blocks: Vec<BlockSpec>,
    /// Original recipes followed by derived recipes.
    pub recipes: Vec<RecipeSpec>,
    pub loot_tables: Vec<LootTable>,
    pub tags: TagSet,
    pub block_states: Vec<BlockStateDescriptor>,
}

impl ExpandedSpec {
    pub fn has_id(&self, id: &Slug) -> bool {
        self.items.iter().any(|i| &i.id == id) || self.blocks.iter().any(|b| &b.id == id)
    }

    /// Namespace of an id within the expanded spec, items checked first.
    pub fn category_of(&self, id: &Slug) -> Option<EntityCategory> {
        if self.items.iter().any(|i| &i.id == id) {
            Some(EntityCategory::Item)
        } else if self.blocks.iter().any(|b| &b.id == id) {
            Some(EntityCategory::Block)
        } else {
            None
        }
    }
}

/// Expand a ContentSpec into the full dependent entity set.
pub fn expand(content: &ContentSpec) -> ExpandedSpec {
    let mut items = content.items.clone();
    let mut blocks = content.blocks.clone();
    let mut recipes = content.recipes.clone();
    let mut tag_set = TagSet::new();
    let mut block_states = Vec::new();

    let no_recipes = content.has_constraint(Constraint::NoRecipes);

    for wood_type in &content.wood_types {
        for member in WoodMember::ALL {
            let id = wood_type.id.suffixed(member.suffix());
            let display = format!("{} {}", wood_type.display_name, member.display_suffix());
            let description = format!("{} of the {} wood family", display, wood_type.display_name);

            // User-declared entities with the same id win over derived ones.
            let declared = items.iter().any(|i| i.id == id) || blocks.iter().any(|b| b.id == id);
            if !declared {
                match member.category() {
                    EntityCategory::Item => items.push(ItemSpec {
                        id: id.clone(),
                        display_name: display,
                        description,
                        tags: vec![SemanticTag::Wood, SemanticTag::Nature],
                    }),
                    EntityCategory::Block => blocks.push(BlockSpec {
                        id: id.clone(),
                        display_name: display,
                        description,
                        tags: vec![SemanticTag::Wood, SemanticTag::Nature, SemanticTag::Block],
                    }),
                }
            }

            if let Some(namespace) = member.shared_tag() {
                tag_set.add(namespace, id.clone());
            }

            match member {
                WoodMember::Door => {
                    block_states.push(states::state_table(&id, MultiStateKind::Door));
                }
                WoodMember::Trapdoor => {
                    block_states.push(states::state_table(&id, MultiStateKind::Trapdoor));
                }
                _ => {}
            }
        }

        if !no_recipes {
            recipes.extend(recipes::wood_recipes(&wood_type.id));
        }
    }

    // Loot: every block drops itself; slabs use the state-conditioned table.
    let loot_tables = blocks
        .iter()
        .map(|block| {
            if loot::is_slab(&block.id) {
                loot::slab_drop(&block.id)
            } else {
                loot::self_drop(&block.id)
            }
        })
        .collect();

    tracing::debug!(
        items = items.len(),
        blocks = blocks.len(),
        recipes = recipes.len(),
        "spec expanded"
    );

    ExpandedSpec {
        content: content.clone(),
        items,
        blocks,
        recipes,
        loot_tables,
        tags: tag_set,
        block_states,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::spec::WoodTypeSpec;

    fn spec_with_wood(name: &str) -> ContentSpec {
        let mut spec = ContentSpec::new(Slug::from_text("test"), "Test".into());
        spec.wood_types.push(WoodTypeSpec {
            id: Slug::from_text(name),
            display_name: name.to_string(),
        });
        spec
    }

    #[test]
    fn test_wood_family_is_complete() {
        let expanded = expand(&spec_with_wood("maple"));
        for member in WoodMember::ALL {
            let id = Slug::from_text("maple").suffixed(member.suffix());
            assert!(expanded.has_id(&id), "missing {id}");
        }
    }

    #[test]
    fn test_expansion_is_pure() {
        let spec = spec_with_wood("maple");
        assert_eq!(expand(&spec), expand(&spec));
    }

    #[test]
    fn test_no_recipes_suppresses_recipes_not_entities() {
        let mut spec = spec_with_wood("maple");
        spec.constraints.push(Constraint::NoRecipes);
        let expanded = expand(&spec);
        assert!(expanded.recipes.is_empty());
        assert!(expanded.has_id(&Slug::from_text("maple_boat")));
    }

    #[test]
    fn test_slab_uses_conditioned_loot() {
        let expanded = expand(&spec_with_wood("maple"));
        let slab = expanded
            .loot_tables
            .iter()
            .find(|t| t.block_id.as_str() == "maple_slab")
            .unwrap();
        assert_eq!(slab.entries.len(), 3);
        let planks = expanded
            .loot_tables
            .iter()
            .find(|t| t.block_id.as_str() == "maple_planks")
            .unwrap();
        assert_eq!(planks.entries.len(), 1);
    }

    #[test]
    fn test_tags_merge_across_wood_types() {
        let mut spec = spec_with_wood("maple");
        spec.wood_types.push(WoodTypeSpec {
            id: Slug::from_text("ghost birch"),
            display_name: "Ghost Birch".into(),
        });
        let expanded = expand(&spec);
        let planks = expanded.tags.get("planks").unwrap();
        assert!(planks.contains(&Slug::from_text("maple planks")));
        assert!(planks.contains(&Slug::from_text("ghost birch planks")));
    }

    #[test]
    fn test_door_and_trapdoor_state_tables_emitted() {
        let expanded = expand(&spec_with_wood("maple"));
        assert_eq!(expanded.block_states.len(), 2);
        assert!(expanded.block_states.iter().all(|d| d.states.len() == 32));
    }

    #[test]
    fn test_derived_recipes_reference_known_ids() {
        let expanded = expand(&spec_with_wood("maple"));
        for recipe in &expanded.recipes {
            for ingredient in recipe.referenced_ingredients() {
                assert!(
                    expanded.has_id(ingredient) || recipes::is_vanilla(ingredient),
                    "{} references unknown {ingredient}",
                    recipe.id
                );
            }
        }
    }
}
