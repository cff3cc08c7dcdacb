//! Materialization: turning the in-memory pipeline products into the
//! on-disk add-on file set.
//!
//! Output is a flat list of (path, contents) pairs in lexicographic path
//! order, so two runs over the same products produce byte-identical file
//! sets. All JSON is pretty-printed with a trailing newline.

pub mod behavior;
pub mod keys;
pub mod visuals;

use crate::core::error::Result;
use crate::expansion::ExpandedSpec;
use crate::planner::{AggregatedExecutionPlan, ExecutionPlan};
use crate::scope::ScopeBudgetResult;
use crate::texture::plan::FinalTexturePlan;
use crate::understanding::vocabulary::SemanticTag;
use keys::AssetKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use visuals::{classify, VisualKind};

/// One file of the materialized add-on.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedFile {
    /// Relative path inside the add-on root, forward slashes.
    pub path: String,
    pub contents: String,
}

/// Top-level manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    schema_version: u32,
    platform: String,
    platform_version: String,
    mod_id: String,
    mod_name: String,
}

/// Visual reference attached to an entity document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisualDescriptor {
    kind: VisualKind,
    reference: String,
}

/// Entity document shared by items and blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityDocument {
    id: String,
    display_name: String,
    description: String,
    tags: Vec<SemanticTag>,
    visual: VisualDescriptor,
    /// Key of this entity's texture plan file.
    texture: String,
}

/// Tag file payload: the sorted id list of one namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TagDocument {
    values: Vec<String>,
}

/// Acquisition rule for an entity no recipe produces. Items surface in
/// generated chest loot; blocks are placed by world generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlacementRule {
    id: String,
    method: String,
    weight: u32,
}

/// Credit and visual summary of the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditVisualSummary {
    pub total_credits: u32,
    pub budget_tier: u32,
    pub fits_budget: bool,
    pub scope_summary: Vec<String>,
    pub visual_level: String,
    pub texture_resolution: u32,
    pub visual_features: Vec<String>,
}

/// Build the summary from the scope result and the texture plans.
pub fn summarize(scope: &ScopeBudgetResult, textures: &[FinalTexturePlan]) -> CreditVisualSummary {
    let animated = textures.iter().any(|t| t.animation.is_some());
    let layered = textures.iter().any(|t| t.layers.len() > 1);
    let visual_level = if animated {
        "animated"
    } else if layered {
        "layered"
    } else {
        "standard"
    };

    let mut features: Vec<String> = textures
        .iter()
        .flat_map(|t| t.layers.iter().map(|l| format!("{:?}", l.kind).to_lowercase()))
        .collect();
    features.sort();
    features.dedup();

    CreditVisualSummary {
        total_credits: scope.total_credits,
        budget_tier: scope.budget_tier,
        fits_budget: scope.fits_budget,
        scope_summary: scope.scope_summary.clone(),
        visual_level: visual_level.to_string(),
        texture_resolution: crate::core::config::config().texture_resolution,
        visual_features: features,
    }
}

/// Materialize every product of a request into its file set.
pub fn materialize(
    expanded: &ExpandedSpec,
    plans: &[ExecutionPlan],
    aggregated: &AggregatedExecutionPlan,
    scope: &ScopeBudgetResult,
    textures: &[FinalTexturePlan],
) -> Result<Vec<MaterializedFile>> {
    let mut files: BTreeMap<String, String> = BTreeMap::new();
    let mut put = |path: String, contents: String| {
        files.insert(path, contents);
    };

    put(
        "manifest.json".to_string(),
        to_json(&Manifest {
            schema_version: expanded.content.schema_version,
            platform: expanded.content.platform.clone(),
            platform_version: expanded.content.platform_version.clone(),
            mod_id: expanded.content.mod_id.to_string(),
            mod_name: expanded.content.mod_name.clone(),
        })?,
    );

    for item in &expanded.items {
        let key = AssetKey::item(item.id.clone());
        let kind = classify(&item.id, key.category, item.tags.contains(&SemanticTag::Food));
        put(
            format!("items/{}.json", item.id),
            to_json(&EntityDocument {
                id: item.id.to_string(),
                display_name: item.display_name.clone(),
                description: item.description.clone(),
                tags: item.tags.clone(),
                visual: VisualDescriptor {
                    kind,
                    reference: kind.default_reference().to_string(),
                },
                texture: format!("textures/{key}"),
            })?,
        );
    }

    for block in &expanded.blocks {
        let key = AssetKey::block(block.id.clone());
        let kind = classify(&block.id, key.category, false);
        put(
            format!("blocks/{}.json", block.id),
            to_json(&EntityDocument {
                id: block.id.to_string(),
                display_name: block.display_name.clone(),
                description: block.description.clone(),
                tags: block.tags.clone(),
                visual: VisualDescriptor {
                    kind,
                    reference: kind.default_reference().to_string(),
                },
                texture: format!("textures/{key}"),
            })?,
        );
    }

    for recipe in &expanded.recipes {
        put(format!("recipes/{}.json", recipe.id), to_json(recipe)?);
    }

    for table in &expanded.loot_tables {
        put(
            format!("loot_tables/blocks/{}.json", table.block_id),
            to_json(table)?,
        );
    }

    for descriptor in &expanded.block_states {
        put(
            format!("blockstates/{}.json", descriptor.block_id),
            to_json(descriptor)?,
        );
    }

    for (namespace, ids) in expanded.tags.iter() {
        put(
            format!("data/{}/tags/{}.json", expanded.content.mod_id, namespace),
            to_json(&TagDocument {
                values: ids.iter().map(|id| id.to_string()).collect(),
            })?,
        );
    }

    // Every entity needs an acquisition path. Entities no recipe produces
    // get a placement rule instead.
    let produced: Vec<&crate::core::types::Slug> = expanded
        .recipes
        .iter()
        .map(|r| &r.result.identifier)
        .collect();
    for item in &expanded.items {
        if !produced.contains(&&item.id) {
            put(
                format!("placements/item/{}.json", item.id),
                to_json(&PlacementRule {
                    id: item.id.to_string(),
                    method: "chest_loot".to_string(),
                    weight: 1,
                })?,
            );
        }
    }
    for block in &expanded.blocks {
        if !produced.contains(&&block.id) {
            put(
                format!("placements/block/{}.json", block.id),
                to_json(&PlacementRule {
                    id: block.id.to_string(),
                    method: "world_generation".to_string(),
                    weight: 1,
                })?,
            );
        }
    }

    for texture in textures {
        put(
            format!("textures/{}/{}.json", texture.category, texture.entity_id),
            to_json(texture)?,
        );
    }

    // The key keeps the category in the path, so an item and a block
    // sharing an id never collide on one script file.
    for script in behavior::behavior_sources(plans) {
        put(format!("scripts/{}.js", script.key), script.source);
    }

    put("plan.json".to_string(), to_json(aggregated)?);
    put("summary.json".to_string(), to_json(&summarize(scope, textures))?);

    tracing::info!(files = files.len(), mod_id = %expanded.content.mod_id, "materialized add-on");

    Ok(files
        .into_iter()
        .map(|(path, contents)| MaterializedFile { path, contents })
        .collect())
}

/// Write a materialized file set under a root directory.
pub fn write_all(files: &[MaterializedFile], root: &Path) -> Result<()> {
    for file in files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.contents)?;
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::EntityCategory;
    use crate::expansion::expand;
    use crate::intent::interpret;
    use crate::planner::{aggregate, plan_entity};
    use crate::scope::account;
    use crate::texture::plan::synthesize_all;
    use crate::understanding::clarify::GenerationMode;

    fn materialize_prompt(prompt: &str) -> Vec<MaterializedFile> {
        let spec = interpret(prompt, GenerationMode::Full);
        let expanded = expand(&spec);
        let plans: Vec<_> = expanded
            .items
            .iter()
            .map(|i| plan_entity(&i.id, &i.display_name, &i.description, EntityCategory::Item))
            .chain(expanded.blocks.iter().map(|b| {
                plan_entity(&b.id, &b.display_name, &b.description, EntityCategory::Block)
            }))
            .collect();
        let aggregated = aggregate(plans.clone());
        let scope = account(&expanded, &plans, prompt);
        let textures = synthesize_all(&expanded, "materialize-test");
        materialize(&expanded, &plans, &aggregated, &scope, &textures).unwrap()
    }

    #[test]
    fn test_paths_sorted_and_unique() {
        let files = materialize_prompt("A new wood type called Maple.");
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn test_smelting_prompt_emits_items_and_recipe() {
        let files = materialize_prompt("Smelt Raw Tin into Tin Ingot.");
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"items/raw_tin.json"));
        assert!(paths.contains(&"items/tin_ingot.json"));
        assert!(paths.contains(&"recipes/tin_ingot_from_raw_tin_smelting.json"));
        assert!(paths.contains(&"manifest.json"));
        assert!(paths.contains(&"summary.json"));
    }

    #[test]
    fn test_every_entity_has_a_texture_file() {
        let files = materialize_prompt("A new wood type called Maple.");
        let spec = interpret("A new wood type called Maple.", GenerationMode::Full);
        let expanded = expand(&spec);
        for item in &expanded.items {
            assert!(files
                .iter()
                .any(|f| f.path == format!("textures/item/{}.json", item.id)));
        }
        for block in &expanded.blocks {
            assert!(files
                .iter()
                .any(|f| f.path == format!("textures/block/{}.json", block.id)));
        }
    }

    #[test]
    fn test_behavior_script_emitted_for_custom_behavior() {
        let files = materialize_prompt("A magic wand that shoots lightning.");
        assert!(files
            .iter()
            .any(|f| f.path.starts_with("scripts/item/magic_wand") && f.path.ends_with(".js")));
    }

    #[test]
    fn test_scripts_keep_item_and_block_namespaces_apart() {
        use crate::core::types::Slug;
        use crate::intent::{BlockSpec, ContentSpec, ItemSpec};

        let id = Slug::from_text("storm core");
        let mut spec = ContentSpec::new(Slug::from_text("storm test"), "Storm Test".into());
        spec.items.push(ItemSpec {
            id: id.clone(),
            display_name: "Storm Core".into(),
            description: "shoots lightning".into(),
            tags: vec![],
        });
        spec.blocks.push(BlockSpec {
            id: id.clone(),
            display_name: "Storm Core".into(),
            description: "shoots lightning".into(),
            tags: vec![],
        });

        let expanded = expand(&spec);
        let plans = vec![
            plan_entity(&id, "Storm Core", "shoots lightning", EntityCategory::Item),
            plan_entity(&id, "Storm Core", "shoots lightning", EntityCategory::Block),
        ];
        let aggregated = aggregate(plans.clone());
        let scope = account(&expanded, &plans, "");
        let textures = synthesize_all(&expanded, "storm");
        let files = materialize(&expanded, &plans, &aggregated, &scope, &textures).unwrap();

        let scripts: Vec<&str> = files
            .iter()
            .filter(|f| f.path.starts_with("scripts/"))
            .map(|f| f.path.as_str())
            .collect();
        assert_eq!(
            scripts,
            vec!["scripts/block/storm_core.js", "scripts/item/storm_core.js"]
        );
    }

    #[test]
    fn test_materialization_is_deterministic() {
        let a = materialize_prompt("Smelt Raw Tin into Tin Ingot. A new wood type called Maple.");
        let b = materialize_prompt("Smelt Raw Tin into Tin Ingot. A new wood type called Maple.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_recipe_less_item_gets_placement_rule() {
        let files = materialize_prompt("a glowing sword");
        assert!(files
            .iter()
            .any(|f| f.path == "placements/item/glowing_sword.json"));

        // The smelting result is produced by its recipe, so no rule.
        let files = materialize_prompt("Smelt Raw Tin into Tin Ingot.");
        assert!(files.iter().any(|f| f.path == "placements/item/raw_tin.json"));
        assert!(!files.iter().any(|f| f.path == "placements/item/tin_ingot.json"));
    }

    #[test]
    fn test_tags_land_under_mod_namespace() {
        let files = materialize_prompt("A new wood type called Maple.");
        let spec = interpret("A new wood type called Maple.", GenerationMode::Full);
        let mod_id = spec.mod_id;
        assert!(files
            .iter()
            .any(|f| f.path == format!("data/{mod_id}/tags/planks.json")));
    }
}
