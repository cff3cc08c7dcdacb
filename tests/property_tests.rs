//! Property tests over the pipeline invariants

use addonforge::core::types::{EntityCategory, Slug};
use addonforge::expansion::expand;
use addonforge::intent::{interpret, BlockSpec, ContentSpec, ItemSpec};
use addonforge::materialize::keys::AssetKey;
use addonforge::pipeline::{run, GenerationRequest, PipelineOutcome};
use addonforge::planner::{aggregate, plan_entity};
use addonforge::scope::account;
use addonforge::texture::synthesize_all;
use addonforge::understanding::GenerationMode;
use proptest::prelude::*;

fn arb_prompt() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "a glowing sword",
        "ice cream",
        "Smelt Raw Tin into Tin Ingot",
        "a cute pink block",
        "A new wood type called Maple",
        "a dark crystal staff",
        "a magic wand that shoots lightning",
        "a stone lantern block",
        "a sickly green ooze block",
    ]);
    prop::collection::vec(fragment, 1..4).prop_map(|v| v.join(". "))
}

fn arb_seed() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}"
}

proptest! {
    /// Running the full pipeline twice on the same request yields identical
    /// output, file for file.
    #[test]
    fn prop_pipeline_deterministic(prompt in arb_prompt(), seed in arb_seed()) {
        let request = GenerationRequest {
            prompt,
            seed,
            mode: GenerationMode::Full,
        };
        let a = run(&request).unwrap();
        let b = run(&request).unwrap();
        prop_assert_eq!(a, b);
    }

    /// An item and a block sharing a contentId coexist: their asset keys
    /// differ and both materialize independently.
    #[test]
    fn prop_namespaces_never_collide(name in "[a-z][a-z_]{2,12}") {
        let id = Slug::from_text(&name);
        prop_assume!(id.as_str() != "unnamed");

        let mut spec = ContentSpec::new(Slug::from_text("prop test"), "Prop Test".into());
        spec.items.push(ItemSpec {
            id: id.clone(),
            display_name: name.clone(),
            description: "shoots lightning".into(),
            tags: vec![],
        });
        spec.blocks.push(BlockSpec {
            id: id.clone(),
            display_name: name.clone(),
            description: "shoots lightning".into(),
            tags: vec![],
        });

        prop_assert_ne!(
            AssetKey::item(id.clone()),
            AssetKey::block(id.clone())
        );

        let expanded = expand(&spec);
        let plans = vec![
            plan_entity(&id, &name, "shoots lightning", EntityCategory::Item),
            plan_entity(&id, &name, "shoots lightning", EntityCategory::Block),
        ];
        let textures = synthesize_all(&expanded, "prop");
        let aggregated = aggregate(plans.clone());
        let scope = account(&expanded, &plans, "");
        let files =
            addonforge::materialize::materialize(&expanded, &plans, &aggregated, &scope, &textures)
                .unwrap();
        let item_path = format!("items/{}.json", id);
        let block_path = format!("blocks/{}.json", id);
        // Both entities carry custom behavior; the scripts must not collide.
        let item_script = format!("scripts/item/{}.js", id);
        let block_script = format!("scripts/block/{}.js", id);
        prop_assert!(files.iter().any(|f| f.path == item_path));
        prop_assert!(files.iter().any(|f| f.path == block_path));
        prop_assert!(files.iter().any(|f| f.path == item_script));
        prop_assert!(files.iter().any(|f| f.path == block_script));
    }

    /// Credits are a pure sum over counted units, and fitsBudget is exactly
    /// the tier comparison.
    #[test]
    fn prop_credits_are_pure_sum(prompt in arb_prompt()) {
        let spec = interpret(&prompt, GenerationMode::Full);
        let expanded = expand(&spec);
        let scope = account(&expanded, &[], &prompt);

        let sum: u32 = scope.units.iter().map(|u| u.credit_cost()).sum();
        prop_assert_eq!(scope.total_credits, sum);
        prop_assert_eq!(scope.fits_budget, scope.total_credits <= scope.budget_tier);
    }

    /// Mentioning a particle effect strictly increases the total.
    #[test]
    fn prop_extra_unit_increases_credits(prompt in arb_prompt()) {
        prop_assume!(!prompt.contains("particle"));
        let spec = interpret(&prompt, GenerationMode::Full);
        let expanded = expand(&spec);
        let base = account(&expanded, &[], &prompt);
        let more = account(&expanded, &[], &format!("{prompt} with a particle aura"));
        prop_assert!(more.total_credits > base.total_credits);
    }

    /// No interpreted or derived recipe uses its own result as an
    /// ingredient.
    #[test]
    fn prop_no_recipe_self_loops(prompt in arb_prompt()) {
        let expanded = expand(&interpret(&prompt, GenerationMode::Full));
        for recipe in &expanded.recipes {
            for ingredient in recipe.referenced_ingredients() {
                prop_assert_ne!(ingredient, &recipe.result.identifier);
            }
        }
    }

    /// Every entity materializes with a texture plan and at least one
    /// acquisition path: a recipe producing it, a loot table, or a
    /// placement rule.
    #[test]
    fn prop_every_entity_complete(prompt in arb_prompt(), seed in arb_seed()) {
        let expanded = expand(&interpret(&prompt, GenerationMode::Full));
        let plans: Vec<_> = expanded
            .items
            .iter()
            .map(|i| plan_entity(&i.id, &i.display_name, &i.description, EntityCategory::Item))
            .chain(expanded.blocks.iter().map(|b| {
                plan_entity(&b.id, &b.display_name, &b.description, EntityCategory::Block)
            }))
            .collect();
        let aggregated = aggregate(plans.clone());
        let scope = account(&expanded, &plans, &prompt);
        let textures = synthesize_all(&expanded, &seed);

        for texture in &textures {
            prop_assert!(texture.palette.len() >= 3 && texture.palette.len() <= 6);
            prop_assert!(!texture.layers.is_empty());
        }

        let files =
            addonforge::materialize::materialize(&expanded, &plans, &aggregated, &scope, &textures)
                .unwrap();
        let has = |path: String| files.iter().any(|f| f.path == path);

        for (category, id) in expanded
            .items
            .iter()
            .map(|i| ("item", &i.id))
            .chain(expanded.blocks.iter().map(|b| ("block", &b.id)))
        {
            prop_assert!(
                has(format!("textures/{category}/{id}.json")),
                "{category}/{id} has no texture"
            );

            let produced = expanded
                .recipes
                .iter()
                .any(|r| &r.result.identifier == id);
            let looted = expanded.loot_tables.iter().any(|t| &t.block_id == id);
            let placed = has(format!("placements/{category}/{id}.json"));
            prop_assert!(
                produced || looted || placed,
                "{category}/{id} has no acquisition path"
            );
        }
    }
}
