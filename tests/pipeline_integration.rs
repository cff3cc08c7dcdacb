//! End-to-end pipeline integration tests

use addonforge::pipeline::{run, GenerationRequest, GenerationResult, PipelineOutcome};
use addonforge::planner::{Primitive, System};
use addonforge::texture::{DetailKind, PaletteFamily};
use addonforge::understanding::GenerationMode;

fn complete(prompt: &str, seed: &str) -> GenerationResult {
    let request = GenerationRequest {
        prompt: prompt.to_string(),
        seed: seed.to_string(),
        mode: GenerationMode::Full,
    };
    match run(&request).unwrap() {
        PipelineOutcome::Complete(result) => *result,
        other => panic!("expected completion for {prompt:?}, got {other:?}"),
    }
}

#[test]
fn test_tin_smelting_end_to_end() {
    let result = complete("Smelt Raw Tin into Tin Ingot.", "s1");

    let item_ids: Vec<&str> = result.content.items.iter().map(|i| i.id.as_str()).collect();
    assert!(item_ids.contains(&"raw_tin"));
    assert!(item_ids.contains(&"tin_ingot"));

    assert_eq!(result.content.recipes.len(), 1);
    let recipe = &result.content.recipes[0];
    assert_eq!(recipe.id.as_str(), "tin_ingot_from_raw_tin_smelting");
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.result.identifier.as_str(), "tin_ingot");
    assert_eq!(recipe.result.count, 1);

    // The recipe lands on disk, as do both item documents.
    let paths: Vec<&str> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert!(paths.contains(&"recipes/tin_ingot_from_raw_tin_smelting.json"));
    assert!(paths.contains(&"items/raw_tin.json"));
    assert!(paths.contains(&"items/tin_ingot.json"));
}

#[test]
fn test_ice_cream_scenario() {
    let result = complete("ice cream", "s1");

    assert_eq!(result.textures.len(), 1);
    let texture = &result.textures[0];
    assert_eq!(texture.family, PaletteFamily::Pastel);
    assert!(texture.layers.iter().any(|l| l.kind == DetailKind::Drip));
    assert!(texture.style_params.contrast < 1.0);
}

#[test]
fn test_lightning_wand_scenario() {
    let result = complete("A magic wand that shoots lightning.", "s1");

    assert_eq!(result.plans.len(), 1);
    let plan = &result.plans[0];
    assert!(plan.systems.contains(&System::Targeting));
    assert!(plan.systems.contains(&System::Chaining));
    assert!(plan.systems.contains(&System::Cooldown));
    assert!(plan.primitives.contains(&Primitive::RaycastTarget));
    assert!(plan.primitives.contains(&Primitive::SpawnEntity));
    assert!(plan.primitives.contains(&Primitive::Cooldown));

    // Custom behavior means a script file.
    assert!(result
        .files
        .iter()
        .any(|f| f.path.starts_with("scripts/") && f.path.ends_with(".js")));
}

#[test]
fn test_full_run_is_byte_identical() {
    let prompt = "Smelt Raw Tin into Tin Ingot. A new wood type called Maple. \
                  A magic wand that shoots lightning.";
    let a = complete(prompt, "shared-seed");
    let b = complete(prompt, "shared-seed");

    assert_eq!(a.files.len(), b.files.len());
    for (fa, fb) in a.files.iter().zip(b.files.iter()) {
        assert_eq!(fa.path, fb.path);
        assert_eq!(fa.contents, fb.contents, "contents differ for {}", fa.path);
    }
    assert_eq!(a.analysis, b.analysis);
    assert_eq!(a.plans, b.plans);
    assert_eq!(a.textures, b.textures);
}

#[test]
fn test_different_seeds_only_change_aesthetics() {
    let prompt = "a glowing sword";
    let a = complete(prompt, "seed-a");
    let b = complete(prompt, "seed-b");

    // Structure is seed-independent.
    assert_eq!(a.content, b.content);
    assert_eq!(a.plans, b.plans);
    assert_eq!(a.scope, b.scope);

    let paths_a: Vec<&str> = a.files.iter().map(|f| f.path.as_str()).collect();
    let paths_b: Vec<&str> = b.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths_a, paths_b);
}

#[test]
fn test_summary_contract_is_camel_case() {
    let result = complete("a glowing sword", "s1");
    let summary = result
        .files
        .iter()
        .find(|f| f.path == "summary.json")
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&summary.contents).unwrap();

    assert!(json["totalCredits"].is_number());
    assert!(json["budgetTier"].is_number());
    assert!(json["fitsBudget"].is_boolean());
    assert!(json["scopeSummary"].is_array());
    assert!(json["visualLevel"].is_string());
    assert_eq!(json["textureResolution"], 16);
    assert!(json["visualFeatures"].is_array());
}

#[test]
fn test_manifest_pins_platform_and_version() {
    let result = complete("a glowing sword", "s1");
    let manifest = result
        .files
        .iter()
        .find(|f| f.path == "manifest.json")
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest.contents).unwrap();

    assert_eq!(json["schemaVersion"], 2);
    assert_eq!(json["platform"], "bedrock");
    assert_eq!(json["platformVersion"], "1.21.0");
}

#[test]
fn test_block_only_mode_produces_blocks() {
    let request = GenerationRequest {
        prompt: "a hot ice block".to_string(),
        seed: "s1".to_string(),
        mode: GenerationMode::BlockOnly,
    };
    match run(&request).unwrap() {
        PipelineOutcome::Complete(result) => {
            assert!(result.content.items.is_empty());
            assert!(!result.content.blocks.is_empty());
        }
        other => panic!("cosmetic contradiction should not block block-only mode: {other:?}"),
    }
}
