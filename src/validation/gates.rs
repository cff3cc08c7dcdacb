//! The ordered validation gates.
//!
//! Validation runs a fixed ordered list of gates over a ContentSpec and the
//! originating prompt, returning on the first failure. A failure names its
//! gate and carries a human-readable reason; this is the only path in the
//! pipeline that refuses to generate content.

use crate::core::types::Slug;
use crate::expansion::recipes::is_vanilla;
use crate::intent::spec::{ContentSpec, RecipeKind, SCHEMA_VERSION, TARGET_PLATFORM, TARGET_VERSION};
use serde::{Deserialize, Serialize};

/// Identifier of one validation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateId {
    Schema,
    Version,
    ForbiddenMechanic,
    SurvivalIntegration,
    TextureCompleteness,
    RecipeSchema,
}

impl GateId {
    pub fn as_str(self) -> &'static str {
        match self {
            GateId::Schema => "schema",
            GateId::Version => "version",
            GateId::ForbiddenMechanic => "forbidden_mechanic",
            GateId::SurvivalIntegration => "survival_integration",
            GateId::TextureCompleteness => "texture_completeness",
            GateId::RecipeSchema => "recipe_schema",
        }
    }
}

/// Result of running the gates. `reason` and `gate` are set on failure and
/// surfaced to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<GateId>,
}

impl ValidationVerdict {
    fn pass() -> Self {
        Self {
            valid: true,
            reason: None,
            gate: None,
        }
    }

    fn fail(gate: GateId, reason: String) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
            gate: Some(gate),
        }
    }
}

type GateFn = fn(&ContentSpec, &str) -> Option<String>;

/// The gates, in their fixed run order.
pub const GATES: &[(GateId, GateFn)] = &[
    (GateId::Schema, schema_gate),
    (GateId::Version, version_gate),
    (GateId::ForbiddenMechanic, forbidden_mechanic_gate),
    (GateId::SurvivalIntegration, survival_integration_gate),
    (GateId::TextureCompleteness, texture_completeness_gate),
    (GateId::RecipeSchema, recipe_schema_gate),
];

/// Run every gate in order, stopping at the first failure.
pub fn validate(spec: &ContentSpec, prompt: &str) -> ValidationVerdict {
    for (gate, check) in GATES {
        if let Some(reason) = check(spec, prompt) {
            tracing::warn!(gate = gate.as_str(), %reason, "validation gate failed");
            return ValidationVerdict::fail(*gate, reason);
        }
    }
    ValidationVerdict::pass()
}

fn schema_gate(spec: &ContentSpec, _prompt: &str) -> Option<String> {
    if spec.schema_version != SCHEMA_VERSION {
        return Some(format!(
            "schema version {} does not match expected {}",
            spec.schema_version, SCHEMA_VERSION
        ));
    }
    if let Err(e) = Slug::parse(spec.mod_id.as_str()) {
        return Some(format!("mod id is not a valid identifier: {e}"));
    }
    if let Some(id) = first_duplicate(spec.items.iter().map(|i| &i.id)) {
        return Some(format!("duplicate item id {id}"));
    }
    if let Some(id) = first_duplicate(spec.blocks.iter().map(|b| &b.id)) {
        return Some(format!("duplicate block id {id}"));
    }
    if let Some(id) = first_duplicate(spec.recipes.iter().map(|r| &r.id)) {
        return Some(format!("duplicate recipe id {id}"));
    }
    for name in spec
        .items
        .iter()
        .map(|i| &i.display_name)
        .chain(spec.blocks.iter().map(|b| &b.display_name))
    {
        if name.trim().is_empty() {
            return Some("entity display name is empty".to_string());
        }
    }
    None
}

fn version_gate(spec: &ContentSpec, _prompt: &str) -> Option<String> {
    if spec.platform != TARGET_PLATFORM {
        return Some(format!(
            "platform {} is not the supported {TARGET_PLATFORM}",
            spec.platform
        ));
    }
    if spec.platform_version != TARGET_VERSION {
        return Some(format!(
            "platform version {} is not the supported {TARGET_VERSION}",
            spec.platform_version
        ));
    }
    None
}

/// Mechanics the target runtime cannot safely host.
const FORBIDDEN_MECHANICS: &[&str] = &[
    "real money",
    "gambling",
    "duplication glitch",
    "dupe glitch",
    "delete the world",
    "wipe the world",
    "crash the game",
    "infinite spawn",
];

fn forbidden_mechanic_gate(spec: &ContentSpec, prompt: &str) -> Option<String> {
    let mut haystacks: Vec<String> = vec![prompt.to_lowercase()];
    haystacks.extend(spec.items.iter().map(|i| i.description.to_lowercase()));
    haystacks.extend(spec.blocks.iter().map(|b| b.description.to_lowercase()));

    for keyword in FORBIDDEN_MECHANICS {
        if haystacks.iter().any(|h| h.contains(keyword)) {
            return Some(format!("request involves a forbidden mechanic: {keyword}"));
        }
    }
    None
}

/// Every recipe ingredient must be obtainable: declared in the spec or a
/// known vanilla identifier. A recipe whose ingredients cannot be obtained
/// strands its result outside survival play.
fn survival_integration_gate(spec: &ContentSpec, _prompt: &str) -> Option<String> {
    for recipe in &spec.recipes {
        for ingredient in recipe.referenced_ingredients() {
            if !spec.declares(ingredient) && !is_vanilla(ingredient) {
                return Some(format!(
                    "recipe {} uses {ingredient}, which is neither declared nor a known base item",
                    recipe.id
                ));
            }
        }
    }
    None
}

/// Every entity must have a stable identity to hang its texture key on.
fn texture_completeness_gate(spec: &ContentSpec, _prompt: &str) -> Option<String> {
    for id in spec
        .items
        .iter()
        .map(|i| &i.id)
        .chain(spec.blocks.iter().map(|b| &b.id))
    {
        if id.as_str() == "unnamed" {
            return Some("an entity has no usable name to derive its texture from".to_string());
        }
    }
    None
}

fn recipe_schema_gate(spec: &ContentSpec, _prompt: &str) -> Option<String> {
    for recipe in &spec.recipes {
        if recipe.result.count == 0 {
            return Some(format!("recipe {} produces a count of zero", recipe.id));
        }
        if recipe
            .referenced_ingredients()
            .iter()
            .any(|i| **i == recipe.result.identifier)
        {
            return Some(format!(
                "recipe {} uses its own result as an ingredient",
                recipe.id
            ));
        }
        match recipe.kind {
            RecipeKind::Shaped => {
                if recipe.pattern.is_empty() || recipe.key.is_empty() {
                    return Some(format!("shaped recipe {} is missing its pattern", recipe.id));
                }
                for row in &recipe.pattern {
                    for symbol in row.chars().filter(|c| !c.is_whitespace()) {
                        if !recipe.key.contains_key(&symbol) {
                            return Some(format!(
                                "shaped recipe {} uses unkeyed symbol {symbol}",
                                recipe.id
                            ));
                        }
                    }
                }
            }
            RecipeKind::Shapeless => {
                if recipe.ingredients.is_empty() {
                    return Some(format!("shapeless recipe {} has no ingredients", recipe.id));
                }
            }
            kind if kind.is_cooking() => {
                if recipe.ingredients.len() != 1 {
                    return Some(format!(
                        "cooking recipe {} must have exactly one ingredient",
                        recipe.id
                    ));
                }
            }
            _ => {}
        }
    }
    None
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a Slug>) -> Option<&'a Slug> {
    let mut seen: Vec<&Slug> = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            return Some(id);
        }
        seen.push(id);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::interpret;
    use crate::intent::spec::{ItemSpec, RecipeResult, RecipeSpec};
    use crate::understanding::clarify::GenerationMode;

    fn valid_spec() -> ContentSpec {
        interpret("Smelt Raw Tin into Tin Ingot.", GenerationMode::Full)
    }

    #[test]
    fn test_interpreted_spec_passes() {
        let verdict = validate(&valid_spec(), "Smelt Raw Tin into Tin Ingot.");
        assert!(verdict.valid);
        assert!(verdict.reason.is_none());
        assert!(verdict.gate.is_none());
    }

    #[test]
    fn test_wrong_schema_version_fails_first() {
        let mut spec = valid_spec();
        spec.schema_version = 1;
        // Also break the platform: schema must still win, being first.
        spec.platform = "java".to_string();
        let verdict = validate(&spec, "");
        assert!(!verdict.valid);
        assert_eq!(verdict.gate, Some(GateId::Schema));
    }

    #[test]
    fn test_wrong_platform_version_fails() {
        let mut spec = valid_spec();
        spec.platform_version = "1.20.0".to_string();
        let verdict = validate(&spec, "");
        assert_eq!(verdict.gate, Some(GateId::Version));
    }

    #[test]
    fn test_forbidden_mechanic_in_prompt() {
        let verdict = validate(&valid_spec(), "a slot machine with real money payouts");
        assert_eq!(verdict.gate, Some(GateId::ForbiddenMechanic));
        assert!(verdict.reason.unwrap().contains("real money"));
    }

    #[test]
    fn test_unknown_ingredient_fails_survival_integration() {
        let mut spec = valid_spec();
        spec.recipes[0].ingredients = vec![Slug::from_text("unobtainium")];
        let verdict = validate(&spec, "");
        assert_eq!(verdict.gate, Some(GateId::SurvivalIntegration));
    }

    #[test]
    fn test_unnamed_entity_fails_texture_completeness() {
        let mut spec = valid_spec();
        spec.items.push(ItemSpec {
            id: Slug::from_text("!!!"),
            display_name: "Mystery".to_string(),
            description: String::new(),
            tags: vec![],
        });
        let verdict = validate(&spec, "");
        assert_eq!(verdict.gate, Some(GateId::TextureCompleteness));
    }

    #[test]
    fn test_self_loop_recipe_fails_recipe_schema() {
        let mut spec = valid_spec();
        spec.recipes.push(RecipeSpec {
            id: Slug::from_text("loop"),
            kind: RecipeKind::Smelting,
            pattern: vec![],
            key: Default::default(),
            ingredients: vec![Slug::from_text("tin ingot")],
            result: RecipeResult {
                identifier: Slug::from_text("tin ingot"),
                count: 1,
            },
        });
        let verdict = validate(&spec, "");
        assert_eq!(verdict.gate, Some(GateId::RecipeSchema));
    }

    #[test]
    fn test_gate_ids_serialize_snake_case() {
        let json = serde_json::to_value(GateId::ForbiddenMechanic).unwrap();
        assert_eq!(json, "forbidden_mechanic");
    }

    #[test]
    fn test_verdict_serializes_camel_case() {
        let verdict = ValidationVerdict::fail(GateId::Version, "nope".to_string());
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["gate"], "version");
        assert_eq!(json["reason"], "nope");
    }
}
