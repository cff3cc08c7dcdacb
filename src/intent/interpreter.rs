//! Maps a (possibly multi-sentence) prompt into the canonical ContentSpec.
//!
//! Interpretation is sentence-wise: each sentence is checked for explicit
//! directives first (cooking, wood type, constraints), then falls back to
//! entity interpretation. The whole function is deterministic and
//! idempotent: interpreting the same text twice yields identical specs.

use crate::core::types::Slug;
use crate::intent::directives::{parse_cooking, parse_wood_type};
use crate::intent::spec::{
    BlockSpec, Constraint, ContentSpec, ItemSpec, RecipeResult, RecipeSpec, WoodTypeSpec,
};
use crate::understanding::clarify::GenerationMode;
use crate::understanding::normalize::{extract_concepts, is_stopword, normalize};
use crate::understanding::vocabulary::{SemanticTag, CLARIFICATION_VOCABULARY};

/// Interpret a prompt into a ContentSpec.
pub fn interpret(prompt: &str, mode: GenerationMode) -> ContentSpec {
    let (mod_id, mod_name) = mod_identity(prompt);
    let mut spec = ContentSpec::new(mod_id, mod_name);

    for sentence in split_sentences(prompt) {
        let lower = sentence.to_lowercase();

        // Hygiene: dialogue text from a clarification exchange must never
        // become user-visible content.
        if CLARIFICATION_VOCABULARY.iter().any(|v| lower.contains(v)) {
            tracing::debug!(sentence, "skipping clarification-dialogue sentence");
            continue;
        }

        if lower.contains("no recipes") || lower.contains("without recipes") {
            if !spec.has_constraint(Constraint::NoRecipes) {
                spec.constraints.push(Constraint::NoRecipes);
            }
            continue;
        }
        if lower.contains("vanilla safe") || lower.contains("vanilla-safe") {
            if !spec.has_constraint(Constraint::VanillaSafeTextures) {
                spec.constraints.push(Constraint::VanillaSafeTextures);
            }
            continue;
        }

        if let Some(directive) = parse_cooking(&sentence) {
            apply_cooking(&mut spec, &directive.ingredient, &directive.result, &directive);
            continue;
        }

        if let Some(name) = parse_wood_type(&sentence) {
            let id = Slug::from_text(&name);
            if !spec.wood_types.iter().any(|w| w.id == id) {
                spec.wood_types.push(WoodTypeSpec {
                    display_name: title_case(&name),
                    id,
                });
            }
            continue;
        }

        interpret_entity(&mut spec, &sentence, mode);
    }

    spec
}

fn apply_cooking(
    spec: &mut ContentSpec,
    ingredient: &str,
    result: &str,
    directive: &crate::intent::directives::CookingDirective,
) {
    let ingredient_id = Slug::from_text(ingredient);
    let result_id = Slug::from_text(result);

    // A recipe whose ingredient is its own result is a self-loop; the
    // entities are still created but the recipe is not.
    if ingredient_id == result_id {
        tracing::warn!(%result_id, "cooking directive is a self-loop, recipe skipped");
        ensure_item(spec, &ingredient_id, ingredient);
        return;
    }

    ensure_item(spec, &ingredient_id, ingredient);
    ensure_item(spec, &result_id, result);

    let recipe_id = directive.recipe_id();
    if spec.recipes.iter().any(|r| r.id == recipe_id) {
        return;
    }
    spec.recipes.push(RecipeSpec {
        id: recipe_id,
        kind: directive.kind,
        pattern: Vec::new(),
        key: Default::default(),
        ingredients: vec![ingredient_id],
        result: RecipeResult {
            identifier: result_id,
            count: 1,
        },
    });
}

/// Auto-create an item referenced by a directive if not yet declared.
fn ensure_item(spec: &mut ContentSpec, id: &Slug, text: &str) {
    if spec.declares(id) {
        return;
    }
    let normalized = normalize(text);
    let tags = tags_of(&normalized);
    spec.items.push(ItemSpec {
        id: id.clone(),
        display_name: title_case(text),
        description: normalized.text,
        tags,
    });
}

/// Interpret a plain sentence as one item or block declaration.
fn interpret_entity(spec: &mut ContentSpec, sentence: &str, mode: GenerationMode) {
    let normalized = normalize(sentence);
    let name_tokens: Vec<&str> = normalized
        .tokens
        .iter()
        .filter(|t| !is_stopword(t))
        .map(|t| t.as_str())
        .take(3)
        .collect();
    if name_tokens.is_empty() {
        return;
    }

    let name = name_tokens.join(" ");
    let id = Slug::from_text(&name);
    if spec.declares(&id) {
        return;
    }

    let tags = tags_of(&normalized);
    let is_block =
        mode == GenerationMode::BlockOnly || tags.contains(&SemanticTag::Block);

    if is_block {
        spec.blocks.push(BlockSpec {
            id,
            display_name: title_case(&name),
            description: normalized.text,
            tags,
        });
    } else {
        spec.items.push(ItemSpec {
            id,
            display_name: title_case(&name),
            description: normalized.text,
            tags,
        });
    }
}

fn tags_of(normalized: &crate::understanding::normalize::NormalizedText) -> Vec<SemanticTag> {
    let mut tags: Vec<SemanticTag> = extract_concepts(normalized)
        .iter()
        .flat_map(|c| c.tags.iter().copied())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Split a prompt into sentences on terminal punctuation and newlines.
fn split_sentences(prompt: &str) -> Vec<String> {
    prompt
        .split(['.', ';', '!', '?', '\n'])
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Derive the mod identity from the first meaningful words of the prompt.
fn mod_identity(prompt: &str) -> (Slug, String) {
    let normalized = normalize(prompt);
    let words: Vec<&str> = normalized
        .tokens
        .iter()
        .filter(|t| !is_stopword(t))
        .map(|t| t.as_str())
        .take(3)
        .collect();
    if words.is_empty() {
        return (Slug::from_text("custom content"), "Custom Content".to_string());
    }
    let base = words.join(" ");
    (Slug::from_text(&base), format!("{} Addon", title_case(&base)))
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
