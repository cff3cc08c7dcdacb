//! Aesthetic profile: everything texture synthesis needs to know about one
//! entity, derived from its name, description and semantic tags.

use crate::core::types::{EntityCategory, Slug};
use crate::understanding::vocabulary::SemanticTag;
use serde::{Deserialize, Serialize};

/// Broad material classification driving the base noise kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialHint {
    Wood,
    Stone,
    Metal,
    Gem,
    Food,
    Liquid,
    Organic,
    Generic,
}

/// Overlay hints feeding detail layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayHint {
    Drip,
    Veins,
    Sparkle,
    Frost,
    Crack,
}

/// Requested animation behavior, carried through to the final plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationHint {
    Flowing,
    Pulsing,
    Shimmer,
}

/// Interpreted aesthetic profile of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AestheticProfile {
    pub entity_id: Slug,
    pub category: EntityCategory,
    pub material: MaterialHint,
    /// Color words found in the entity text, in fixed vocabulary order.
    pub color_words: Vec<String>,
    pub glow: bool,
    pub overlays: Vec<OverlayHint>,
    pub animation: Option<AnimationHint>,
    pub tags: Vec<SemanticTag>,
}

const COLOR_WORDS: &[&str] = &[
    "red", "blue", "green", "purple", "pink", "yellow", "orange", "white", "black", "brown",
    "cyan",
];

/// Build the profile for one entity.
pub fn derive_profile(
    entity_id: &Slug,
    category: EntityCategory,
    display_name: &str,
    description: &str,
    tags: &[SemanticTag],
) -> AestheticProfile {
    let text = format!("{} {}", display_name, description).to_lowercase();

    let material = material_of(tags);
    let glow = tags.contains(&SemanticTag::Glow) || text.contains("glow");

    let mut overlays = Vec::new();
    let has = |t: SemanticTag| tags.contains(&t);
    if (has(SemanticTag::Food) && (has(SemanticTag::Cold) || has(SemanticTag::Liquid)))
        || text.contains("drip")
        || text.contains("melt")
    {
        overlays.push(OverlayHint::Drip);
    }
    if text.contains("vein") || material == MaterialHint::Gem {
        overlays.push(OverlayHint::Veins);
    }
    if glow || has(SemanticTag::Magic) || text.contains("sparkl") {
        overlays.push(OverlayHint::Sparkle);
    }
    if has(SemanticTag::Cold) && !overlays.contains(&OverlayHint::Drip) {
        overlays.push(OverlayHint::Frost);
    }
    if text.contains("crack") || text.contains("broken") {
        overlays.push(OverlayHint::Crack);
    }

    let animation = if text.contains("flow") {
        Some(AnimationHint::Flowing)
    } else if text.contains("puls") {
        Some(AnimationHint::Pulsing)
    } else if text.contains("shimmer") {
        Some(AnimationHint::Shimmer)
    } else {
        None
    };

    let color_words = COLOR_WORDS
        .iter()
        .filter(|w| text.split_whitespace().any(|t| t == **w))
        .map(|w| w.to_string())
        .collect();

    AestheticProfile {
        entity_id: entity_id.clone(),
        category,
        material,
        color_words,
        glow,
        overlays,
        animation,
        tags: tags.to_vec(),
    }
}

/// Material classification from tags, most specific first.
fn material_of(tags: &[SemanticTag]) -> MaterialHint {
    let has = |t: SemanticTag| tags.contains(&t);
    if has(SemanticTag::Gem) {
        MaterialHint::Gem
    } else if has(SemanticTag::Metal) {
        MaterialHint::Metal
    } else if has(SemanticTag::Wood) {
        MaterialHint::Wood
    } else if has(SemanticTag::Stone) {
        MaterialHint::Stone
    } else if has(SemanticTag::Food) {
        MaterialHint::Food
    } else if has(SemanticTag::Liquid) {
        MaterialHint::Liquid
    } else if has(SemanticTag::Nature) || has(SemanticTag::Animal) {
        MaterialHint::Organic
    } else {
        MaterialHint::Generic
    }
}
