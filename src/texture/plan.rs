//! Final texture plan assembly.

use crate::core::types::{EntityCategory, Slug};
use crate::expansion::ExpandedSpec;
use crate::intent::spec::Constraint;
use crate::texture::palette::{select_motifs, select_palette, PaletteFamily, Rgb};
use crate::texture::procedural::{base_noise, detail_layers, DetailLayer, NoiseKind};
use crate::texture::profile::{derive_profile, AestheticProfile, AnimationHint};
use crate::texture::style::{style_of, StyleKind, StyleParams};
use serde::{Deserialize, Serialize};

/// Complete texture plan for one visually-bearing entity.
///
/// Every entity resolves to a complete plan regardless of how unusual the
/// input was: the palette has 3–6 colors and is never grayscale-only, and
/// the layer list is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalTexturePlan {
    pub entity_id: Slug,
    pub category: EntityCategory,
    pub family: PaletteFamily,
    pub palette: Vec<Rgb>,
    pub primary_motif: String,
    pub secondary_motif: String,
    pub base_noise: NoiseKind,
    pub layers: Vec<DetailLayer>,
    pub style: StyleKind,
    pub style_params: StyleParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationHint>,
    /// When set, rasterization clamps pixels away from pure extremes.
    pub vanilla_safe: bool,
}

/// Synthesize the final plan for one profile.
pub fn synthesize(profile: &AestheticProfile, seed: &str, vanilla_safe: bool) -> FinalTexturePlan {
    let (family, palette) = select_palette(profile, seed);
    let (primary_motif, secondary_motif) = select_motifs(profile, seed);
    let layers = detail_layers(profile, seed);
    let style = style_of(profile, family);

    FinalTexturePlan {
        entity_id: profile.entity_id.clone(),
        category: profile.category,
        family,
        palette,
        primary_motif,
        secondary_motif,
        base_noise: base_noise(profile.material),
        layers,
        style,
        style_params: style.params(),
        animation: profile.animation,
        vanilla_safe,
    }
}

/// Synthesize plans for every entity of an expanded spec, items first, then
/// blocks, insertion order within each.
pub fn synthesize_all(expanded: &ExpandedSpec, seed: &str) -> Vec<FinalTexturePlan> {
    let vanilla_safe = expanded
        .content
        .has_constraint(Constraint::VanillaSafeTextures);
    let mut plans = Vec::with_capacity(expanded.items.len() + expanded.blocks.len());

    for item in &expanded.items {
        let profile = derive_profile(
            &item.id,
            EntityCategory::Item,
            &item.display_name,
            &item.description,
            &item.tags,
        );
        plans.push(synthesize(&profile, seed, vanilla_safe));
    }
    for block in &expanded.blocks {
        let profile = derive_profile(
            &block.id,
            EntityCategory::Block,
            &block.display_name,
            &block.description,
            &block.tags,
        );
        plans.push(synthesize(&profile, seed, vanilla_safe));
    }

    plans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::interpret;
    use crate::texture::procedural::DetailKind;
    use crate::understanding::clarify::GenerationMode;

    #[test]
    fn test_ice_cream_plan() {
        let spec = interpret("ice cream", GenerationMode::Full);
        let expanded = crate::expansion::expand(&spec);
        let plans = synthesize_all(&expanded, "seed-1");
        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert_eq!(plan.family, PaletteFamily::Pastel);
        assert!(plan.layers.iter().any(|l| l.kind == DetailKind::Drip));
        assert!(plan.style_params.contrast < 1.0);
    }

    #[test]
    fn test_every_plan_complete() {
        let spec = interpret(
            "A new wood type called Maple. A glowing sword. xyzzy trinket.",
            GenerationMode::Full,
        );
        let expanded = crate::expansion::expand(&spec);
        for plan in synthesize_all(&expanded, "seed-2") {
            assert!(plan.palette.len() >= 3 && plan.palette.len() <= 6);
            assert!(!plan.layers.is_empty());
        }
    }

    #[test]
    fn test_synthesis_deterministic() {
        let spec = interpret("a glowing sword", GenerationMode::Full);
        let expanded = crate::expansion::expand(&spec);
        assert_eq!(
            synthesize_all(&expanded, "seed-3"),
            synthesize_all(&expanded, "seed-3")
        );
    }
}
