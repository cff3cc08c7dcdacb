//! Procedural noise specification: base noise kind plus detail layers.

use crate::core::hash::unit_f64;
use crate::texture::profile::{AestheticProfile, AnimationHint, MaterialHint, OverlayHint};
use serde::{Deserialize, Serialize};

/// Base noise character of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    Grain,
    Speckle,
    Cellular,
    Smooth,
    Swirl,
}

/// Kind of one detail layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    Drip,
    Veins,
    Sparkle,
    Frost,
    Crack,
    Noise,
}

/// One detail layer with deterministic intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailLayer {
    pub kind: DetailKind,
    /// Blend intensity in 0.3..0.9, derived from the seed hash.
    pub intensity: f64,
}

/// Base noise kind from the material hint. Exhaustive.
pub fn base_noise(material: MaterialHint) -> NoiseKind {
    match material {
        MaterialHint::Wood => NoiseKind::Grain,
        MaterialHint::Stone => NoiseKind::Speckle,
        MaterialHint::Metal => NoiseKind::Smooth,
        MaterialHint::Gem => NoiseKind::Cellular,
        MaterialHint::Food => NoiseKind::Smooth,
        MaterialHint::Liquid => NoiseKind::Swirl,
        MaterialHint::Organic => NoiseKind::Cellular,
        MaterialHint::Generic => NoiseKind::Speckle,
    }
}

/// Build the detail layer list for a profile. Never empty: when no overlay
/// or animation hint applies, a generic noise layer is used.
pub fn detail_layers(profile: &AestheticProfile, seed: &str) -> Vec<DetailLayer> {
    let mut layers = Vec::new();

    for overlay in &profile.overlays {
        let kind = match overlay {
            OverlayHint::Drip => DetailKind::Drip,
            OverlayHint::Veins => DetailKind::Veins,
            OverlayHint::Sparkle => DetailKind::Sparkle,
            OverlayHint::Frost => DetailKind::Frost,
            OverlayHint::Crack => DetailKind::Crack,
        };
        layers.push(layer(kind, profile, seed));
    }

    // A flowing animation reads as movement in the static texture too.
    if profile.animation == Some(AnimationHint::Flowing)
        && !layers.iter().any(|l| l.kind == DetailKind::Drip)
    {
        layers.push(layer(DetailKind::Drip, profile, seed));
    }

    if layers.is_empty() {
        layers.push(layer(DetailKind::Noise, profile, seed));
    }
    layers
}

fn layer(kind: DetailKind, profile: &AestheticProfile, seed: &str) -> DetailLayer {
    let context = format!(
        "layer:{:?}:{}/{}",
        kind, profile.category, profile.entity_id
    );
    DetailLayer {
        kind,
        intensity: 0.3 + 0.6 * unit_f64(seed, &context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{EntityCategory, Slug};
    use crate::texture::profile::derive_profile;
    use crate::understanding::vocabulary::SemanticTag;

    #[test]
    fn test_layers_never_empty() {
        let profile = derive_profile(
            &Slug::from_text("plain thing"),
            EntityCategory::Item,
            "Plain Thing",
            "",
            &[],
        );
        let layers = detail_layers(&profile, "seed");
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].kind, DetailKind::Noise);
    }

    #[test]
    fn test_intensity_in_range_and_deterministic() {
        let profile = derive_profile(
            &Slug::from_text("ice cream"),
            EntityCategory::Item,
            "Ice Cream",
            "ice cream",
            &[SemanticTag::Cold, SemanticTag::Food],
        );
        let a = detail_layers(&profile, "seed");
        let b = detail_layers(&profile, "seed");
        assert_eq!(a, b);
        for l in &a {
            assert!((0.3..=0.9).contains(&l.intensity));
        }
    }

    #[test]
    fn test_wood_gets_grain() {
        assert_eq!(base_noise(MaterialHint::Wood), NoiseKind::Grain);
    }
}
