//! Style transforms: a fixed lookup from style kind to post-processing
//! parameters. Style never alters procedural structure, only how the result
//! is graded.

use crate::texture::palette::PaletteFamily;
use crate::texture::profile::AestheticProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Soft,
    Vivid,
    Gritty,
    Luminous,
    Flat,
}

/// Post-processing parameters. 1.0 is neutral for saturation/contrast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleParams {
    pub saturation: f32,
    pub contrast: f32,
    pub edge_softness: f32,
    pub glow_diffusion: f32,
}

impl StyleKind {
    /// Fixed parameter lookup. Exhaustive by construction.
    pub fn params(self) -> StyleParams {
        match self {
            StyleKind::Soft => StyleParams {
                saturation: 0.9,
                contrast: 0.75,
                edge_softness: 0.8,
                glow_diffusion: 0.2,
            },
            StyleKind::Vivid => StyleParams {
                saturation: 1.2,
                contrast: 1.1,
                edge_softness: 0.3,
                glow_diffusion: 0.1,
            },
            StyleKind::Gritty => StyleParams {
                saturation: 0.8,
                contrast: 1.25,
                edge_softness: 0.2,
                glow_diffusion: 0.0,
            },
            StyleKind::Luminous => StyleParams {
                saturation: 1.1,
                contrast: 0.95,
                edge_softness: 0.5,
                glow_diffusion: 0.8,
            },
            StyleKind::Flat => StyleParams {
                saturation: 1.0,
                contrast: 1.0,
                edge_softness: 0.0,
                glow_diffusion: 0.0,
            },
        }
    }
}

/// Pick the style for a profile given its palette family.
pub fn style_of(profile: &AestheticProfile, family: PaletteFamily) -> StyleKind {
    if profile.glow {
        StyleKind::Luminous
    } else {
        match family {
            PaletteFamily::Dark => StyleKind::Gritty,
            PaletteFamily::Pastel | PaletteFamily::Cute => StyleKind::Soft,
            PaletteFamily::Sickly => StyleKind::Flat,
            PaletteFamily::Fantasy => StyleKind::Vivid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{EntityCategory, Slug};
    use crate::texture::profile::derive_profile;
    use crate::understanding::vocabulary::SemanticTag;

    #[test]
    fn test_pastel_is_soft_with_low_contrast() {
        let profile = derive_profile(
            &Slug::from_text("ice cream"),
            EntityCategory::Item,
            "Ice Cream",
            "ice cream",
            &[SemanticTag::Cold, SemanticTag::Food],
        );
        let style = style_of(&profile, PaletteFamily::Pastel);
        assert_eq!(style, StyleKind::Soft);
        assert!(style.params().contrast < 1.0);
    }

    #[test]
    fn test_glow_wins_over_family() {
        let profile = derive_profile(
            &Slug::from_text("glow block"),
            EntityCategory::Block,
            "Glow Block",
            "a glowing block",
            &[SemanticTag::Glow, SemanticTag::Block],
        );
        assert_eq!(style_of(&profile, PaletteFamily::Dark), StyleKind::Luminous);
    }
}
