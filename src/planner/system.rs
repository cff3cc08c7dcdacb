//! Gameplay systems and the decision table that detects them.
//!
//! Detection is an ordered rule list scanned over the entity's name and
//! description. Within each rule, the first matching keyword wins; rules are
//! independent branches, so several rules can fire on one entity. Unmatched
//! text degrades to the minimal set, never an error.

use crate::core::types::EntityCategory;
use serde::{Deserialize, Serialize};

/// A named gameplay capability. Closed set; every consumer matches
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum System {
    AreaEffect,
    BlockTransform,
    Chaining,
    Container,
    Cooldown,
    Growth,
    Interaction,
    LightEmission,
    PassiveAura,
    Projectile,
    RedstoneSignal,
    StatusEffect,
    Summon,
    Targeting,
    Teleport,
}

impl System {
    pub fn as_str(self) -> &'static str {
        match self {
            System::AreaEffect => "area_effect",
            System::BlockTransform => "block_transform",
            System::Chaining => "chaining",
            System::Container => "container",
            System::Cooldown => "cooldown",
            System::Growth => "growth",
            System::Interaction => "interaction",
            System::LightEmission => "light_emission",
            System::PassiveAura => "passive_aura",
            System::Projectile => "projectile",
            System::RedstoneSignal => "redstone_signal",
            System::StatusEffect => "status_effect",
            System::Summon => "summon",
            System::Targeting => "targeting",
            System::Teleport => "teleport",
        }
    }

    /// Hint for a natural future expansion of this system.
    pub fn upgrade_hint(self) -> Option<&'static str> {
        match self {
            System::Targeting => Some("multi-target selection"),
            System::Chaining => Some("configurable chain length"),
            System::Projectile => Some("charged shot variants"),
            System::StatusEffect => Some("stacking effect levels"),
            System::Summon => Some("tamed summon variants"),
            System::Container => Some("sorting and filtering"),
            System::Growth => Some("bone-meal acceleration"),
            _ => None,
        }
    }
}

/// One branch of the detection table.
struct DetectionRule {
    /// Human-readable reason recorded in the plan.
    explanation: &'static str,
    /// Keywords in priority order; the first one present wins the branch.
    keywords: &'static [&'static str],
    systems: &'static [System],
}

/// Ordered detection table. Earlier rules are more specific.
const DETECTION_RULES: &[DetectionRule] = &[
    DetectionRule {
        explanation: "chained strike behavior from lightning/chain wording",
        keywords: &["lightning", "thunder", "chain"],
        systems: &[System::Targeting, System::Chaining, System::Cooldown],
    },
    DetectionRule {
        explanation: "projectile launch from shooting wording",
        keywords: &["shoot", "shoots", "projectile", "fireball", "arrow", "bolt", "launch"],
        systems: &[System::Projectile, System::Cooldown],
    },
    DetectionRule {
        explanation: "teleportation from warp wording",
        keywords: &["teleport", "blink", "warp"],
        systems: &[System::Teleport, System::Cooldown],
    },
    DetectionRule {
        explanation: "summoning from spawn wording",
        keywords: &["summon", "summons"],
        systems: &[System::Summon, System::Cooldown],
    },
    DetectionRule {
        explanation: "area burst from explosion wording",
        keywords: &["explode", "explodes", "explosion", "burst"],
        systems: &[System::AreaEffect, System::Cooldown],
    },
    DetectionRule {
        explanation: "status effect from potion-effect wording",
        keywords: &["poison", "wither", "regenerat", "speed", "slowness", "heal", "restores"],
        systems: &[System::StatusEffect],
    },
    DetectionRule {
        explanation: "ambient aura from aura wording",
        keywords: &["aura", "radiates"],
        systems: &[System::PassiveAura],
    },
    DetectionRule {
        explanation: "light emission from glow wording",
        keywords: &["glow", "glowing", "lantern", "lamp", "torch", "shines"],
        systems: &[System::LightEmission],
    },
    DetectionRule {
        explanation: "growth cycle from crop wording",
        keywords: &["grow", "grows", "crop", "sapling"],
        systems: &[System::Growth],
    },
    DetectionRule {
        explanation: "storage from container wording",
        keywords: &["chest", "storage", "container", "barrel"],
        systems: &[System::Container],
    },
    DetectionRule {
        explanation: "signal handling from redstone wording",
        keywords: &["redstone", "signal", "powered"],
        systems: &[System::RedstoneSignal],
    },
    DetectionRule {
        explanation: "block conversion from transform wording",
        keywords: &["transforms", "converts", "turns into"],
        systems: &[System::BlockTransform],
    },
];

/// Result of system detection for one entity.
pub struct Detection {
    pub systems: Vec<System>,
    pub explanations: Vec<String>,
    /// True when no rule matched and the minimal set was used instead.
    pub degraded: bool,
}

/// Detect systems from an entity's name and description.
pub fn detect(name: &str, description: &str, category: EntityCategory) -> Detection {
    let text = format!("{} {}", name, description).to_lowercase();
    let mut systems: Vec<System> = Vec::new();
    let mut explanations = Vec::new();

    for rule in DETECTION_RULES {
        if rule.keywords.iter().any(|k| text.contains(k)) {
            for system in rule.systems {
                if !systems.contains(system) {
                    systems.push(*system);
                }
            }
            explanations.push(rule.explanation.to_string());
        }
    }

    let degraded = systems.is_empty();
    if degraded {
        // Unrecognized text degrades to the minimal valid set: items always
        // respond to use, blocks need nothing extra.
        if category == EntityCategory::Item {
            systems.push(System::Interaction);
        }
        explanations.push("no behavior wording recognized, minimal set used".to_string());
    }

    systems.sort();
    Detection {
        systems,
        explanations,
        degraded,
    }
}
