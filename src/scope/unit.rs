//! Scope units: coarse, economically-priced categories of content surface.

use serde::{Deserialize, Serialize};

/// One category of requested surface area. Closed set with fixed unit
/// costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeUnit {
    Item,
    Block,
    Recipe,
    Texture,
    Behavior,
    Entity,
    Structure,
    Biome,
    Dimension,
    WorldRule,
    Sound,
    Particle,
}

impl ScopeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeUnit::Item => "item",
            ScopeUnit::Block => "block",
            ScopeUnit::Recipe => "recipe",
            ScopeUnit::Texture => "texture",
            ScopeUnit::Behavior => "behavior",
            ScopeUnit::Entity => "entity",
            ScopeUnit::Structure => "structure",
            ScopeUnit::Biome => "biome",
            ScopeUnit::Dimension => "dimension",
            ScopeUnit::WorldRule => "world_rule",
            ScopeUnit::Sound => "sound",
            ScopeUnit::Particle => "particle",
        }
    }

    /// Fixed credit cost per occurrence.
    pub fn credit_cost(self) -> u32 {
        match self {
            ScopeUnit::Item => 5,
            ScopeUnit::Block => 5,
            ScopeUnit::Recipe => 3,
            ScopeUnit::Texture => 4,
            ScopeUnit::Behavior => 8,
            ScopeUnit::Entity => 15,
            ScopeUnit::Structure => 20,
            ScopeUnit::Biome => 25,
            ScopeUnit::Dimension => 40,
            ScopeUnit::WorldRule => 10,
            ScopeUnit::Sound => 2,
            ScopeUnit::Particle => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_positive() {
        for unit in [
            ScopeUnit::Item,
            ScopeUnit::Block,
            ScopeUnit::Recipe,
            ScopeUnit::Texture,
            ScopeUnit::Behavior,
            ScopeUnit::Entity,
            ScopeUnit::Structure,
            ScopeUnit::Biome,
            ScopeUnit::Dimension,
            ScopeUnit::WorldRule,
            ScopeUnit::Sound,
            ScopeUnit::Particle,
        ] {
            assert!(unit.credit_cost() > 0);
        }
    }
}
