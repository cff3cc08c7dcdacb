//! Runtime primitives, the closed System→Primitive registry, and fixed
//! safety bounds.
//!
//! Credit costs and safety bounds are constants, never derived from free
//! text, so no prompt can escalate real-world resource usage. The registry
//! is an exhaustive match: adding a System variant without a primitive list
//! is a compile error.

use crate::planner::system::System;
use serde::{Deserialize, Serialize};

/// The smallest unit of runtime behavior. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    AreaQuery,
    ApplyDamage,
    ApplyEffect,
    ContainerAccess,
    Cooldown,
    EmitLight,
    PlaySound,
    RaycastTarget,
    ReadSignal,
    ScheduleTick,
    SetBlock,
    SpawnEntity,
    SpawnParticle,
    TeleportActor,
    UseEvent,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::AreaQuery => "area_query",
            Primitive::ApplyDamage => "apply_damage",
            Primitive::ApplyEffect => "apply_effect",
            Primitive::ContainerAccess => "container_access",
            Primitive::Cooldown => "cooldown",
            Primitive::EmitLight => "emit_light",
            Primitive::PlaySound => "play_sound",
            Primitive::RaycastTarget => "raycast_target",
            Primitive::ReadSignal => "read_signal",
            Primitive::ScheduleTick => "schedule_tick",
            Primitive::SetBlock => "set_block",
            Primitive::SpawnEntity => "spawn_entity",
            Primitive::SpawnParticle => "spawn_particle",
            Primitive::TeleportActor => "teleport_actor",
            Primitive::UseEvent => "use_event",
        }
    }

    /// Fixed credit cost of carrying this primitive in a plan.
    pub fn credit_cost(self) -> u32 {
        match self {
            Primitive::AreaQuery => 3,
            Primitive::ApplyDamage => 2,
            Primitive::ApplyEffect => 2,
            Primitive::ContainerAccess => 2,
            Primitive::Cooldown => 1,
            Primitive::EmitLight => 1,
            Primitive::PlaySound => 1,
            Primitive::RaycastTarget => 3,
            Primitive::ReadSignal => 1,
            Primitive::ScheduleTick => 2,
            Primitive::SetBlock => 2,
            Primitive::SpawnEntity => 4,
            Primitive::SpawnParticle => 1,
            Primitive::TeleportActor => 4,
            Primitive::UseEvent => 1,
        }
    }

    /// Fixed safety bounds for this primitive.
    pub fn safety_bounds(self) -> SafetyBounds {
        match self {
            Primitive::AreaQuery => SafetyBounds::new(16.0, 4.0, 10, 32),
            Primitive::ApplyDamage => SafetyBounds::new(24.0, 4.0, 10, 8),
            Primitive::ApplyEffect => SafetyBounds::new(16.0, 2.0, 20, 8),
            Primitive::ContainerAccess => SafetyBounds::new(8.0, 2.0, 0, 1),
            Primitive::Cooldown => SafetyBounds::new(0.0, 20.0, 20, 0),
            Primitive::EmitLight => SafetyBounds::new(0.0, 20.0, 0, 0),
            Primitive::PlaySound => SafetyBounds::new(32.0, 4.0, 5, 0),
            Primitive::RaycastTarget => SafetyBounds::new(32.0, 4.0, 10, 1),
            Primitive::ReadSignal => SafetyBounds::new(0.0, 20.0, 0, 0),
            Primitive::ScheduleTick => SafetyBounds::new(0.0, 1.0, 20, 0),
            Primitive::SetBlock => SafetyBounds::new(8.0, 2.0, 10, 0),
            Primitive::SpawnEntity => SafetyBounds::new(16.0, 1.0, 40, 4),
            Primitive::SpawnParticle => SafetyBounds::new(32.0, 10.0, 2, 0),
            Primitive::TeleportActor => SafetyBounds::new(48.0, 0.5, 60, 1),
            Primitive::UseEvent => SafetyBounds::new(0.0, 5.0, 4, 0),
        }
    }
}

/// Hard limits on a primitive's runtime footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyBounds {
    /// Maximum interaction range in blocks; 0 means self-only.
    pub max_range: f32,
    /// Maximum invocations per second.
    pub max_frequency_hz: f32,
    /// Minimum ticks between invocations.
    pub cooldown_ticks: u32,
    /// Maximum entities touched per invocation; 0 means none.
    pub max_entities: u32,
}

impl SafetyBounds {
    const fn new(max_range: f32, max_frequency_hz: f32, cooldown_ticks: u32, max_entities: u32) -> Self {
        Self {
            max_range,
            max_frequency_hz,
            cooldown_ticks,
            max_entities,
        }
    }
}

/// The closed System→Primitive registry.
///
/// A System can never imply a primitive outside this table.
pub fn primitives_of(system: System) -> &'static [Primitive] {
    match system {
        System::AreaEffect => &[Primitive::AreaQuery, Primitive::ApplyDamage, Primitive::SpawnParticle],
        System::BlockTransform => &[Primitive::SetBlock, Primitive::PlaySound],
        System::Chaining => &[Primitive::RaycastTarget, Primitive::SpawnEntity, Primitive::ApplyDamage],
        System::Container => &[Primitive::ContainerAccess, Primitive::PlaySound],
        System::Cooldown => &[Primitive::Cooldown],
        System::Growth => &[Primitive::ScheduleTick, Primitive::SetBlock],
        System::Interaction => &[Primitive::UseEvent],
        System::LightEmission => &[Primitive::EmitLight],
        System::PassiveAura => &[Primitive::AreaQuery, Primitive::ApplyEffect],
        System::Projectile => &[Primitive::SpawnEntity, Primitive::ApplyDamage, Primitive::PlaySound],
        System::RedstoneSignal => &[Primitive::ReadSignal, Primitive::SetBlock],
        System::StatusEffect => &[Primitive::ApplyEffect],
        System::Summon => &[Primitive::SpawnEntity, Primitive::PlaySound],
        System::Targeting => &[Primitive::RaycastTarget, Primitive::SpawnParticle],
        System::Teleport => &[Primitive::TeleportActor, Primitive::SpawnParticle, Primitive::PlaySound],
    }
}
