//! Per-entity execution plans and request-level aggregation.

use crate::core::types::{EntityCategory, Slug};
use crate::planner::primitive::{primitives_of, Primitive};
use crate::planner::system::{detect, System};
use serde::{Deserialize, Serialize};

/// Execution plan for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlan {
    pub entity_id: Slug,
    pub category: EntityCategory,
    /// Detected systems, sorted for output stability.
    pub systems: Vec<System>,
    /// Implied primitives, deduplicated and sorted.
    pub primitives: Vec<Primitive>,
    /// Sum of primitive credit costs.
    pub credits: u32,
    pub explanations: Vec<String>,
    pub upgrade_hints: Vec<String>,
    /// True when detection fell back to the minimal set. Recorded, not
    /// hidden.
    pub degraded: bool,
}

impl ExecutionPlan {
    /// True when this plan needs a custom behavior source file.
    pub fn requires_custom_behavior(&self) -> bool {
        self.systems.iter().any(|s| {
            matches!(
                s,
                System::Projectile
                    | System::Targeting
                    | System::Chaining
                    | System::Summon
                    | System::Teleport
                    | System::AreaEffect
            )
        })
    }

    /// Largest cooldown among this plan's primitives, in ticks.
    pub fn cooldown_ticks(&self) -> u32 {
        self.primitives
            .iter()
            .map(|p| p.safety_bounds().cooldown_ticks)
            .max()
            .unwrap_or(0)
    }

    /// Smallest nonzero range bound among this plan's primitives.
    pub fn max_range(&self) -> f32 {
        self.primitives
            .iter()
            .map(|p| p.safety_bounds().max_range)
            .filter(|r| *r > 0.0)
            .fold(f32::INFINITY, f32::min)
            .min(48.0)
    }
}

/// Aggregated plan for a whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedExecutionPlan {
    /// Union of all systems, sorted.
    pub systems: Vec<System>,
    /// Union of all primitives, sorted.
    pub primitives: Vec<Primitive>,
    /// Sum of costs over the primitive union.
    pub credits: u32,
    /// Deduplicated explanations, first occurrence wins.
    pub explanations: Vec<String>,
    /// Deduplicated upgrade hints.
    pub upgrade_hints: Vec<String>,
    pub per_entity: Vec<ExecutionPlan>,
}

/// Build the execution plan for one entity.
pub fn plan_entity(
    entity_id: &Slug,
    display_name: &str,
    description: &str,
    category: EntityCategory,
) -> ExecutionPlan {
    let detection = detect(display_name, description, category);

    let mut primitives: Vec<Primitive> = detection
        .systems
        .iter()
        .flat_map(|s| primitives_of(*s).iter().copied())
        .collect();
    primitives.sort();
    primitives.dedup();

    let credits = primitives.iter().map(|p| p.credit_cost()).sum();

    let mut upgrade_hints: Vec<String> = detection
        .systems
        .iter()
        .filter_map(|s| s.upgrade_hint())
        .map(|h| h.to_string())
        .collect();
    upgrade_hints.dedup();

    ExecutionPlan {
        entity_id: entity_id.clone(),
        category,
        systems: detection.systems,
        primitives,
        credits,
        explanations: detection.explanations,
        upgrade_hints,
        degraded: detection.degraded,
    }
}

/// Union plans across all entities of a request.
pub fn aggregate(plans: Vec<ExecutionPlan>) -> AggregatedExecutionPlan {
    let mut systems: Vec<System> = plans.iter().flat_map(|p| p.systems.iter().copied()).collect();
    systems.sort();
    systems.dedup();

    let mut primitives: Vec<Primitive> =
        plans.iter().flat_map(|p| p.primitives.iter().copied()).collect();
    primitives.sort();
    primitives.dedup();

    let credits = primitives.iter().map(|p| p.credit_cost()).sum();

    let mut explanations = Vec::new();
    for plan in &plans {
        for e in &plan.explanations {
            if !explanations.contains(e) {
                explanations.push(e.clone());
            }
        }
    }

    let mut upgrade_hints = Vec::new();
    for plan in &plans {
        for h in &plan.upgrade_hints {
            if !upgrade_hints.contains(h) {
                upgrade_hints.push(h.clone());
            }
        }
    }

    AggregatedExecutionPlan {
        systems,
        primitives,
        credits,
        explanations,
        upgrade_hints,
        per_entity: plans,
    }
}
