//! Scope expansion and credit accounting.
//!
//! Scope expansion is deliberately more generous than execution planning:
//! it prices the implied surface area of a request (a mention of a new
//! dimension implies biome, structure, entity and world-rule work) even
//! where the planner has no primitive for the implication yet. Credits are
//! a pure sum over occurrences with no deduplication, and the budget
//! comparison is informational only; it never gates generation.

use crate::expansion::ExpandedSpec;
use crate::planner::ExecutionPlan;
use crate::scope::unit::ScopeUnit;
use serde::{Deserialize, Serialize};

/// The four fixed budget tiers, in credits.
pub const BUDGET_TIERS: [u32; 4] = [30, 60, 120, 300];

/// Result of scope accounting for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeBudgetResult {
    pub total_credits: u32,
    /// Smallest tier that covers the total, or the largest tier when none
    /// does.
    pub budget_tier: u32,
    /// Exactly `total_credits <= budget_tier`. Informational only.
    pub fits_budget: bool,
    /// Human-readable scope lines, e.g. "3 x item (15 credits)".
    pub scope_summary: Vec<String>,
    /// Every counted occurrence, in counting order.
    pub units: Vec<ScopeUnit>,
}

/// Implication table for whole-prompt keywords. Each keyword charges its
/// full implied surface, in order.
const IMPLICATIONS: &[(&str, &[ScopeUnit])] = &[
    (
        "dimension",
        &[
            ScopeUnit::Dimension,
            ScopeUnit::Biome,
            ScopeUnit::Structure,
            ScopeUnit::Entity,
            ScopeUnit::WorldRule,
        ],
    ),
    (
        "biome",
        &[ScopeUnit::Biome, ScopeUnit::Structure, ScopeUnit::Entity],
    ),
    ("structure", &[ScopeUnit::Structure]),
    ("boss", &[ScopeUnit::Entity, ScopeUnit::Behavior, ScopeUnit::Sound]),
    ("creature", &[ScopeUnit::Entity, ScopeUnit::Behavior]),
    ("mob", &[ScopeUnit::Entity, ScopeUnit::Behavior]),
    ("pet", &[ScopeUnit::Entity, ScopeUnit::Behavior]),
    ("sound", &[ScopeUnit::Sound]),
    ("music", &[ScopeUnit::Sound]),
    ("particle", &[ScopeUnit::Particle]),
];

/// Count scope units for a request and compare against the budget tiers.
pub fn account(
    expanded: &ExpandedSpec,
    plans: &[ExecutionPlan],
    prompt: &str,
) -> ScopeBudgetResult {
    let mut units: Vec<ScopeUnit> = Vec::new();

    // Declared surface: every entity carries its own texture work.
    for _ in &expanded.items {
        units.push(ScopeUnit::Item);
        units.push(ScopeUnit::Texture);
    }
    for _ in &expanded.blocks {
        units.push(ScopeUnit::Block);
        units.push(ScopeUnit::Texture);
    }
    for _ in &expanded.recipes {
        units.push(ScopeUnit::Recipe);
    }

    // Behavior surface from the execution plans.
    for plan in plans {
        if plan.requires_custom_behavior() {
            units.push(ScopeUnit::Behavior);
        }
    }

    // Implied surface from whole-prompt wording.
    let lower = prompt.to_lowercase();
    for (keyword, implied) in IMPLICATIONS {
        if lower.contains(keyword) {
            units.extend_from_slice(implied);
        }
    }

    let total_credits: u32 = units.iter().map(|u| u.credit_cost()).sum();
    let budget_tier = BUDGET_TIERS
        .iter()
        .copied()
        .find(|tier| total_credits <= *tier)
        .unwrap_or(BUDGET_TIERS[3]);
    let fits_budget = total_credits <= budget_tier;

    ScopeBudgetResult {
        total_credits,
        budget_tier,
        fits_budget,
        scope_summary: summarize(&units),
        units,
    }
}

/// Collapse occurrences into "count x unit (credits)" lines, sorted by
/// unit name.
fn summarize(units: &[ScopeUnit]) -> Vec<String> {
    let mut sorted = units.to_vec();
    sorted.sort();
    let mut out = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let unit = sorted[i];
        let count = sorted[i..].iter().take_while(|u| **u == unit).count();
        out.push(format!(
            "{} x {} ({} credits)",
            count,
            unit.as_str(),
            count as u32 * unit.credit_cost()
        ));
        i += count;
    }
    out
}
