//! Behavior script emission.
//!
//! One script per entity whose plan needs custom behavior. The script body
//! is a fixed template; the only values interpolated are the plan's
//! cooldown and range bounds, so two entities with the same bounds emit
//! byte-identical bodies apart from the key in the header.

use crate::materialize::keys::AssetKey;
use crate::planner::ExecutionPlan;

/// One emitted behavior script.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorSource {
    pub key: AssetKey,
    pub source: String,
}

/// Emit behavior scripts for every plan that needs one, plan order.
pub fn behavior_sources(plans: &[ExecutionPlan]) -> Vec<BehaviorSource> {
    plans
        .iter()
        .filter(|plan| plan.requires_custom_behavior())
        .map(|plan| BehaviorSource {
            key: AssetKey::new(plan.category, plan.entity_id.clone()),
            source: render(plan),
        })
        .collect()
}

fn render(plan: &ExecutionPlan) -> String {
    let key = AssetKey::new(plan.category, plan.entity_id.clone());
    format!(
        r#"// Behavior for {key}.
const COOLDOWN_TICKS = {cooldown};
const MAX_RANGE = {range:.1};

const lastUse = new Map();

export function onUse(event) {{
    const now = event.tick;
    const last = lastUse.get(event.source.id) ?? -COOLDOWN_TICKS;
    if (now - last < COOLDOWN_TICKS) {{
        return;
    }}
    lastUse.set(event.source.id, now);
    event.runtime.activate(event.source, {{ maxRange: MAX_RANGE }});
}}
"#,
        key = key,
        cooldown = plan.cooldown_ticks(),
        range = plan.max_range(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{EntityCategory, Slug};
    use crate::planner::plan_entity;

    fn wand_plan() -> ExecutionPlan {
        plan_entity(
            &Slug::from_text("magic wand"),
            "Magic Wand",
            "shoots lightning",
            EntityCategory::Item,
        )
    }

    #[test]
    fn test_custom_behavior_gets_script() {
        let sources = behavior_sources(&[wand_plan()]);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].key.to_string(), "item/magic_wand");
        assert!(sources[0].source.contains("COOLDOWN_TICKS"));
        assert!(sources[0].source.contains("MAX_RANGE"));
    }

    #[test]
    fn test_plain_item_gets_no_script() {
        let plan = plan_entity(
            &Slug::from_text("pebble"),
            "Pebble",
            "a pebble",
            EntityCategory::Item,
        );
        assert!(behavior_sources(&[plan]).is_empty());
    }

    #[test]
    fn test_script_interpolates_plan_bounds() {
        let plan = wand_plan();
        let sources = behavior_sources(&[plan.clone()]);
        assert!(sources[0]
            .source
            .contains(&format!("COOLDOWN_TICKS = {}", plan.cooldown_ticks())));
        assert!(sources[0]
            .source
            .contains(&format!("MAX_RANGE = {:.1}", plan.max_range())));
    }
}
