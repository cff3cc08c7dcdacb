//! Loot tables for generated blocks.
//!
//! Every block drops itself with a single entry, except slabs: a slab's
//! drop count depends on its state, so slabs use a fixed three-entry
//! state-conditioned table (bottom→1, top→1, double→2).

use crate::core::types::Slug;
use serde::{Deserialize, Serialize};

/// Condition on a block-state property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateCondition {
    pub state: String,
    pub value: String,
}

/// One loot entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootEntry {
    pub drop: Slug,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<StateCondition>,
}

/// Loot table for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootTable {
    pub block_id: Slug,
    pub entries: Vec<LootEntry>,
}

/// Build the self-drop loot table for a block.
pub fn self_drop(block_id: &Slug) -> LootTable {
    LootTable {
        block_id: block_id.clone(),
        entries: vec![LootEntry {
            drop: block_id.clone(),
            count: 1,
            condition: None,
        }],
    }
}

/// Build the three-entry state-conditioned slab table.
pub fn slab_drop(block_id: &Slug) -> LootTable {
    let entry = |value: &str, count: u32| LootEntry {
        drop: block_id.clone(),
        count,
        condition: Some(StateCondition {
            state: "slab_half".to_string(),
            value: value.to_string(),
        }),
    };
    LootTable {
        block_id: block_id.clone(),
        entries: vec![entry("bottom", 1), entry("top", 1), entry("double", 2)],
    }
}

/// True when the block id names a slab (by suffix, never by material).
pub fn is_slab(block_id: &Slug) -> bool {
    block_id.as_str().ends_with("_slab") || block_id.as_str() == "slab"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_drop_single_entry() {
        let table = self_drop(&Slug::from_text("maple planks"));
        assert_eq!(table.entries.len(), 1);
        assert_eq!(table.entries[0].drop.as_str(), "maple_planks");
        assert!(table.entries[0].condition.is_none());
    }

    #[test]
    fn test_slab_three_entries() {
        let table = slab_drop(&Slug::from_text("maple slab"));
        assert_eq!(table.entries.len(), 3);
        let double = &table.entries[2];
        assert_eq!(double.count, 2);
        assert_eq!(double.condition.as_ref().unwrap().value, "double");
    }

    #[test]
    fn test_slab_detection_by_suffix() {
        assert!(is_slab(&Slug::from_text("maple slab")));
        assert!(!is_slab(&Slug::from_text("maple slabstone")));
    }
}
