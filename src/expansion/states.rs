//! Multi-state visual descriptors for doors and trapdoors.
//!
//! The rotation table encodes the target platform's physical visual
//! contract: 4 facings × 2 hinge sides × open/closed × upper/lower half,
//! each mapped to an explicit y-rotation angle. The table is generated in a
//! fixed nested order (facing, then hinge, then open, then half) so output
//! is byte-stable.

use crate::core::types::Slug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Base y-rotation of the closed state.
    pub fn base_rotation(self) -> u16 {
        match self {
            Facing::North => 0,
            Facing::East => 90,
            Facing::South => 180,
            Facing::West => 270,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hinge {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    Lower,
    Upper,
}

/// Which multi-state family a descriptor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiStateKind {
    Door,
    Trapdoor,
}

/// One fully-qualified state with its resolved rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRotation {
    pub facing: Facing,
    pub hinge: Hinge,
    pub open: bool,
    pub half: Half,
    pub y_rotation: u16,
}

/// The full state table for one door or trapdoor block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStateDescriptor {
    pub block_id: Slug,
    pub kind: MultiStateKind,
    pub states: Vec<StateRotation>,
}

/// Resolved rotation for one state.
///
/// Closed panels face their base rotation. An open panel swings 90 degrees
/// around the hinge: left hinges rotate clockwise (+90), right hinges
/// counter-clockwise (-90), modulo 360. The half does not change rotation
/// but is part of the state key.
fn rotation(facing: Facing, hinge: Hinge, open: bool) -> u16 {
    let base = facing.base_rotation();
    if !open {
        return base;
    }
    match hinge {
        Hinge::Left => (base + 90) % 360,
        Hinge::Right => (base + 270) % 360,
    }
}

/// Build the 32-entry state table for a door or trapdoor.
pub fn state_table(block_id: &Slug, kind: MultiStateKind) -> BlockStateDescriptor {
    let mut states = Vec::with_capacity(32);
    for facing in Facing::ALL {
        for hinge in [Hinge::Left, Hinge::Right] {
            for open in [false, true] {
                for half in [Half::Lower, Half::Upper] {
                    states.push(StateRotation {
                        facing,
                        hinge,
                        open,
                        half,
                        y_rotation: rotation(facing, hinge, open),
                    });
                }
            }
        }
    }
    BlockStateDescriptor {
        block_id: block_id.clone(),
        kind,
        states,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_thirty_two_states() {
        let table = state_table(&Slug::from_text("maple door"), MultiStateKind::Door);
        assert_eq!(table.states.len(), 32);
    }

    #[test]
    fn test_closed_states_use_base_rotation() {
        let table = state_table(&Slug::from_text("maple door"), MultiStateKind::Door);
        for state in table.states.iter().filter(|s| !s.open) {
            assert_eq!(state.y_rotation, state.facing.base_rotation());
        }
    }

    #[test]
    fn test_open_hinges_swing_opposite_ways() {
        let table = state_table(&Slug::from_text("maple door"), MultiStateKind::Door);
        let left = table
            .states
            .iter()
            .find(|s| s.open && s.hinge == Hinge::Left && s.facing == Facing::North)
            .unwrap();
        let right = table
            .states
            .iter()
            .find(|s| s.open && s.hinge == Hinge::Right && s.facing == Facing::North)
            .unwrap();
        assert_eq!(left.y_rotation, 90);
        assert_eq!(right.y_rotation, 270);
    }

    #[test]
    fn test_table_order_is_stable() {
        let a = state_table(&Slug::from_text("maple door"), MultiStateKind::Door);
        let b = state_table(&Slug::from_text("maple door"), MultiStateKind::Door);
        assert_eq!(a, b);
    }
}
