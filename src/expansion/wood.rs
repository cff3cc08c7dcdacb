//! The fixed wood family: every wood type declaration expands into the same
//! ordered 17-member set of dependent entities.

use crate::core::types::EntityCategory;

/// One member of the wood family. The order of [`WoodMember::ALL`] is the
/// canonical expansion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WoodMember {
    Log,
    StrippedLog,
    Wood,
    StrippedWood,
    Planks,
    Stairs,
    Slab,
    Fence,
    FenceGate,
    Door,
    Trapdoor,
    PressurePlate,
    Button,
    Sign,
    HangingSign,
    Boat,
    ChestBoat,
}

impl WoodMember {
    pub const ALL: [WoodMember; 17] = [
        WoodMember::Log,
        WoodMember::StrippedLog,
        WoodMember::Wood,
        WoodMember::StrippedWood,
        WoodMember::Planks,
        WoodMember::Stairs,
        WoodMember::Slab,
        WoodMember::Fence,
        WoodMember::FenceGate,
        WoodMember::Door,
        WoodMember::Trapdoor,
        WoodMember::PressurePlate,
        WoodMember::Button,
        WoodMember::Sign,
        WoodMember::HangingSign,
        WoodMember::Boat,
        WoodMember::ChestBoat,
    ];

    /// Identifier suffix appended to the wood type id.
    pub fn suffix(self) -> &'static str {
        match self {
            WoodMember::Log => "log",
            WoodMember::StrippedLog => "stripped_log",
            WoodMember::Wood => "wood",
            WoodMember::StrippedWood => "stripped_wood",
            WoodMember::Planks => "planks",
            WoodMember::Stairs => "stairs",
            WoodMember::Slab => "slab",
            WoodMember::Fence => "fence",
            WoodMember::FenceGate => "fence_gate",
            WoodMember::Door => "door",
            WoodMember::Trapdoor => "trapdoor",
            WoodMember::PressurePlate => "pressure_plate",
            WoodMember::Button => "button",
            WoodMember::Sign => "sign",
            WoodMember::HangingSign => "hanging_sign",
            WoodMember::Boat => "boat",
            WoodMember::ChestBoat => "chest_boat",
        }
    }

    /// Display-name suffix, e.g. "Maple" + "Fence Gate".
    pub fn display_suffix(self) -> &'static str {
        match self {
            WoodMember::Log => "Log",
            WoodMember::StrippedLog => "Stripped Log",
            WoodMember::Wood => "Wood",
            WoodMember::StrippedWood => "Stripped Wood",
            WoodMember::Planks => "Planks",
            WoodMember::Stairs => "Stairs",
            WoodMember::Slab => "Slab",
            WoodMember::Fence => "Fence",
            WoodMember::FenceGate => "Fence Gate",
            WoodMember::Door => "Door",
            WoodMember::Trapdoor => "Trapdoor",
            WoodMember::PressurePlate => "Pressure Plate",
            WoodMember::Button => "Button",
            WoodMember::Sign => "Sign",
            WoodMember::HangingSign => "Hanging Sign",
            WoodMember::Boat => "Boat",
            WoodMember::ChestBoat => "Chest Boat",
        }
    }

    /// Which namespace the member lives in. Boats, signs and their variants
    /// are carried as items; everything else is a placeable block.
    pub fn category(self) -> EntityCategory {
        match self {
            WoodMember::Boat
            | WoodMember::ChestBoat
            | WoodMember::Sign
            | WoodMember::HangingSign => EntityCategory::Item,
            _ => EntityCategory::Block,
        }
    }

    /// Shared platform tag namespace this member merges into, if any.
    pub fn shared_tag(self) -> Option<&'static str> {
        match self {
            WoodMember::Log | WoodMember::StrippedLog | WoodMember::Wood
            | WoodMember::StrippedWood => Some("logs_that_burn"),
            WoodMember::Planks => Some("planks"),
            WoodMember::Stairs => Some("wooden_stairs"),
            WoodMember::Slab => Some("wooden_slabs"),
            WoodMember::Fence => Some("wooden_fences"),
            WoodMember::FenceGate => Some("fence_gates"),
            WoodMember::Door => Some("wooden_doors"),
            WoodMember::Trapdoor => Some("wooden_trapdoors"),
            WoodMember::PressurePlate => Some("wooden_pressure_plates"),
            WoodMember::Button => Some("wooden_buttons"),
            WoodMember::Sign => Some("signs"),
            WoodMember::HangingSign => Some("hanging_signs"),
            WoodMember::Boat | WoodMember::ChestBoat => Some("boats"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_has_seventeen_members() {
        assert_eq!(WoodMember::ALL.len(), 17);
    }

    #[test]
    fn test_suffixes_are_unique() {
        for (i, a) in WoodMember::ALL.iter().enumerate() {
            for b in &WoodMember::ALL[i + 1..] {
                assert_ne!(a.suffix(), b.suffix());
            }
        }
    }

    #[test]
    fn test_boats_and_signs_are_items() {
        assert_eq!(WoodMember::Boat.category(), EntityCategory::Item);
        assert_eq!(WoodMember::Sign.category(), EntityCategory::Item);
        assert_eq!(WoodMember::Planks.category(), EntityCategory::Block);
    }
}
