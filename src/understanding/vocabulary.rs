//! Fixed vocabularies backing prompt understanding.
//!
//! Everything here is a compile-time constant table: the typo-correction
//! list, the closed concept vocabulary, known multi-word phrases, the
//! opposite-concept groups used for contradiction detection, the
//! abstract/metaphor patterns, and the clarification-dialogue vocabulary
//! that must never leak into generated identifiers.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Semantic tag attached to a recognized concept.
///
/// Tags flow from understanding into the interpreter (entity tags), the
/// execution planner, and texture synthesis. The set is closed; matching on
/// it is exhaustive everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticTag {
    Food,
    Cold,
    Hot,
    Weapon,
    Tool,
    Magic,
    Glow,
    Nature,
    Wood,
    Stone,
    Metal,
    Gem,
    Cute,
    Dark,
    Sickly,
    Liquid,
    Animal,
    Block,
}

/// One entry of the closed concept vocabulary.
pub struct ConceptDef {
    pub word: &'static str,
    pub tags: &'static [SemanticTag],
}

macro_rules! concept {
    ($word:literal, [$($tag:ident),*]) => {
        ConceptDef { word: $word, tags: &[$(SemanticTag::$tag),*] }
    };
}

/// Closed single-token concept vocabulary.
///
/// Fuzzy matching only ever resolves against these words, so a typo can
/// recover a concept but can never invent one.
pub const CONCEPTS: &[ConceptDef] = &[
    // Materials
    concept!("wood", [Wood, Nature]),
    concept!("wooden", [Wood, Nature]),
    concept!("oak", [Wood, Nature]),
    concept!("maple", [Wood, Nature]),
    concept!("plank", [Wood]),
    concept!("planks", [Wood]),
    concept!("log", [Wood, Nature]),
    concept!("stone", [Stone, Block]),
    concept!("cobblestone", [Stone, Block]),
    concept!("brick", [Stone, Block]),
    concept!("bricks", [Stone, Block]),
    concept!("iron", [Metal]),
    concept!("gold", [Metal]),
    concept!("golden", [Metal]),
    concept!("copper", [Metal]),
    concept!("tin", [Metal]),
    concept!("steel", [Metal]),
    concept!("ingot", [Metal]),
    concept!("raw", []),
    concept!("ore", [Metal, Block]),
    concept!("diamond", [Gem]),
    concept!("emerald", [Gem]),
    concept!("ruby", [Gem]),
    concept!("sapphire", [Gem]),
    concept!("crystal", [Gem, Magic]),
    concept!("gem", [Gem]),
    // Food
    concept!("cream", [Food]),
    concept!("cake", [Food]),
    concept!("pie", [Food]),
    concept!("bread", [Food]),
    concept!("berry", [Food, Nature]),
    concept!("apple", [Food, Nature]),
    concept!("soup", [Food, Liquid]),
    concept!("stew", [Food, Liquid]),
    concept!("candy", [Food, Cute]),
    concept!("chocolate", [Food]),
    concept!("cheese", [Food]),
    concept!("smelt", []),
    concept!("cook", [Food]),
    concept!("bake", [Food]),
    // Temperature
    concept!("ice", [Cold]),
    concept!("icy", [Cold]),
    concept!("frozen", [Cold]),
    concept!("frost", [Cold]),
    concept!("snow", [Cold]),
    concept!("cold", [Cold]),
    concept!("fire", [Hot]),
    concept!("flame", [Hot]),
    concept!("lava", [Hot, Liquid]),
    concept!("molten", [Hot, Liquid]),
    concept!("hot", [Hot]),
    concept!("burning", [Hot]),
    // Combat / tools
    concept!("sword", [Weapon]),
    concept!("axe", [Tool, Weapon]),
    concept!("pickaxe", [Tool]),
    concept!("shovel", [Tool]),
    concept!("hoe", [Tool]),
    concept!("hammer", [Tool]),
    concept!("bow", [Weapon]),
    concept!("arrow", [Weapon]),
    concept!("shield", [Weapon]),
    concept!("armor", [Weapon]),
    concept!("dagger", [Weapon]),
    concept!("blade", [Weapon]),
    // Magic / light
    concept!("magic", [Magic]),
    concept!("magical", [Magic]),
    concept!("wand", [Magic, Tool]),
    concept!("staff", [Magic, Tool]),
    concept!("enchanted", [Magic]),
    concept!("spell", [Magic]),
    concept!("rune", [Magic]),
    concept!("lightning", [Magic]),
    concept!("thunder", [Magic]),
    concept!("glow", [Glow]),
    concept!("glowing", [Glow]),
    concept!("lantern", [Glow, Block]),
    concept!("lamp", [Glow, Block]),
    concept!("torch", [Glow, Hot]),
    concept!("light", [Glow]),
    concept!("shiny", [Glow]),
    // Nature / creatures
    concept!("flower", [Nature, Cute]),
    concept!("plant", [Nature]),
    concept!("tree", [Nature, Wood]),
    concept!("grass", [Nature]),
    concept!("leaf", [Nature]),
    concept!("leaves", [Nature]),
    concept!("mushroom", [Nature]),
    concept!("vine", [Nature]),
    concept!("cat", [Animal, Cute]),
    concept!("dog", [Animal, Cute]),
    concept!("wolf", [Animal]),
    concept!("dragon", [Animal, Magic]),
    concept!("slime", [Animal, Sickly]),
    // Mood / look
    concept!("cute", [Cute]),
    concept!("pretty", [Cute]),
    concept!("pastel", [Cute]),
    concept!("dark", [Dark]),
    concept!("shadow", [Dark]),
    concept!("cursed", [Dark, Magic]),
    concept!("spooky", [Dark]),
    concept!("toxic", [Sickly]),
    concept!("poison", [Sickly]),
    concept!("slimy", [Sickly]),
    concept!("rotten", [Sickly]),
    // Colors
    concept!("red", []),
    concept!("blue", []),
    concept!("green", []),
    concept!("purple", [Magic]),
    concept!("pink", [Cute]),
    concept!("yellow", []),
    concept!("orange", []),
    concept!("white", []),
    concept!("black", [Dark]),
    concept!("brown", []),
    concept!("cyan", []),
    // Structure words
    concept!("block", [Block]),
    concept!("door", [Block, Wood]),
    concept!("stairs", [Block]),
    concept!("slab", [Block]),
    concept!("fence", [Block, Wood]),
    concept!("chest", [Block, Wood]),
    concept!("table", [Block, Wood]),
    concept!("boat", [Wood]),
    concept!("water", [Liquid]),
    concept!("potion", [Magic, Liquid]),
];

/// Known multi-word phrases, matched before single tokens.
pub const PHRASES: &[ConceptDef] = &[
    concept!("ice cream", [Food, Cold]),
    concept!("magic wand", [Magic, Tool]),
    concept!("crafting table", [Block, Wood]),
    concept!("hot chocolate", [Food, Hot]),
    concept!("wood type", [Wood, Nature]),
    concept!("fence gate", [Block, Wood]),
    concept!("pressure plate", [Block]),
];

/// Fixed typo-correction table applied before fuzzy matching.
pub const TYPO_TABLE: &[(&str, &str)] = &[
    ("swrod", "sword"),
    ("sowrd", "sword"),
    ("diamnd", "diamond"),
    ("diamon", "diamond"),
    ("pickax", "pickaxe"),
    ("lavva", "lava"),
    ("glowin", "glowing"),
    ("mkae", "make"),
    ("craete", "create"),
    ("blok", "block"),
    ("blcok", "block"),
    ("recipie", "recipe"),
    ("recipy", "recipe"),
    ("armour", "armor"),
];

/// Opposite concept groups for contradiction detection.
///
/// A prompt that contains a concept from both sides of one pair is reported
/// as contradictory, with the specific matched words as evidence.
pub const OPPOSITE_GROUPS: &[(&[&str], &[&str])] = &[
    (
        &["hot", "fire", "flame", "lava", "molten", "burning"],
        &["cold", "ice", "icy", "frozen", "frost", "snow"],
    ),
    (
        &["glow", "glowing", "light", "shiny"],
        &["dark", "shadow"],
    ),
    (&["tiny", "small", "little"], &["giant", "huge", "massive"]),
    (&["cute", "pretty", "pastel"], &["cursed", "spooky"]),
];

/// Patterns marking a prompt as intentionally abstract or metaphorical.
///
/// Prompts matching any of these are exempt from nonsense detection so that
/// creative phrasing ("the essence of forgotten dreams") is never rejected.
pub const ABSTRACT_PATTERNS: &[&str] = &[
    "essence of",
    "spirit of",
    "feels like",
    "feeling of",
    "dream",
    "memory of",
    "song of",
    "embodiment",
    "soul of",
    "whisper",
];

/// Cosmetic vocabulary: contradictions drawn entirely from these words are
/// look-and-feel only and never block a block-only request.
pub const COSMETIC_WORDS: &[&str] = &[
    "hot", "cold", "warm", "icy", "fire", "ice", "vibe", "look", "aesthetic", "style",
];

/// Clarification-dialogue vocabulary. Generated identifiers and display
/// names must never contain any of these fragments.
pub const CLARIFICATION_VOCABULARY: &[&str] = &[
    "should i",
    "which direction",
    "did you mean",
    "could you clarify",
    "what kind of",
    "can you tell me",
    "would you like",
];

/// Look up a single word in the concept vocabulary.
///
/// The vocabulary is scanned once and indexed on first use; lookups after
/// that are O(1).
pub fn lookup_concept(word: &str) -> Option<&'static ConceptDef> {
    static INDEX: OnceLock<AHashMap<&'static str, &'static ConceptDef>> = OnceLock::new();
    let index = INDEX.get_or_init(|| CONCEPTS.iter().map(|c| (c.word, c)).collect());
    index.get(word).copied()
}
