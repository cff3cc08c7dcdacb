//! The canonical Content Specification.
//!
//! This versioned, JSON-compatible document is the only contract between the
//! core pipeline and its persistence collaborator. Field names on the wire
//! are camelCase.

use crate::core::types::{EntityCategory, Slug};
use crate::understanding::vocabulary::SemanticTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version of the ContentSpec document schema.
pub const SCHEMA_VERSION: u32 = 2;
/// Fixed target platform.
pub const TARGET_PLATFORM: &str = "bedrock";
/// Fixed target platform version.
pub const TARGET_VERSION: &str = "1.21.0";

/// Canonical description of one requested content package.
///
/// Invariant: every identifier is a lowercase slug unique within its
/// namespace (item/block), and no identifier or display name contains
/// clarification-dialogue text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSpec {
    pub schema_version: u32,
    pub platform: String,
    pub platform_version: String,
    pub mod_id: Slug,
    pub mod_name: String,
    pub items: Vec<ItemSpec>,
    pub blocks: Vec<BlockSpec>,
    pub recipes: Vec<RecipeSpec>,
    pub wood_types: Vec<WoodTypeSpec>,
    pub constraints: Vec<Constraint>,
}

impl ContentSpec {
    pub fn new(mod_id: Slug, mod_name: String) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            platform: TARGET_PLATFORM.to_string(),
            platform_version: TARGET_VERSION.to_string(),
            mod_id,
            mod_name,
            items: Vec::new(),
            blocks: Vec::new(),
            recipes: Vec::new(),
            wood_types: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn has_item(&self, id: &Slug) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    pub fn has_block(&self, id: &Slug) -> bool {
        self.blocks.iter().any(|b| &b.id == id)
    }

    /// True when either namespace declares this id.
    pub fn declares(&self, id: &Slug) -> bool {
        self.has_item(id) || self.has_block(id)
    }

    pub fn has_constraint(&self, c: Constraint) -> bool {
        self.constraints.contains(&c)
    }
}

/// One item declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpec {
    pub id: Slug,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<SemanticTag>,
}

/// One block declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSpec {
    pub id: Slug,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<SemanticTag>,
}

/// Recipe kind. Cooking kinds take exactly one ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKind {
    Shaped,
    Shapeless,
    Smelting,
    Blasting,
    Smoking,
    Campfire,
}

impl RecipeKind {
    pub fn is_cooking(self) -> bool {
        matches!(
            self,
            RecipeKind::Smelting | RecipeKind::Blasting | RecipeKind::Smoking | RecipeKind::Campfire
        )
    }

    /// Suffix used in deterministic cooking recipe ids.
    pub fn id_suffix(self) -> &'static str {
        match self {
            RecipeKind::Shaped => "shaped",
            RecipeKind::Shapeless => "shapeless",
            RecipeKind::Smelting => "smelting",
            RecipeKind::Blasting => "blasting",
            RecipeKind::Smoking => "smoking",
            RecipeKind::Campfire => "campfire",
        }
    }
}

/// Recipe result: always an object with an identifier and count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResult {
    pub identifier: Slug,
    pub count: u32,
}

/// One recipe declaration.
///
/// Shaped recipes carry a pattern plus a key; shapeless and cooking recipes
/// carry a flat ingredient list (exactly one entry for cooking kinds).
/// Invariant: no ingredient identifier equals the result identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSpec {
    pub id: Slug,
    pub kind: RecipeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pattern: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub key: BTreeMap<char, Slug>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<Slug>,
    pub result: RecipeResult,
}

impl RecipeSpec {
    /// All ingredient ids referenced by this recipe, in declaration order.
    pub fn referenced_ingredients(&self) -> Vec<&Slug> {
        let mut out: Vec<&Slug> = self.key.values().collect();
        out.extend(self.ingredients.iter());
        out
    }
}

/// One wood type declaration; expanded downstream into the full family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WoodTypeSpec {
    pub id: Slug,
    pub display_name: String,
}

/// Behavioral constraint on generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// Suppress recipe emission without suppressing entity emission.
    #[serde(rename = "noRecipes")]
    NoRecipes,
    /// Clamp rasterized textures away from pure extremes.
    #[serde(rename = "vanillaSafeTextures")]
    VanillaSafeTextures,
}

/// Category of a declared entity, used for asset keys.
pub fn category_of(spec: &ContentSpec, id: &Slug) -> Option<EntityCategory> {
    if spec.has_item(id) {
        Some(EntityCategory::Item)
    } else if spec.has_block(id) {
        Some(EntityCategory::Block)
    } else {
        None
    }
}
