//! Intent interpretation: normalized prompt text into the canonical
//! Content Specification.

pub mod directives;
pub mod interpreter;
pub mod spec;

pub use interpreter::interpret;
pub use spec::{
    BlockSpec, Constraint, ContentSpec, ItemSpec, RecipeKind, RecipeResult, RecipeSpec,
    WoodTypeSpec, SCHEMA_VERSION, TARGET_PLATFORM, TARGET_VERSION,
};
