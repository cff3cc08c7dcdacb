//! AddonForge - deterministic compiler from free-text content requests to
//! complete add-on game content.

pub mod core;
pub mod expansion;
pub mod intent;
pub mod materialize;
pub mod pipeline;
pub mod planner;
pub mod scope;
pub mod texture;
pub mod understanding;
pub mod validation;
