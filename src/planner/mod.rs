//! Execution planning: entity text into gameplay Systems, Systems into
//! low-level Primitives with fixed safety bounds.

pub mod plan;
pub mod primitive;
pub mod system;

pub use plan::{aggregate, plan_entity, AggregatedExecutionPlan, ExecutionPlan};
pub use primitive::{Primitive, SafetyBounds};
pub use system::System;
