//! Scope accounting: an economic view of the requested surface area,
//! independent of the execution planner and never blocking generation.

pub mod accountant;
pub mod unit;

pub use accountant::{account, ScopeBudgetResult, BUDGET_TIERS};
pub use unit::ScopeUnit;
