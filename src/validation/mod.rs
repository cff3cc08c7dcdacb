//! Spec validation: the fixed ordered gate list run before generation.

pub mod gates;

pub use gates::{validate, GateId, ValidationVerdict, GATES};
