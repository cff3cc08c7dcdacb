//! Prompt understanding: normalization, concept extraction, classification,
//! and the clarification gate.

pub mod analysis;
pub mod clarify;
pub mod normalize;
pub mod vocabulary;

pub use analysis::{analyze, Confidence, Issue, IssueKind, PromptAnalysis};
pub use clarify::{decide, ClarificationRequest, GateDecision, GenerationMode};
