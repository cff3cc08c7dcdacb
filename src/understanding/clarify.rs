//! Clarification gate: ask the requester a question, or proceed.
//!
//! A pure decision over the prompt analysis. Clarification is framed as a
//! creative dialogue, never a rejection: message text never contains
//! "error", "invalid", or "unsupported".

use crate::core::config::config;
use crate::understanding::analysis::{Confidence, IssueKind, PromptAnalysis};
use crate::understanding::vocabulary::COSMETIC_WORDS;
use serde::{Deserialize, Serialize};

/// Generation mode requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    Full,
    /// Purely functional block generation; cosmetic ambiguity never blocks it.
    BlockOnly,
}

/// A structured request for more information. Not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarificationRequest {
    pub message: String,
    /// Up to three example prompts the requester could try.
    pub examples: Vec<String>,
}

/// Outcome of the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateDecision {
    Ask(ClarificationRequest),
    Proceed {
        /// Flattened normalized token stream, for display and inspection.
        /// The interpreter normalizes the raw prompt itself, sentence by
        /// sentence, since this flattened form has no sentence boundaries.
        normalized: String,
    },
}

/// Decide whether to ask for clarification or proceed.
///
/// Ask iff confidence is low, or any issue is nonsense, or any issue is a
/// contradiction — except that in block-only mode a contradiction drawn
/// entirely from the cosmetic vocabulary proceeds instead.
/// Underspecified-only issues never block.
pub fn decide(analysis: &PromptAnalysis, mode: GenerationMode) -> GateDecision {
    let nonsense = analysis.has_issue(IssueKind::Nonsense);
    let contradiction = analysis.has_issue(IssueKind::Contradiction);

    let cosmetic_override = mode == GenerationMode::BlockOnly
        && contradiction
        && !nonsense
        && analysis.confidence != Confidence::Low
        && analysis
            .issues
            .iter()
            .filter(|i| i.kind == IssueKind::Contradiction)
            .all(|i| is_cosmetic_evidence(&i.evidence));

    let ask = (analysis.confidence == Confidence::Low || nonsense || contradiction)
        && !cosmetic_override;

    if !ask {
        return GateDecision::Proceed {
            normalized: analysis.normalized.clone(),
        };
    }

    GateDecision::Ask(build_request(analysis))
}

/// True when every word of a contradiction's evidence is cosmetic.
fn is_cosmetic_evidence(evidence: &str) -> bool {
    evidence
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty() && *w != "vs")
        .all(|w| COSMETIC_WORDS.contains(&w))
}

fn build_request(analysis: &PromptAnalysis) -> ClarificationRequest {
    let (message, examples): (String, &[&str]) = if analysis.has_issue(IssueKind::Nonsense) {
        (
            "I couldn't quite picture that one yet! Could you describe what you'd like in a \
             few more words?"
                .to_string(),
            &[
                "a glowing crystal sword",
                "a cozy maple wood cabin set",
                "ice cream that restores health",
            ],
        )
    } else if let Some(issue) = analysis
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::Contradiction)
    {
        (
            format!(
                "Fun idea! I spotted {} in there and I'd love to know which side wins. \
                 Which one should it be?",
                issue.evidence
            ),
            &[
                "a frozen sword with icy mist",
                "a blazing hot lava blade",
                "a sword that switches between fire and ice",
            ],
        )
    } else {
        (
            "I'd love a little more detail to make this great. What should it look or feel \
             like?"
                .to_string(),
            &[
                "a pastel candy block",
                "a dark enchanted lantern",
                "a copper pickaxe with green veins",
            ],
        )
    };

    let max = config().max_clarification_examples;
    ClarificationRequest {
        message,
        examples: examples.iter().take(max).map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::understanding::analyze;

    #[test]
    fn test_clear_prompt_proceeds() {
        let a = analyze("a glowing diamond sword");
        assert!(matches!(decide(&a, GenerationMode::Full), GateDecision::Proceed { .. }));
    }

    #[test]
    fn test_nonsense_asks() {
        let a = analyze("xq zv kp wj");
        assert!(matches!(decide(&a, GenerationMode::Full), GateDecision::Ask(_)));
    }

    #[test]
    fn test_contradiction_asks_in_full_mode() {
        let a = analyze("a hot ice block");
        assert!(matches!(decide(&a, GenerationMode::Full), GateDecision::Ask(_)));
    }

    #[test]
    fn test_cosmetic_contradiction_proceeds_in_block_only() {
        let a = analyze("a hot ice block");
        assert!(matches!(
            decide(&a, GenerationMode::BlockOnly),
            GateDecision::Proceed { .. }
        ));
    }

    #[test]
    fn test_non_cosmetic_contradiction_still_asks_in_block_only() {
        let a = analyze("a tiny giant block");
        assert!(matches!(decide(&a, GenerationMode::BlockOnly), GateDecision::Ask(_)));
    }

    #[test]
    fn test_underspecified_never_blocks() {
        let a = analyze("sword");
        assert!(matches!(decide(&a, GenerationMode::Full), GateDecision::Proceed { .. }));
    }

    #[test]
    fn test_messages_never_sound_like_rejection() {
        for prompt in ["xq zv kp wj", "a hot ice block", ""] {
            let a = analyze(prompt);
            if let GateDecision::Ask(req) = decide(&a, GenerationMode::Full) {
                let lower = req.message.to_lowercase();
                assert!(!lower.contains("error"));
                assert!(!lower.contains("invalid"));
                assert!(!lower.contains("unsupported"));
                assert!(req.examples.len() <= 3);
            }
        }
    }
}
