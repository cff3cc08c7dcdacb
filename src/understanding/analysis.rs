//! Prompt classification: confidence and issues.
//!
//! Classification is a strict decision table evaluated top to bottom; there
//! is no weighted scoring. Each rule is an explicit (name, predicate,
//! outcome) entry so precedence is visible and independently testable.

use crate::core::config::config;
use crate::understanding::normalize::{extract_concepts, normalize};
use crate::understanding::vocabulary::{SemanticTag, ABSTRACT_PATTERNS, OPPOSITE_GROUPS};
use serde::{Deserialize, Serialize};

/// Classifier confidence in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Kind of issue found in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Nonsense,
    Contradiction,
    Underspecified,
}

/// One issue with supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub evidence: String,
}

/// Immutable result of analyzing one prompt. Created once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    /// Normalized prompt text (typos corrected, tokens joined).
    pub normalized: String,
    pub confidence: Confidence,
    pub issues: Vec<Issue>,
    /// Extracted concept words, in scan order. Drives classification only;
    /// the canonical spec comes from the interpreter.
    pub concepts: Vec<String>,
    /// Union of semantic tags over extracted concepts, sorted and deduped.
    pub tags: Vec<SemanticTag>,
}

impl PromptAnalysis {
    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }
}

/// Facts feeding the confidence decision table.
struct ClassifierFacts {
    nonsense: bool,
    contradiction: bool,
    concept_count: usize,
}

/// Ordered confidence rules; the first matching predicate wins.
const CONFIDENCE_RULES: &[(&str, fn(&ClassifierFacts) -> bool, Confidence)] = &[
    ("nonsense", |f| f.nonsense, Confidence::Low),
    ("contradiction", |f| f.contradiction, Confidence::Medium),
    ("no-concepts", |f| f.concept_count == 0, Confidence::Medium),
    ("default", |_| true, Confidence::High),
];

/// Analyze raw prompt text into a [`PromptAnalysis`].
pub fn analyze(raw: &str) -> PromptAnalysis {
    let cfg = config();
    let normalized = normalize(raw);
    let concepts = extract_concepts(&normalized);

    let mut issues = Vec::new();

    // Nonsense: zero concepts, not recognizably abstract, and either enough
    // unknown tokens or enough length with still nothing recognized.
    let abstract_text = ABSTRACT_PATTERNS.iter().any(|p| normalized.text.contains(p));
    let nonsense = concepts.is_empty()
        && !abstract_text
        && !normalized.text.is_empty()
        && (normalized.unknown.len() >= cfg.nonsense_unknown_tokens
            || normalized.text.len() >= cfg.nonsense_min_len);
    if nonsense {
        issues.push(Issue {
            kind: IssueKind::Nonsense,
            evidence: format!(
                "no recognizable concepts among {} token(s)",
                normalized.tokens.len()
            ),
        });
    }

    // Contradiction: pairwise scan against the opposite-concept groups.
    for (left, right) in OPPOSITE_GROUPS {
        let l = left.iter().find(|w| normalized.tokens.iter().any(|t| t == *w));
        let r = right.iter().find(|w| normalized.tokens.iter().any(|t| t == *w));
        if let (Some(l), Some(r)) = (l, r) {
            issues.push(Issue {
                kind: IssueKind::Contradiction,
                evidence: format!("{} vs {}", l, r),
            });
        }
    }

    // Underspecified: recognizable but too thin to pin down. Never blocks.
    if !nonsense && concepts.len() <= 1 && normalized.tokens.len() <= 2 && !normalized.text.is_empty()
    {
        issues.push(Issue {
            kind: IssueKind::Underspecified,
            evidence: format!("only \"{}\" to work with", normalized.text),
        });
    }

    let facts = ClassifierFacts {
        nonsense,
        contradiction: issues.iter().any(|i| i.kind == IssueKind::Contradiction),
        concept_count: concepts.len(),
    };
    let confidence = CONFIDENCE_RULES
        .iter()
        .find(|(_, pred, _)| pred(&facts))
        .map(|(_, _, c)| *c)
        .unwrap_or(Confidence::High);

    let mut tags: Vec<SemanticTag> = concepts.iter().flat_map(|c| c.tags.iter().copied()).collect();
    tags.sort();
    tags.dedup();

    PromptAnalysis {
        normalized: normalized.text,
        confidence,
        issues,
        concepts: concepts.iter().map(|c| c.word.to_string()).collect(),
        tags,
    }
}
