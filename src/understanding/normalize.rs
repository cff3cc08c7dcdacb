//! Tokenization, spelling recovery, and concept extraction.

use crate::core::config::config;
use crate::understanding::vocabulary::{
    lookup_concept, ConceptDef, CONCEPTS, PHRASES, TYPO_TABLE,
};

/// Result of normalizing raw prompt text.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    /// Normalized tokens joined by single spaces.
    pub text: String,
    /// All normalized tokens in order.
    pub tokens: Vec<String>,
    /// Tokens that matched nothing in the vocabulary, even fuzzily.
    pub unknown: Vec<String>,
}

/// Lowercase and split raw text into alphanumeric tokens.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
        .collect()
}

/// Normalize raw text: tokenize, apply the typo table, and fuzzy-correct
/// unknown tokens against the concept vocabulary.
///
/// Fuzzy matching is bounded: a correction is accepted only when the edit
/// distance is within `max_edit_distance` and both the token and the
/// vocabulary word are at least `min_fuzzy_len` characters. This guarantees
/// a recoverable misspelling never reduces downstream confidence, while a
/// short garbage token stays unknown rather than matching something.
pub fn normalize(raw: &str) -> NormalizedText {
    let cfg = config();
    let mut tokens = Vec::new();
    let mut unknown = Vec::new();

    for token in tokenize(raw) {
        // Fixed typo table first
        let token = match TYPO_TABLE.iter().find(|(wrong, _)| *wrong == token) {
            Some((_, right)) => right.to_string(),
            None => token,
        };

        if lookup_concept(&token).is_some() || is_stopword(&token) {
            tokens.push(token);
            continue;
        }

        // Bounded fuzzy match against the concept vocabulary
        if token.len() >= cfg.min_fuzzy_len {
            if let Some(best) = fuzzy_match(&token, cfg.max_edit_distance, cfg.min_fuzzy_len) {
                tokens.push(best.word.to_string());
                continue;
            }
        }

        unknown.push(token.clone());
        tokens.push(token);
    }

    NormalizedText {
        text: tokens.join(" "),
        tokens,
        unknown,
    }
}

/// Find the closest vocabulary word within the edit-distance bound.
/// Ties resolve to the earliest vocabulary entry, keeping the match
/// deterministic.
fn fuzzy_match(token: &str, max_dist: usize, min_len: usize) -> Option<&'static ConceptDef> {
    let mut best: Option<(&'static ConceptDef, usize)> = None;
    for def in CONCEPTS {
        if def.word.len() < min_len {
            continue;
        }
        let dist = edit_distance(token, def.word, max_dist);
        if let Some(dist) = dist {
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((def, dist));
            }
        }
    }
    best.map(|(def, _)| def)
}

/// Levenshtein distance, early-exiting once the distance exceeds `max`.
/// Returns None when the bound is exceeded.
pub fn edit_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
            row_min = row_min.min(curr[j + 1]);
        }
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let dist = prev[b.len()];
    (dist <= max).then_some(dist)
}

/// Extract all concept matches from normalized text.
///
/// Multi-word phrases are scanned first over the joined text, then single
/// tokens; each vocabulary entry is reported at most once, in scan order.
pub fn extract_concepts(normalized: &NormalizedText) -> Vec<&'static ConceptDef> {
    let mut found: Vec<&'static ConceptDef> = Vec::new();

    for phrase in PHRASES {
        if normalized.text.contains(phrase.word) {
            found.push(phrase);
        }
    }
    for token in &normalized.tokens {
        if let Some(def) = lookup_concept(token) {
            if !found.iter().any(|d| d.word == def.word) {
                found.push(def);
            }
        }
    }

    found
}

/// Filler words that are neither concepts nor unknown tokens.
pub fn is_stopword(token: &str) -> bool {
    const STOPWORDS: &[&str] = &[
        "a", "an", "the", "i", "want", "make", "create", "add", "new", "please", "me", "my",
        "that", "this", "with", "and", "of", "for", "in", "into", "it", "is", "like", "some",
        "called", "named", "type", "shoots", "shoot",
    ];
    STOPWORDS.contains(&token)
}
