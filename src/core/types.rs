//! Core type definitions used throughout the codebase

use crate::core::error::{ForgeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated lowercase identifier (`[a-z0-9_]+`).
///
/// Every item, block, recipe and wood type is addressed by a slug. Slugs are
/// only ever constructed through [`Slug::from_text`] (which normalizes
/// arbitrary display text) or [`Slug::parse`] (which validates an existing
/// identifier), so an invalid identifier cannot circulate through the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Normalize arbitrary display text into a slug.
    ///
    /// Lowercases, maps whitespace and punctuation runs to single
    /// underscores, and strips leading/trailing underscores. Text with no
    /// usable characters becomes `"unnamed"` rather than an empty slug.
    pub fn from_text(text: &str) -> Self {
        let mut out = String::with_capacity(text.len());
        let mut last_sep = true;
        for ch in text.chars() {
            if ch.is_ascii_alphanumeric() {
                out.push(ch.to_ascii_lowercase());
                last_sep = false;
            } else if !last_sep {
                out.push('_');
                last_sep = true;
            }
        }
        while out.ends_with('_') {
            out.pop();
        }
        if out.is_empty() {
            out.push_str("unnamed");
        }
        Self(out)
    }

    /// Validate an existing identifier without normalizing it.
    pub fn parse(s: &str) -> Result<Self> {
        let valid = !s.is_empty()
            && !s.starts_with('_')
            && !s.ends_with('_')
            && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(ForgeError::InvalidIdentifier(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a suffix segment, e.g. `maple` + `planks` -> `maple_planks`.
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self(format!("{}_{}", self.0, suffix))
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether an entity lives in the item or the block namespace.
///
/// The two namespaces are disjoint by construction: every asset key and
/// uniqueness check includes the category, so `item/x` and `block/x` can
/// coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Item,
    Block,
}

impl EntityCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityCategory::Item => "item",
            EntityCategory::Block => "block",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
