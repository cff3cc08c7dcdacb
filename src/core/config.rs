//! Pipeline configuration with documented constants
//!
//! All tunable thresholds are collected here with explanations of their
//! purpose. Defaults reproduce the canonical pipeline behavior; an override
//! file can adjust them for experiments, but determinism tests pin the
//! defaults.

use crate::core::error::{ForgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the generation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    // === PROMPT UNDERSTANDING ===
    /// Maximum Levenshtein distance accepted when fuzzy-matching an unknown
    /// token against the concept vocabulary.
    ///
    /// At 2, common misspellings ("swrod", "diamnd") recover without
    /// reducing confidence; at 3+, unrelated words start matching.
    pub max_edit_distance: usize,

    /// Minimum token length eligible for fuzzy matching.
    ///
    /// Tokens shorter than 3 characters are too ambiguous to correct
    /// ("cst" could be "cast", "cost", "cat").
    pub min_fuzzy_len: usize,

    /// Number of unknown short tokens that marks a prompt as nonsense
    /// (when no concepts were extracted and the text is not abstract).
    pub nonsense_unknown_tokens: usize,

    /// Minimum normalized length that marks a concept-free prompt as
    /// nonsense on length alone.
    pub nonsense_min_len: usize,

    // === CLARIFICATION ===
    /// Maximum example prompts attached to a clarification request.
    pub max_clarification_examples: usize,

    // === TEXTURE SYNTHESIS ===
    /// Edge length of rasterized texture buffers, in pixels.
    ///
    /// The target platform's item and block art is 16x16; raster output
    /// matches it so generated textures sit alongside vanilla art.
    pub texture_resolution: u32,

    /// Minimum per-pixel channel spread enforced by the vanilla-safe clamp.
    ///
    /// Pure black/white extremes read as missing textures on the target
    /// platform; a spread of 12 (out of 255) keeps every pixel visibly
    /// tinted.
    pub vanilla_safe_min_spread: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            // Understanding
            max_edit_distance: 2,
            min_fuzzy_len: 3,
            nonsense_unknown_tokens: 3,
            nonsense_min_len: 10,

            // Clarification
            max_clarification_examples: 3,

            // Texture
            texture_resolution: 16,
            vanilla_safe_min_spread: 12,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an override file in TOML format. Missing keys keep defaults.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfig = toml::from_str(&content)
            .map_err(|e| ForgeError::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate().map_err(ForgeError::ConfigError)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_edit_distance > self.min_fuzzy_len {
            return Err(format!(
                "max_edit_distance ({}) should be <= min_fuzzy_len ({})",
                self.max_edit_distance, self.min_fuzzy_len
            ));
        }
        if self.texture_resolution == 0 || !self.texture_resolution.is_power_of_two() {
            return Err(format!(
                "texture_resolution ({}) must be a power of two",
                self.texture_resolution
            ));
        }
        if self.max_clarification_examples == 0 {
            return Err("max_clarification_examples must be positive".into());
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<PipelineConfig> = OnceLock::new();

/// Get the global pipeline config (initializes with defaults if not set)
pub fn config() -> &'static PipelineConfig {
    CONFIG.get_or_init(PipelineConfig::default)
}

/// Set the global pipeline config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: PipelineConfig) -> std::result::Result<(), PipelineConfig> {
    CONFIG.set(config)
}
