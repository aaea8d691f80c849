//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Tuning thresholds for the heuristic extractors
///
/// The defaults were tuned on one corpus of published rulings and are
/// exposed so they can be re-tuned rather than assumed general.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Share of all occurrences above which the most frequent accused name wins
    pub accused_dominance_threshold: f64,

    /// Candidate lines shorter than this (chars) may narrow the accused search
    pub accused_short_line_chars: usize,

    /// Candidate lines at least this long (chars) are ignored
    pub accused_max_line_chars: usize,

    /// Judge strings at least this long (chars) are rejected by the marker strategy
    pub judge_max_chars: usize,

    /// A label change on a sentence longer than this (chars) always opens a span
    pub span_merge_chars: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.accused_dominance_threshold > 0.0 && self.accused_dominance_threshold < 1.0) {
            return Err("accused_dominance_threshold must be between 0 and 1".to_string());
        }
        if self.accused_max_line_chars == 0 {
            return Err("accused_max_line_chars must be greater than 0".to_string());
        }
        if self.accused_short_line_chars > self.accused_max_line_chars {
            return Err(
                "accused_short_line_chars cannot exceed accused_max_line_chars".to_string(),
            );
        }
        if self.judge_max_chars == 0 {
            return Err("judge_max_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            accused_dominance_threshold: 0.6,
            accused_short_line_chars: 50,
            accused_max_line_chars: 300,
            judge_max_chars: 50,
            span_merge_chars: 30,
        }
    }
}
