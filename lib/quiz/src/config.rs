//! Quiz generation settings

use crate::template::QuizTemplate;
use heriquiz_core::{Error, Result};
use heriquiz_similarity::DEFAULT_DISTRACTOR_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one quiz generation run
///
/// Deserialized from JSON; every field has a default, so `{}` is a valid
/// configuration. Call [`QuizConfig::validate`] before use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizConfig {
    /// Wrong options per question
    #[serde(default = "default_distractor_count")]
    pub distractor_count: i64,

    /// Templates to generate, in output order
    #[serde(default = "default_templates")]
    pub templates: Vec<QuizTemplate>,

    /// Clues shown by the clue template; targets with fewer are skipped
    #[serde(default = "default_clue_count")]
    pub clue_count: usize,
}

fn default_distractor_count() -> i64 {
    DEFAULT_DISTRACTOR_COUNT as i64
}

fn default_templates() -> Vec<QuizTemplate> {
    QuizTemplate::ALL.to_vec()
}

fn default_clue_count() -> usize {
    3
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            distractor_count: default_distractor_count(),
            templates: default_templates(),
            clue_count: default_clue_count(),
        }
    }
}

impl QuizConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate the configuration
    /// - Rejects a negative distractor count
    /// - Requires at least one template, each listed once
    /// - Requires a positive clue count
    pub fn validate(&self) -> Result<()> {
        if self.distractor_count < 0 {
            return Err(Error::NegativeCount(self.distractor_count));
        }
        if self.templates.is_empty() {
            return Err(Error::InvalidConfig("no quiz templates enabled".to_string()));
        }
        for (i, template) in self.templates.iter().enumerate() {
            if self.templates[..i].contains(template) {
                return Err(Error::InvalidConfig(format!("template '{}' listed twice", template)));
            }
        }
        if self.clue_count == 0 {
            return Err(Error::InvalidConfig("clue_count must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Distractor count as a size, once validated
    pub fn distractor_count(&self) -> Result<usize> {
        usize::try_from(self.distractor_count).map_err(|_| Error::NegativeCount(self.distractor_count))
    }
}
