//! Configuration structures for the resume parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ResumeError, Result};

/// Main configuration for the resume parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Section segmentation configuration.
    pub segmenter: SegmenterConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Section segmentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Maximum word count for a line to be treated as a header by the
    /// formatting heuristic. Known aliases are matched regardless.
    pub header_max_words: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self { header_max_words: 3 }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of lines a single section may hold (0 = unlimited).
    pub max_section_lines: usize,

    /// Fill unset contact fields from a dedicated CONTACT section.
    pub merge_contact_section: bool,

    /// Additional skill terms matched alongside the built-in vocabulary.
    pub extra_skills: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_section_lines: 2000,
            merge_contact_section: true,
            extra_skills: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that cannot be expressed through types alone.
    pub fn validate(&self) -> Result<()> {
        if self.segmenter.header_max_words == 0 {
            return Err(ResumeError::Config(
                "segmenter.header_max_words must be at least 1".to_string(),
            ));
        }
        if self.extraction.extra_skills.iter().any(|s| s.trim().is_empty()) {
            return Err(ResumeError::Config(
                "extraction.extra_skills must not contain blank terms".to_string(),
            ));
        }
        Ok(())
    }
}
