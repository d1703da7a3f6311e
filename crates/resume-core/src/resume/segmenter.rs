//! Groups text blocks into labeled sections.

use tracing::{debug, trace};

use crate::models::config::SegmenterConfig;
use crate::models::document::{SectionMap, TextBlock};

use super::rules::patterns::{is_known_alias, HEADER_KEYWORDS, HEADER_LABEL};
use super::rules::{is_all_upper, is_title_case, word_count};

/// Section segmenter.
///
/// A line is a header when its canonical form is a known alias, or when it is
/// short, upper- or title-cased, and names a section keyword. Lines before the
/// first header are collected under `HEADER`.
#[derive(Debug, Clone)]
pub struct SectionSegmenter {
    header_max_words: usize,
}

impl SectionSegmenter {
    /// Create a segmenter with default settings.
    pub fn new() -> Self {
        Self::from_config(&SegmenterConfig::default())
    }

    /// Create a segmenter from configuration.
    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self {
            header_max_words: config.header_max_words,
        }
    }

    /// Set the word limit for the formatting heuristic.
    pub fn with_header_max_words(mut self, words: usize) -> Self {
        self.header_max_words = words;
        self
    }

    /// Split blocks into sections, in document order.
    ///
    /// Blocks are taken in `order` (stable for ties); a block holding several
    /// lines contributes each non-empty line separately.
    pub fn segment(&self, blocks: &[TextBlock]) -> SectionMap {
        let mut ordered: Vec<&TextBlock> = blocks.iter().collect();
        ordered.sort_by_key(|b| b.order);

        let lines = ordered
            .into_iter()
            .flat_map(|b| b.text.lines())
            .map(str::trim)
            .filter(|l| !l.is_empty());

        let mut sections = SectionMap::new();
        let mut current_label: Option<String> = None;
        let mut current_content: Vec<String> = Vec::new();

        for line in lines {
            if self.is_section_header(line) {
                if let Some(label) = current_label.take() {
                    sections.insert(label, std::mem::take(&mut current_content));
                }
                let label = canonicalize_label(line);
                trace!("section header {:?} -> {}", line, label);
                current_label = Some(label);
            } else {
                if current_label.is_none() {
                    current_label = Some(HEADER_LABEL.to_string());
                }
                current_content.push(line.to_string());
            }
        }

        if let Some(label) = current_label {
            sections.insert(label, current_content);
        }

        debug!(
            "Segmented {} blocks into {} sections: {:?}",
            blocks.len(),
            sections.len(),
            sections.labels().collect::<Vec<_>>()
        );

        sections
    }

    /// Decide whether a line is a section header.
    pub fn is_section_header(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }

        if is_known_alias(&canonicalize_label(line)) {
            return true;
        }

        // Heuristic branch: short, header-cased, and naming a section.
        // "Languages: English, French" is a labelled body line, not a header.
        if has_inline_value(line) || word_count(line) > self.header_max_words {
            return false;
        }
        if !(is_all_upper(line) || is_title_case(line)) {
            return false;
        }

        let lower = line.to_lowercase();
        HEADER_KEYWORDS.iter().any(|k| lower.contains(k))
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical section label: trimmed, trailing colon dropped, inner whitespace
/// collapsed, upper-cased.
pub fn canonicalize_label(line: &str) -> String {
    line.trim()
        .trim_end_matches(':')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

fn has_inline_value(line: &str) -> bool {
    line.split_once(':')
        .is_some_and(|(_, rest)| !rest.trim().is_empty())
}

/// Segment blocks with default settings.
pub fn segment(blocks: &[TextBlock]) -> SectionMap {
    SectionSegmenter::new().segment(blocks)
}
