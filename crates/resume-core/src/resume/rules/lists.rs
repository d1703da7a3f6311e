//! Free-text sections: summary paragraphs and one-item-per-line lists.

use super::{strip_bullet, SectionExtractor};

/// Joins a summary/objective section into a single paragraph.
pub struct SummaryExtractor;

impl SectionExtractor for SummaryExtractor {
    type Output = Option<String>;

    fn extract_lines(&self, lines: &[&str]) -> Option<String> {
        let text = lines
            .iter()
            .copied()
            .map(|l| strip_bullet(l).unwrap_or(l))
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() { None } else { Some(text) }
    }
}

/// Turns awards, languages and interests sections into plain item lists.
pub struct LineListExtractor;

impl SectionExtractor for LineListExtractor {
    type Output = Vec<String>;

    fn extract_lines(&self, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .copied()
            .map(|l| strip_bullet(l).unwrap_or(l))
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Extract a summary paragraph from section text.
pub fn extract_summary(text: &str) -> Option<String> {
    SummaryExtractor.extract_section(text)
}

/// Extract bullet-stripped lines from section text.
pub fn extract_line_list(text: &str) -> Vec<String> {
    LineListExtractor.extract_section(text)
}
