//! Rule-based extractors for resume sections.

pub mod certifications;
pub mod contact;
pub mod dates;
pub mod education;
pub mod experience;
pub mod lists;
pub mod patterns;
pub mod projects;
pub mod skills;

pub use certifications::{extract_certifications, CertificationExtractor};
pub use contact::{extract_contact, ContactExtractor};
pub use dates::{contains_date, extract_date, DateExtractor};
pub use education::{extract_education, EducationExtractor};
pub use experience::{extract_experience, ExperienceExtractor};
pub use lists::{extract_line_list, extract_summary, LineListExtractor, SummaryExtractor};
pub use projects::{extract_projects, ProjectExtractor};
pub use skills::{extract_skills, SkillExtractor};
pub use patterns::*;

use crate::error::ExtractionError;

/// Result type for extractors.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for field extractors that match inside a single piece of text.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Trait for extractors that turn a whole section body into records.
pub trait SectionExtractor {
    /// The type of record (or record list) this extractor produces.
    type Output;

    /// Extract records from the section's lines, in document order.
    fn extract_lines(&self, lines: &[&str]) -> Self::Output;

    /// Extract records from newline-separated section text.
    fn extract_section(&self, text: &str) -> Self::Output {
        let lines = section_lines(text);
        self.extract_lines(&lines)
    }
}

/// A matched value with its location in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in source text.
    pub position: (usize, usize),
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: (0, 0),
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = (start, end);
        self
    }
}

/// Split section text into trimmed, non-empty lines.
pub fn section_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Strip a leading bullet glyph, returning the remaining text if the line
/// was a bullet.
pub fn strip_bullet(line: &str) -> Option<&str> {
    BULLET.find(line).map(|m| line[m.end()..].trim())
}

/// Number of whitespace-separated words.
pub fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

/// The line has letters and none of them are lower-case.
pub fn is_all_upper(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

/// Every word that starts with a letter starts with an upper-case one.
pub fn is_title_case(line: &str) -> bool {
    let mut has_word = false;
    for word in line.split_whitespace() {
        if let Some(first) = word.chars().find(|c| c.is_alphabetic()) {
            if !first.is_uppercase() {
                return false;
            }
            has_word = true;
        }
    }
    has_word
}

/// Append a wrapped continuation onto the last buffered bullet.
pub(crate) fn join_continuation(buffer: &mut [String], line: &str) -> bool {
    match buffer.last_mut() {
        Some(last) => {
            last.push(' ');
            last.push_str(line);
            true
        }
        None => false,
    }
}

/// Trim separator punctuation left over after cutting a date out of a line.
pub(crate) fn strip_separators(text: &str) -> String {
    text.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '|' | ',' | '-' | '–' | '—' | '(' | ')' | '·')
    })
    .to_string()
}

/// The line starts with a lower-case letter, as wrapped text usually does.
pub(crate) fn starts_lowercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("• Built APIs"), Some("Built APIs"));
        assert_eq!(strip_bullet("- Led a team"), Some("Led a team"));
        assert_eq!(strip_bullet("*Shipped v2"), Some("Shipped v2"));
        assert_eq!(strip_bullet("Acme Corp"), None);
    }

    #[test]
    fn test_case_shapes() {
        assert!(is_all_upper("KEY SKILLS"));
        assert!(is_all_upper("SKILLS & TOOLS"));
        assert!(!is_all_upper("2021"));
        assert!(!is_all_upper("Key Skills"));

        assert!(is_title_case("Key Skills"));
        assert!(is_title_case("Skills & Abilities"));
        assert!(is_title_case("E-Commerce Platform (React)"));
        assert!(!is_title_case("Bachelor of Science"));
        assert!(!is_title_case("2021"));
    }

    #[test]
    fn test_section_lines_drops_blanks() {
        assert_eq!(section_lines("  a \n\n  \n b"), vec!["a", "b"]);
    }
}
