//! Skill term extraction against fixed vocabularies.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use super::patterns::{CASE_SENSITIVE_SKILLS, SKILL_VOCABULARY};
use super::{ExtractionMatch, FieldExtractor, Result, SectionExtractor};

lazy_static! {
    static ref BUILTIN_SKILLS: Regex = {
        let terms: Vec<&str> = SKILL_VOCABULARY
            .iter()
            .flat_map(|group| group.iter().copied())
            .filter(|term| !CASE_SENSITIVE_SKILLS.contains(term))
            .collect();
        term_pattern(&terms, true).unwrap()
    };
    static ref EXACT_CASE_SKILLS: Regex = term_pattern(CASE_SENSITIVE_SKILLS, false).unwrap();
}

/// Build an alternation over `terms`, longest first so that "React Native" is
/// preferred over "React" at the same position.
fn term_pattern<S: AsRef<str>>(
    terms: &[S],
    case_insensitive: bool,
) -> std::result::Result<Regex, regex::Error> {
    let mut escaped: Vec<String> = terms
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .map(regex::escape)
        .collect();
    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    escaped.dedup();

    RegexBuilder::new(&format!("(?:{})", escaped.join("|")))
        .case_insensitive(case_insensitive)
        .build()
}

/// `+` and `#` count as word characters so "C" does not match inside "C++".
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '+' | '#')
}

fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Skill extractor.
///
/// Matches whole words from the built-in vocabulary plus any extra terms
/// supplied at construction, keeping each skill once (case-insensitively)
/// in first-seen order with its casing as written.
pub struct SkillExtractor {
    extra: Option<Regex>,
}

impl SkillExtractor {
    /// Create an extractor using only the built-in vocabulary.
    pub fn new() -> Self {
        Self { extra: None }
    }

    /// Create an extractor that also recognizes `terms`.
    pub fn with_terms<S: AsRef<str>>(terms: &[S]) -> Result<Self> {
        if terms.iter().all(|t| t.as_ref().trim().is_empty()) {
            return Ok(Self::new());
        }
        Ok(Self {
            extra: Some(term_pattern(terms, true)?),
        })
    }

    fn patterns(&self) -> impl Iterator<Item = &Regex> {
        [&*BUILTIN_SKILLS, &*EXACT_CASE_SKILLS]
            .into_iter()
            .chain(self.extra.iter())
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SkillExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut found: Vec<Self::Output> = Vec::new();

        for pattern in self.patterns() {
            for m in pattern.find_iter(text) {
                if !on_word_boundary(text, m.start(), m.end()) {
                    continue;
                }
                // Extra terms may repeat a built-in one at the same spot.
                if found.iter().any(|f| f.position.0 < m.end() && m.start() < f.position.1) {
                    continue;
                }
                found.push(
                    ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                        .with_position(m.start(), m.end()),
                );
            }
        }

        found.sort_by_key(|f| f.position.0);

        let mut seen = HashSet::new();
        found.retain(|f| seen.insert(f.value.to_lowercase()));
        found
    }
}

impl SectionExtractor for SkillExtractor {
    type Output = Vec<String>;

    fn extract_lines(&self, lines: &[&str]) -> Vec<String> {
        self.extract_all(&lines.join("\n"))
            .into_iter()
            .map(|m| m.value)
            .collect()
    }
}

/// Extract deduplicated skills from section text.
pub fn extract_skills(text: &str) -> Vec<String> {
    SkillExtractor::new().extract_section(text)
}
