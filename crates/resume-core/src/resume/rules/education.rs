//! Education entries: degree, institution, year, GPA and coursework.

use tracing::trace;

use crate::models::resume::EducationEntry;

use super::patterns::{COURSEWORK, DEGREE, GPA, INSTITUTION, YEAR};
use super::{strip_bullet, SectionExtractor};

/// Education section extractor.
pub struct EducationExtractor;

impl EducationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionExtractor for EducationExtractor {
    type Output = Vec<EducationEntry>;

    fn extract_lines(&self, lines: &[&str]) -> Vec<EducationEntry> {
        lines
            .iter()
            .fold(EducationState::default(), |mut state, line| {
                state.feed(line);
                state
            })
            .finish()
    }
}

/// Walk state: the entry being filled and the entries already closed.
#[derive(Debug, Default)]
struct EducationState {
    current: Option<EducationEntry>,
    entries: Vec<EducationEntry>,
}

impl EducationState {
    fn feed(&mut self, line: &str) {
        if DEGREE.is_match(line) {
            self.flush();
            trace!("education opener: {:?}", line);
            self.current = Some(EducationEntry {
                degree: line.to_string(),
                ..Default::default()
            });
            return;
        }

        // Lines before the first degree have nowhere to go.
        let Some(entry) = self.current.as_mut() else {
            return;
        };

        let mut consumed = false;

        if INSTITUTION.is_match(line) {
            consumed = true;
            if entry.institution.is_none() {
                entry.institution = Some(line.to_string());
            }
        }

        if let Some(year) = YEAR.find_iter(line).last() {
            consumed = true;
            if entry.year.is_none() {
                entry.year = Some(year.as_str().to_string());
            }
        }

        if let Some(caps) = GPA.captures(line) {
            consumed = true;
            if entry.gpa.is_none() {
                let value = caps.get(1).map_or(line, |m| m.as_str());
                entry.gpa = Some(value.to_string());
            }
        }

        if COURSEWORK.is_match(line) {
            consumed = true;
            let courses = line.split_once(':').map_or(line, |(_, rest)| rest).trim();
            if !courses.is_empty() {
                entry.coursework.push(courses.to_string());
            }
        }

        // An unlabelled line right after the degree is usually the school
        // ("MIT", "Stanford"), so it fills an empty institution slot.
        if !consumed && entry.institution.is_none() && strip_bullet(line).is_none() {
            entry.institution = Some(line.to_string());
        }
    }

    fn flush(&mut self) {
        if let Some(entry) = self.current.take() {
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<EducationEntry> {
        self.flush();
        self.entries
    }
}

/// Extract education entries from section text.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    EducationExtractor::new().extract_section(text)
}
