//! Experience entries for work, volunteer and leadership sections.
//!
//! All three section kinds share one layout (title, company, dates,
//! location, bullets), so a single extractor serves them.

use std::mem;

use tracing::trace;

use crate::models::resume::ExperienceEntry;

use super::dates::extract_date;
use super::patterns::{COMPANY_SUFFIXES, JOB_TITLE, LOCATION, REMOTE};
use super::{join_continuation, starts_lowercase, strip_bullet, strip_separators, SectionExtractor};

/// Experience section extractor.
pub struct ExperienceExtractor;

impl ExperienceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionExtractor for ExperienceExtractor {
    type Output = Vec<ExperienceEntry>;

    fn extract_lines(&self, lines: &[&str]) -> Vec<ExperienceEntry> {
        lines
            .iter()
            .fold(ExperienceState::default(), |mut state, line| {
                state.feed(line);
                state
            })
            .finish()
    }
}

#[derive(Debug, Default)]
struct ExperienceState {
    current: Option<ExperienceEntry>,
    /// Bullets for `current`, committed on flush.
    bullets: Vec<String>,
    last_was_bullet: bool,
    entries: Vec<ExperienceEntry>,
}

impl ExperienceState {
    fn feed(&mut self, line: &str) {
        let was_bullet = mem::replace(&mut self.last_was_bullet, false);

        if let Some(text) = strip_bullet(line) {
            if self.current.is_some() && !text.is_empty() {
                self.bullets.push(text.to_string());
                self.last_was_bullet = true;
            }
            return;
        }

        if was_bullet && starts_lowercase(line) && join_continuation(&mut self.bullets, line) {
            self.last_was_bullet = true;
            return;
        }

        if JOB_TITLE.is_match(line) {
            self.open(line);
            return;
        }

        let Some(entry) = self.current.as_mut() else {
            return;
        };

        if let Some(date) = extract_date(line) {
            if entry.date.is_none() {
                entry.date = Some(date.source.clone());
                entry.period = Some(date.value);
            }
            // "Acme Corp | Jan 2021 - Present" carries the company too, and
            // "Austin, TX | Jan 2021 - Present" the location.
            let rest = strip_separators(&line.replace(&date.source, " "));
            if rest.is_empty() {
                return;
            }
            if is_location(&rest) {
                if entry.location.is_none() {
                    entry.location = Some(rest);
                }
            } else if entry.company.is_none() {
                entry.company = Some(rest);
            }
            return;
        }

        if is_location(line) {
            if entry.location.is_none() {
                entry.location = Some(line.to_string());
            }
            return;
        }

        if entry.company.is_none() {
            entry.company = Some(line.to_string());
        }
    }

    fn open(&mut self, title: &str) {
        self.flush();
        trace!("experience opener: {:?}", title);

        let mut entry = ExperienceEntry {
            title: title.to_string(),
            ..Default::default()
        };
        if let Some(date) = extract_date(title) {
            entry.date = Some(date.source);
            entry.period = Some(date.value);
        }
        self.current = Some(entry);
    }

    fn flush(&mut self) {
        let bullets = mem::take(&mut self.bullets);
        if let Some(mut entry) = self.current.take() {
            entry.responsibilities = bullets;
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<ExperienceEntry> {
        self.flush();
        self.entries
    }
}

/// "City, ST", "City, State" or "Remote", excluding "Acme, Inc"-style names.
pub(crate) fn is_location(line: &str) -> bool {
    if REMOTE.is_match(line) {
        return true;
    }
    if !LOCATION.is_match(line) {
        return false;
    }
    let last = line.rsplit(',').next().unwrap_or("").trim();
    !COMPANY_SUFFIXES.contains(&last)
}

/// Extract experience entries from section text.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    ExperienceExtractor::new().extract_section(text)
}
