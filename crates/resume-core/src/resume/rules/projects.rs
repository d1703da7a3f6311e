//! Project entries: title, date, technologies and description bullets.

use std::mem;

use tracing::trace;

use crate::models::resume::ProjectEntry;

use super::dates::extract_date;
use super::patterns::TECHNOLOGIES_LABEL;
use super::{
    is_all_upper, is_title_case, join_continuation, starts_lowercase, strip_bullet,
    strip_separators, SectionExtractor,
};

/// Project section extractor.
///
/// Project titles are free text, so an entry opens on any line that is
/// fully upper-case or capitalizes every word. Labelled technology lines and
/// date lines are tested first because both usually look capitalized too.
pub struct ProjectExtractor;

impl ProjectExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProjectExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionExtractor for ProjectExtractor {
    type Output = Vec<ProjectEntry>;

    fn extract_lines(&self, lines: &[&str]) -> Vec<ProjectEntry> {
        lines
            .iter()
            .fold(ProjectState::default(), |mut state, line| {
                state.feed(line);
                state
            })
            .finish()
    }
}

#[derive(Debug, Default)]
struct ProjectState {
    current: Option<ProjectEntry>,
    description: Vec<String>,
    last_was_bullet: bool,
    entries: Vec<ProjectEntry>,
}

impl ProjectState {
    fn feed(&mut self, line: &str) {
        let was_bullet = mem::replace(&mut self.last_was_bullet, false);

        if let Some(text) = strip_bullet(line) {
            if self.current.is_some() && !text.is_empty() {
                self.description.push(text.to_string());
                self.last_was_bullet = true;
            }
            return;
        }

        if was_bullet && starts_lowercase(line) && join_continuation(&mut self.description, line) {
            self.last_was_bullet = true;
            return;
        }

        if let Some(caps) = TECHNOLOGIES_LABEL.captures(line) {
            if let Some(entry) = self.current.as_mut() {
                if entry.technologies.is_none() {
                    entry.technologies = Some(caps[1].trim().to_string());
                }
            }
            return;
        }

        if let Some(date) = extract_date(line) {
            // "Portfolio Website | Jan 2022" is a title carrying its date.
            let title = strip_separators(&line.replace(&date.source, " "));
            if !title.is_empty() && (is_all_upper(&title) || is_title_case(&title)) {
                self.open(&title);
            }
            if let Some(entry) = self.current.as_mut() {
                if entry.date.is_none() {
                    entry.date = Some(date.source);
                }
            }
            return;
        }

        if is_all_upper(line) || is_title_case(line) {
            self.open(line);
        }
    }

    fn open(&mut self, title: &str) {
        self.flush();
        trace!("project opener: {:?}", title);
        self.current = Some(ProjectEntry {
            title: title.to_string(),
            ..Default::default()
        });
    }

    fn flush(&mut self) {
        let description = mem::take(&mut self.description);
        if let Some(mut entry) = self.current.take() {
            entry.description = description;
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<ProjectEntry> {
        self.flush();
        self.entries
    }
}

/// Extract project entries from section text.
pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    ProjectExtractor::new().extract_section(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_projects_with_all_fields() {
        let text = "\
Portfolio Website
Jan 2022
Technologies: React, Node.js, MongoDB
• Built a responsive personal site
• Deployed on Vercel
CHESS ENGINE
Built with: Rust
- Alpha-beta search with
transposition tables";

        let projects = extract_projects(text);
        assert_eq!(projects.len(), 2);

        assert_eq!(
            projects[0],
            ProjectEntry {
                title: "Portfolio Website".to_string(),
                date: Some("Jan 2022".to_string()),
                technologies: Some("React, Node.js, MongoDB".to_string()),
                description: vec![
                    "Built a responsive personal site".to_string(),
                    "Deployed on Vercel".to_string()
                ],
            }
        );

        assert_eq!(projects[1].title, "CHESS ENGINE");
        assert_eq!(projects[1].technologies.as_deref(), Some("Rust"));
        assert_eq!(
            projects[1].description,
            vec!["Alpha-beta search with transposition tables".to_string()]
        );
    }

    #[test]
    fn test_title_with_date_opens_entry() {
        let projects =
            extract_projects("Portfolio Website | Jan 2022\n• Built a site\nChess Engine\n• Search");

        assert_eq!(
            projects,
            vec![
                ProjectEntry {
                    title: "Portfolio Website".to_string(),
                    date: Some("Jan 2022".to_string()),
                    technologies: None,
                    description: vec!["Built a site".to_string()],
                },
                ProjectEntry {
                    title: "Chess Engine".to_string(),
                    date: None,
                    technologies: None,
                    description: vec!["Search".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_title_with_date_after_another_project() {
        let projects =
            extract_projects("Chess Engine\n• Search\nPortfolio Website (Jan 2022)\n• Built a site");

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Chess Engine");
        assert_eq!(projects[0].date, None);
        assert_eq!(projects[0].description, vec!["Search".to_string()]);
        assert_eq!(projects[1].title, "Portfolio Website");
        assert_eq!(projects[1].date.as_deref(), Some("Jan 2022"));
        assert_eq!(projects[1].description, vec!["Built a site".to_string()]);
    }

    #[test]
    fn test_plain_sentences_do_not_open_entries() {
        let projects = extract_projects("a small tool for parsing logs\nLog Parser\nwritten over a weekend");

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Log Parser");
        assert!(projects[0].description.is_empty());
    }

    #[test]
    fn test_stack_label_is_case_insensitive() {
        let projects = extract_projects("Weather App\nSTACK: Flutter, Firebase");
        assert_eq!(projects[0].technologies.as_deref(), Some("Flutter, Firebase"));
    }
}
