//! Resume assembler: segments blocks and dispatches sections to extractors.

use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{ExtractionError, ResumeError, Result};
use crate::models::config::ParserConfig;
use crate::models::document::{BlockInput, Section, SectionMap, TextBlock};
use crate::models::resume::ResumeRecord;

use super::rules::patterns::*;
use super::rules::{
    CertificationExtractor, ContactExtractor, EducationExtractor, ExperienceExtractor,
    LineListExtractor, ProjectExtractor, SectionExtractor, SkillExtractor, SummaryExtractor,
};
use super::segmenter::SectionSegmenter;
use super::ResumeExtractor;

/// Result of parsing one document.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Extracted resume.
    pub resume: ResumeRecord,
    /// Sections the document was split into.
    pub sections: SectionMap,
    /// Skipped sections and soft validation issues.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Record fields filled from a dedicated section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    VolunteerExperience,
    LeadershipExperience,
    Summary,
    Awards,
    Languages,
    Interests,
}

/// Section dispatch table, consulted in order.
///
/// For each field only the first alias present in the document is used;
/// content under its other aliases is not merged in. Certifications,
/// volunteer and leadership sections are looked up by a single exact label.
const DISPATCH: &[(Field, &[&str])] = &[
    (Field::Education, EDUCATION_ALIASES),
    (Field::Experience, EXPERIENCE_ALIASES),
    (Field::Skills, SKILLS_ALIASES),
    (Field::Projects, PROJECTS_ALIASES),
    (Field::Certifications, &["CERTIFICATIONS"]),
    (Field::VolunteerExperience, &["VOLUNTEER EXPERIENCE"]),
    (Field::LeadershipExperience, &["LEADERSHIP EXPERIENCE"]),
    (Field::Summary, SUMMARY_ALIASES),
    (Field::Awards, AWARDS_ALIASES),
    (Field::Languages, LANGUAGES_ALIASES),
    (Field::Interests, INTERESTS_ALIASES),
];

/// Heuristic resume parser.
///
/// Holds only immutable patterns and settings, so one instance can serve
/// many documents and threads; each parse owns its own working state.
pub struct ResumeParser {
    segmenter: SectionSegmenter,
    skills: SkillExtractor,
    /// Per-section line limit (0 = unlimited).
    max_section_lines: usize,
    /// Fill unset contact fields from a CONTACT section.
    merge_contact_section: bool,
}

impl ResumeParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        let config = ParserConfig::default();
        Self {
            segmenter: SectionSegmenter::from_config(&config.segmenter),
            skills: SkillExtractor::new(),
            max_section_lines: config.extraction.max_section_lines,
            merge_contact_section: config.extraction.merge_contact_section,
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        config.validate()?;

        let skills = SkillExtractor::with_terms(&config.extraction.extra_skills)
            .map_err(|e| ResumeError::Config(format!("extraction.extra_skills: {}", e)))?;

        Ok(Self {
            segmenter: SectionSegmenter::from_config(&config.segmenter),
            skills,
            max_section_lines: config.extraction.max_section_lines,
            merge_contact_section: config.extraction.merge_contact_section,
        })
    }

    /// Set the per-section line limit (0 = unlimited).
    pub fn with_max_section_lines(mut self, lines: usize) -> Self {
        self.max_section_lines = lines;
        self
    }

    /// Set whether a CONTACT section fills gaps in the header contact info.
    pub fn with_contact_merge(mut self, merge: bool) -> Self {
        self.merge_contact_section = merge;
        self
    }

    /// Set the word limit for heuristic header detection.
    pub fn with_header_max_words(mut self, words: usize) -> Self {
        self.segmenter = self.segmenter.with_header_max_words(words);
        self
    }

    /// Parse a resume from ordered text blocks.
    pub fn parse(&self, blocks: &[TextBlock]) -> Result<ParseResult> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing resume from {} text blocks", blocks.len());

        let sections = self.segmenter.segment(blocks);
        let resume = self.assemble(&sections, &mut warnings);

        warnings.extend(resume.validate());

        debug!(
            "Extracted {} education, {} experience, {} project entries and {} skills",
            resume.education.len(),
            resume.experience.len(),
            resume.projects.len(),
            resume.skills.len()
        );

        Ok(ParseResult {
            resume,
            sections,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Parse a resume from JSON input.
    ///
    /// Accepts an array of blocks or an object with a `blocks` array. Each
    /// block is either a string or a `{ "text", "order" }` object; strings
    /// take their position as order. A null or missing block list is an
    /// input error.
    pub fn parse_json(&self, json: &str) -> Result<ParseResult> {
        let items = match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("blocks") {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => {
                    return Err(ResumeError::InvalidInput("missing \"blocks\" array".to_string()));
                }
                Some(other) => {
                    return Err(ResumeError::InvalidInput(format!(
                        "\"blocks\" must be an array, got {}",
                        json_kind(&other)
                    )));
                }
            },
            Value::Null => {
                return Err(ResumeError::InvalidInput("input is null".to_string()));
            }
            other => {
                return Err(ResumeError::InvalidInput(format!(
                    "expected an array of blocks, got {}",
                    json_kind(&other)
                )));
            }
        };

        let blocks = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| serde_json::from_value::<BlockInput>(item).map(|b| b.into_block(i)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        self.parse(&blocks)
    }

    fn assemble(&self, sections: &SectionMap, warnings: &mut Vec<String>) -> ResumeRecord {
        let mut resume = ResumeRecord::new();

        if let Some(header) = sections.get(HEADER_LABEL) {
            if let Some(contact) = self.run(&ContactExtractor, header, warnings) {
                resume.contact = contact;
            }
        }

        if self.merge_contact_section {
            if let Some(section) = first_present(sections, CONTACT_ALIASES) {
                // The name only ever comes from the header block.
                if let Some(contact) = self.run(&ContactExtractor, section, warnings) {
                    resume.contact.fill_missing(contact);
                }
            }
        }

        for (field, aliases) in DISPATCH {
            let Some(section) = first_present(sections, aliases) else {
                continue;
            };
            debug!("Dispatching section {} to {:?}", section.label, field);

            match field {
                Field::Education => {
                    if let Some(entries) = self.run(&EducationExtractor, section, warnings) {
                        resume.education = entries;
                    }
                }
                Field::Experience => {
                    if let Some(entries) = self.run(&ExperienceExtractor, section, warnings) {
                        resume.experience = entries;
                    }
                }
                Field::Skills => {
                    if let Some(skills) = self.run(&self.skills, section, warnings) {
                        resume.skills = skills;
                    }
                }
                Field::Projects => {
                    if let Some(entries) = self.run(&ProjectExtractor, section, warnings) {
                        resume.projects = entries;
                    }
                }
                Field::Certifications => {
                    if let Some(entries) = self.run(&CertificationExtractor, section, warnings) {
                        resume.certifications = entries;
                    }
                }
                Field::VolunteerExperience => {
                    if let Some(entries) = self.run(&ExperienceExtractor, section, warnings) {
                        resume.volunteer_experience = entries;
                    }
                }
                Field::LeadershipExperience => {
                    if let Some(entries) = self.run(&ExperienceExtractor, section, warnings) {
                        resume.leadership_experience = entries;
                    }
                }
                Field::Summary => {
                    if let Some(summary) = self.run(&SummaryExtractor, section, warnings) {
                        resume.summary = summary;
                    }
                }
                Field::Awards => {
                    if let Some(items) = self.run(&LineListExtractor, section, warnings) {
                        resume.awards = items;
                    }
                }
                Field::Languages => {
                    if let Some(items) = self.run(&LineListExtractor, section, warnings) {
                        resume.languages = items;
                    }
                }
                Field::Interests => {
                    if let Some(items) = self.run(&LineListExtractor, section, warnings) {
                        resume.interests = items;
                    }
                }
            }
        }

        resume
    }

    /// Run one extractor over one section. A failing section is logged,
    /// recorded in `warnings`, and leaves its field unset.
    fn run<E: SectionExtractor>(
        &self,
        extractor: &E,
        section: &Section,
        warnings: &mut Vec<String>,
    ) -> Option<E::Output> {
        match self.check_section(section) {
            Ok(()) => {
                let lines: Vec<&str> = section.body.iter().map(String::as_str).collect();
                Some(extractor.extract_lines(&lines))
            }
            Err(err) => {
                warn!("Skipping section {}: {}", section.label, err);
                warnings.push(format!("Skipped section {}: {}", section.label, err));
                None
            }
        }
    }

    fn check_section(&self, section: &Section) -> std::result::Result<(), ExtractionError> {
        let lines = section.line_count();
        if self.max_section_lines > 0 && lines > self.max_section_lines {
            return Err(ExtractionError::SectionTooLarge {
                label: section.label.clone(),
                lines,
                limit: self.max_section_lines,
            });
        }
        Ok(())
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor for ResumeParser {
    fn extract(&self, blocks: &[TextBlock]) -> Result<ResumeRecord> {
        self.parse(blocks).map(|r| r.resume)
    }

    fn extract_from_text(&self, text: &str) -> Result<ResumeRecord> {
        self.extract(&TextBlock::from_lines(text.lines()))
    }
}

/// Parse blocks with default settings and return the bare record.
pub fn parse_blocks(blocks: &[TextBlock]) -> Result<ResumeRecord> {
    ResumeParser::new().extract(blocks)
}

/// The first alias, in priority order, that labels a section.
fn first_present<'a>(sections: &'a SectionMap, aliases: &[&str]) -> Option<&'a Section> {
    aliases.iter().find_map(|alias| sections.get(alias))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(lines: &[&str]) -> Vec<TextBlock> {
        TextBlock::from_lines(lines.iter().copied())
    }

    #[test]
    fn test_alias_priority_first_wins() {
        let parser = ResumeParser::new();
        let result = parser
            .parse(&blocks(&[
                "Jane Doe",
                "ACADEMIC BACKGROUND",
                "Master of Arts",
                "Columbia University",
                "EDUCATION",
                "Bachelor of Science in CS",
                "MIT",
            ]))
            .unwrap();

        assert_eq!(result.resume.education.len(), 1);
        assert_eq!(result.resume.education[0].degree, "Bachelor of Science in CS");
    }

    #[test]
    fn test_single_label_lookup_for_certifications() {
        let parser = ResumeParser::new();
        let resume = parser
            .extract(&blocks(&["Jane Doe", "CERTIFICATES", "AWS Certified Developer"]))
            .unwrap();

        assert!(resume.certifications.is_empty());

        let resume = parser
            .extract(&blocks(&["Jane Doe", "CERTIFICATIONS", "AWS Certified Developer"]))
            .unwrap();
        assert_eq!(resume.certifications.len(), 1);
    }

    #[test]
    fn test_volunteer_and_leadership_share_experience_shape() {
        let parser = ResumeParser::new();
        let resume = parser
            .extract(&blocks(&[
                "VOLUNTEER EXPERIENCE",
                "Teaching Assistant",
                "Code.org",
                "• Taught intro Python",
                "LEADERSHIP EXPERIENCE",
                "Student Body Lead",
                "State University",
            ]))
            .unwrap();

        assert_eq!(resume.volunteer_experience.len(), 1);
        assert_eq!(resume.volunteer_experience[0].company.as_deref(), Some("Code.org"));
        assert_eq!(
            resume.volunteer_experience[0].responsibilities,
            vec!["Taught intro Python".to_string()]
        );
        assert_eq!(resume.leadership_experience.len(), 1);
        assert_eq!(resume.leadership_experience[0].title, "Student Body Lead");
        assert!(resume.experience.is_empty());
    }

    #[test]
    fn test_oversized_section_is_isolated() {
        let parser = ResumeParser::new().with_max_section_lines(3);
        let result = parser
            .parse(&blocks(&[
                "Jane Doe",
                "EDUCATION",
                "B.S. Physics",
                "Rice University",
                "EXPERIENCE",
                "Intern",
                "Acme",
                "• One",
                "• Two",
            ]))
            .unwrap();

        assert_eq!(result.resume.education.len(), 1);
        assert!(result.resume.experience.is_empty());
        assert!(result.warnings.iter().any(|w| w.contains("EXPERIENCE")));
    }

    #[test]
    fn test_contact_section_fills_gaps() {
        let parser = ResumeParser::new();
        let resume = parser
            .extract(&blocks(&[
                "Jane Doe",
                "jane@x.com",
                "CONTACT",
                "other@x.com",
                "555-123-4567",
            ]))
            .unwrap();

        assert_eq!(resume.contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.contact.email.as_deref(), Some("jane@x.com"));
        assert_eq!(resume.contact.phone.as_deref(), Some("555-123-4567"));

        let resume = ResumeParser::new()
            .with_contact_merge(false)
            .extract(&blocks(&["Jane Doe", "jane@x.com", "CONTACT", "555-123-4567"]))
            .unwrap();
        assert_eq!(resume.contact.phone, None);
    }

    #[test]
    fn test_contact_section_never_supplies_name() {
        let resume = ResumeParser::new()
            .extract(&blocks(&["CONTACT", "Jane Doe", "jane@x.com", "SKILLS", "Rust"]))
            .unwrap();

        assert_eq!(resume.contact.name, None);
        assert_eq!(resume.contact.email.as_deref(), Some("jane@x.com"));
    }

    #[test]
    fn test_summary_and_lists() {
        let resume = ResumeParser::new()
            .extract(&blocks(&[
                "Jane Doe",
                "PROFILE",
                "Engineer focused on",
                "reliable systems.",
                "AWARDS",
                "• Best Paper 2021",
                "LANGUAGES",
                "English",
                "Spanish",
                "HOBBIES",
                "Climbing",
            ]))
            .unwrap();

        assert_eq!(resume.summary.as_deref(), Some("Engineer focused on reliable systems."));
        assert_eq!(resume.awards, vec!["Best Paper 2021".to_string()]);
        assert_eq!(resume.languages, vec!["English".to_string(), "Spanish".to_string()]);
        assert_eq!(resume.interests, vec!["Climbing".to_string()]);
    }

    #[test]
    fn test_parse_json_inputs() {
        let parser = ResumeParser::new();

        let result = parser
            .parse_json(r#"["Jane Doe", "SKILLS", "Rust, Python"]"#)
            .unwrap();
        assert_eq!(result.resume.skills, vec!["Rust", "Python"]);

        let result = parser
            .parse_json(r#"{"blocks": [{"text": "SKILLS", "order": 1}, {"text": "Jane Doe", "order": 0}, {"text": "Go", "order": 2}]}"#)
            .unwrap();
        assert_eq!(result.resume.contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.resume.skills, vec!["Go"]);
    }

    #[test]
    fn test_parse_json_rejects_absent_input() {
        let parser = ResumeParser::new();

        assert!(matches!(parser.parse_json("null"), Err(ResumeError::InvalidInput(_))));
        assert!(matches!(parser.parse_json("{}"), Err(ResumeError::InvalidInput(_))));
        assert!(matches!(
            parser.parse_json(r#"{"blocks": null}"#),
            Err(ResumeError::InvalidInput(_))
        ));
        assert!(matches!(
            parser.parse_json(r#"{"blocks": "Jane"}"#),
            Err(ResumeError::InvalidInput(_))
        ));
        assert!(matches!(parser.parse_json("not json"), Err(ResumeError::Json(_))));
        assert!(matches!(parser.parse_json("[42]"), Err(ResumeError::Json(_))));
    }

    #[test]
    fn test_from_config_extra_skills() {
        let mut config = ParserConfig::default();
        config.extraction.extra_skills = vec!["Bevy".to_string()];

        let parser = ResumeParser::from_config(&config).unwrap();
        let resume = parser.extract(&blocks(&["SKILLS", "Rust, Bevy"])).unwrap();
        assert_eq!(resume.skills, vec!["Rust", "Bevy"]);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = ParserConfig::default();
        config.extraction.extra_skills = vec!["  ".to_string()];
        assert!(matches!(ResumeParser::from_config(&config), Err(ResumeError::Config(_))));
    }

    #[test]
    fn test_extract_from_text() {
        let resume = ResumeParser::new()
            .extract_from_text("Jane Doe\njane@x.com\n\nSKILLS\nDocker, Kubernetes\n")
            .unwrap();

        assert_eq!(resume.contact.email.as_deref(), Some("jane@x.com"));
        assert_eq!(resume.skills, vec!["Docker", "Kubernetes"]);
    }
}
