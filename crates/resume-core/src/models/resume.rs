//! Structured resume data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A complete parsed resume.
///
/// Contact fields are flattened into the top level when serialized. Lists
/// that were not found are omitted rather than emitted empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Contact information from the header block.
    #[serde(flatten)]
    pub contact: ContactInfo,

    /// Free-text profile or objective paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Education history.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<EducationEntry>,

    /// Work experience.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<ExperienceEntry>,

    /// Recognized skill terms, deduplicated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    /// Projects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectEntry>,

    /// Certifications and licenses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<CertificationEntry>,

    /// Volunteer work, same shape as experience.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volunteer_experience: Vec<ExperienceEntry>,

    /// Leadership roles, same shape as experience.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leadership_experience: Vec<ExperienceEntry>,

    /// Awards and honors, one per line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub awards: Vec<String>,

    /// Spoken languages, one per line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,

    /// Interests and hobbies, one per line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
}

/// Contact details found in the header block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Personal site or portfolio URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ContactInfo {
    /// Check if no field has been set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.linkedin.is_none()
            && self.github.is_none()
            && self.website.is_none()
    }

    /// Check if any reachable channel (email, phone, profile link) is known.
    pub fn has_channel(&self) -> bool {
        self.email.is_some()
            || self.phone.is_some()
            || self.linkedin.is_some()
            || self.github.is_some()
            || self.website.is_some()
    }

    /// Fill unset fields from `other`. The name is never taken over.
    pub fn fill_missing(&mut self, other: ContactInfo) {
        fn fill(slot: &mut Option<String>, value: Option<String>) {
            if slot.is_none() {
                *slot = value;
            }
        }

        fill(&mut self.email, other.email);
        fill(&mut self.phone, other.phone);
        fill(&mut self.location, other.location);
        fill(&mut self.linkedin, other.linkedin);
        fill(&mut self.github, other.github);
        fill(&mut self.website, other.website);
    }
}

/// One degree in the education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// The degree line that opened this entry.
    pub degree: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,

    /// Graduation (or most recent) year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coursework: Vec<String>,
}

/// One role in an experience-shaped section (work, volunteer, leadership).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// The job title line that opened this entry.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Date text as it appeared in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Calendar interpretation of `date`, when it could be parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<DateSpan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// A parsed date range such as "Jan 2021 - Present".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First day of the starting month.
    pub start: NaiveDate,

    /// First day of the ending month, if a concrete end was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,

    /// The range is open-ended ("Present", "Current", "Now").
    #[serde(default)]
    pub current: bool,
}

/// One project in the projects section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Text after a "Technologies:"-style label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<String>,

    #[serde(default)]
    pub description: Vec<String>,
}

/// One certification or license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl ResumeRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.contact.is_empty()
            && self.summary.is_none()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.certifications.is_empty()
            && self.volunteer_experience.is_empty()
            && self.leadership_experience.is_empty()
            && self.awards.is_empty()
            && self.languages.is_empty()
            && self.interests.is_empty()
    }

    /// Report soft issues with the extracted record.
    ///
    /// Returns a list of human-readable issues; an empty list means the record
    /// looks complete enough for downstream use.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.contact.name.is_none() {
            issues.push("Candidate name not found".to_string());
        }

        if !self.contact.has_channel() {
            issues.push("No contact channel (email, phone, or profile link) found".to_string());
        }

        if self.education.is_empty() && self.experience.is_empty() {
            issues.push("Neither education nor experience entries were found".to_string());
        }

        for (i, entry) in self.experience.iter().enumerate() {
            if entry.company.is_none() && entry.date.is_none() {
                issues.push(format!(
                    "Experience entry {} ({}) has no company or date",
                    i + 1,
                    entry.title
                ));
            }
        }

        issues
    }
}
