//! Certification and license entries.

use tracing::trace;

use crate::models::resume::CertificationEntry;

use super::dates::extract_date;
use super::patterns::CERTIFICATION;
use super::{strip_bullet, SectionExtractor};

/// Certification section extractor.
pub struct CertificationExtractor;

impl CertificationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CertificationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionExtractor for CertificationExtractor {
    type Output = Vec<CertificationEntry>;

    fn extract_lines(&self, lines: &[&str]) -> Vec<CertificationEntry> {
        lines
            .iter()
            .fold(CertificationState::default(), |mut state, line| {
                state.feed(line);
                state
            })
            .finish()
    }
}

#[derive(Debug, Default)]
struct CertificationState {
    current: Option<CertificationEntry>,
    entries: Vec<CertificationEntry>,
}

impl CertificationState {
    fn feed(&mut self, line: &str) {
        let line = strip_bullet(line).unwrap_or(line);
        if line.is_empty() {
            return;
        }

        if CERTIFICATION.is_match(line) {
            self.flush();
            trace!("certification opener: {:?}", line);
            self.current = Some(CertificationEntry {
                name: line.to_string(),
                date: extract_date(line).map(|d| d.source),
                issuer: None,
            });
            return;
        }

        let Some(entry) = self.current.as_mut() else {
            return;
        };

        if let Some(date) = extract_date(line) {
            if entry.date.is_none() {
                entry.date = Some(date.source);
            }
        } else if entry.issuer.is_none() {
            entry.issuer = Some(line.to_string());
        }
    }

    fn flush(&mut self) {
        if let Some(entry) = self.current.take() {
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<CertificationEntry> {
        self.flush();
        self.entries
    }
}

/// Extract certification entries from section text.
pub fn extract_certifications(text: &str) -> Vec<CertificationEntry> {
    CertificationExtractor::new().extract_section(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entries_with_issuer_and_date() {
        let text = "\
AWS Certified Solutions Architect
Amazon Web Services
Mar 2023
Professional Engineer License
State Board of Texas
Oracle Java Certification, Jan 2020";

        let certs = extract_certifications(text);

        assert_eq!(
            certs,
            vec![
                CertificationEntry {
                    name: "AWS Certified Solutions Architect".to_string(),
                    date: Some("Mar 2023".to_string()),
                    issuer: Some("Amazon Web Services".to_string()),
                },
                CertificationEntry {
                    name: "Professional Engineer License".to_string(),
                    date: None,
                    issuer: Some("State Board of Texas".to_string()),
                },
                CertificationEntry {
                    name: "Oracle Java Certification, Jan 2020".to_string(),
                    date: Some("Jan 2020".to_string()),
                    issuer: None,
                },
            ]
        );
    }

    #[test]
    fn test_only_first_issuer_kept() {
        let certs = extract_certifications("• Certified Kubernetes Administrator\nCNCF\nLinux Foundation");

        assert_eq!(certs[0].name, "Certified Kubernetes Administrator");
        assert_eq!(certs[0].issuer.as_deref(), Some("CNCF"));
    }

    #[test]
    fn test_lines_before_opener_are_dropped() {
        assert!(extract_certifications("Amazon Web Services\nMar 2023").is_empty());
    }
}
