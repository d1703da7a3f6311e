//! Contact details from the block of lines above the first section header.

use tracing::trace;

use crate::models::resume::ContactInfo;

use super::patterns::{find_phone, EMAIL, FIELD_SEPARATOR, GITHUB_URL, LINKEDIN_URL, WEBSITE_URL};
use super::SectionExtractor;

/// Contact extractor.
///
/// Header lines carry no labels, so each fragment claims the first unclaimed
/// slot it fits: shaped values (email, phone, profile links, website) go to
/// their own fields; the first unshaped fragment seen before anything else is
/// the name, and the first unshaped fragment after the name is the location.
pub struct ContactExtractor;

impl ContactExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionExtractor for ContactExtractor {
    type Output = ContactInfo;

    fn extract_lines(&self, lines: &[&str]) -> ContactInfo {
        let mut info = ContactInfo::default();

        let fragments = lines.iter().flat_map(|line| {
            FIELD_SEPARATOR
                .split(line)
                .map(str::trim)
                .filter(|f| !f.is_empty())
        });

        for fragment in fragments {
            if !claim_shaped(&mut info, fragment) {
                claim_plain(&mut info, fragment);
            }
        }

        info
    }
}

/// Claim email, phone and link slots. Returns whether anything matched.
fn claim_shaped(info: &mut ContactInfo, fragment: &str) -> bool {
    let mut matched = false;
    let mut residue = fragment.to_string();

    if let Some(m) = LINKEDIN_URL.find(fragment) {
        matched = true;
        fill(&mut info.linkedin, m.as_str());
        residue = residue.replace(m.as_str(), " ");
    }

    if let Some(m) = GITHUB_URL.find(fragment) {
        matched = true;
        fill(&mut info.github, m.as_str());
        residue = residue.replace(m.as_str(), " ");
    }

    if let Some(m) = EMAIL.find(fragment) {
        matched = true;
        fill(&mut info.email, m.as_str());
        residue = EMAIL.replace_all(&residue, " ").into_owned();
    }

    if let Some(m) = WEBSITE_URL.find(&residue) {
        matched = true;
        fill(&mut info.website, m.as_str());
        residue = residue.replace(m.as_str(), " ");
    }

    if let Some(m) = find_phone(&residue) {
        matched = true;
        fill(&mut info.phone, m.as_str().trim());
    }

    if matched {
        trace!("contact fragment {:?} matched a shaped field", fragment);
    }
    matched
}

fn claim_plain(info: &mut ContactInfo, fragment: &str) {
    if info.is_empty() {
        trace!("contact fragment {:?} taken as name", fragment);
        info.name = Some(fragment.to_string());
    } else if info.name.is_some() && info.location.is_none() {
        trace!("contact fragment {:?} taken as location", fragment);
        info.location = Some(fragment.to_string());
    }
}

fn fill(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

/// Extract contact details from header section text.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactExtractor::new().extract_section(text)
}
