//! Resume structure extraction: segmentation, field rules, and assembly.

mod parser;
pub mod rules;
pub mod segmenter;

pub use parser::{parse_blocks, ParseResult, ResumeParser};
pub use segmenter::{canonicalize_label, segment, SectionSegmenter};

use crate::error::Result;
use crate::models::document::TextBlock;
use crate::models::resume::ResumeRecord;

/// Trait for resume extractors.
pub trait ResumeExtractor {
    /// Extract a resume from ordered text blocks.
    fn extract(&self, blocks: &[TextBlock]) -> Result<ResumeRecord>;

    /// Extract a resume from plain text, one block per line.
    fn extract_from_text(&self, text: &str) -> Result<ResumeRecord>;
}
