//! Core library for heuristic resume parsing.
//!
//! This crate provides:
//! - Section segmentation of ordered text blocks (alias and formatting rules)
//! - Field extraction for contact, education, experience, skills, projects
//!   and certifications
//! - Resume data models with JSON serialization

pub mod error;
pub mod models;
pub mod resume;

pub use error::{ExtractionError, ResumeError, Result};
pub use models::config::ParserConfig;
pub use models::document::{BlockInput, Section, SectionMap, TextBlock};
pub use models::resume::{
    CertificationEntry, ContactInfo, DateSpan, EducationEntry, ExperienceEntry, ProjectEntry,
    ResumeRecord,
};
pub use resume::{parse_blocks, segment, ParseResult, ResumeExtractor, ResumeParser, SectionSegmenter};
