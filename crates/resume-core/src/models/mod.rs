//! Data models: input blocks, sections, the parsed resume, and configuration.

pub mod config;
pub mod document;
pub mod resume;
