//! Input text blocks and segmented sections.

use serde::{Deserialize, Serialize};

/// A positional unit of document text in reading order.
///
/// Produced by an upstream PDF text extractor; the parser only relies on
/// `order` and treats `page` as informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Block text. May span several lines.
    pub text: String,

    /// Reading-order index.
    pub order: u32,

    /// Source page (1-indexed), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl TextBlock {
    /// Create a block without page information.
    pub fn new(text: impl Into<String>, order: u32) -> Self {
        Self {
            text: text.into(),
            order,
            page: None,
        }
    }

    /// Attach page information.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Build a block sequence from plain strings, numbering them in order.
    pub fn from_lines<I, S>(lines: I) -> Vec<TextBlock>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| TextBlock::new(text, i as u32))
            .collect()
    }
}

/// A block as it may appear in JSON input: either a bare string or a full
/// block object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlockInput {
    Text(String),
    Block(TextBlock),
}

impl BlockInput {
    /// Resolve into a block, using `position` as the order for bare strings.
    pub fn into_block(self, position: usize) -> TextBlock {
        match self {
            BlockInput::Text(text) => TextBlock::new(text, position as u32),
            BlockInput::Block(block) => block,
        }
    }
}

/// A labeled run of body lines under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Canonical upper-case label ("HEADER" for lines before any heading).
    pub label: String,

    /// Body lines in document order.
    pub body: Vec<String>,
}

impl Section {
    /// Body lines joined with newlines.
    pub fn text(&self) -> String {
        self.body.join("\n")
    }

    /// Number of body lines.
    pub fn line_count(&self) -> usize {
        self.body.len()
    }
}

/// Ordered mapping from section label to section, first occurrence first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add body lines under `label`.
    ///
    /// A label seen before keeps its original position and gains the new
    /// lines at the end. Empty bodies are ignored.
    pub fn insert(&mut self, label: String, body: Vec<String>) {
        if body.is_empty() {
            return;
        }
        match self.sections.iter_mut().find(|s| s.label == label) {
            Some(existing) => existing.body.extend(body),
            None => self.sections.push(Section { label, body }),
        }
    }

    /// Look up a section by exact label.
    pub fn get(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Section text for `label`, lines joined with newlines.
    pub fn text(&self, label: &str) -> Option<String> {
        self.get(label).map(Section::text)
    }

    /// Labels in document order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl IntoIterator for SectionMap {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}
