//! Outline output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when the first page offers no suitable candidate.
pub const UNTITLED_DOCUMENT: &str = "Untitled Document";

/// Heading level assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// Label as written to the JSON artifact ("H1", "H2", "H3").
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingItem {
    /// Heading level
    pub level: HeadingLevel,

    /// Heading text, verbatim from the candidate
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,
}

impl HeadingItem {
    /// Create a new heading item.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title and heading outline of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title
    pub title: String,

    /// Headings in reading order, deduplicated by text
    pub outline: Vec<HeadingItem>,
}

impl DocumentOutline {
    /// Create an outline.
    pub fn new(title: impl Into<String>, outline: Vec<HeadingItem>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// Create an outline with the fallback title and no headings.
    pub fn untitled() -> Self {
        Self::new(UNTITLED_DOCUMENT, Vec::new())
    }

    /// Whether the title fell back to the placeholder.
    pub fn is_untitled(&self) -> bool {
        self.title == UNTITLED_DOCUMENT
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    /// Check if the outline has no headings.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Count headings at a given level.
    pub fn count_level(&self, level: HeadingLevel) -> usize {
        self.outline.iter().filter(|h| h.level == level).count()
    }
}

impl Default for DocumentOutline {
    fn default() -> Self {
        Self::untitled()
    }
}
