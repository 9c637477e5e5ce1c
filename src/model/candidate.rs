//! Per-page OCR line types.

use serde::{Deserialize, Serialize};

/// A line detected by the OCR engine, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Concatenated text of the line element
    pub text: String,

    /// Raw hOCR `title` attribute (bbox, baseline, x_size, ...)
    pub properties: String,
}

impl TextLine {
    /// Create a new text line.
    pub fn new(text: impl Into<String>, properties: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            properties: properties.into(),
        }
    }
}

/// A noise-filtered, whitespace-normalized line with its estimated font size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Estimated font size (engine pixels, 0 when unknown)
    pub font_size: u32,

    /// Normalized text; never empty
    pub text: String,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(font_size: u32, text: impl Into<String>) -> Self {
        Self {
            font_size,
            text: text.into(),
        }
    }
}

/// The candidates of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCandidates {
    /// Page number (1-indexed)
    pub page: u32,

    /// Candidates in OCR line order
    pub candidates: Vec<Candidate>,
}

impl PageCandidates {
    /// Create a page with the given candidates.
    pub fn new(page: u32, candidates: Vec<Candidate>) -> Self {
        Self { page, candidates }
    }

    /// Largest font size on the page, 0 if the page has no candidates.
    pub fn max_font_size(&self) -> u32 {
        self.candidates
            .iter()
            .map(|c| c.font_size)
            .max()
            .unwrap_or(0)
    }

    /// Check if the page has no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_font_size() {
        let page = PageCandidates::new(
            1,
            vec![
                Candidate::new(12, "body"),
                Candidate::new(20, "Title"),
                Candidate::new(0, "unknown size"),
            ],
        );
        assert_eq!(page.max_font_size(), 20);
    }

    #[test]
    fn test_max_font_size_empty_page() {
        let page = PageCandidates::new(4, Vec::new());
        assert!(page.is_empty());
        assert_eq!(page.max_font_size(), 0);
    }
}
