//! Per-page heading classification.
//!
//! Rules are checked in order and the first match wins:
//!
//! 1. the page's largest font, if larger than 15 → H1
//! 2. font larger than 14 and a section-like text → H2
//! 3. font larger than 12 and a `N.M` numbering anywhere in the text → H3

use regex::Regex;

use crate::model::{Candidate, HeadingItem, HeadingLevel, PageCandidates};

/// Font sizes must exceed this to be H1 (and the title).
pub const H1_MIN_EXCLUSIVE: u32 = 15;

/// Font sizes must exceed this to be H2.
pub const H2_MIN_EXCLUSIVE: u32 = 14;

/// Font sizes must exceed this to be H3.
pub const H3_MIN_EXCLUSIVE: u32 = 12;

/// Keywords that mark a line as a section heading.
pub const SECTION_KEYWORDS: [&str; 5] = [
    "introduction",
    "overview",
    "revision",
    "acknowledgements",
    "references",
];

/// Assigns heading levels to the candidates of a page.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    subsection_regex: Regex,
}

impl HeadingClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self {
            subsection_regex: Regex::new(r"[1-9]\.[1-9]").unwrap(),
        }
    }

    /// Classify every candidate of a page, keeping candidate order.
    pub fn classify_page(&self, page: &PageCandidates) -> Vec<HeadingItem> {
        let max_font_size = page.max_font_size();

        page.candidates
            .iter()
            .filter_map(|candidate| {
                self.classify(candidate, max_font_size)
                    .map(|level| HeadingItem::new(level, candidate.text.clone(), page.page))
            })
            .collect()
    }

    /// Classify a single candidate given the page's largest font size.
    pub fn classify(&self, candidate: &Candidate, max_font_size: u32) -> Option<HeadingLevel> {
        let size = candidate.font_size;

        if size == max_font_size && size > H1_MIN_EXCLUSIVE {
            Some(HeadingLevel::H1)
        } else if size > H2_MIN_EXCLUSIVE && is_heading(&candidate.text) {
            Some(HeadingLevel::H2)
        } else if size > H3_MIN_EXCLUSIVE && self.has_subsection_number(&candidate.text) {
            Some(HeadingLevel::H3)
        } else {
            None
        }
    }

    /// Whether the text contains a `N.M` numbering with both digits in 1-9.
    pub fn has_subsection_number(&self, text: &str) -> bool {
        self.subsection_regex.is_match(text)
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a line reads like a section heading.
///
/// True for texts starting with a single-digit section number (`"3."`,
/// which also covers `"3.1"`) or containing one of [`SECTION_KEYWORDS`].
pub fn is_heading(text: &str) -> bool {
    if has_section_prefix(text) {
        return true;
    }
    let lower = text.to_lowercase();
    SECTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn has_section_prefix(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('1'..='9'), Some('.'))
    )
}
