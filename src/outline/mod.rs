//! Title detection, heading classification and outline assembly.
//!
//! Everything here is pure: it works on already-extracted
//! [`PageCandidates`](crate::model::PageCandidates) and never touches the
//! OCR engine.

mod assemble;
mod classify;
mod title;

pub use assemble::{assemble_outline, dedup_headings};
pub use classify::{
    is_heading, HeadingClassifier, H1_MIN_EXCLUSIVE, H2_MIN_EXCLUSIVE, H3_MIN_EXCLUSIVE,
    SECTION_KEYWORDS,
};
pub use title::extract_title;

use crate::model::{DocumentOutline, PageCandidates, UNTITLED_DOCUMENT};

/// Build the outline of a document from its pages' candidates.
///
/// `pages` must be in ascending page order; the title comes from the first
/// entry.
pub fn build_outline(classifier: &HeadingClassifier, pages: &[PageCandidates]) -> DocumentOutline {
    let title = pages
        .first()
        .map(|first| extract_title(&first.candidates))
        .unwrap_or_else(|| UNTITLED_DOCUMENT.to_string());

    let per_page = pages.iter().map(|page| {
        let headings = classifier.classify_page(page);
        log::debug!(
            "Page {}: {} candidates, {} headings",
            page.page,
            page.candidates.len(),
            headings.len()
        );
        headings
    });

    assemble_outline(title, per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Candidate, HeadingItem, HeadingLevel};

    #[test]
    fn test_build_outline_scenarios() {
        let pages = vec![
            PageCandidates::new(1, vec![Candidate::new(18, "Annual Report 2024")]),
            PageCandidates::new(2, vec![Candidate::new(16, "1. Introduction")]),
            PageCandidates::new(3, vec![Candidate::new(13, "2.3 Implementation Details")]),
        ];
        let outline = build_outline(&HeadingClassifier::new(), &pages);

        assert_eq!(outline.title, "Annual Report 2024");
        assert_eq!(
            outline.outline,
            vec![
                HeadingItem::new(HeadingLevel::H1, "Annual Report 2024", 1),
                HeadingItem::new(HeadingLevel::H1, "1. Introduction", 2),
                HeadingItem::new(HeadingLevel::H3, "2.3 Implementation Details", 3),
            ]
        );
    }

    #[test]
    fn test_build_outline_no_pages() {
        let outline = build_outline(&HeadingClassifier::new(), &[]);
        assert!(outline.is_untitled());
        assert!(outline.is_empty());
    }

    #[test]
    fn test_title_and_h1_can_disagree() {
        // title needs page 1; a later page can still produce H1 headings
        let pages = vec![
            PageCandidates::new(1, vec![Candidate::new(14, "Memo")]),
            PageCandidates::new(2, vec![Candidate::new(22, "Findings")]),
        ];
        let outline = build_outline(&HeadingClassifier::new(), &pages);
        assert!(outline.is_untitled());
        assert_eq!(
            outline.outline,
            vec![HeadingItem::new(HeadingLevel::H1, "Findings", 2)]
        );
    }
}
