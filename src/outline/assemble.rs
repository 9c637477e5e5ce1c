//! Outline assembly across pages.

use std::collections::HashSet;

use crate::model::{DocumentOutline, HeadingItem};

/// Drop every heading whose text was already seen, keeping first occurrences.
///
/// Headings must arrive in page order; a repeated text on a later page
/// (running headers, "References" twice) collapses into the first entry
/// whatever its level.
pub fn dedup_headings<I>(headings: I) -> Vec<HeadingItem>
where
    I: IntoIterator<Item = HeadingItem>,
{
    let mut seen = HashSet::new();
    headings
        .into_iter()
        .filter(|heading| seen.insert(heading.text.clone()))
        .collect()
}

/// Combine the title and the per-page heading lists into a document outline.
pub fn assemble_outline<I>(title: String, pages: I) -> DocumentOutline
where
    I: IntoIterator<Item = Vec<HeadingItem>>,
{
    DocumentOutline::new(title, dedup_headings(pages.into_iter().flatten()))
}
