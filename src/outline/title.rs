//! Document title detection.

use crate::model::{Candidate, UNTITLED_DOCUMENT};

use super::classify::H1_MIN_EXCLUSIVE;

/// Pick the document title from the first page's candidates.
///
/// The title is the first line set in the page's largest font, provided that
/// font is larger than the H1 threshold. Otherwise the document is
/// `"Untitled Document"`.
pub fn extract_title(first_page: &[Candidate]) -> String {
    let Some(max_font_size) = first_page.iter().map(|c| c.font_size).max() else {
        return UNTITLED_DOCUMENT.to_string();
    };

    first_page
        .iter()
        .find(|c| c.font_size == max_font_size && c.font_size > H1_MIN_EXCLUSIVE)
        .map(|c| c.text.clone())
        .unwrap_or_else(|| UNTITLED_DOCUMENT.to_string())
}
