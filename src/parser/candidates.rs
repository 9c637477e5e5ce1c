//! Candidate extraction: noise filtering, whitespace cleanup and font size.

use crate::error::Result;
use crate::model::{Candidate, TextLine};

use super::hocr::parse_lines;
use super::options::LineSelector;

/// Lines containing any of these (case-insensitive) never become candidates.
pub const NOISE_PHRASES: [&str; 6] = [
    "copyright",
    "version",
    "page",
    "©",
    "international",
    "qualifications",
];

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check whether a line is boilerplate (copyright notices, page labels, ...).
pub fn is_noise(text: &str) -> bool {
    let lower = text.to_lowercase();
    NOISE_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Read the `x_size` value out of an hOCR properties string.
///
/// Every `x_size` fragment is read and the last one wins. The value must be
/// an integer token right after a single space; anything else (a decimal
/// such as `36.5`, a missing token) reads as 0, and negatives clamp to 0.
pub fn parse_font_size(properties: &str) -> u32 {
    properties
        .split(';')
        .map(str::trim)
        .filter(|fragment| fragment.starts_with("x_size"))
        .fold(0, |_, fragment| parse_size_fragment(fragment))
}

fn parse_size_fragment(fragment: &str) -> u32 {
    fragment
        .split(' ')
        .nth(1)
        .and_then(|token| token.parse::<i64>().ok())
        .map(|size| size.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// Turn a single OCR line into a candidate, or `None` if it is empty or noise.
pub fn to_candidate(line: &TextLine) -> Option<Candidate> {
    let text = clean_text(&line.text);
    if text.is_empty() || is_noise(&text) {
        return None;
    }
    Some(Candidate::new(parse_font_size(&line.properties), text))
}

/// Filter a page's OCR lines down to candidates, keeping line order.
pub fn extract_candidates(lines: &[TextLine]) -> Vec<Candidate> {
    lines.iter().filter_map(to_candidate).collect()
}

/// Parse a page of hOCR markup straight into candidates.
pub fn candidates_from_hocr(markup: &str, selector: LineSelector) -> Result<Vec<Candidate>> {
    let lines = parse_lines(markup, selector)?;
    Ok(extract_candidates(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Annual \n  Report\t2024 "), "Annual Report 2024");
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn test_is_noise() {
        assert!(is_noise("Copyright 2024"));
        assert!(is_noise("Page 3 of 10"));
        assert!(is_noise("© ACME"));
        assert!(is_noise("ISTQB International Board"));
        assert!(is_noise("Version 1.2"));
        assert!(is_noise("Foundation Level Qualifications"));
        // substring match, not word match
        assert!(is_noise("Homepages"));
        assert!(!is_noise("Annual Report"));
    }

    #[test]
    fn test_parse_font_size_integer() {
        let props = "bbox 10 20 300 60; baseline 0 -8; x_size 28; x_descenders 6; x_ascenders 7";
        assert_eq!(parse_font_size(props), 28);
    }

    #[test]
    fn test_parse_font_size_rejects_decimals() {
        assert_eq!(parse_font_size("bbox 1 2 3 4; x_size 33.75"), 0);
        assert_eq!(parse_font_size("x_size 36.5; x_descenders 8"), 0);
    }

    #[test]
    fn test_parse_font_size_malformed() {
        assert_eq!(parse_font_size(""), 0);
        assert_eq!(parse_font_size("bbox 1 2 3 4"), 0);
        assert_eq!(parse_font_size("x_size"), 0);
        assert_eq!(parse_font_size("x_size big"), 0);
        assert_eq!(parse_font_size("x_size -4"), 0);
        assert_eq!(parse_font_size("x_size NaN"), 0);
    }

    #[test]
    fn test_parse_font_size_last_fragment_wins() {
        assert_eq!(parse_font_size("x_size 20; x_size 40"), 40);
        // a malformed later fragment resets the size
        assert_eq!(parse_font_size("x_size 20; x_size 4.5"), 0);
        assert_eq!(parse_font_size("x_size 20; bbox 1 2 3 4"), 20);
    }

    #[test]
    fn test_parse_font_size_token_after_single_space() {
        assert_eq!(parse_font_size("x_size  28"), 0);
        assert_eq!(parse_font_size("x_size +28"), 28);
        assert_eq!(parse_font_size("x_size 99999999999"), u32::MAX);
    }

    #[test]
    fn test_decimal_size_candidate_reads_zero() {
        let markup = "<span class='ocr_line' title='bbox 0 0 9 9; x_size 36.5'>Annual Report</span>\
            <span class='ocr_line' title='bbox 0 9 9 18; x_size 20'>References</span>";
        let candidates = candidates_from_hocr(markup, LineSelector::OcrLine).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate::new(0, "Annual Report"),
                Candidate::new(20, "References"),
            ]
        );
    }

    #[test]
    fn test_extract_candidates_filters_and_orders() {
        let lines = vec![
            TextLine::new("  Annual   Report 2024 ", "x_size 18"),
            TextLine::new("Copyright 2024", "x_size 11"),
            TextLine::new("   ", "x_size 30"),
            TextLine::new("Summary", "bbox 1 2 3 4"),
        ];
        let candidates = extract_candidates(&lines);
        assert_eq!(
            candidates,
            vec![
                Candidate::new(18, "Annual Report 2024"),
                Candidate::new(0, "Summary"),
            ]
        );
    }

    #[test]
    fn test_candidates_from_hocr() {
        let markup = r#"<html><body>
            <span class='ocr_line' title='bbox 0 0 10 10; x_size 22'><span class='ocrx_word'>Übersicht</span></span>
            <span class='ocr_line' title='bbox 0 0 10 10; x_size 12'><span class='ocrx_word'>Page</span> <span class='ocrx_word'>2</span></span>
        </body></html>"#;
        let candidates = candidates_from_hocr(markup, LineSelector::OcrLine).unwrap();
        assert_eq!(candidates, vec![Candidate::new(22, "Übersicht")]);
    }
}
