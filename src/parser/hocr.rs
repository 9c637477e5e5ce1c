//! hOCR markup reader.
//!
//! Tesseract's hOCR output is XHTML: every recognized line is a `span` with
//! class `ocr_line` whose `title` attribute packs the geometry and the
//! estimated font size, e.g.
//! `bbox 132 204 1120 262; baseline 0 -12; x_size 44; x_descenders 10; x_ascenders 11`.

use scraper::{Html, Selector};

use crate::error::{Error, Result};
use crate::model::TextLine;

use super::options::LineSelector;

/// Parse one page of hOCR markup into its line elements, in document order.
pub fn parse_lines(markup: &str, selector: LineSelector) -> Result<Vec<TextLine>> {
    let document = Html::parse_document(markup);
    let css = selector.css();
    let lines = Selector::parse(css)
        .map_err(|e| Error::Markup(format!("Invalid line selector '{css}': {e:?}")))?;

    Ok(document
        .select(&lines)
        .map(|element| {
            let text: String = element.text().collect();
            let properties = element.value().attr("title").unwrap_or_default();
            TextLine::new(text, properties)
        })
        .collect())
}
