//! Extraction options and configuration.

use crate::ocr::LanguageSet;

/// Default rasterization resolution. Heading thresholds are calibrated
/// against font sizes measured at this resolution.
pub const DEFAULT_DPI: u32 = 200;

/// Options for extracting an outline from a PDF.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// OCR languages passed to the engine on every page
    pub languages: LanguageSet,

    /// Rasterization resolution in dots per inch
    pub dpi: u32,

    /// Which hOCR elements count as text lines
    pub line_selector: LineSelector,

    /// Whether to OCR the pages of one document in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the OCR language set.
    pub fn with_languages(mut self, languages: LanguageSet) -> Self {
        self.languages = languages;
        self
    }

    /// Set the rasterization resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi.max(1);
        self
    }

    /// Set the line selector.
    pub fn with_line_selector(mut self, selector: LineSelector) -> Self {
        self.line_selector = selector;
        self
    }

    /// Enable or disable parallel page OCR.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            languages: LanguageSet::default(),
            dpi: DEFAULT_DPI,
            line_selector: LineSelector::OcrLine,
            parallel: false,
        }
    }
}

/// Which hOCR line elements are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSelector {
    /// Only `span.ocr_line`
    #[default]
    OcrLine,
    /// `ocr_line` plus the header, caption and floating-text line classes
    AllLineKinds,
}

impl LineSelector {
    /// CSS selector matching the line elements.
    pub fn css(&self) -> &'static str {
        match self {
            LineSelector::OcrLine => "span.ocr_line",
            LineSelector::AllLineKinds => {
                "span.ocr_line, span.ocr_header, span.ocr_caption, span.ocr_textfloat"
            }
        }
    }
}
