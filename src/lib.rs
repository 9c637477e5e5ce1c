//! # ocroutline
//!
//! Title and heading outline extraction from scanned PDF documents.
//!
//! Pages are rasterized, run through OCR to hOCR, and the recognized lines
//! are classified into H1/H2/H3 headings by their estimated font size and a
//! few textual cues. The result is a small JSON document per PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ocroutline::{extract_outline, render, JsonFormat};
//!
//! fn main() -> ocroutline::Result<()> {
//!     if let Some(outline) = extract_outline("input/report.pdf")? {
//!         println!("{}", render::to_json(&outline, JsonFormat::Pretty)?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pluggable backends**: `pdftoppm` and `tesseract` by default, any
//!   [`ocr::Rasterizer`] / [`ocr::OcrEngine`] otherwise
//! - **Single OCR pass**: title and headings share one candidate list per page
//! - **Batch mode**: per-file failure isolation with a final tally
//! - **Parallel processing**: optional, via Rayon, with stable output order

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod ocr;
pub mod outline;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{BatchOptions, BatchProcessor, BatchReport, FileStatus, OutlineExtractor};
pub use error::{Error, Result};
pub use model::{
    Candidate, DocumentOutline, HeadingItem, HeadingLevel, PageCandidates, TextLine,
    UNTITLED_DOCUMENT,
};
pub use ocr::{LanguageSet, OcrEngine, PdftoppmRasterizer, Rasterizer, TesseractEngine};
pub use parser::{ExtractOptions, LineSelector};
pub use render::JsonFormat;

use std::path::{Path, PathBuf};

/// Extract the outline of a scanned PDF with default options.
///
/// Returns `Ok(None)` if the PDF has no pages.
///
/// # Example
///
/// ```no_run
/// use ocroutline::extract_outline;
///
/// let outline = extract_outline("scan.pdf").unwrap();
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Result<Option<DocumentOutline>> {
    OutlineExtractor::default().extract(path.as_ref())
}

/// Extract the outline of a scanned PDF with custom options.
///
/// # Example
///
/// ```no_run
/// use ocroutline::{extract_outline_with_options, ExtractOptions, LanguageSet};
///
/// let options = ExtractOptions::new()
///     .with_languages(LanguageSet::parse("eng+deu")?)
///     .with_dpi(300);
/// let outline = extract_outline_with_options("scan.pdf", options)?;
/// # Ok::<(), ocroutline::Error>(())
/// ```
pub fn extract_outline_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Option<DocumentOutline>> {
    OutlineExtractor::new(options).extract(path.as_ref())
}

/// Build an outline from pre-computed hOCR pages (page 1 first).
///
/// No external tool is involved.
///
/// # Example
///
/// ```
/// let page = "<span class='ocr_line' title='bbox 0 0 9 9; x_size 24'>Field Guide</span>";
/// let outline = ocroutline::outline_from_hocr(&[page]).unwrap();
/// assert_eq!(outline.title, "Field Guide");
/// ```
pub fn outline_from_hocr<S: AsRef<str>>(pages: &[S]) -> Result<DocumentOutline> {
    OutlineExtractor::default().outline_from_hocr(pages)
}

/// Process every PDF in `input_dir` into `output_dir` with default options.
///
/// # Example
///
/// ```no_run
/// let report = ocroutline::process_directory("input", "output")?;
/// println!("{} written, {} failed", report.written(), report.failed());
/// # Ok::<(), ocroutline::Error>(())
/// ```
pub fn process_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
) -> Result<BatchReport> {
    let options = BatchOptions::new()
        .with_input_dir(input_dir.as_ref())
        .with_output_dir(output_dir.as_ref());
    BatchProcessor::new(OutlineExtractor::default(), options).run()
}

/// Builder for configuring the OCR pipeline.
///
/// # Example
///
/// ```no_run
/// use ocroutline::OcrOutline;
///
/// let outline = OcrOutline::new()
///     .with_languages("eng+fra")?
///     .with_dpi(300)
///     .with_tesseract("/usr/local/bin/tesseract")
///     .parallel()
///     .extract("scan.pdf")?;
/// # Ok::<(), ocroutline::Error>(())
/// ```
pub struct OcrOutline {
    options: ExtractOptions,
    pdftoppm: Option<PathBuf>,
    tesseract: Option<PathBuf>,
}

impl OcrOutline {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
            pdftoppm: None,
            tesseract: None,
        }
    }

    /// Set the OCR languages (`eng+fra`, `eng,deu`).
    pub fn with_languages(mut self, languages: &str) -> Result<Self> {
        self.options = self.options.with_languages(LanguageSet::parse(languages)?);
        Ok(self)
    }

    /// Set the rasterization resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.options = self.options.with_dpi(dpi);
        self
    }

    /// Use a specific `pdftoppm` executable.
    pub fn with_pdftoppm(mut self, binary: impl Into<PathBuf>) -> Self {
        self.pdftoppm = Some(binary.into());
        self
    }

    /// Use a specific `tesseract` executable.
    pub fn with_tesseract(mut self, binary: impl Into<PathBuf>) -> Self {
        self.tesseract = Some(binary.into());
        self
    }

    /// Also read hOCR header, caption and floating-text lines.
    pub fn all_line_kinds(mut self) -> Self {
        self.options = self.options.with_line_selector(LineSelector::AllLineKinds);
        self
    }

    /// OCR pages in parallel.
    pub fn parallel(mut self) -> Self {
        self.options = self.options.with_parallel(true);
        self
    }

    /// Get the configured extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Build the extractor.
    pub fn build(self) -> OutlineExtractor {
        let mut rasterizer = PdftoppmRasterizer::new().with_dpi(self.options.dpi);
        if let Some(binary) = self.pdftoppm {
            rasterizer = rasterizer.with_binary(binary);
        }

        let mut engine = TesseractEngine::new().with_dpi(self.options.dpi);
        if let Some(binary) = self.tesseract {
            engine = engine.with_binary(binary);
        }

        OutlineExtractor::with_backends(rasterizer, engine, self.options)
    }

    /// Build the extractor and run it on one PDF.
    pub fn extract<P: AsRef<Path>>(self, path: P) -> Result<Option<DocumentOutline>> {
        self.build().extract(path.as_ref())
    }
}

impl Default for OcrOutline {
    fn default() -> Self {
        Self::new()
    }
}
