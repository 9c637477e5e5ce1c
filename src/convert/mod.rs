//! PDF-to-outline conversion.
//!
//! [`OutlineExtractor`] wires a [`Rasterizer`] and an [`OcrEngine`] to the
//! candidate extractor and the heading classifier. Each page is OCR'd exactly
//! once; the title and the headings are both derived from the same cached
//! candidate lists.
//!
//! # Example
//!
//! ```no_run
//! use ocroutline::convert::OutlineExtractor;
//! use ocroutline::ExtractOptions;
//! use std::path::Path;
//!
//! fn main() -> ocroutline::Result<()> {
//!     let extractor = OutlineExtractor::new(ExtractOptions::default());
//!     if let Some(outline) = extractor.extract(Path::new("input/report.pdf"))? {
//!         println!("{}: {} headings", outline.title, outline.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod batch;

pub use batch::{
    list_pdf_inputs, output_path_for, process_pdf, BatchOptions, BatchProcessor, BatchReport,
    FileOutcome, FileStatus,
};

use std::path::Path;

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{DocumentOutline, PageCandidates};
use crate::ocr::{
    OcrEngine, PageImage, PdftoppmRasterizer, RasterizedDocument, Rasterizer, TesseractEngine,
};
use crate::outline::{build_outline, HeadingClassifier};
use crate::parser::{candidates_from_hocr, ExtractOptions};

/// Extracts title and heading outline from scanned PDFs.
pub struct OutlineExtractor {
    rasterizer: Box<dyn Rasterizer>,
    engine: Box<dyn OcrEngine>,
    classifier: HeadingClassifier,
    options: ExtractOptions,
}

impl OutlineExtractor {
    /// Create an extractor using `pdftoppm` and `tesseract` from `PATH`.
    pub fn new(options: ExtractOptions) -> Self {
        let rasterizer = PdftoppmRasterizer::new().with_dpi(options.dpi);
        let engine = TesseractEngine::new().with_dpi(options.dpi);
        Self::with_backends(rasterizer, engine, options)
    }

    /// Create an extractor with custom rasterizer and OCR engine.
    pub fn with_backends<R, E>(rasterizer: R, engine: E, options: ExtractOptions) -> Self
    where
        R: Rasterizer + 'static,
        E: OcrEngine + 'static,
    {
        Self {
            rasterizer: Box::new(rasterizer),
            engine: Box::new(engine),
            classifier: HeadingClassifier::new(),
            options,
        }
    }

    /// Get the extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the outline of a PDF.
    ///
    /// Returns `Ok(None)` when the PDF rasterizes to zero pages.
    pub fn extract(&self, pdf: &Path) -> Result<Option<DocumentOutline>> {
        let document = self.rasterizer.rasterize(pdf)?;
        if document.is_empty() {
            log::info!("{} has no pages, skipping", pdf.display());
            return Ok(None);
        }

        log::debug!(
            "{}: {} pages via {} + {}",
            pdf.display(),
            document.page_count(),
            self.rasterizer.name(),
            self.engine.name()
        );

        let pages = self.page_candidates(&document)?;
        Ok(Some(self.outline_from_pages(&pages)))
    }

    /// OCR every page of a rasterized document into candidate lists.
    pub fn page_candidates(&self, document: &RasterizedDocument) -> Result<Vec<PageCandidates>> {
        if self.options.parallel {
            document
                .pages()
                .par_iter()
                .map(|page| self.ocr_page(page))
                .collect()
        } else {
            document
                .pages()
                .iter()
                .map(|page| self.ocr_page(page))
                .collect()
        }
    }

    fn ocr_page(&self, page: &PageImage) -> Result<PageCandidates> {
        let markup = self.engine.recognize(page, &self.options.languages)?;
        let candidates = candidates_from_hocr(&markup, self.options.line_selector)?;
        Ok(PageCandidates::new(page.number, candidates))
    }

    /// Build the outline from already-extracted page candidates.
    pub fn outline_from_pages(&self, pages: &[PageCandidates]) -> DocumentOutline {
        build_outline(&self.classifier, pages)
    }

    /// Build the outline from hOCR markup, one string per page starting at page 1.
    pub fn outline_from_hocr<S: AsRef<str>>(&self, pages: &[S]) -> Result<DocumentOutline> {
        let pages = pages
            .iter()
            .zip(1u32..)
            .map(|(markup, number)| {
                let candidates = candidates_from_hocr(markup.as_ref(), self.options.line_selector)?;
                Ok(PageCandidates::new(number, candidates))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self.outline_from_pages(&pages))
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}
