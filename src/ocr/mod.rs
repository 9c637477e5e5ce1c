//! OCR backend abstraction layer.
//!
//! Rasterization and character recognition are delegated to external
//! programs. The [`Rasterizer`] and [`OcrEngine`] traits isolate them from the
//! classification logic so either side can be replaced (or mocked in tests).

mod languages;
mod pdftoppm;
mod tesseract;

pub use languages::{LanguageSet, DEFAULT_LANGUAGES};
pub use pdftoppm::PdftoppmRasterizer;
pub use tesseract::TesseractEngine;

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use crate::error::{Error, Result};

/// One rasterized page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Location of the rendered image
    pub path: PathBuf,
}

impl PageImage {
    /// Create a new page image reference.
    pub fn new(number: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            number,
            path: path.into(),
        }
    }
}

/// The page images of one PDF, in page order.
///
/// Owns the scratch directory the images were rendered into, if any; the
/// directory is removed when this value is dropped.
#[derive(Debug, Default)]
pub struct RasterizedDocument {
    pages: Vec<PageImage>,
    _workdir: Option<TempDir>,
}

impl RasterizedDocument {
    /// Wrap page images that live outside any scratch directory.
    pub fn new(mut pages: Vec<PageImage>) -> Self {
        pages.sort_by_key(|p| p.number);
        Self {
            pages,
            _workdir: None,
        }
    }

    /// Wrap page images rendered into a scratch directory.
    pub fn in_workdir(mut pages: Vec<PageImage>, workdir: TempDir) -> Self {
        pages.sort_by_key(|p| p.number);
        Self {
            pages,
            _workdir: Some(workdir),
        }
    }

    /// Page images in ascending page order.
    pub fn pages(&self) -> &[PageImage] {
        &self.pages
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the document produced no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Converts a PDF into page images.
pub trait Rasterizer: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Render every page of the PDF. An empty result means the PDF has no pages.
    fn rasterize(&self, pdf: &Path) -> Result<RasterizedDocument>;
}

/// Converts a page image into hOCR markup.
pub trait OcrEngine: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Recognize the page and return its hOCR markup.
    fn recognize(&self, page: &PageImage, languages: &LanguageSet) -> Result<String>;
}

/// Whether one external program of the default backends can be launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    /// Executable that was checked
    pub binary: PathBuf,

    /// Package that provides it
    pub package: &'static str,

    /// Whether it started
    pub available: bool,
}

/// Check the `pdftoppm` and `tesseract` executables.
///
/// `None` checks the default name on `PATH`.
pub fn check_tools(pdftoppm: Option<&Path>, tesseract: Option<&Path>) -> [ToolStatus; 2] {
    let check = |binary: PathBuf, arg: &str, package: &'static str| {
        let available = command_available(&binary, arg);
        if !available {
            log::debug!("{} not found - install {}", binary.display(), package);
        }
        ToolStatus {
            binary,
            package,
            available,
        }
    };

    [
        check(
            pdftoppm.map_or_else(|| PathBuf::from(pdftoppm::DEFAULT_BINARY), Path::to_path_buf),
            "-v",
            "poppler-utils",
        ),
        check(
            tesseract.map_or_else(|| PathBuf::from(tesseract::DEFAULT_BINARY), Path::to_path_buf),
            "--version",
            "tesseract-ocr",
        ),
    ]
}

/// Check whether a program starts at all (its exit status is ignored).
pub fn command_available(binary: impl AsRef<Path>, version_arg: &str) -> bool {
    Command::new(binary.as_ref()).arg(version_arg).output().is_ok()
}

/// Run an external tool, mapping a failed launch to [`Error::ToolNotFound`].
pub(crate) fn run_tool(command: &mut Command, binary: &Path) -> Result<Output> {
    command.output().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::ToolNotFound(binary.display().to_string()),
        _ => Error::Io(e),
    })
}
