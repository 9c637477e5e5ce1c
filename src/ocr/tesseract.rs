//! OCR engine backed by the `tesseract` command line tool.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

use super::{run_tool, LanguageSet, OcrEngine, PageImage};

pub(crate) const DEFAULT_BINARY: &str = "tesseract";

/// Runs `tesseract <image> stdout -l <langs> hocr` per page.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
    dpi: Option<u32>,
}

impl TesseractEngine {
    /// Create an engine using `tesseract` from `PATH`.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            dpi: None,
        }
    }

    /// Use a specific `tesseract` executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Tell tesseract the resolution the pages were rendered at.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi.max(1));
        self
    }

    fn command(&self, page: &PageImage, languages: &LanguageSet) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg(&page.path)
            .arg("stdout")
            .arg("-l")
            .arg(languages.to_tesseract_arg());
        if let Some(dpi) = self.dpi {
            command.arg("--dpi").arg(dpi.to_string());
        }
        command.arg("hocr");
        command
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, page: &PageImage, languages: &LanguageSet) -> Result<String> {
        let output = run_tool(&mut self.command(page, languages), &self.binary)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr {
                page: page.number,
                message: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
