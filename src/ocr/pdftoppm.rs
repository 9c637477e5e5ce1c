//! Rasterizer backed by poppler's `pdftoppm`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::parser::DEFAULT_DPI;

use super::{run_tool, PageImage, RasterizedDocument, Rasterizer};

pub(crate) const DEFAULT_BINARY: &str = "pdftoppm";

/// File name prefix for rendered pages; pdftoppm appends `-<n>.png`.
const PAGE_PREFIX: &str = "page";

/// Renders every page to PNG with `pdftoppm -png -r <dpi>`.
#[derive(Debug, Clone)]
pub struct PdftoppmRasterizer {
    binary: PathBuf,
    dpi: u32,
}

impl PdftoppmRasterizer {
    /// Create a rasterizer using `pdftoppm` from `PATH`.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            dpi: DEFAULT_DPI,
        }
    }

    /// Use a specific `pdftoppm` executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the rendering resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi.max(1);
        self
    }

    /// Configured resolution.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }
}

impl Default for PdftoppmRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for PdftoppmRasterizer {
    fn name(&self) -> &str {
        "pdftoppm"
    }

    fn rasterize(&self, pdf: &Path) -> Result<RasterizedDocument> {
        let workdir = tempfile::tempdir()?;
        let prefix = workdir.path().join(PAGE_PREFIX);

        log::debug!(
            "Rasterizing {} at {} dpi into {}",
            pdf.display(),
            self.dpi,
            workdir.path().display()
        );

        let output = run_tool(
            Command::new(&self.binary)
                .arg("-png")
                .arg("-r")
                .arg(self.dpi.to_string())
                .arg(pdf)
                .arg(&prefix),
            &self.binary,
        )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Rasterize(format!(
                "pdftoppm failed on {}: {}",
                pdf.display(),
                stderr.trim()
            )));
        }

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(workdir.path())? {
            let path = entry?.path();
            if let Some(number) = page_number_from_path(&path) {
                pages.push(PageImage::new(number, path));
            }
        }

        log::debug!("Rendered {} pages from {}", pages.len(), pdf.display());

        Ok(RasterizedDocument::in_workdir(pages, workdir))
    }
}

/// Extract the page number from `page-7.png` / `page-007.png`.
fn page_number_from_path(path: &Path) -> Option<u32> {
    if path.extension()? != "png" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let number = stem.strip_prefix(PAGE_PREFIX)?.strip_prefix('-')?;
    number.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_from_path() {
        assert_eq!(page_number_from_path(Path::new("/tmp/x/page-1.png")), Some(1));
        assert_eq!(page_number_from_path(Path::new("/tmp/x/page-012.png")), Some(12));
        assert_eq!(page_number_from_path(Path::new("/tmp/x/page-1.ppm")), None);
        assert_eq!(page_number_from_path(Path::new("/tmp/x/other-1.png")), None);
        assert_eq!(page_number_from_path(Path::new("/tmp/x/page-a.png")), None);
    }

    #[test]
    fn test_builder() {
        let rasterizer = PdftoppmRasterizer::new()
            .with_dpi(300)
            .with_binary("/opt/poppler/bin/pdftoppm");
        assert_eq!(rasterizer.dpi(), 300);
        assert_eq!(rasterizer.binary, PathBuf::from("/opt/poppler/bin/pdftoppm"));
        assert_eq!(PdftoppmRasterizer::default().dpi(), DEFAULT_DPI);
    }

    #[test]
    fn test_missing_binary() {
        let rasterizer = PdftoppmRasterizer::new().with_binary("ocroutline-missing-pdftoppm");
        let result = rasterizer.rasterize(Path::new("input/any.pdf"));
        assert!(matches!(result, Err(Error::ToolNotFound(_))));
    }
}
