//! PDF header sniffing.
//!
//! The rasterizer gives poor diagnostics for files that are not PDFs at all,
//! so the batch driver checks the header before handing a file over.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Readers are required to accept a header anywhere in the first 1024 bytes.
const HEADER_WINDOW: usize = 1024;

/// Check that a file carries a PDF header.
///
/// # Example
/// ```no_run
/// use ocroutline::detect::sniff_pdf;
///
/// sniff_pdf("input/report.pdf").unwrap();
/// ```
pub fn sniff_pdf<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(HEADER_WINDOW);
    file.take(HEADER_WINDOW as u64).read_to_end(&mut head)?;
    sniff_pdf_bytes(&head)
}

/// Check that a byte prefix contains a PDF header.
pub fn sniff_pdf_bytes(data: &[u8]) -> Result<()> {
    let window = &data[..data.len().min(HEADER_WINDOW)];
    if window
        .windows(PDF_MAGIC.len())
        .any(|candidate| candidate == PDF_MAGIC)
    {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if a file name ends in `.pdf`.
///
/// The match is case-sensitive and covers a bare `.pdf` name, which
/// `Path::extension` does not report as an extension.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".pdf"))
}
