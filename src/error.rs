//! Error types for ocroutline.

use std::io;
use thiserror::Error;

/// Result type alias for ocroutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting an outline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// An external program (rasterizer or OCR engine) could not be started.
    #[error("Required tool not found: {0}")]
    ToolNotFound(String),

    /// Converting the PDF into page images failed.
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// The OCR engine failed on a page.
    #[error("OCR error on page {page}: {message}")]
    Ocr {
        /// Page number (1-indexed)
        page: u32,
        /// Engine diagnostic
        message: String,
    },

    /// The OCR markup could not be queried.
    #[error("Markup error: {0}")]
    Markup(String),

    /// A language code in the OCR language set is malformed.
    #[error("Invalid OCR language: {0}")]
    InvalidLanguage(String),

    /// A caller-supplied path or argument is unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error while serializing the outline.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a valid PDF");

        let err = Error::Ocr {
            page: 3,
            message: "engine crashed".to_string(),
        };
        assert_eq!(err.to_string(), "OCR error on page 3: engine crashed");

        let err = Error::ToolNotFound("tesseract".to_string());
        assert_eq!(err.to_string(), "Required tool not found: tesseract");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Render(_)));
    }
}
