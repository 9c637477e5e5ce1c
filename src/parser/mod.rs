//! hOCR parsing and candidate extraction.

pub mod candidates;
pub mod hocr;
mod options;

pub use candidates::{
    candidates_from_hocr, clean_text, extract_candidates, is_noise, parse_font_size,
    NOISE_PHRASES,
};
pub use hocr::parse_lines;
pub use options::{ExtractOptions, LineSelector, DEFAULT_DPI};
