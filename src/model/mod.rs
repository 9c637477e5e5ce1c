//! Data model for OCR lines, heading candidates and document outlines.
//!
//! `TextLine` and `Candidate` live only while one page is processed;
//! `DocumentOutline` is what gets written to disk.

mod candidate;
mod outline;

pub use candidate::{Candidate, PageCandidates, TextLine};
pub use outline::{DocumentOutline, HeadingItem, HeadingLevel, UNTITLED_DOCUMENT};
