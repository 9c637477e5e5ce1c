//! Rendering module for writing outlines to disk.

mod json;

pub use json::{to_json, write_json, JsonFormat};
