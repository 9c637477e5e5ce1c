//! JSON rendering for document outlines.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::DocumentOutline;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with two-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an outline to JSON. Non-ASCII text is written as-is.
pub fn to_json(outline: &DocumentOutline, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(outline),
        JsonFormat::Compact => serde_json::to_string(outline),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Write an outline to a file, replacing any existing file.
pub fn write_json(outline: &DocumentOutline, path: &Path, format: JsonFormat) -> Result<()> {
    let json = to_json(outline, format)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingItem, HeadingLevel};

    fn sample() -> DocumentOutline {
        DocumentOutline::new(
            "Jahresbericht – Übersicht",
            vec![HeadingItem::new(HeadingLevel::H1, "Jahresbericht – Übersicht", 1)],
        )
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\n  \"title\": "));
        assert!(json.contains("\"level\": \"H1\""));
        assert!(json.contains("\"page\": 1"));
    }

    #[test]
    fn test_to_json_keeps_non_ascii() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(json.contains("Übersicht"));
        assert!(!json.contains("\\u"));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_to_json_field_order() {
        let json = to_json(&DocumentOutline::untitled(), JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"title":"Untitled Document","outline":[]}"#);
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "stale content that is longer than the new file").unwrap();

        write_json(&DocumentOutline::untitled(), &path, JsonFormat::Compact).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: DocumentOutline = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, DocumentOutline::untitled());
    }
}
