//! OCR language configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Language bundle used when nothing else is configured.
pub const DEFAULT_LANGUAGES: [&str; 9] = [
    "eng", "spa", "fra", "deu", "ita", "por", "rus", "chi_sim", "ara",
];

/// The set of language models the OCR engine loads for every page.
///
/// Codes are tesseract traineddata names (`eng`, `chi_sim`, `script/Latin`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet {
    codes: Vec<String>,
}

impl LanguageSet {
    /// Build a language set from individual codes.
    pub fn new<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Vec::new();
        for code in codes {
            let code = code.into();
            let code = code.trim();
            validate_code(code)?;
            if !set.iter().any(|existing: &String| existing == code) {
                set.push(code.to_string());
            }
        }

        if set.is_empty() {
            return Err(Error::InvalidLanguage("empty language set".to_string()));
        }

        Ok(Self { codes: set })
    }

    /// Parse a `+`- or comma-separated list such as `eng+fra` or `eng,deu`.
    pub fn parse(list: &str) -> Result<Self> {
        Self::new(
            list.split(['+', ','])
                .map(str::trim)
                .filter(|code| !code.is_empty()),
        )
    }

    /// Language codes in configured order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Render the set as tesseract's `-l` argument.
    pub fn to_tesseract_arg(&self) -> String {
        self.codes.join("+")
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self {
            codes: DEFAULT_LANGUAGES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tesseract_arg())
    }
}

impl FromStr for LanguageSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn validate_code(code: &str) -> Result<()> {
    if code.is_empty() {
        return Err(Error::InvalidLanguage("empty language code".to_string()));
    }

    let valid = code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/'));
    if !valid {
        return Err(Error::InvalidLanguage(code.to_string()));
    }

    Ok(())
}
