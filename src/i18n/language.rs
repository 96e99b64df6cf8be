//! Language values: catalog-backed languages and caller-supplied language inputs.

use std::fmt;

use serde::Serialize;

use crate::i18n::{LanguageCatalog, AUTO_CODE};

/// A language taken from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    /// Canonical lowercase name (e.g., "french")
    name: &'static str,

    /// Catalog code (e.g., "fr")
    code: &'static str,
}

impl Language {
    pub(crate) const fn new(name: &'static str, code: &'static str) -> Self {
        Language { name, code }
    }

    /// Language used to request automatic source detection.
    pub fn auto() -> Language {
        Language::new(crate::i18n::AUTO_NAME, AUTO_CODE)
    }

    /// Create a Language from a catalog code.
    ///
    /// # Returns
    /// * `Some(Language)` named after the first catalog entry with that code
    /// * `None` if the code is not in the catalog
    ///
    /// # Example
    /// ```
    /// use multi_translate::i18n::Language;
    ///
    /// let german = Language::from_code("de").unwrap();
    /// assert_eq!(german.name(), "german");
    /// ```
    pub fn from_code(code: &str) -> Option<Language> {
        LanguageCatalog::get().language_for_code(code)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn is_auto(&self) -> bool {
        self.code == AUTO_CODE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// A language as supplied by the caller: a raw code or a structured [`Language`].
///
/// Translation results carry the input back unchanged, so callers can compare
/// against exactly what they passed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LanguageInput {
    Code(String),
    Language(Language),
}

impl LanguageInput {
    /// The automatic-detection sentinel, as a code.
    pub fn auto() -> Self {
        LanguageInput::Code(AUTO_CODE.to_string())
    }

    /// The code carried by this input (not validated).
    pub fn code(&self) -> &str {
        match self {
            LanguageInput::Code(code) => code,
            LanguageInput::Language(language) => language.code(),
        }
    }
}

impl Default for LanguageInput {
    fn default() -> Self {
        LanguageInput::auto()
    }
}

impl fmt::Display for LanguageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageInput::Code(code) => f.write_str(code),
            LanguageInput::Language(language) => language.fmt(f),
        }
    }
}

impl From<&str> for LanguageInput {
    fn from(code: &str) -> Self {
        LanguageInput::Code(code.to_string())
    }
}

impl From<String> for LanguageInput {
    fn from(code: String) -> Self {
        LanguageInput::Code(code)
    }
}

impl From<&String> for LanguageInput {
    fn from(code: &String) -> Self {
        LanguageInput::Code(code.clone())
    }
}

impl From<Language> for LanguageInput {
    fn from(language: Language) -> Self {
        LanguageInput::Language(language)
    }
}

impl From<&Language> for LanguageInput {
    fn from(language: &Language) -> Self {
        LanguageInput::Language(*language)
    }
}
