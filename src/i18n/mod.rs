//! Language catalog, language values and fuzzy language resolution.
//!
//! # Architecture
//!
//! - `catalog`: Single source of truth for language names and codes, plus the
//!   `LanguageSet` a translator declares
//! - `language`: `Language` (catalog entry) and `LanguageInput` (what callers pass in)
//! - `resolver`: Levenshtein-based lookup of free-form language names
//!
//! # Example
//!
//! ```
//! use multi_translate::i18n::{resolve, LanguageSet};
//!
//! let found = resolve("Fren", &LanguageSet::Full);
//! assert_eq!(found.language.code(), "fr");
//! ```

mod catalog;
mod language;
mod resolver;

pub use catalog::{LanguageCatalog, LanguageSet, AUTO_CODE, AUTO_NAME};
pub use language::{Language, LanguageInput};
pub use resolver::{resolve, LanguageMatch};
