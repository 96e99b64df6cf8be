//! Fuzzy resolution of free-form language identifiers.

use serde::Serialize;
use strsim::normalized_levenshtein;

use crate::i18n::{Language, LanguageCatalog, LanguageSet};

/// Result of a language search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageMatch {
    /// The query as supplied
    pub input: String,

    /// The closest catalog language
    pub language: Language,

    /// Similarity between the query and `language.name()`, in `[0, 1]`, two decimals
    pub similarity: f64,
}

impl LanguageMatch {
    pub fn code(&self) -> &'static str {
        self.language.code()
    }

    pub fn is_exact(&self) -> bool {
        self.similarity >= 1.0
    }
}

/// Resolve `query` to the closest language in `supported`.
///
/// A query that is already a catalog code short-circuits to that code with a
/// similarity of 1.0. Otherwise the lowercased query is compared against every
/// supported name by normalised Levenshtein similarity; the first name with the
/// highest score wins. The code always comes from the full catalog.
///
/// # Panics
/// Panics if `supported` is empty.
pub fn resolve(query: &str, supported: &LanguageSet) -> LanguageMatch {
    let catalog = LanguageCatalog::get();

    if let Some(language) = catalog.language_for_code(query) {
        return LanguageMatch {
            input: query.to_string(),
            language,
            similarity: 1.0,
        };
    }

    let names = supported.names();
    assert!(
        !names.is_empty(),
        "cannot resolve language '{}' against an empty language set",
        query
    );

    let normalized = query.trim().to_lowercase();
    let mut best_name = names[0];
    let mut best_score = normalized_levenshtein(&normalized, best_name);
    for &name in &names[1..] {
        let score = normalized_levenshtein(&normalized, name);
        if score > best_score {
            best_name = name;
            best_score = score;
        }
    }

    // Supported sets only ever hold catalog names.
    let language = catalog
        .language(best_name)
        .unwrap_or_else(|| panic!("'{}' is not a catalog language name", best_name));

    LanguageMatch {
        input: query.to_string(),
        language,
        similarity: round2(best_score),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
