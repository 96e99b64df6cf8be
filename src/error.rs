//! Error types returned at the translator boundary.

use thiserror::Error;

/// A single member failure recorded by the fallback translator.
#[derive(Debug)]
pub struct ProviderFailure {
    /// Name of the translator that failed
    pub translator: &'static str,

    /// The validation or exchange error it produced
    pub error: anyhow::Error,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The code is not present in the language catalog at all.
    #[error("Unknown language code '{0}'")]
    UnknownLanguage(String),

    /// The code is known but the active translator cannot handle it.
    #[error("The language code '{code}' does not match any supported language of the {translator} translator")]
    UnsupportedLanguage {
        code: String,
        translator: &'static str,
    },

    /// The translator's exchange failed; the cause is chained as the source.
    #[error("{translator} translation failed: {source:#}")]
    Translation {
        translator: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// Every member of a fallback chain failed, in attempt order.
    ///
    /// Use [`TranslateError::failures`] to inspect each member's cause.
    #[error("All translators failed: {}", describe_failures(.0))]
    Exhausted(Vec<ProviderFailure>),
}

impl TranslateError {
    /// Bad input from the caller: the language is unknown or unsupported.
    pub fn is_unknown_language(&self) -> bool {
        matches!(
            self,
            TranslateError::UnknownLanguage(_) | TranslateError::UnsupportedLanguage { .. }
        )
    }

    /// The exchange itself failed (possibly transient).
    pub fn is_translation_error(&self) -> bool {
        matches!(
            self,
            TranslateError::Translation { .. } | TranslateError::Exhausted(_)
        )
    }

    /// Per-member failures of an exhausted fallback chain (empty otherwise).
    pub fn failures(&self) -> &[ProviderFailure] {
        match self {
            TranslateError::Exhausted(failures) => failures,
            _ => &[],
        }
    }
}

fn describe_failures(failures: &[ProviderFailure]) -> String {
    if failures.is_empty() {
        return "no translators configured".to_string();
    }

    failures
        .iter()
        .map(|f| format!("{}: {:#}", f.translator, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, TranslateError>;
