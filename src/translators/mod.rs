//! Translator interface, language validation and the concrete providers.
//!
//! Every provider implements [`Translator`] by declaring a [`ProviderInfo`]
//! (name, supported languages, optional code rewrite) and a raw exchange with
//! its web service. Validation, fuzzy language lookup and result wrapping are
//! provided by the trait, so every provider, including the
//! [`FallbackTranslator`], exposes the same facade.

mod bing;
mod deepl;
mod fallback;
mod google;
mod metrics;
mod reverso;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TranslateError};
use crate::i18n::{resolve, LanguageCatalog, LanguageInput, LanguageMatch, LanguageSet, AUTO_CODE};

pub use bing::BingTranslator;
pub use deepl::DeepLTranslator;
pub use fallback::FallbackTranslator;
pub use google::{GoogleTranslator, GoogleV2Translator};
pub use metrics::{FallbackMetrics, MetricsReport};
pub use reverso::ReversoTranslator;

/// Maps a validated catalog code to the provider's own token.
///
/// Returns `None` for codes outside the provider's range.
pub type CodeRewrite = fn(&str) -> Option<String>;

/// Static description of a provider.
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub languages: LanguageSet,
    pub rewrite: Option<CodeRewrite>,
}

/// Result of a successful translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    /// Name of the translator that was called
    pub translator: &'static str,

    /// Source language exactly as supplied by the caller
    pub source_language: LanguageInput,

    /// Destination language exactly as supplied by the caller
    pub destination_language: LanguageInput,

    pub translation: String,
}

impl fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {}: {}",
            self.translator, self.source_language, self.destination_language, self.translation
        )
    }
}

#[async_trait]
pub trait Translator: Send + Sync {
    fn info(&self) -> &ProviderInfo;

    /// Exchange already validated, provider-ready codes with the remote service.
    async fn raw_exchange(
        &self,
        text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> anyhow::Result<String>;

    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Names of every language this translator accepts.
    fn supported_languages(&self) -> Vec<&'static str> {
        self.info().languages.names()
    }

    /// Find the supported language closest to `query`.
    ///
    /// Codes are recognised directly; names are matched by Levenshtein similarity.
    fn get_language(&self, query: &str) -> LanguageMatch {
        resolve(query, &self.info().languages)
    }

    /// Validate a language against this translator and return its provider-ready code.
    fn validate_language(&self, language: &LanguageInput) -> Result<String> {
        validate_language(self.info(), language)
    }

    /// Translate `text` into `destination`.
    ///
    /// Both languages are validated before any request is made. The result
    /// carries the language inputs as given, not the rewritten codes.
    async fn translate(
        &self,
        text: &str,
        destination: LanguageInput,
        source: LanguageInput,
    ) -> Result<TranslationResult> {
        let destination_code = self.validate_language(&destination)?;
        let source_code = self.validate_language(&source)?;

        debug!(
            "{}: translating {} chars ({} -> {})",
            self.name(),
            text.chars().count(),
            source_code,
            destination_code
        );

        match self
            .raw_exchange(text, &destination_code, &source_code)
            .await
        {
            Ok(translation) => Ok(TranslationResult {
                translator: self.name(),
                source_language: source,
                destination_language: destination,
                translation,
            }),
            Err(error) => Err(match error.downcast::<TranslateError>() {
                Ok(translate_error) => translate_error,
                Err(source) => TranslateError::Translation {
                    translator: self.name(),
                    source,
                },
            }),
        }
    }
}

/// Validate `language` against a provider and apply its code rewrite.
///
/// The `auto` code is accepted by every provider regardless of its language set.
pub fn validate_language(info: &ProviderInfo, language: &LanguageInput) -> Result<String> {
    let code = language.code();
    let catalog = LanguageCatalog::get();

    if !catalog.contains_code(code) {
        return Err(TranslateError::UnknownLanguage(code.to_string()));
    }

    let supported = code == AUTO_CODE
        || catalog
            .lookup_all()
            .iter()
            .any(|(name, c)| *c == code && info.languages.contains(name));
    if !supported {
        return Err(unsupported(info, code));
    }

    match info.rewrite {
        Some(rewrite) => rewrite(code).ok_or_else(|| unsupported(info, code)),
        None => Ok(code.to_string()),
    }
}

fn unsupported(info: &ProviderInfo, code: &str) -> TranslateError {
    TranslateError::UnsupportedLanguage {
        code: code.to_string(),
        translator: info.name,
    }
}

/// Fail with the status and body of an unsuccessful response.
async fn ensure_success(
    response: reqwest::Response,
    provider: &str,
) -> anyhow::Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
    bail!("{} API error ({}): {}", provider, status, body);
}

/// The providers that can be configured, in their default fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Google,
    GoogleV2,
    Bing,
    DeepL,
    Reverso,
}

impl ProviderKind {
    pub const DEFAULT_ORDER: [ProviderKind; 5] = [
        ProviderKind::Google,
        ProviderKind::GoogleV2,
        ProviderKind::Bing,
        ProviderKind::DeepL,
        ProviderKind::Reverso,
    ];

    pub fn build(self, client: &reqwest::Client) -> Box<dyn Translator> {
        let client = client.clone();
        match self {
            ProviderKind::Google => Box::new(GoogleTranslator::new(client)),
            ProviderKind::GoogleV2 => Box::new(GoogleV2Translator::new(client)),
            ProviderKind::Bing => Box::new(BingTranslator::new(client)),
            ProviderKind::DeepL => Box::new(DeepLTranslator::new(client)),
            ProviderKind::Reverso => Box::new(ReversoTranslator::new(client)),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Google => "google",
            ProviderKind::GoogleV2 => "google_v2",
            ProviderKind::Bing => "bing",
            ProviderKind::DeepL => "deepl",
            ProviderKind::Reverso => "reverso",
        };
        f.write_str(name)
    }
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "google_v2" | "google-v2" | "googlev2" => Ok(ProviderKind::GoogleV2),
            "bing" => Ok(ProviderKind::Bing),
            "deepl" => Ok(ProviderKind::DeepL),
            "reverso" => Ok(ProviderKind::Reverso),
            other => bail!("Unknown translation provider: '{}'", other),
        }
    }
}
