use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ensure_success, ProviderInfo, Translator};
use crate::i18n::{LanguageSet, AUTO_CODE};

const REVERSO_API_URL: &str = "https://api.reverso.net/translate/v1/translation";

/// Catalog code -> Reverso token, for every language Reverso supports.
const REVERSO_CODES: &[(&str, &str)] = &[
    ("de", "ger"),
    ("ar", "arab"),
    ("zh-CN", "chi"),
    ("es", "spa"),
    ("fr", "fra"),
    ("iw", "heb"),
    ("nl", "dut"),
    ("en", "eng"),
    ("it", "ita"),
    ("ja", "jpn"),
    ("pl", "pol"),
    ("pt", "por"),
    ("ro", "rum"),
    ("ru", "rus"),
    ("tr", "tur"),
];

const REVERSO_LANGUAGES: &[&str] = &[
    "german",
    "arabic",
    "chinese",
    "spanish",
    "french",
    "hebrew",
    "dutch",
    "english",
    "italian",
    "japanese",
    "polish",
    "portuguese",
    "romanian",
    "russian",
    "turkish",
];

/// Reverso translation API.
///
/// Reverso needs an explicit source language, so an `auto` source triggers a
/// detection request before the translation request.
pub struct ReversoTranslator {
    client: reqwest::Client,
    endpoint: String,
    info: ProviderInfo,
}

#[derive(Debug, Serialize)]
struct ReversoRequest<'a> {
    format: &'static str,
    from: &'a str,
    to: &'a str,
    input: &'a str,
    options: ReversoOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReversoOptions {
    origin: &'static str,
    sentence_splitter: bool,
    context_results: bool,
    language_detection: bool,
}

impl Default for ReversoOptions {
    fn default() -> Self {
        Self {
            origin: "reversodesktop",
            sentence_splitter: false,
            context_results: false,
            language_detection: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReversoResponse {
    #[serde(default)]
    translation: Vec<String>,
    language_detection: Option<LanguageDetection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageDetection {
    detected_language: String,
}

impl ReversoTranslator {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, REVERSO_API_URL)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            info: ProviderInfo {
                name: "Reverso",
                languages: LanguageSet::restricted(REVERSO_LANGUAGES),
                rewrite: Some(rewrite_code),
            },
        }
    }

    /// Detect the language of `text`, returned as a Reverso token (e.g. "por").
    pub async fn detect_language(&self, text: &str) -> Result<String> {
        let response = self
            .send(&ReversoRequest {
                format: "text",
                from: "eng",
                to: "fra",
                input: text,
                options: ReversoOptions::default(),
            })
            .await
            .context("Reverso language detection failed")?;

        let detected = response
            .language_detection
            .map(|detection| detection.detected_language)
            .context("Reverso response contained no language detection")?;

        debug!("Reverso detected source language: {}", detected);
        Ok(detected)
    }

    async fn send(&self, request: &ReversoRequest<'_>) -> Result<ReversoResponse> {
        debug!("Sending Reverso request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .context("Failed to send request to Reverso")?;

        ensure_success(response, "Reverso")
            .await?
            .json()
            .await
            .context("Failed to parse Reverso response")
    }
}

impl Default for ReversoTranslator {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

fn rewrite_code(code: &str) -> Option<String> {
    if code == AUTO_CODE {
        return Some(code.to_string());
    }

    REVERSO_CODES
        .iter()
        .find(|(catalog_code, _)| *catalog_code == code)
        .map(|(_, reverso_code)| reverso_code.to_string())
}

#[async_trait]
impl Translator for ReversoTranslator {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn raw_exchange(
        &self,
        text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> Result<String> {
        let source = if source_code == AUTO_CODE {
            self.detect_language(text).await?
        } else {
            source_code.to_string()
        };

        let response = self
            .send(&ReversoRequest {
                format: "text",
                from: &source,
                to: destination_code,
                input: text,
                options: ReversoOptions::default(),
            })
            .await?;

        response
            .translation
            .into_iter()
            .next()
            .context("Reverso response contained no translation")
    }
}
