use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{ensure_success, ProviderInfo, Translator};
use crate::i18n::LanguageSet;

const GOOGLE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";
const GOOGLE_V2_API_URL: &str = "https://clients5.google.com/translate_a/t";

/// Google Translate through the public `gtx` client endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    info: ProviderInfo,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, GOOGLE_API_URL)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            info: ProviderInfo {
                name: "Google",
                languages: LanguageSet::Full,
                rewrite: None,
            },
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn raw_exchange(
        &self,
        text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> Result<String> {
        debug!("Sending Google translation request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source_code),
                ("tl", destination_code),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to send request to Google Translate")?;

        let body: Value = ensure_success(response, "Google")
            .await?
            .json()
            .await
            .context("Failed to parse Google Translate response")?;

        join_sentences(&body)
    }
}

/// The response is `[[[translated, original, ...], ...], ...]`.
fn join_sentences(body: &Value) -> Result<String> {
    let sentences = body
        .get(0)
        .and_then(Value::as_array)
        .context("Google Translate response contained no sentences")?;

    Ok(sentences
        .iter()
        .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
        .collect())
}

/// Google Translate through the dictionary extension endpoint.
pub struct GoogleV2Translator {
    client: reqwest::Client,
    endpoint: String,
    info: ProviderInfo,
}

#[derive(Debug, Deserialize)]
struct V2Response {
    sentences: Vec<V2Sentence>,
}

#[derive(Debug, Deserialize)]
struct V2Sentence {
    #[serde(default)]
    trans: Option<String>,
}

impl GoogleV2Translator {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, GOOGLE_V2_API_URL)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            info: ProviderInfo {
                name: "GoogleV2",
                languages: LanguageSet::Full,
                rewrite: None,
            },
        }
    }
}

impl Default for GoogleV2Translator {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl Translator for GoogleV2Translator {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn raw_exchange(
        &self,
        text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> Result<String> {
        debug!("Sending GoogleV2 translation request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "dict-chrome-ex"),
                ("sl", source_code),
                ("tl", destination_code),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to send request to Google Translate (v2)")?;

        let body: V2Response = ensure_success(response, "GoogleV2")
            .await?
            .json()
            .await
            .context("Failed to parse Google Translate (v2) response")?;

        Ok(body
            .sentences
            .into_iter()
            .filter_map(|sentence| sentence.trans)
            .collect())
    }
}
