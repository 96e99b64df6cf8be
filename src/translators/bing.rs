use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{ensure_success, ProviderInfo, Translator};
use crate::i18n::{LanguageSet, AUTO_CODE};

const BING_API_URL: &str = "https://www.bing.com/ttranslatev3";

// Session identifiers expected by the web translator endpoint
const BING_IG: &str = "839D27F8277F4AA3B0EDB83C255D0D70";
const BING_IID: &str = "translator.5033.3";

/// Microsoft Bing web translator.
pub struct BingTranslator {
    client: reqwest::Client,
    endpoint: String,
    info: ProviderInfo,
}

#[derive(Debug, Deserialize)]
struct BingResult {
    translations: Vec<BingTranslation>,
}

#[derive(Debug, Deserialize)]
struct BingTranslation {
    text: String,
}

impl BingTranslator {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, BING_API_URL)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            info: ProviderInfo {
                name: "Bing",
                languages: LanguageSet::Full,
                rewrite: Some(rewrite_code),
            },
        }
    }
}

impl Default for BingTranslator {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

/// Bing spells auto-detection and a few script variants differently.
fn rewrite_code(code: &str) -> Option<String> {
    let rewritten = match code {
        AUTO_CODE => "auto-detect",
        "zh-CN" => "zh-Hans",
        "zh-TW" => "zh-Hant",
        "iw" => "he",
        other => other,
    };
    Some(rewritten.to_string())
}

#[async_trait]
impl Translator for BingTranslator {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn raw_exchange(
        &self,
        text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> Result<String> {
        debug!("Sending Bing translation request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("IG", BING_IG), ("IID", BING_IID)])
            .header("Accept", "*/*")
            .header("Accept-Language", "en-US,en;q=0.5")
            .header("Referer", "https://www.bing.com/")
            .form(&[
                ("text", text),
                ("fromLang", source_code),
                ("to", destination_code),
            ])
            .send()
            .await
            .context("Failed to send request to Bing Translator")?;

        let results: Vec<BingResult> = ensure_success(response, "Bing")
            .await?
            .json()
            .await
            .context("Failed to parse Bing Translator response")?;

        results
            .into_iter()
            .next()
            .and_then(|result| result.translations.into_iter().next())
            .map(|translation| translation.text)
            .context("Bing Translator response contained no translations")
    }
}
