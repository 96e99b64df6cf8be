use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{ensure_success, ProviderInfo, Translator};
use crate::i18n::{LanguageSet, AUTO_CODE};

const DEEPL_API_URL: &str = "https://www2.deepl.com/jsonrpc";

const DEEPL_LANGUAGES: &[&str] = &[
    "bulgarian",
    "chinese",
    "czech",
    "danish",
    "dutch",
    "english",
    "estonian",
    "finnish",
    "french",
    "german",
    "greek",
    "hungarian",
    "italian",
    "japanese",
    "latvian",
    "lithuanian",
    "polish",
    "portuguese",
    "romanian",
    "russian",
    "slovak",
    "slovenian",
    "spanish",
    "swedish",
];

/// DeepL through the web client's JSON-RPC endpoint.
pub struct DeepLTranslator {
    client: reqwest::Client,
    endpoint: String,
    info: ProviderInfo,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<JobsResult>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct JobsResult {
    translations: Vec<JobTranslation>,
}

#[derive(Debug, Deserialize)]
struct JobTranslation {
    beams: Vec<Beam>,
}

#[derive(Debug, Deserialize)]
struct Beam {
    postprocessed_sentence: String,
}

impl DeepLTranslator {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, DEEPL_API_URL)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            info: ProviderInfo {
                name: "DeepL",
                languages: LanguageSet::restricted(DEEPL_LANGUAGES),
                rewrite: Some(rewrite_code),
            },
        }
    }
}

impl Default for DeepLTranslator {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

/// DeepL takes uppercase ISO-639-1 codes without a region (`zh-CN` -> `ZH`).
fn rewrite_code(code: &str) -> Option<String> {
    if code == AUTO_CODE {
        return Some(code.to_string());
    }

    code.split('-')
        .next()
        .filter(|primary| !primary.is_empty())
        .map(str::to_uppercase)
}

fn build_payload(text: &str, destination_code: &str, source_code: &str) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "method": "LMT_handle_jobs",
        "params": {
            "jobs": [{
                "kind": "default",
                "raw_en_sentence": text,
                "raw_en_context_before": [],
                "raw_en_context_after": [],
                "preferred_num_beams": 4,
                "quality": "fast"
            }],
            "lang": {
                "user_preferred_langs": ["JA", "FR", "EN"],
                "source_lang_user_selected": source_code,
                "target_lang": destination_code
            },
            "priority": -1,
            "commonJobParams": {},
            "timestamp": chrono::Utc::now().timestamp()
        },
        "id": 63710028
    })
}

#[async_trait]
impl Translator for DeepLTranslator {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn raw_exchange(
        &self,
        text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> Result<String> {
        debug!("Sending DeepL translation request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&build_payload(text, destination_code, source_code))
            .send()
            .await
            .context("Failed to send request to DeepL")?;

        let body: JsonRpcResponse = ensure_success(response, "DeepL")
            .await?
            .json()
            .await
            .context("Failed to parse DeepL response")?;

        if let Some(error) = body.error {
            bail!("DeepL JSON-RPC error: {}", error);
        }

        body.result
            .and_then(|result| result.translations.into_iter().next())
            .and_then(|translation| translation.beams.into_iter().next())
            .map(|beam| beam.postprocessed_sentence)
            .context("DeepL response contained no translation beams")
    }
}
