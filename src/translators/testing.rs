//! In-memory translator used by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ProviderInfo, Translator};
use crate::i18n::LanguageSet;

pub(crate) struct StubTranslator {
    info: ProviderInfo,
    outcome: Result<&'static str, &'static str>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubTranslator {
    pub(crate) fn succeeding(name: &'static str, translation: &'static str) -> Self {
        Self::with_outcome(name, Ok(translation))
    }

    pub(crate) fn failing(name: &'static str, reason: &'static str) -> Self {
        Self::with_outcome(name, Err(reason))
    }

    fn with_outcome(name: &'static str, outcome: Result<&'static str, &'static str>) -> Self {
        Self {
            info: ProviderInfo {
                name,
                languages: LanguageSet::Full,
                rewrite: None,
            },
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// `(destination, source)` codes received by each raw exchange.
    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for StubTranslator {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn raw_exchange(
        &self,
        _text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> anyhow::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((destination_code.to_string(), source_code.to_string()));

        match self.outcome {
            Ok(translation) => Ok(translation.to_string()),
            Err(reason) => anyhow::bail!("{}", reason),
        }
    }
}

#[async_trait]
impl Translator for Arc<StubTranslator> {
    fn info(&self) -> &ProviderInfo {
        self.as_ref().info()
    }

    async fn raw_exchange(
        &self,
        text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> anyhow::Result<String> {
        self.as_ref()
            .raw_exchange(text, destination_code, source_code)
            .await
    }
}
