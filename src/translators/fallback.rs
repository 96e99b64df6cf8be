//! Composite translator that falls back through an ordered list of providers.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{FallbackMetrics, MetricsReport, ProviderInfo, ProviderKind, Translator};
use crate::config::Config;
use crate::error::{ProviderFailure, TranslateError};
use crate::i18n::{LanguageInput, LanguageSet};

/// Tries each member in order and returns the first successful translation.
///
/// The chain accepts any language some member supports. Each attempt
/// re-validates the codes against that member and applies its rewrite, so a
/// member that cannot handle a language is skipped like one that failed.
/// When every member fails, the error lists every member's cause.
pub struct FallbackTranslator {
    members: Vec<Box<dyn Translator>>,
    info: ProviderInfo,
    metrics: FallbackMetrics,
}

impl FallbackTranslator {
    /// Build a chain from `members`, tried in the given order.
    ///
    /// A chain without members accepts every catalog language, so translating
    /// through it fails as exhausted rather than as a language error.
    pub fn new(members: Vec<Box<dyn Translator>>) -> Self {
        let languages = if members.is_empty() {
            LanguageSet::Full
        } else {
            LanguageSet::union(members.iter().map(|member| &member.info().languages))
        };

        Self {
            members,
            info: ProviderInfo {
                name: "Fallback",
                languages,
                rewrite: None,
            },
            metrics: FallbackMetrics::new(),
        }
    }

    /// Chain of every provider in the default order, sharing `client`.
    pub fn with_defaults(client: reqwest::Client) -> Self {
        Self::from_kinds(&ProviderKind::DEFAULT_ORDER, &client)
    }

    /// Chain of the providers listed in `config`, in that order.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = config.http_client()?;
        Ok(Self::from_kinds(&config.providers, &client))
    }

    fn from_kinds(kinds: &[ProviderKind], client: &reqwest::Client) -> Self {
        Self::new(kinds.iter().map(|kind| kind.build(client)).collect())
    }

    /// Member names in attempt order.
    pub fn members(&self) -> Vec<&'static str> {
        self.members.iter().map(|member| member.name()).collect()
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}

impl Default for FallbackTranslator {
    fn default() -> Self {
        Self::with_defaults(reqwest::Client::new())
    }
}

async fn attempt(
    member: &dyn Translator,
    text: &str,
    destination_code: &str,
    source_code: &str,
) -> anyhow::Result<String> {
    let destination = member.validate_language(&LanguageInput::from(destination_code))?;
    let source = member.validate_language(&LanguageInput::from(source_code))?;
    member.raw_exchange(text, &destination, &source).await
}

#[async_trait]
impl Translator for FallbackTranslator {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn raw_exchange(
        &self,
        text: &str,
        destination_code: &str,
        source_code: &str,
    ) -> anyhow::Result<String> {
        let mut failures = Vec::new();

        for (index, member) in self.members.iter().enumerate() {
            self.metrics.record_attempt();
            debug!(
                "Fallback: trying {} ({}/{})",
                member.name(),
                index + 1,
                self.members.len()
            );

            match attempt(member.as_ref(), text, destination_code, source_code).await {
                Ok(translation) => {
                    if !failures.is_empty() {
                        self.metrics.record_fallback();
                        info!(
                            "Fallback: {} succeeded after {} failed translator(s)",
                            member.name(),
                            failures.len()
                        );
                    }
                    return Ok(translation);
                }
                Err(error) => {
                    self.metrics.record_failure();
                    let remaining = self.members.len() - index - 1;
                    warn!(
                        "Fallback: {} failed ({:#}), {} translator(s) remaining",
                        member.name(),
                        error,
                        remaining
                    );
                    failures.push(ProviderFailure {
                        translator: member.name(),
                        error,
                    });
                }
            }
        }

        self.metrics.record_exhausted();
        Err(TranslateError::Exhausted(failures).into())
    }
}
