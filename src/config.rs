use std::time::Duration;

use anyhow::{Context, Result};

use crate::translators::ProviderKind;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:52.0) Gecko/20100101 Firefox/52.0";

#[derive(Debug, Clone)]
pub struct Config {
    /// Providers tried by the fallback translator, in order
    pub providers: Vec<ProviderKind>,

    // HTTP
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let providers = match std::env::var("TRANSLATOR_PROVIDERS") {
            Ok(value) => parse_providers(&value).context("Invalid TRANSLATOR_PROVIDERS")?,
            Err(_) => ProviderKind::DEFAULT_ORDER.to_vec(),
        };

        Ok(Self {
            providers,
            timeout_secs: std::env::var("TRANSLATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            user_agent: std::env::var("TRANSLATOR_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        })
    }

    /// HTTP client shared by every configured provider.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(&self.user_agent)
            .build()
            .context("Failed to create HTTP client")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            providers: ProviderKind::DEFAULT_ORDER.to_vec(),
            timeout_secs: 15,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Parse a comma-separated provider list, e.g. `"bing, deepl"`.
fn parse_providers(value: &str) -> Result<Vec<ProviderKind>> {
    let providers = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<ProviderKind>>>()?;

    if providers.is_empty() {
        anyhow::bail!("No providers listed");
    }

    Ok(providers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_providers_in_order() {
        let providers = parse_providers("reverso, bing,google_v2").unwrap();
        assert_eq!(
            providers,
            vec![
                ProviderKind::Reverso,
                ProviderKind::Bing,
                ProviderKind::GoogleV2
            ]
        );
    }

    #[test]
    fn test_parse_providers_rejects_unknown() {
        let err = parse_providers("google,yandex").unwrap_err();
        assert!(err.to_string().contains("yandex"));
    }

    #[test]
    fn test_parse_providers_rejects_empty() {
        assert!(parse_providers(" , ").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.providers, ProviderKind::DEFAULT_ORDER.to_vec());
        assert_eq!(config.timeout_secs, 15);
        assert!(config.http_client().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var("TRANSLATOR_PROVIDERS");
        std::env::remove_var("TRANSLATOR_TIMEOUT_SECS");
        std::env::remove_var("TRANSLATOR_USER_AGENT");

        let config = Config::from_env().expect("Should succeed");
        assert_eq!(config.providers.len(), 5);
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("TRANSLATOR_PROVIDERS", "deepl,google");
        std::env::set_var("TRANSLATOR_TIMEOUT_SECS", "3");
        std::env::set_var("TRANSLATOR_USER_AGENT", "test-agent");

        let config = Config::from_env();

        std::env::remove_var("TRANSLATOR_PROVIDERS");
        std::env::remove_var("TRANSLATOR_TIMEOUT_SECS");
        std::env::remove_var("TRANSLATOR_USER_AGENT");

        let config = config.expect("Should succeed");
        assert_eq!(
            config.providers,
            vec![ProviderKind::DeepL, ProviderKind::Google]
        );
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_providers() {
        std::env::set_var("TRANSLATOR_PROVIDERS", "babelfish");
        let result = Config::from_env();
        std::env::remove_var("TRANSLATOR_PROVIDERS");

        assert!(result.is_err());
    }
}
