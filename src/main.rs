//! Translate text from the command line through the provider fallback chain.
//!
//! Usage:
//!   multi-translate <destination> <text...> [--from <language>]
//!
//! Languages may be codes (`fr`, `zh-CN`) or approximate names (`Fren`).
//!
//! Optional environment variables:
//! - TRANSLATOR_PROVIDERS (defaults to google,google_v2,bing,deepl,reverso)
//! - TRANSLATOR_TIMEOUT_SECS (defaults to 15)
//! - TRANSLATOR_USER_AGENT

use anyhow::{bail, Context, Result};
use tracing::info;

use multi_translate::config::Config;
use multi_translate::{FallbackTranslator, LanguageInput, Translator};

struct Args {
    destination: String,
    source: Option<String>,
    text: String,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = args.into_iter();
    let destination = args
        .next()
        .context("Usage: multi-translate <destination> <text...> [--from <language>]")?;

    let mut source = None;
    let mut words = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--from" {
            source = Some(args.next().context("--from requires a language")?);
        } else {
            words.push(arg);
        }
    }

    if words.is_empty() {
        bail!("No text to translate");
    }

    Ok(Args {
        destination,
        source,
        text: words.join(" "),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("multi_translate=info".parse()?),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::from_env()?;
    let translator = FallbackTranslator::from_config(&config)?;

    info!("Translator chain: {}", translator.members().join(" -> "));

    let destination = translator.get_language(&args.destination);
    info!(
        "Destination: {} (similarity {:.2})",
        destination.language, destination.similarity
    );

    let source = match &args.source {
        Some(query) => {
            let found = translator.get_language(query);
            info!("Source: {} (similarity {:.2})", found.language, found.similarity);
            LanguageInput::from(found.language)
        }
        None => LanguageInput::auto(),
    };

    let result = translator
        .translate(&args.text, destination.language.into(), source)
        .await?;

    info!("Translated by {}", result.translator);
    println!("{}", result.translation);
    Ok(())
}
