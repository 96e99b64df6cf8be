//! Unified client over several free machine-translation web services.
//!
//! Languages are taken from a shared catalog and can be given as codes or
//! found by fuzzy name lookup. Each provider validates and rewrites the codes
//! it receives, and a [`FallbackTranslator`] chains providers so that one
//! failing service does not fail the call.
//!
//! ```no_run
//! use multi_translate::{FallbackTranslator, LanguageInput, Translator};
//!
//! # async fn run() -> multi_translate::error::Result<()> {
//! let translator = FallbackTranslator::default();
//! let french = translator.get_language("Fren");
//! let result = translator
//!     .translate("Hello world", french.language.into(), LanguageInput::auto())
//!     .await?;
//! println!("{}", result.translation);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod translators;

pub use error::{ProviderFailure, TranslateError};
pub use i18n::{Language, LanguageInput, LanguageMatch};
pub use translators::{FallbackTranslator, TranslationResult, Translator};
