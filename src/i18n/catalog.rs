//! Language catalog: single source of truth for language names and codes.
//!
//! The catalog maps canonical lowercase language names to the codes shared by
//! all translators. Several names may point at the same code ("creole",
//! "haitian" and "haitian creole" are all `ht`). Reverse lookups return the
//! first name in table order.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::i18n::Language;

/// Code used to ask a translator to detect the source language itself.
pub const AUTO_CODE: &str = "auto";

/// Catalog name of [`AUTO_CODE`].
pub const AUTO_NAME: &str = "automatic";

const LANGUAGES: &[(&str, &str)] = &[
    (AUTO_NAME, AUTO_CODE),
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("azerbaijani", "az"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("cebuano", "ceb"),
    ("chichewa", "ny"),
    ("chinese", "zh-CN"),
    ("chinese (simplified)", "zh-CN"),
    ("chinese (traditional)", "zh-TW"),
    ("corsican", "co"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("frisian", "fy"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("haitian", "ht"),
    ("creole", "ht"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hawaiian", "haw"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hmong", "hmn"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("korean", "ko"),
    ("kurdish", "ku"),
    ("kurdish (kurmanji)", "ku"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("mongolian", "mn"),
    ("myanmar", "my"),
    ("burmese", "my"),
    ("myanmar (burmese)", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia", "or"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("samoan", "sm"),
    ("scots", "gd"),
    ("gaelic", "gd"),
    ("scots gaelic", "gd"),
    ("serbian", "sr"),
    ("sesotho", "st"),
    ("shona", "sn"),
    ("sindhi", "sd"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uyghur", "ug"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

/// Process-wide language catalog.
///
/// Initialised once on first access and immutable thereafter, so it can be
/// shared between threads without locking.
pub struct LanguageCatalog {
    entries: &'static [(&'static str, &'static str)],
}

static CATALOG: OnceLock<LanguageCatalog> = OnceLock::new();

impl LanguageCatalog {
    /// Get the global catalog instance.
    pub fn get() -> &'static LanguageCatalog {
        CATALOG.get_or_init(|| LanguageCatalog { entries: LANGUAGES })
    }

    /// Every `(name, code)` pair in table order.
    pub fn lookup_all(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// All canonical names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Get the code for a canonical (lowercase) name.
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, code)| *code)
    }

    /// Get the first name carrying `code`.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| *name)
    }

    /// Check whether `code` belongs to the catalog's code range.
    pub fn contains_code(&self, code: &str) -> bool {
        self.name_for(code).is_some()
    }

    /// Build a [`Language`] from a canonical name.
    pub fn language(&self, name: &str) -> Option<Language> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(name, code)| Language::new(*name, *code))
    }

    /// Build a [`Language`] from a code, using the first name carrying it.
    pub fn language_for_code(&self, code: &str) -> Option<Language> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, code)| Language::new(*name, *code))
    }
}

/// The set of language names a translator accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSet {
    /// Every name in the catalog
    Full,
    /// A fixed subset of catalog names, in declaration order
    Restricted(Vec<&'static str>),
}

impl LanguageSet {
    pub fn restricted(names: &[&'static str]) -> Self {
        LanguageSet::Restricted(names.to_vec())
    }

    /// Names in the set, in catalog order for `Full` and declaration order otherwise.
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            LanguageSet::Full => LanguageCatalog::get().names().collect(),
            LanguageSet::Restricted(names) => names.clone(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            LanguageSet::Full => LanguageCatalog::get().code_for(name).is_some(),
            LanguageSet::Restricted(names) => names.contains(&name),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LanguageSet::Full => false,
            LanguageSet::Restricted(names) => names.is_empty(),
        }
    }

    /// Union of several sets. Any `Full` member makes the union `Full`;
    /// otherwise names keep first-seen order without duplicates.
    pub fn union<'a>(sets: impl IntoIterator<Item = &'a LanguageSet>) -> LanguageSet {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for set in sets {
            match set {
                LanguageSet::Full => return LanguageSet::Full,
                LanguageSet::Restricted(members) => {
                    for name in members {
                        if seen.insert(*name) {
                            names.push(*name);
                        }
                    }
                }
            }
        }

        LanguageSet::Restricted(names)
    }
}
