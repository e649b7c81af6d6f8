//! Language tags and localized value pairs for the bilingual site.

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English, the fallback language.
    #[default]
    En,
    /// Spanish.
    Es,
}

impl Lang {
    /// Maps a BCP 47-ish language tag to a supported language.
    ///
    /// Any tag starting with `es` (case-insensitive, so `es`, `es-MX`,
    /// `es_AR`) selects Spanish; everything else falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.len() >= 2 && tag.as_bytes()[..2].eq_ignore_ascii_case(b"es") {
            Lang::Es
        } else {
            Lang::En
        }
    }

    /// Short tag for this language.
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value provided in both site languages.
///
/// Round-trips the `{ "en": …, "es": … }` shape the content documents use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Localized<T> {
    /// English variant.
    pub en: T,
    /// Spanish variant.
    pub es: T,
}

impl<T> Localized<T> {
    /// Creates a localized pair.
    pub fn new(en: T, es: T) -> Self {
        Self { en, es }
    }

    /// Picks the variant for the given language.
    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::En => &self.en,
            Lang::Es => &self.es,
        }
    }
}
