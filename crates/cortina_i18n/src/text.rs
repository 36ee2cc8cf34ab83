use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Per-language text triple as authored in the CMS.
///
/// Fields are independently optional: editors translate incrementally, and
/// a page must still render while a translation is missing. Use
/// [`LocalizedText::resolve`] to read text for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub he: Option<String>,
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an untranslated plain string under the primary content
    /// language, so every locale still resolves to it.
    pub fn from_plain(text: impl Into<String>) -> Self {
        let mut t = Self::default();
        t.set(Locale::DEFAULT, text);
        t
    }

    pub fn set(&mut self, locale: Locale, text: impl Into<String>) {
        let slot = match locale {
            Locale::Ro => &mut self.ro,
            Locale::En => &mut self.en,
            Locale::He => &mut self.he,
        };
        *slot = Some(text.into());
    }

    /// Text for exactly this locale, no fallback.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        let slot = match locale {
            Locale::Ro => &self.ro,
            Locale::En => &self.en,
            Locale::He => &self.he,
        };
        slot.as_deref().filter(|s| !s.is_empty())
    }

    /// Text for display in this locale, walking the locale fallback chain.
    pub fn resolve(&self, locale: Locale) -> Option<&str> {
        locale.fallback_chain().into_iter().find_map(|l| self.get(l))
    }

    pub fn is_empty(&self) -> bool {
        Locale::ALL.iter().all(|&l| self.get(l).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_lookup_ignores_other_languages() {
        let mut t = LocalizedText::new();
        t.set(Locale::En, "Gallery");
        assert_eq!(t.get(Locale::En), Some("Gallery"));
        assert_eq!(t.get(Locale::Ro), None);
    }

    #[test]
    fn resolve_falls_back_to_primary_language() {
        let mut t = LocalizedText::new();
        t.set(Locale::Ro, "Galerie");
        assert_eq!(t.resolve(Locale::He), Some("Galerie"));
        assert_eq!(t.resolve(Locale::En), Some("Galerie"));
    }

    #[test]
    fn resolve_prefers_requested_locale() {
        let mut t = LocalizedText::new();
        t.set(Locale::Ro, "Galerie");
        t.set(Locale::He, "גלריה");
        assert_eq!(t.resolve(Locale::He), Some("גלריה"));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let mut t = LocalizedText::new();
        t.set(Locale::En, "");
        t.set(Locale::Ro, "Acasă");
        assert_eq!(t.resolve(Locale::En), Some("Acasă"));
        assert!(!t.is_empty());
        assert!(LocalizedText::new().is_empty());
    }

    #[test]
    fn plain_text_resolves_in_every_locale() {
        let t = LocalizedText::from_plain("Cortina");
        for l in Locale::ALL {
            assert_eq!(t.resolve(l), Some("Cortina"));
        }
    }
}
