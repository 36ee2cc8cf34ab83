use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// Languages the site is published in.
///
/// Romanian is the primary content language; English and Hebrew content may
/// be partially translated, in which case text resolution falls back along
/// [`Locale::fallback_chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ro,
    En,
    He,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ro, Locale::En, Locale::He];

    /// Primary content language.
    pub const DEFAULT: Locale = Locale::Ro;

    /// Two-letter code used as the URL path prefix (`/ro/...`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ro => "ro",
            Locale::En => "en",
            Locale::He => "he",
        }
    }

    /// Regional code for platform-level formatting (numeric dates etc).
    pub fn regional_code(self) -> &'static str {
        match self {
            Locale::Ro => "ro-RO",
            Locale::En => "en-US",
            Locale::He => "he-IL",
        }
    }

    /// Hebrew pages render right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::He)
    }

    /// Parse a path segment or config value into a locale.
    ///
    /// Accepts regional forms (`ro-RO`, `en_US`) by taking the language
    /// subtag, and is case-insensitive. Returns `None` for anything outside
    /// the supported set.
    pub fn parse(s: &str) -> Option<Locale> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        let lang = normalized.split('-').next().unwrap_or("");
        match lang {
            "ro" => Some(Locale::Ro),
            "en" => Some(Locale::En),
            "he" => Some(Locale::He),
            _ => None,
        }
    }

    /// Lookup order for localized text: the requested locale first, then
    /// the primary content language, then the remaining locales. Deduped,
    /// order-preserving.
    pub fn fallback_chain(self) -> Vec<Locale> {
        let mut chain = vec![self, Locale::DEFAULT];
        chain.extend(Locale::ALL);

        let mut out = Vec::with_capacity(Locale::ALL.len());
        for l in chain {
            if !out.contains(&l) {
                out.push(l);
            }
        }
        out
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| I18nError::UnknownLocale(s.to_string()))
    }
}
