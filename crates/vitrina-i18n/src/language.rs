//! Supported interface languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use vitrina_core::defaults::ENV_LANGUAGE;

/// An interface language the catalog ships strings for.
///
/// Spanish is the community's primary language and the default
/// everywhere a choice has to be made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Resolve a loose language tag to a supported language.
    ///
    /// Accepts BCP 47 style tags and POSIX locale strings by reading
    /// only the two-letter primary subtag: "es-MX", "ES", and
    /// "es_MX.UTF-8" all resolve to Spanish. Unsupported tags resolve
    /// to `None`.
    pub fn normalize(tag: &str) -> Option<Self> {
        let primary: String = tag.to_lowercase().chars().take(2).collect();
        match primary.as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Pick the interface language from the environment.
    ///
    /// `VITRINA_LANG` wins when it names a supported language; an
    /// unsupported value warns and falls through to the system `LANG`.
    /// When neither resolves, Spanish is used.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var(ENV_LANGUAGE) {
            match Self::normalize(&val) {
                Some(language) => return language,
                None => {
                    tracing::warn!(value = %val, "Unsupported VITRINA_LANG, using system locale");
                }
            }
        }

        std::env::var("LANG")
            .ok()
            .and_then(|val| Self::normalize(&val))
            .unwrap_or_default()
    }

    /// The other supported language, for the header toggle.
    pub fn toggle(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            _ => Err(format!("Invalid language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn test_normalize_plain_tags() {
        assert_eq!(Language::normalize("es"), Some(Language::Es));
        assert_eq!(Language::normalize("EN"), Some(Language::En));
    }

    #[test]
    fn test_normalize_regional_tags() {
        assert_eq!(Language::normalize("es-MX"), Some(Language::Es));
        assert_eq!(Language::normalize("en_US"), Some(Language::En));
        assert_eq!(Language::normalize("es_MX.UTF-8"), Some(Language::Es));
    }

    #[test]
    fn test_normalize_unsupported_tags() {
        assert_eq!(Language::normalize("fr"), None);
        assert_eq!(Language::normalize("C"), None);
        assert_eq!(Language::normalize(""), None);
        assert_eq!(Language::normalize("e"), None);
    }

    #[test]
    fn test_toggle_flips_between_the_two() {
        assert_eq!(Language::Es.toggle(), Language::En);
        assert_eq!(Language::En.toggle(), Language::Es);
        assert_eq!(Language::Es.toggle().toggle(), Language::Es);
    }

    #[test]
    fn test_display_and_from_str_round_trip() {
        for language in [Language::Es, Language::En] {
            let parsed: Language = language.to_string().parse().unwrap();
            assert_eq!(parsed, language);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(err.contains("de"));
    }

    #[test]
    fn test_serde_wire_form() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
