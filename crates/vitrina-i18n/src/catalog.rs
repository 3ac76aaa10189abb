//! Nested translation trees with dot-path lookup.
//!
//! Strings live in per-language JSON trees mirroring the UI structure
//! ("nav.home", "wizard.steps.contact.title"). Lookup never fails
//! visibly: a key missing from every tree renders as the key itself,
//! which keeps the page usable and makes the gap easy to spot.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use tracing::debug;

use crate::language::Language;

/// `{name}` style placeholders inside translated strings.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Translation strings for every supported language.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    trees: HashMap<Language, Value>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach one language's string tree.
    pub fn with_language(mut self, language: Language, tree: Value) -> Self {
        self.trees.insert(language, tree);
        self
    }

    /// Resolve a dot-separated key in one language's tree.
    ///
    /// Only string leaves resolve; landing on an object, array, or
    /// other non-string node is a miss.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let mut node = self.trees.get(&language)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    /// Translate a key with `{name}` placeholder substitution.
    ///
    /// Resolution order: the requested language, then Spanish, then
    /// English. When no tree has the key, the key itself is returned
    /// so the UI shows *something* traceable. Placeholders without a
    /// matching variable stay in the output verbatim.
    pub fn translate(&self, language: Language, key: &str, vars: &[(&str, &str)]) -> String {
        let mut chain = vec![language];
        for fallback in [Language::Es, Language::En] {
            if !chain.contains(&fallback) {
                chain.push(fallback);
            }
        }

        for candidate in chain {
            if let Some(text) = self.lookup(candidate, key) {
                return interpolate(text, vars);
            }
        }

        debug!(key, language = %language, "Translation key missing in every tree");
        key.to_string()
    }
}

/// Substitute `{name}` placeholders from a variable list.
fn interpolate(text: &str, vars: &[(&str, &str)]) -> String {
    if !text.contains('{') {
        return text.to_string();
    }

    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let name = &caps[1];
            vars.iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
