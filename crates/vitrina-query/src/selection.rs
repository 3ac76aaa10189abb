//! Category selection state for the directory browser.
//!
//! Selection changes are expressed as a tagged [`SelectionChange`] value
//! rather than a magic category name, so any string (including "RESET")
//! is a legal category. Matching is exact and case-sensitive: "Food" and
//! "food" are distinct categories.

use serde::{Deserialize, Serialize};

/// A single edit to the category selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "category", rename_all = "snake_case")]
pub enum SelectionChange {
    /// Add the category if absent, remove it if present.
    Toggle(String),
    /// Clear the whole selection.
    ResetAll,
}

/// The set of currently selected categories.
///
/// Categories are kept unique and in first-selection order. An empty
/// selection means "no category filter", not "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    categories: Vec<String>,
}

impl CategorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one change to the selection.
    pub fn apply(&mut self, change: SelectionChange) {
        match change {
            SelectionChange::Toggle(category) => self.toggle(category),
            SelectionChange::ResetAll => self.reset(),
        }
    }

    /// Toggle a single category's membership.
    pub fn toggle(&mut self, category: impl Into<String>) {
        let category = category.into();
        match self.categories.iter().position(|c| *c == category) {
            Some(pos) => {
                self.categories.remove(pos);
            }
            None => self.categories.push(category),
        }
    }

    /// Drop every selected category.
    pub fn reset(&mut self) {
        self.categories.clear();
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Selected categories in first-selection order.
    pub fn as_slice(&self) -> &[String] {
        &self.categories
    }
}
