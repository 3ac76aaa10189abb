//! Bilingual UI strings for the vitrina directory.
//!
//! The site serves a Spanish-speaking school community with an English
//! toggle. This crate owns the two pieces the views need:
//!
//! - [`Language`]: the supported set, environment detection, and the
//!   header toggle
//! - [`TranslationCatalog`]: dot-path string lookup with placeholder
//!   interpolation and the es → en → key fallback chain

pub mod catalog;
pub mod language;

pub use catalog::TranslationCatalog;
pub use language::Language;
