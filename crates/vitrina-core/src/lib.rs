//! # vitrina-core
//!
//! Core types, normalization, and validation for the vitrina community
//! business directory.
//!
//! This crate provides the canonical record types and the single
//! translation point from loose collaborator JSON into them, plus the
//! submission validation and moderation primitives the directory is
//! built on.

pub mod defaults;
pub mod digest;
pub mod error;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod validate;

// Re-export commonly used types at crate root
pub use defaults::CatalogConfig;
pub use digest::build_digest;
pub use error::{Error, Result};
pub use models::{ListingRecord, ListingStatus, Submission, SubmissionInput, VideoRecord};
pub use normalize::{normalize, normalize_all, normalize_video};
pub use validate::{
    is_valid_discount, is_valid_email, is_valid_phone, is_valid_website, sanitize_text,
    strip_html, validate_submission,
};
