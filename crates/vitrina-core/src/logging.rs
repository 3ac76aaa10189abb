//! Structured logging schema and field name constants for vitrina.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable issue, automatic fallback applied (bad env var, unsupported language) |
//! | INFO  | Lifecycle events, catalog (re)loads |
//! | DEBUG | Decision points and operation summaries (query results, recommendation scoring) |
//! | TRACE | Per-item iteration (individual record matching) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "core", "query", "recommend", "i18n"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "engine", "normalizer", "tfidf", "catalog"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "query", "normalize_all", "recommend", "translate"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Listing identifier being operated on.
pub const LISTING_ID: &str = "listing_id";

/// Search text driving a query.
pub const QUERY: &str = "query";

/// Translation key being resolved.
pub const KEY: &str = "key";

/// Interface language in effect.
pub const LANGUAGE: &str = "language";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of records returned on the current page.
pub const RESULT_COUNT: &str = "result_count";

/// Number of records matching the filters, before paging.
pub const MATCH_COUNT: &str = "match_count";

/// Page served (after clamping).
pub const PAGE: &str = "page";

/// Total pages for the current filter set.
pub const TOTAL_PAGES: &str = "total_pages";

/// Number of selected filter categories.
pub const CATEGORY_COUNT: &str = "category_count";

/// Requested recommendation count.
pub const TOP_K: &str = "top_k";
