//! Centralized default constants for the vitrina directory.
//!
//! **This module is the single source of truth** for all shared default values.
//! All crates should reference these constants instead of defining their own
//! magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// PAGINATION
// =============================================================================

/// Page size for the directory listing views (home grid and admin table).
pub const PAGE_SIZE_LISTINGS: usize = 6;

/// Page size for the academy video view.
pub const PAGE_SIZE_VIDEOS: usize = 3;

/// Default record count requested from the listing collaborator.
pub const LIST_LIMIT_DEFAULT: i64 = 50;

/// Hard cap on records per collaborator fetch.
pub const LIST_LIMIT_MAX: i64 = 200;

// =============================================================================
// NORMALIZATION FALLBACKS
// =============================================================================

/// Display title when a listing has no business name or title.
pub const FALLBACK_TITLE: &str = "Untitled";

/// Filter category when a listing has none. Always non-empty so category
/// can be used as a filter key without null-checks.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Display title when a video has no resolvable title.
pub const FALLBACK_VIDEO_TITLE: &str = "Untitled Video";

/// Display title for videos hosted outside the supported providers.
pub const EXTERNAL_VIDEO_TITLE: &str = "External Video";

// =============================================================================
// SUBMISSION VALIDATION
// =============================================================================

/// Maximum length of the contact surname field in characters.
pub const MAX_SURNAME_LEN: usize = 120;

/// Maximum length of the business name in characters.
pub const MAX_BUSINESS_NAME_LEN: usize = 160;

/// Maximum length of the category field in characters.
pub const MAX_CATEGORY_LEN: usize = 120;

/// Maximum length of the description in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum length of a single tag in characters.
pub const MAX_TAG_LEN: usize = 40;

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

/// Default number of recommendations returned per query.
pub const RECOMMEND_TOP_K: usize = 3;

// =============================================================================
// LANGUAGE
// =============================================================================

/// Default interface language (the community's primary language).
pub const DEFAULT_LANGUAGE: &str = "es";

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Environment variable overriding the listing page size.
pub const ENV_PAGE_SIZE: &str = "VITRINA_PAGE_SIZE";

/// Environment variable overriding the recommendation count.
pub const ENV_RECOMMEND_TOP_K: &str = "VITRINA_RECOMMEND_TOP_K";

/// Environment variable selecting the interface language.
pub const ENV_LANGUAGE: &str = "VITRINA_LANG";

// =============================================================================
// CATALOG CONFIGURATION
// =============================================================================

/// Runtime-tunable catalog settings.
///
/// Read from environment variables at view construction
/// (no restart required for changes).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Listings per page in the directory views.
    pub page_size: usize,
    /// Recommendations returned per query.
    pub recommend_top_k: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE_LISTINGS,
            recommend_top_k: RECOMMEND_TOP_K,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables with fallback to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var(ENV_PAGE_SIZE) {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.page_size = n.clamp(1, 100),
                _ => {
                    tracing::warn!(value = %val, "Invalid VITRINA_PAGE_SIZE, using default");
                }
            }
        }

        if let Ok(val) = std::env::var(ENV_RECOMMEND_TOP_K) {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.recommend_top_k = n.clamp(1, 50),
                _ => {
                    tracing::warn!(value = %val, "Invalid VITRINA_RECOMMEND_TOP_K, using default");
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_sizes_are_positive() {
        const {
            assert!(PAGE_SIZE_LISTINGS > 0);
            assert!(PAGE_SIZE_VIDEOS > 0);
            assert!(PAGE_SIZE_VIDEOS < PAGE_SIZE_LISTINGS);
        }
    }

    #[test]
    fn list_limits_ordered() {
        const {
            assert!(LIST_LIMIT_DEFAULT > 0);
            assert!(LIST_LIMIT_DEFAULT < LIST_LIMIT_MAX);
        }
    }

    #[test]
    fn field_caps_ordered() {
        // Tag caps stay below every prose field; description is the longest.
        const {
            assert!(MAX_TAG_LEN < MAX_SURNAME_LEN);
            assert!(MAX_SURNAME_LEN == MAX_CATEGORY_LEN);
            assert!(MAX_BUSINESS_NAME_LEN > MAX_SURNAME_LEN);
            assert!(MAX_DESCRIPTION_LEN > MAX_BUSINESS_NAME_LEN);
        }
    }

    #[test]
    fn fallback_literals_non_empty() {
        const {
            assert!(!FALLBACK_TITLE.is_empty());
            assert!(!FALLBACK_CATEGORY.is_empty());
            assert!(!FALLBACK_VIDEO_TITLE.is_empty());
            assert!(!EXTERNAL_VIDEO_TITLE.is_empty());
        }
    }

    #[test]
    fn catalog_config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.page_size, PAGE_SIZE_LISTINGS);
        assert_eq!(config.recommend_top_k, RECOMMEND_TOP_K);
    }
}
