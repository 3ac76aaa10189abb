//! Core data models for the vitrina directory.
//!
//! These types are shared across all vitrina crates and represent the
//! canonical domain entities. Raw collaborator records only exist as
//! loose JSON; `normalize` is the single translation point into the
//! types defined here, and the loose shape never leaks past it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// LISTING TYPES
// =============================================================================

/// Canonical business listing, safe to filter/paginate/render without
/// further null-checks.
///
/// `title` and `category` are always non-empty after normalization.
/// `email`/`phone` are present only when the owner opted into showing
/// them; this is a privacy contract, so absence means the renderer
/// never sees the value at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Opaque collaborator identifier; never regenerated client-side.
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Academy video entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

// =============================================================================
// MODERATION
// =============================================================================

/// Moderation state of a submitted listing.
///
/// New submissions start as `Pending`; moderators move them to `Approved`
/// or `Rejected` and may flip a decision later. Nothing returns to
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Awaiting moderator review; not shown in the public catalog.
    #[default]
    Pending,

    /// Visible in the public catalog.
    Approved,

    /// Hidden everywhere, including the assistant digest.
    Rejected,
}

impl ListingStatus {
    /// Whether listings in this state appear in the public catalog.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Whether listings in this state feed the assistant knowledge digest.
    /// Pending entries are included so the assistant stays current with
    /// submissions awaiting review.
    pub fn in_digest(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// Whether a moderator may move a listing from this state to `next`.
    pub fn can_transition_to(&self, next: ListingStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected) => true,
            (Self::Approved, Self::Rejected) | (Self::Rejected, Self::Approved) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Invalid listing status: {}", s)),
        }
    }
}

// =============================================================================
// SUBMISSION TYPES
// =============================================================================

/// Raw registration form payload, before validation.
///
/// Every field is optional; `validate_submission` decides what is missing
/// versus malformed. Unknown fields are ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionInput {
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub show_email: Option<bool>,
    #[serde(default)]
    pub show_phone: Option<bool>,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Kept as loose JSON: a non-array here is a validation error, not a
    /// deserialization failure.
    #[serde(default)]
    pub tags: Option<serde_json::Value>,
}

/// A sanitized, validated registration ready for moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub surname: String,
    pub business_name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub description: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub discount: String,
    pub show_email: bool,
    pub show_phone: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_listing_status_display() {
        assert_eq!(ListingStatus::Pending.to_string(), "pending");
        assert_eq!(ListingStatus::Approved.to_string(), "approved");
        assert_eq!(ListingStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn test_listing_status_from_str() {
        assert_eq!(
            ListingStatus::from_str("pending").unwrap(),
            ListingStatus::Pending
        );
        assert_eq!(
            ListingStatus::from_str("APPROVED").unwrap(),
            ListingStatus::Approved
        );
        assert_eq!(
            ListingStatus::from_str("Rejected").unwrap(),
            ListingStatus::Rejected
        );
        assert!(ListingStatus::from_str("archived").is_err());
        assert!(ListingStatus::from_str("").is_err());
    }

    #[test]
    fn test_listing_status_default_is_pending() {
        assert_eq!(ListingStatus::default(), ListingStatus::Pending);
    }

    #[test]
    fn test_listing_status_visibility() {
        assert!(!ListingStatus::Pending.is_public());
        assert!(ListingStatus::Approved.is_public());
        assert!(!ListingStatus::Rejected.is_public());

        assert!(ListingStatus::Pending.in_digest());
        assert!(ListingStatus::Approved.in_digest());
        assert!(!ListingStatus::Rejected.in_digest());
    }

    #[test]
    fn test_listing_status_transitions() {
        use ListingStatus::*;

        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Approved.can_transition_to(Rejected));
        assert!(Rejected.can_transition_to(Approved));

        // No path back to pending, no self-transitions.
        assert!(!Approved.can_transition_to(Pending));
        assert!(!Rejected.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Approved.can_transition_to(Approved));
    }

    #[test]
    fn test_listing_status_serde_lowercase() {
        let json = serde_json::to_string(&ListingStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");

        let back: ListingStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(back, ListingStatus::Rejected);
    }

    #[test]
    fn test_listing_record_skips_absent_optionals() {
        let record = ListingRecord {
            id: "b001".to_string(),
            title: "Apex Dental Care".to_string(),
            category: "Health & Wellness".to_string(),
            sub_category: None,
            description: String::new(),
            image_url: "https://example.com/bg.jpg".to_string(),
            logo_url: None,
            surname: String::new(),
            email: None,
            phone: None,
            website: None,
            discount: None,
            tags: Vec::new(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("email"));
        assert!(!json.contains("phone"));
        assert!(!json.contains("logo_url"));
        assert!(!json.contains("tags"));
    }

    #[test]
    fn test_submission_input_tolerates_partial_payloads() {
        let input: SubmissionInput = serde_json::from_str(r#"{"surname": "López"}"#).unwrap();
        assert_eq!(input.surname.as_deref(), Some("López"));
        assert!(input.email.is_none());
        assert!(input.tags.is_none());
    }

    #[test]
    fn test_submission_input_keeps_non_array_tags() {
        let input: SubmissionInput =
            serde_json::from_str(r#"{"tags": "not-a-list"}"#).unwrap();
        assert_eq!(
            input.tags,
            Some(serde_json::Value::String("not-a-list".to_string()))
        );
    }
}
