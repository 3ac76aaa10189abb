//! Normalization of loose collaborator records into canonical types.
//!
//! The listing collaborator returns arrays of loosely-typed JSON objects:
//! any field may be absent, null, or of an unexpected type. Everything
//! funnels through `normalize` / `normalize_video`, which are total:
//! each field independently degrades to its documented default and no
//! input shape can make them fail.

use serde_json::Value;

use crate::defaults::{
    EXTERNAL_VIDEO_TITLE, FALLBACK_CATEGORY, FALLBACK_TITLE, FALLBACK_VIDEO_TITLE,
};
use crate::models::{ListingRecord, VideoRecord};

/// Non-empty string at `key`, or None. Non-strings and empty strings are
/// both treated as absent, matching the source-of-record's falsy handling.
fn non_empty(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// String at `key` passed through as-is, or None when absent/non-string.
/// Unlike `non_empty`, an empty string stays present; the secondary
/// classification distinguishes "none" from "explicitly blank".
fn str_passthrough(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Consent-flag truthiness, matching the source-of-record's loose data:
/// booleans as themselves, numbers by non-zero, strings by non-empty.
fn truthy(raw: &Value, key: &str) -> bool {
    match raw.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    }
}

/// Opaque identifier: strings kept verbatim, integers rendered decimal,
/// anything else degrades to empty (the engine never keys on id).
fn id_field(raw: &Value) -> String {
    match raw.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Tag list: string elements of an array, in order. A non-array value is
/// never propagated.
fn tags_field(raw: &Value) -> Vec<String> {
    match raw.get("tags") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalize one loose listing object into a canonical `ListingRecord`.
///
/// Field contract:
/// - `title` ← `business_name`, else `title`, else `"Untitled"`.
/// - `category` ← `category`, else `"Other"` (never empty).
/// - `description` ← `description`, else `""`.
/// - `image_url` ← `background_url`, else the caller's fallback asset.
/// - `email`/`phone` are exposed only when the matching `show_email`/
///   `show_phone` flag is truthy AND the value is a non-empty string;
///   otherwise they are absent, never empty.
/// - `tags` ← string elements of `tags` when it is an array, else `[]`.
///
/// Total function: never fails, regardless of input shape.
pub fn normalize(raw: &Value, fallback_image_url: &str) -> ListingRecord {
    let email = if truthy(raw, "show_email") {
        non_empty(raw, "email")
    } else {
        None
    };
    let phone = if truthy(raw, "show_phone") {
        non_empty(raw, "phone")
    } else {
        None
    };

    ListingRecord {
        id: id_field(raw),
        title: non_empty(raw, "business_name")
            .or_else(|| non_empty(raw, "title"))
            .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        category: non_empty(raw, "category").unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
        sub_category: str_passthrough(raw, "sub_category"),
        description: non_empty(raw, "description").unwrap_or_default(),
        image_url: non_empty(raw, "background_url")
            .unwrap_or_else(|| fallback_image_url.to_string()),
        logo_url: non_empty(raw, "logo_url"),
        surname: non_empty(raw, "surname").unwrap_or_default(),
        email,
        phone,
        website: non_empty(raw, "website"),
        discount: non_empty(raw, "discount"),
        tags: tags_field(raw),
    }
}

/// Normalize a whole collaborator response in input order.
pub fn normalize_all(raw: &[Value], fallback_image_url: &str) -> Vec<ListingRecord> {
    raw.iter()
        .map(|item| normalize(item, fallback_image_url))
        .collect()
}

/// Whether a video URL points at the supported provider.
fn is_supported_video_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Normalize one loose video object into a canonical `VideoRecord`.
///
/// Untitled videos get `"Untitled Video"`; videos hosted elsewhere get
/// `"External Video"` since no metadata can be resolved for them.
pub fn normalize_video(raw: &Value) -> VideoRecord {
    let url = non_empty(raw, "url").unwrap_or_default();
    let title = non_empty(raw, "title").unwrap_or_else(|| {
        if !url.is_empty() && !is_supported_video_url(&url) {
            EXTERNAL_VIDEO_TITLE.to_string()
        } else {
            FALLBACK_VIDEO_TITLE.to_string()
        }
    });

    VideoRecord {
        id: id_field(raw),
        url,
        title,
        thumbnail_url: non_empty(raw, "thumbnail_url").or_else(|| non_empty(raw, "thumbnail")),
    }
}
