//! Submission sanitization and validation for the registration flow.
//!
//! Multi-layer cleanup before a submission reaches moderation:
//! 1. HTML tag stripping on every free-text field
//! 2. Character whitelist for prose fields (word chars, whitespace,
//!    common punctuation)
//! 3. Length caps per field
//! 4. Format checks (email, phone, discount vocabulary, website scheme)

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::defaults::{
    MAX_BUSINESS_NAME_LEN, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_SURNAME_LEN, MAX_TAG_LEN,
};
use crate::error::{Error, Result};
use crate::models::{ListingStatus, Submission, SubmissionInput};

/// The discount vocabulary offered by the registration wizard.
/// A submission naming any other value is rejected.
static ALLOWED_DISCOUNTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["5%", "10%", "15%", "20%", "25%", "30%", "40%", "50%"]
        .into_iter()
        .collect()
});

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

static PROSE_DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,;:!?'"()-]"#).unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9+()\s-]{7,20}$").unwrap());

static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

/// Remove HTML tag runs (`<...>`) from text.
pub fn strip_html(text: &str) -> String {
    HTML_TAG_RE.replace_all(text, "").into_owned()
}

/// Clean a prose field: strip HTML, drop characters outside the whitelist,
/// trim, and cap at `max_len` characters.
pub fn sanitize_text(text: &str, max_len: usize) -> String {
    let cleaned = strip_html(text);
    let cleaned = PROSE_DISALLOWED_RE.replace_all(&cleaned, "");
    cleaned.trim().chars().take(max_len).collect()
}

/// Validate an email address (post-canonicalization form).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a phone number: digits, `+()-`, spaces; 7 to 20 characters.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Whether the discount is one of the offered options.
pub fn is_valid_discount(discount: &str) -> bool {
    ALLOWED_DISCOUNTS.contains(discount)
}

/// Validate a website URL. Empty is valid (the field is optional);
/// anything else must carry an http(s) scheme.
pub fn is_valid_website(url: &str) -> bool {
    url.is_empty() || WEBSITE_RE.is_match(url)
}

/// Canonicalize an email: strip HTML, remove spaces, lowercase.
fn canonicalize_email(email: &str) -> String {
    strip_html(email).replace(' ', "").to_lowercase()
}

/// Stringify a loose tag element. Strings pass through; numbers and
/// booleans are rendered; null and containers are dropped.
fn tag_element_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Validate a registration payload into a moderation-ready `Submission`.
///
/// Checks run in order: required fields (reported together), tag shape,
/// then per-field format rules on the sanitized values. The first format
/// failure is returned; sanitization itself never fails.
pub fn validate_submission(input: &SubmissionInput) -> Result<Submission> {
    let required: [(&str, &Option<String>); 7] = [
        ("surname", &input.surname),
        ("email", &input.email),
        ("phone", &input.phone),
        ("business_name", &input.business_name),
        ("category", &input.category),
        ("discount", &input.discount),
        ("description", &input.description),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(Error::InvalidInput(format!(
            "Missing fields: {}",
            missing.join(", ")
        )));
    }

    let tags = match &input.tags {
        None => Vec::new(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(tag_element_text)
            .map(|tag| sanitize_text(&tag, MAX_TAG_LEN))
            .filter(|tag| !tag.is_empty())
            .collect(),
        Some(_) => {
            return Err(Error::InvalidInput("tags must be an array".to_string()));
        }
    };

    let surname = sanitize_text(input.surname.as_deref().unwrap_or(""), MAX_SURNAME_LEN);
    let business_name = sanitize_text(
        input.business_name.as_deref().unwrap_or(""),
        MAX_BUSINESS_NAME_LEN,
    );
    let category = sanitize_text(input.category.as_deref().unwrap_or(""), MAX_CATEGORY_LEN);
    let sub_category = input
        .sub_category
        .as_deref()
        .map(|s| sanitize_text(s, MAX_CATEGORY_LEN))
        .filter(|s| !s.is_empty());
    let description = sanitize_text(
        input.description.as_deref().unwrap_or(""),
        MAX_DESCRIPTION_LEN,
    );
    let website = strip_html(input.website.as_deref().unwrap_or(""))
        .trim()
        .to_string();
    let email = canonicalize_email(input.email.as_deref().unwrap_or(""));
    let phone = strip_html(input.phone.as_deref().unwrap_or(""));
    let discount = input.discount.as_deref().unwrap_or("").to_string();
    let logo_url = input
        .logo_url
        .as_deref()
        .map(|s| strip_html(s).trim().to_string())
        .filter(|s| !s.is_empty());

    if !is_valid_email(&email) {
        return Err(Error::InvalidInput("Invalid email format".to_string()));
    }
    if !is_valid_phone(&phone) {
        return Err(Error::InvalidInput("Invalid phone format".to_string()));
    }
    if !is_valid_discount(&discount) {
        return Err(Error::InvalidInput("Invalid discount option".to_string()));
    }
    if !is_valid_website(&website) {
        return Err(Error::InvalidInput(
            "Website must start with http:// or https://".to_string(),
        ));
    }

    Ok(Submission {
        surname,
        business_name,
        category,
        sub_category,
        description,
        email,
        phone,
        website: (!website.is_empty()).then_some(website),
        discount,
        show_email: input.show_email.unwrap_or(false),
        show_phone: input.show_phone.unwrap_or(false),
        logo_url,
        tags,
        status: ListingStatus::Pending,
        created_at: chrono::Utc::now(),
    })
}
