//! Plain-text digest of the directory for the community assistant.
//!
//! The assistant answers questions from a rendered snapshot of the
//! directory rather than live queries. Rejected listings never appear;
//! pending ones do, so answers stay current with submissions still in
//! review.

use crate::models::Submission;

/// Render the digest block: a caller-supplied header line followed by one
/// bullet per non-rejected listing.
pub fn build_digest(header: &str, submissions: &[Submission]) -> String {
    let mut text = format!("{}\n\n", header);
    for submission in submissions {
        if !submission.status.in_digest() {
            continue;
        }
        text.push_str(&format!(
            "- **{}** ({}): {}. [Descuento: {}]\n",
            submission.business_name,
            submission.category,
            submission.description,
            submission.discount
        ));
    }
    text
}
