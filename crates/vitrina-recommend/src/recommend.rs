//! Ranking listings against free-text queries and against each other.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vitrina_core::models::ListingRecord;
use vitrina_core::{Error, Result};

use crate::text::{extract_tags, fold_text};
use crate::tfidf::TfidfModel;

/// One ranked suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub listing_id: String,
    pub title: String,
    pub category: String,
    /// Cosine similarity in `[0.0, 1.0]`.
    pub score: f32,
    /// Tags the query and the listing share, sorted. Empty when the
    /// match comes from general text content rather than a known
    /// keyword group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_tags: Vec<String>,
}

#[derive(Debug, Clone)]
struct IndexedListing {
    id: String,
    title: String,
    category: String,
    tags: Vec<String>,
}

/// A recommendation index over one normalized catalog.
///
/// Each listing is indexed as a single document of its title,
/// category, tags, and description. The index is immutable; rebuild it
/// when the catalog changes.
#[derive(Debug, Clone)]
pub struct Recommender {
    model: TfidfModel,
    entries: Vec<IndexedListing>,
}

impl Recommender {
    /// Build the index over a catalog.
    pub fn new(records: &[ListingRecord]) -> Self {
        let entries: Vec<IndexedListing> = records
            .iter()
            .map(|record| IndexedListing {
                id: record.id.clone(),
                title: record.title.clone(),
                category: record.category.clone(),
                tags: listing_tags(record),
            })
            .collect();

        let documents: Vec<String> = records
            .iter()
            .zip(&entries)
            .map(|(record, entry)| {
                format!(
                    "{} {} {} {}",
                    record.title,
                    record.category,
                    entry.tags.join(" "),
                    record.description
                )
            })
            .collect();

        let model = TfidfModel::fit(&documents);

        debug!(
            listing_count = entries.len(),
            vocab_size = model.vocab_size(),
            "Recommendation index built"
        );

        Self { model, entries }
    }

    /// Number of indexed listings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank listings against a free-text query.
    ///
    /// Returns up to `top_k` suggestions, best first. An empty query
    /// or an empty index yields no suggestions. Ties keep catalog
    /// order, so results are deterministic.
    pub fn recommend(&self, query_text: &str, top_k: usize) -> Vec<Recommendation> {
        if self.entries.is_empty() || query_text.trim().is_empty() || top_k == 0 {
            return Vec::new();
        }

        let query_tags = extract_tags(query_text);
        let scores = self.model.similarities(query_text);
        let results = self.rank(&scores, None, &query_tags, top_k);

        debug!(
            query_tag_count = query_tags.len(),
            top_k,
            result_count = results.len(),
            "Recommendation query complete"
        );

        results
    }

    /// Rank listings similar to one already in the index.
    ///
    /// The seed listing is excluded from its own results. Unknown ids
    /// are an error; an id can drop out of the index when the catalog
    /// is refetched.
    pub fn recommend_for(&self, listing_id: &str, top_k: usize) -> Result<Vec<Recommendation>> {
        let seed = self
            .entries
            .iter()
            .position(|entry| entry.id == listing_id)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "listing {} is not in the recommendation index",
                    listing_id
                ))
            })?;

        if top_k == 0 {
            return Ok(Vec::new());
        }

        let scores = self.model.similarities_to(seed).unwrap_or_default();
        let seed_tags = self.entries[seed].tags.clone();
        let results = self.rank(&scores, Some(seed), &seed_tags, top_k);

        debug!(
            listing_id,
            top_k,
            result_count = results.len(),
            "Related listings ranked"
        );

        Ok(results)
    }

    fn rank(
        &self,
        scores: &[f32],
        exclude: Option<usize>,
        reference_tags: &[String],
        top_k: usize,
    ) -> Vec<Recommendation> {
        let mut ranked: Vec<(usize, f32)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|(index, _)| Some(*index) != exclude)
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(top_k);

        ranked
            .into_iter()
            .map(|(index, score)| {
                let entry = &self.entries[index];
                let mut matched: Vec<String> = reference_tags
                    .iter()
                    .filter(|tag| entry.tags.contains(tag))
                    .cloned()
                    .collect();
                matched.sort();

                Recommendation {
                    listing_id: entry.id.clone(),
                    title: entry.title.clone(),
                    category: entry.category.clone(),
                    score,
                    matched_tags: matched,
                }
            })
            .collect()
    }
}

/// Submitted tags merged with tags derived from the description.
///
/// Submitted tags are folded and kebab-cased so they live in the same
/// namespace as derived group tags. First occurrence wins; derived
/// tags come after explicit ones.
fn listing_tags(record: &ListingRecord) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for raw in &record.tags {
        let folded = fold_text(raw)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        if !folded.is_empty() && !tags.contains(&folded) {
            tags.push(folded);
        }
    }

    for tag in extract_tags(&record.description) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    tags
}
