//! A small TF-IDF index over listing documents.
//!
//! The catalog is tiny (a school community directory), so the model
//! keeps sparse unit-length vectors per document and scores queries
//! with a plain dot product. Terms come from folded text, weights use
//! smoothed inverse document frequency:
//!
//! ```text
//! idf(t) = ln((1 + docs) / (1 + df(t))) + 1
//! ```
//!
//! Smoothing keeps every seen term's weight positive and bounded, so
//! one ubiquitous word cannot zero out a document.

use std::collections::{BTreeSet, HashMap};

use crate::text::{fold_text, tokenize};

/// Sparse term-weight vector, keyed by vocabulary index.
pub type TermVector = HashMap<usize, f32>;

/// A TF-IDF model fitted over one set of documents.
#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    doc_vectors: Vec<TermVector>,
}

impl TfidfModel {
    /// Fit the model over a document set.
    ///
    /// Documents are folded and tokenized internally, so callers pass
    /// raw display text. Vocabulary indexes are assigned in sorted
    /// term order and are stable for a given document set.
    pub fn fit(documents: &[String]) -> Self {
        let token_lists: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(&fold_text(doc)))
            .collect();

        let terms: BTreeSet<&str> = token_lists
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &token_lists {
            let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                df[vocabulary[term]] += 1;
            }
        }

        let doc_count = documents.len();
        let idf: Vec<f32> = df
            .iter()
            .map(|&seen_in| ((1 + doc_count) as f32 / (1 + seen_in) as f32).ln() + 1.0)
            .collect();

        let doc_vectors = token_lists
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary, &idf))
            .collect();

        Self {
            vocabulary,
            idf,
            doc_vectors,
        }
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.doc_vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_vectors.is_empty()
    }

    /// Number of distinct terms seen during fitting.
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vectorize arbitrary text with the fitted weights.
    ///
    /// Terms outside the fitted vocabulary are dropped; text with no
    /// known terms embeds to the zero vector (an empty map).
    pub fn embed(&self, text: &str) -> TermVector {
        let tokens = tokenize(&fold_text(text));
        weigh(&tokens, &self.vocabulary, &self.idf)
    }

    /// Cosine similarity of a query against every indexed document,
    /// in document order.
    pub fn similarities(&self, text: &str) -> Vec<f32> {
        let query = self.embed(text);
        self.doc_vectors
            .iter()
            .map(|doc| cosine(&query, doc))
            .collect()
    }

    /// Similarities seeded by an indexed document's own vector.
    ///
    /// Returns `None` when the index is out of range. The seed
    /// document scores 1.0 against itself.
    pub fn similarities_to(&self, index: usize) -> Option<Vec<f32>> {
        let seed = self.doc_vectors.get(index)?;
        Some(self.doc_vectors.iter().map(|doc| cosine(seed, doc)).collect())
    }
}

/// Count terms, weigh by idf, and scale to unit length.
fn weigh(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> TermVector {
    let mut vector: TermVector = HashMap::new();
    for token in tokens {
        if let Some(&index) = vocabulary.get(token.as_str()) {
            *vector.entry(index).or_insert(0.0) += 1.0;
        }
    }

    for (index, weight) in vector.iter_mut() {
        *weight *= idf[*index];
    }

    let norm = vector.values().map(|w| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }

    vector
}

/// Dot product of two unit-length sparse vectors.
fn cosine(a: &TermVector, b: &TermVector) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .map(|(index, weight)| weight * large.get(index).copied().unwrap_or(0.0))
        .sum()
}
