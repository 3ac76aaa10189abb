//! TF-IDF recommendations for the vitrina directory.
//!
//! Built for the "what are you looking for?" box: a parent types a
//! free-text wish in Spanish ("quiero sushi barato para una cita"),
//! the engine ranks the catalog by similarity and explains each hit
//! through shared keyword tags. The same index answers "more like
//! this listing".
//!
//! Everything runs in-process over the already-normalized catalog,
//! sized for small deployments. See:
//!
//! - [`text`]: accent folding, tokenization, keyword tag extraction
//! - [`tfidf`]: the fitted term-weight model
//! - [`recommend`]: the [`Recommender`] index and result types

pub mod recommend;
pub mod text;
pub mod tfidf;

pub use recommend::{Recommendation, Recommender};
pub use text::{extract_tags, fold_text, tokenize};
pub use tfidf::TfidfModel;
