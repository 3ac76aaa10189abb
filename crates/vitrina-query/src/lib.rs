//! Filter, search, and pagination for the vitrina directory.
//!
//! This crate turns a normalized catalog plus browser state into one
//! served page:
//!
//! - [`selection`]: the category filter as a tagged change enum and an
//!   order-preserving selection set
//! - [`pager`]: page arithmetic with the always-at-least-one-page rule
//! - [`engine`]: the pipeline that composes both with text search
//!
//! The pipeline is pure over its inputs. All state lives in
//! [`QueryState`]; the catalog is borrowed and never mutated.

pub mod engine;
pub mod pager;
pub mod selection;

pub use engine::{paginate, query, QueryPage, QueryState};
pub use pager::{clamp_page, total_pages, PageMeta, Pager};
pub use selection::{CategorySelection, SelectionChange};
