//! Candidate extraction pipeline.
//!
//! Stages run in a fixed order: normalize → surface-pattern scan → name
//! cleaning → validity filter → deduplication → icon classification.

mod cleaner;
mod dedup;
mod normalize;
mod pipeline;
pub mod rules;

pub use cleaner::CategoryCleaner;
pub use dedup::Deduplicator;
pub use normalize::normalize_text;
pub use pipeline::{CashbackExtractor, extract_candidates};
