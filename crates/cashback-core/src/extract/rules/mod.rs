//! Surface-pattern rules for locating percent/category pairs.

pub mod patterns;

pub use patterns::{PatternSet, RawCandidate};
