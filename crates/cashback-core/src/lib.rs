//! Core library for cashback category extraction.
//!
//! This crate provides:
//! - OCR text normalization (glyph/noise stripping, whitespace collapse)
//! - Rule-based extraction of (category, percent) pairs from Russian
//!   bank-app screenshot text
//! - Category name cleaning (stopwords, filler words, noise suffixes)
//! - Duplicate collapsing and icon classification
//!
//! The pipeline is a pure, synchronous transformation: it performs no I/O,
//! holds no cross-call state, and never fails on malformed input.

pub mod error;
pub mod extract;
pub mod icons;
pub mod locale;
pub mod models;

pub use error::{CashbackError, Result};
pub use extract::{CashbackExtractor, extract_candidates};
pub use icons::{DEFAULT_ICON, classify_icon};
pub use locale::LocaleProfile;
pub use models::candidate::CashbackCandidate;
pub use models::config::PipelineConfig;
