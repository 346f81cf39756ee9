//! Data models for the extraction pipeline.

pub mod candidate;
pub mod config;

pub use candidate::CashbackCandidate;
pub use config::PipelineConfig;
