//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::locale::LocaleProfile;

/// Main configuration for the cashback extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Language tables: stopwords, filler words, noise suffixes and
    /// percent→category connector words.
    pub locale: LocaleProfile,

    /// Optional bound on the number of tokens a category name may keep,
    /// applied after cleaning. The surface patterns are greedy and can
    /// absorb unrelated preceding words from noisy OCR text; `None` keeps
    /// the original unbounded behavior. When set, the tokens adjacent to
    /// the percent sign are kept.
    pub max_category_tokens: Option<usize>,

    /// Two candidates with the same normalized name are duplicates when
    /// their percents differ by less than this.
    pub dedup_epsilon: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            locale: LocaleProfile::default(),
            max_category_tokens: None,
            dedup_epsilon: 0.1,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_category_tokens, None);
        assert_eq!(config.dedup_epsilon, 0.1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"max_category_tokens": 4}"#).unwrap();
        assert_eq!(config.max_category_tokens, Some(4));
        assert_eq!(config.dedup_epsilon, 0.1);
        assert!(!config.locale.stopwords.is_empty());
    }
}
