//! The end-to-end extraction pipeline.

use lazy_static::lazy_static;
use tracing::{debug, info};

use crate::error::{CashbackError, Result};
use crate::extract::cleaner::CategoryCleaner;
use crate::extract::dedup::Deduplicator;
use crate::extract::normalize::normalize_text;
use crate::extract::rules::patterns::PatternSet;
use crate::icons::classify_icon;
use crate::models::candidate::CashbackCandidate;
use crate::models::config::PipelineConfig;

/// Extractor turning raw OCR text into cashback category candidates.
///
/// A pure, synchronous computation: no I/O, no cross-call state. Concurrent
/// use from multiple threads needs no locking; each call allocates its own
/// output.
pub struct CashbackExtractor {
    patterns: PatternSet,
    cleaner: CategoryCleaner,
    max_category_tokens: Option<usize>,
    dedup_epsilon: f64,
}

impl CashbackExtractor {
    /// Extractor with the shipped Russian profile and default settings.
    pub fn new() -> Self {
        // The built-in profile always compiles.
        Self::with_config(PipelineConfig::default()).expect("built-in pipeline config")
    }

    /// Build an extractor from a configuration, possibly a custom locale.
    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        if !config.dedup_epsilon.is_finite() || config.dedup_epsilon < 0.0 {
            return Err(CashbackError::Config(format!(
                "dedup_epsilon must be a non-negative finite number, got {}",
                config.dedup_epsilon
            )));
        }

        Ok(Self {
            patterns: PatternSet::compile(&config.locale)?,
            cleaner: CategoryCleaner::new(&config.locale),
            max_category_tokens: config.max_category_tokens,
            dedup_epsilon: config.dedup_epsilon,
        })
    }

    /// Bound category-name runs to at most this many tokens.
    pub fn with_max_category_tokens(mut self, max: Option<usize>) -> Self {
        self.max_category_tokens = max;
        self
    }

    /// Set the percent distance below which same-named candidates merge.
    pub fn with_dedup_epsilon(mut self, epsilon: f64) -> Self {
        self.dedup_epsilon = epsilon;
        self
    }

    /// Extract cashback candidates from raw OCR text.
    ///
    /// Never fails: malformed matches, out-of-range percents, too-short
    /// names and duplicates are all dropped locally, and text without any
    /// match yields an empty vec. Candidates come back in first-match
    /// order.
    pub fn extract(&self, raw_text: &str) -> Vec<CashbackCandidate> {
        let text = normalize_text(raw_text);
        debug!(
            "normalized OCR text: {} chars in, {} chars out",
            raw_text.len(),
            text.len()
        );

        let raw_matches = self.patterns.scan(&text);
        debug!("{} raw matches across surface patterns", raw_matches.len());

        let mut dedup = Deduplicator::new(self.dedup_epsilon);
        for raw in &raw_matches {
            let name = self.cleaner.clean(&raw.raw_name);
            let name = self.bound_tokens(name, raw.name_follows_percent);

            if name.chars().count() <= 2 {
                continue;
            }
            if !(0.0..=100.0).contains(&raw.percent) {
                continue;
            }

            let icon = classify_icon(&name).to_string();
            dedup.push(CashbackCandidate {
                category_name: name,
                cashback_percent: raw.percent,
                icon,
            });
        }

        let candidates = dedup.into_candidates();
        info!(
            "extracted {} cashback candidates from {} raw matches",
            candidates.len(),
            raw_matches.len()
        );
        candidates
    }

    /// Apply the optional token bound to a cleaned name, keeping the tokens
    /// adjacent to the percent sign. The bound runs after cleaning:
    /// overlapping patterns capture raw runs that differ only by connector
    /// and stopword tokens, and cleaning removes those, so the truncated
    /// names still converge in the deduplicator.
    fn bound_tokens(&self, name: String, name_follows_percent: bool) -> String {
        let Some(max) = self.max_category_tokens else {
            return name;
        };

        let tokens: Vec<&str> = name.split_whitespace().collect();
        if tokens.len() <= max {
            return name;
        }

        let kept = if name_follows_percent {
            &tokens[..max]
        } else {
            &tokens[tokens.len() - max..]
        };
        kept.join(" ")
    }
}

impl Default for CashbackExtractor {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref DEFAULT_EXTRACTOR: CashbackExtractor = CashbackExtractor::new();
}

/// Extract cashback candidates with the shipped Russian pipeline.
pub fn extract_candidates(raw_text: &str) -> Vec<CashbackCandidate> {
    DEFAULT_EXTRACTOR.extract(raw_text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::locale::LocaleProfile;

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(extract_candidates("").is_empty());
    }

    #[test]
    fn test_unrelated_text_yields_empty() {
        assert!(extract_candidates("Остаток по счёту 12 450 руб").is_empty());
        assert!(extract_candidates("plain english text, no offers").is_empty());
    }

    #[test]
    fn test_category_with_colon() {
        let candidates = extract_candidates("Рестораны: 5%");

        assert_eq!(
            candidates,
            vec![CashbackCandidate {
                category_name: "Рестораны".to_string(),
                cashback_percent: 5.0,
                icon: "restaurant".to_string(),
            }]
        );
    }

    #[test]
    fn test_near_equal_percent_deduplicates() {
        let candidates = extract_candidates("5% Рестораны, Рестораны: 5.0%");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].category_name, "Рестораны");
        assert_eq!(candidates[0].cashback_percent, 5.0);
    }

    #[test]
    fn test_distinct_percent_kept_separately() {
        let candidates = extract_candidates("5% Рестораны, 7% Рестораны");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].cashback_percent, 5.0);
        assert_eq!(candidates[1].cashback_percent, 7.0);
    }

    #[test]
    fn test_out_of_range_percent_dropped() {
        assert!(extract_candidates("150% Спорт").is_empty());
    }

    #[test]
    fn test_connector_word_candidates_merge() {
        let candidates = extract_candidates("5% на АЗС");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].category_name, "АЗС");
        assert_eq!(candidates[0].icon, "local_gas_station");
    }

    #[test]
    fn test_invariants_hold_on_noisy_text() {
        let text = "🔥 кешбек до 10% на все покупки\n\
                    АЗС: 5%\n\
                    Аптеки Подробнее 3,5%\n\
                    х 150% Спорт й\n\
                    Рестораны 7%";

        let candidates = extract_candidates(text);
        assert!(!candidates.is_empty());

        for candidate in &candidates {
            assert!(candidate.cashback_percent >= 0.0);
            assert!(candidate.cashback_percent <= 100.0);
            assert!(candidate.category_name.chars().count() > 2);
            assert_eq!(candidate.category_name, candidate.category_name.trim());
            assert!(!candidate.icon.is_empty());
        }
    }

    #[test]
    fn test_max_category_tokens_bounds_greedy_run() {
        let text = "Лучшие предложения месяца Рестораны: 5%";

        let unbounded = CashbackExtractor::new().extract(text);
        assert!(unbounded[0].category_name.split_whitespace().count() > 1);

        let bounded = CashbackExtractor::new().with_max_category_tokens(Some(1));
        let candidates = bounded.extract(text);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].category_name, "Рестораны");
    }

    #[test]
    fn test_bounded_percent_first_keeps_leading_tokens() {
        // Pattern 1 and the connector pattern capture different raw runs
        // here ("на все покупки..." vs "все покупки..."); after cleaning
        // and bounding both must collapse to the same candidate.
        let text = "10% на все покупки в супермаркетах города";

        let unbounded = CashbackExtractor::new().extract(text);
        assert_eq!(unbounded.len(), 1);

        let bounded = CashbackExtractor::new().with_max_category_tokens(Some(2));
        let candidates = bounded.extract(text);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].category_name, "все покупки");
        assert_eq!(candidates[0].cashback_percent, 10.0);
    }

    #[test]
    fn test_negative_dedup_epsilon_rejected() {
        let config = PipelineConfig {
            dedup_epsilon: -1.0,
            ..PipelineConfig::default()
        };
        assert!(CashbackExtractor::with_config(config).is_err());
    }

    #[test]
    fn test_custom_dedup_epsilon() {
        let extractor = CashbackExtractor::new().with_dedup_epsilon(3.0);
        let candidates = extractor.extract("5% Рестораны, 7% Рестораны");
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_custom_locale_compiles() {
        let mut locale = LocaleProfile::russian();
        locale.connectors.push("у".to_string());

        let config = PipelineConfig {
            locale,
            ..PipelineConfig::default()
        };
        let extractor = CashbackExtractor::with_config(config).unwrap();
        assert_eq!(extractor.extract("Такси: 10%").len(), 1);
    }
}
