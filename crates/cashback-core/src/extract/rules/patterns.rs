//! Surface patterns describing how a percentage and a category name can
//! appear relative to each other in screenshot text.
//!
//! The patterns overlap on purpose: the same real-world fact is expected to
//! be captured by more than one of them, and the redundancy is reconciled
//! downstream by the deduplicator, not suppressed here. Collapsing them to
//! a single grammar loses recall on noisy OCR text.

use regex::Regex;
use tracing::trace;

use crate::error::Result;
use crate::locale::LocaleProfile;

/// Category-name token run: letters of either alphabet, internal
/// whitespace, hyphens.
const NAME_RUN: &str = r"[А-ЯЁа-яёA-Za-z\s\-]+";

/// Percentage number accepting either `.` or `,` as decimal separator.
const NUMBER: &str = r"\d+(?:[.,]\d+)?";

/// A raw (percent, category) pair captured by one surface pattern.
#[derive(Debug, Clone)]
pub struct RawCandidate {
    /// Raw category text as captured, trimmed but not yet cleaned.
    pub raw_name: String,

    /// Parsed percent value.
    pub percent: f64,

    /// Whether the name run appears after the percent in the text.
    pub name_follows_percent: bool,
}

/// The ordered surface patterns for one locale.
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile the surface patterns for a locale profile.
    ///
    /// Three fixed patterns plus one per connector word:
    /// 1. `5% Рестораны` — percent first, no connector
    /// 2. `Рестораны: 5%` — category first, colon/dash connector
    /// 3. `Супермаркеты 2%` — category first, space only
    /// 4. `5% на АЗС` / `5% для АЗС` — percent, connector word, category
    pub fn compile(locale: &LocaleProfile) -> Result<Self> {
        let mut sources = vec![
            format!(r"(?i)({NUMBER})\s*%\s*({NAME_RUN})"),
            format!(r"(?i)({NAME_RUN})[:\-]\s*({NUMBER})\s*%"),
            format!(r"(?i)({NAME_RUN})\s+({NUMBER})\s*%"),
        ];
        for connector in &locale.connectors {
            sources.push(format!(
                r"(?i)({NUMBER})\s*%\s*{}\s+({NAME_RUN})",
                regex::escape(connector)
            ));
        }

        let patterns = sources
            .iter()
            .map(|source| Regex::new(source))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Scan normalized text with every pattern independently.
    ///
    /// Each match carries two groups; some patterns cannot structurally
    /// tell which group holds the number, so group 1 is tried as a decimal
    /// first, then group 2. A match where neither group parses is dropped
    /// silently and the scan continues.
    pub fn scan(&self, text: &str) -> Vec<RawCandidate> {
        let mut raw = Vec::new();

        for pattern in &self.patterns {
            for caps in pattern.captures_iter(text) {
                let (first, second) = (&caps[1], &caps[2]);

                let candidate = if let Some(percent) = parse_percent(first) {
                    RawCandidate {
                        raw_name: second.trim().to_string(),
                        percent,
                        name_follows_percent: true,
                    }
                } else if let Some(percent) = parse_percent(second) {
                    RawCandidate {
                        raw_name: first.trim().to_string(),
                        percent,
                        name_follows_percent: false,
                    }
                } else {
                    continue;
                };

                trace!(
                    "raw match: {:?} at {}%",
                    candidate.raw_name, candidate.percent
                );
                raw.push(candidate);
            }
        }

        raw
    }
}

/// Parse a percent number, normalizing `,` to `.` first.
fn parse_percent(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse::<f64>().ok()
}
