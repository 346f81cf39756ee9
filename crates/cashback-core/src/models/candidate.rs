//! Candidate cashback category extracted from screenshot text.

use serde::{Deserialize, Serialize};

/// A tentative cashback category extracted from OCR text.
///
/// Candidates are immutable value objects owned by the caller; whether a
/// candidate becomes a persisted cashback-category record is the caller's
/// decision. Invariants guaranteed by the pipeline: the name is trimmed and
/// longer than two characters, the percent lies in `[0, 100]`, and the icon
/// is always a valid icon key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashbackCandidate {
    /// Cleaned category name, original casing preserved.
    pub category_name: String,

    /// Cashback percentage, `0.0 ..= 100.0`.
    pub cashback_percent: f64,

    /// Presentational icon key for the category.
    pub icon: String,
}

impl CashbackCandidate {
    /// Case-folded, trimmed name used only for duplicate comparison.
    pub fn normalized_name(&self) -> String {
        self.category_name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name() {
        let candidate = CashbackCandidate {
            category_name: " Рестораны ".to_string(),
            cashback_percent: 5.0,
            icon: "restaurant".to_string(),
        };
        assert_eq!(candidate.normalized_name(), "рестораны");
    }

    #[test]
    fn test_serialize_shape() {
        let candidate = CashbackCandidate {
            category_name: "АЗС".to_string(),
            cashback_percent: 5.0,
            icon: "local_gas_station".to_string(),
        };
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["category_name"], "АЗС");
        assert_eq!(json["cashback_percent"], 5.0);
        assert_eq!(json["icon"], "local_gas_station");
    }
}
