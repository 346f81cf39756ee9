//! Duplicate candidate collapsing.

use crate::models::candidate::CashbackCandidate;

/// Insertion-ordered candidate accumulator; first-seen wins.
///
/// The overlapping surface patterns capture the same fact more than once on
/// purpose; this is where that redundancy is reconciled. The scan is
/// quadratic in accepted candidates, which is fine for the few dozen
/// matches a single screenshot yields.
pub struct Deduplicator {
    accepted: Vec<CashbackCandidate>,
    epsilon: f64,
}

impl Deduplicator {
    pub fn new(epsilon: f64) -> Self {
        Self {
            accepted: Vec::new(),
            epsilon,
        }
    }

    /// Accept the candidate unless an already-accepted one carries the same
    /// normalized name at (near-)equal percent. Returns whether it was kept.
    pub fn push(&mut self, candidate: CashbackCandidate) -> bool {
        let normalized = candidate.normalized_name();
        let duplicate = self.accepted.iter().any(|existing| {
            existing.normalized_name() == normalized
                && (existing.cashback_percent - candidate.cashback_percent).abs() < self.epsilon
        });

        if duplicate {
            return false;
        }
        self.accepted.push(candidate);
        true
    }

    /// Surviving candidates in first-seen order.
    pub fn into_candidates(self) -> Vec<CashbackCandidate> {
        self.accepted
    }
}
