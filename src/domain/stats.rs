//! Aggregate review statistics for the landing page and widget header.

use serde::{Deserialize, Serialize};

/// Totals shown beside the widget.
///
/// `trust_score` here is the simple ratings-derived figure
/// (`round(avg_rating / 5 * 100)`, capped at 100). It is intentionally a
/// different formula from the mention-based
/// [`TrustScore`](crate::domain::trust::TrustScore) used by search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_reviews: i64,
    pub avg_rating: f64,
    pub trust_score: i32,
}

impl Stats {
    /// Derive stats from a review count and average rating.
    ///
    /// The average is rounded to two decimals for display parity with the
    /// stored representation.
    pub fn from_totals(total_reviews: i64, avg_rating: f64) -> Self {
        let avg_rating = (avg_rating * 100.0).round() / 100.0;
        let trust_score = ((avg_rating / 5.0) * 100.0).round().min(100.0) as i32;
        Self {
            total_reviews,
            avg_rating,
            trust_score,
        }
    }

    /// Static figures used when no database is configured or reachable.
    pub fn fallback() -> Self {
        Self {
            total_reviews: 1248,
            avg_rating: 4.9,
            trust_score: 98,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_trust_score_from_average_rating() {
        let stats = Stats::from_totals(10, 4.5);
        assert_eq!(stats.trust_score, 90);
        assert_eq!(stats.avg_rating, 4.5);
    }

    #[test]
    fn rounds_average_to_two_decimals() {
        let stats = Stats::from_totals(3, 4.666_666);
        assert_eq!(stats.avg_rating, 4.67);
    }

    #[test]
    fn caps_trust_score_at_100() {
        let stats = Stats::from_totals(1, 5.0);
        assert_eq!(stats.trust_score, 100);
    }

    #[test]
    fn empty_store_yields_zero_score() {
        let stats = Stats::from_totals(0, 0.0);
        assert_eq!(stats.trust_score, 0);
        assert_eq!(stats.total_reviews, 0);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(Stats::fallback()).unwrap();
        assert_eq!(json["totalReviews"], 1248);
        assert_eq!(json["avgRating"], 4.9);
        assert_eq!(json["trustScore"], 98);
    }
}
