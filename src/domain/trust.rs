//! Heuristic trust score derived from mention volume, diversity and recency.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::mention::Mention;

const BASE_SCORE: f64 = 45.0;
const MAX_SCORE: f64 = 99.0;
/// Assumed age, in days, when no mention carries a timestamp.
const DEFAULT_FRESHEST_DAYS: f64 = 30.0;
const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Snapshot of the trust heuristic for one mention list.
///
/// Recomputed per request; never persisted as authoritative truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrustScore {
    /// Heuristic score clamped to 0..=99.
    pub score: i32,
    /// Number of mentions considered.
    pub volume: usize,
    /// Number of distinct sources present, at least 1.
    pub source_count: usize,
    /// Age in days of the most recent mention.
    pub freshest_days: i64,
    /// When the score was computed.
    pub calculated_at: DateTime<Utc>,
}

/// Compute the trust score for a mention list at a given clock reading.
///
/// Pure function of its inputs: identical mentions and `now` always produce
/// an identical score.
pub fn compute_trust_score(mentions: &[Mention], now: DateTime<Utc>) -> TrustScore {
    let volume = mentions.len();
    let source_count = mentions
        .iter()
        .map(|m| m.source)
        .collect::<HashSet<_>>()
        .len()
        .max(1);

    let freshest = mentions
        .iter()
        .map(|m| (now - m.created_at).num_milliseconds() as f64 / MS_PER_DAY)
        .fold(None::<f64>, |best, age| {
            Some(best.map_or(age, |b| b.min(age)))
        })
        .unwrap_or(DEFAULT_FRESHEST_DAYS);

    let volume_score = ((volume * 3) as f64).min(30.0);
    let source_score = (((source_count - 1) * 4) as f64).min(15.0);
    let freshness_score = (20.0 - freshest).clamp(0.0, 20.0);

    let score = (BASE_SCORE + volume_score + source_score + freshness_score)
        .round()
        .min(MAX_SCORE) as i32;

    TrustScore {
        score,
        volume,
        source_count,
        freshest_days: freshest.round() as i64,
        calculated_at: now,
    }
}
