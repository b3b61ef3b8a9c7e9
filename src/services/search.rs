//! Mention aggregation: fan out to the source adapters, merge, dedupe,
//! persist best-effort and score.

use chrono::Utc;
use serde::Serialize;

use crate::domain::mention::{Mention, dedupe_mentions};
use crate::domain::trust::{TrustScore, compute_trust_score};
use crate::repository::MentionWriter;
use crate::sources::MentionFetcher;

/// Result-set cap applied by the search endpoint.
pub const SEARCH_LIMIT: usize = 12;

/// Aggregated search output returned to the caller as-is.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResults {
    pub mentions: Vec<Mention>,
    pub total: usize,
    #[serde(rename = "trustScore")]
    pub trust_score: TrustScore,
}

impl SearchResults {
    fn empty() -> Self {
        Self {
            mentions: Vec::new(),
            total: 0,
            trust_score: compute_trust_score(&[], Utc::now()),
        }
    }
}

/// Core business logic for the `/api/search` endpoint.
///
/// Fans out to the discussion-forum and social-forum adapters (plus the news
/// adapter when its key is provisioned) concurrently, waits for all of them
/// to settle, and treats each failed branch as an empty contribution. The
/// combined list is deduplicated in fixed provider order, truncated to
/// `limit`, persisted best-effort and scored. This function never fails:
/// every degradation path ends in a smaller (possibly empty) result set.
pub async fn search_mentions<R, F>(
    query: &str,
    limit: usize,
    fetcher: &F,
    repo: Option<&R>,
) -> SearchResults
where
    R: MentionWriter,
    F: MentionFetcher + Sync,
{
    let query = query.trim();
    if query.is_empty() {
        return SearchResults::empty();
    }

    let news = async {
        if fetcher.has_news_key() {
            fetcher.news(query, limit).await
        } else {
            Ok(Vec::new())
        }
    };
    let (hackernews, reddit, news) =
        futures::join!(fetcher.hackernews(query, limit), fetcher.reddit(query, limit), news);

    let mut combined = Vec::new();
    for (provider, result) in [
        ("Hacker News", hackernews),
        ("Reddit", reddit),
        ("News", news),
    ] {
        match result {
            Ok(mentions) => combined.extend(mentions),
            Err(e) => log::error!("{provider} fetch failed: {e}"),
        }
    }

    let mut mentions = dedupe_mentions(combined);
    mentions.truncate(limit);

    if let Some(repo) = repo
        && let Err(e) = repo.store_mentions(&mentions)
    {
        log::error!("Failed to store mentions: {e}");
    }

    let trust_score = compute_trust_score(&mentions, Utc::now());

    SearchResults {
        total: mentions.len(),
        mentions,
        trust_score,
    }
}
