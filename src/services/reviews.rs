//! Review feed assembly and aggregate stats.

use crate::domain::mention::{Mention, dedupe_mentions};
use crate::domain::review::{Review, bundled_reviews};
use crate::domain::stats::Stats;
use crate::repository::ReviewReader;
use crate::sources::MentionFetcher;

/// Reviews shown by the `/api/reviews` endpoint.
pub const REVIEWS_LIMIT: usize = 12;
/// Reviews rendered inside the embeddable widget.
pub const EMBED_REVIEWS_LIMIT: usize = 5;

/// Assemble the on-page review feed.
///
/// Store reads and the external fetch run concurrently; each degrades to an
/// empty contribution on failure. Stored reviews take priority, then fresh
/// external mentions, then the bundled fallback set, truncated to `limit`,
/// so the feed is never empty even with no database and no network.
pub async fn get_reviews<R, F>(limit: usize, fetcher: &F, repo: Option<&R>) -> Vec<Review>
where
    R: ReviewReader,
    F: MentionFetcher + Sync,
{
    let from_store = async {
        let Some(repo) = repo else {
            return Vec::new();
        };
        match repo.list_reviews(limit as i64) {
            Ok(reviews) => reviews,
            Err(e) => {
                log::error!("Failed to fetch reviews from database, falling back: {e}");
                Vec::new()
            }
        }
    };

    let (stored, external) = futures::join!(from_store, fetch_external_mentions(fetcher, limit));

    let mut combined = stored;
    combined.extend(external.into_iter().map(Review::from));
    combined.extend(bundled_reviews_for_display(limit));
    combined.truncate(limit);
    combined
}

fn bundled_reviews_for_display(limit: usize) -> Vec<Review> {
    bundled_reviews()
        .into_iter()
        .take(limit)
        .map(Review::from)
        .collect()
}

/// Fetch a few recent mentions using the fixed default query term.
///
/// Used to pad the review feed; both adapters fail silently into empty
/// contributions here.
async fn fetch_external_mentions<F>(fetcher: &F, limit: usize) -> Vec<Mention>
where
    F: MentionFetcher + Sync,
{
    let per_source = limit.div_ceil(2);
    let (hackernews, reddit) = futures::join!(
        fetcher.hackernews("", per_source),
        fetcher.reddit("", per_source)
    );

    let mut combined = Vec::new();
    combined.extend(hackernews.unwrap_or_default());
    combined.extend(reddit.unwrap_or_default());

    let mut mentions = dedupe_mentions(combined);
    mentions.truncate(limit);
    mentions
}

/// Aggregate stats for the landing page and widget header.
///
/// The ratings-derived trust score is deliberately a different formula from
/// the mention-based one used by search. Any store failure falls back to the
/// fixed demo figures.
pub fn get_stats<R>(repo: Option<&R>) -> Stats
where
    R: ReviewReader,
{
    let Some(repo) = repo else {
        return Stats::fallback();
    };
    match repo.review_totals() {
        Ok((total_reviews, avg_rating)) => Stats::from_totals(total_reviews, avg_rating),
        Err(e) => {
            log::error!("Failed to fetch stats from database, using fallback: {e}");
            Stats::fallback()
        }
    }
}
