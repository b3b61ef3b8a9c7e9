//! Reddit mention adapter backed by the public JSON search endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::mention::{Mention, RawMention};
use crate::domain::types::MentionSource;
use crate::sources::{FetchResult, fetch_json, query_or_default};

/// Search is restricted to a fixed set of business-oriented communities.
const SEARCH_URL: &str = "https://www.reddit.com/r/entrepreneur+smallbusiness+saas/search.json";
const FALLBACK_TEXT: &str = "Mention on Reddit";

#[derive(Debug, Deserialize)]
struct Listing {
    data: Option<ListingData>,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: Option<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    author: Option<String>,
    title: Option<String>,
    permalink: Option<String>,
    created_utc: Option<f64>,
}

/// Search the fixed subreddits for posts mentioning `query`, newest first,
/// truncated to `limit`.
pub async fn fetch(
    client: &reqwest::Client,
    query: &str,
    limit: usize,
) -> FetchResult<Vec<Mention>> {
    let request = client.get(SEARCH_URL).query(&[
        ("q", query_or_default(query)),
        ("sort", "new"),
        ("restrict_sr", "on"),
    ]);
    let response: Listing = fetch_json(request, "Reddit").await?;
    Ok(normalize(response, limit, Utc::now()))
}

fn normalize(listing: Listing, limit: usize, now: DateTime<Utc>) -> Vec<Mention> {
    listing
        .data
        .map(|data| data.children)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|child| child.data)
        .take(limit)
        .map(|post| {
            let title = post
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| FALLBACK_TEXT.to_string());
            let link = post
                .permalink
                .filter(|p| !p.is_empty())
                .map(|p| format!("https://reddit.com{p}"));
            let created_at = post
                .created_utc
                .and_then(|secs| DateTime::from_timestamp(secs as i64, 0));
            RawMention {
                source: Some(MentionSource::Reddit),
                author: Some(
                    post.author
                        .filter(|a| !a.is_empty())
                        .unwrap_or_else(|| "reddit-user".to_string()),
                ),
                text: Some(title.clone()),
                title: Some(title),
                link,
                created_at,
            }
            .normalize(now)
        })
        .collect()
}
