//! Hacker News mention adapter backed by the Algolia search API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::mention::{Mention, RawMention};
use crate::domain::types::MentionSource;
use crate::sources::{FetchResult, fetch_json, query_or_default};

const SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search";
const FALLBACK_TEXT: &str = "Mention on Hacker News";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    author: Option<String>,
    title: Option<String>,
    story_text: Option<String>,
    url: Option<String>,
    #[serde(rename = "objectID")]
    object_id: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

/// Search Hacker News stories mentioning `query`, newest-ranked first per
/// Algolia's relevance ordering, truncated to `limit`.
pub async fn fetch(
    client: &reqwest::Client,
    query: &str,
    limit: usize,
) -> FetchResult<Vec<Mention>> {
    // Over-fetch so truncation still yields `limit` results after Algolia
    // mixes in low-quality hits.
    let hits_per_page = (limit * 2).max(10).to_string();
    let request = client.get(SEARCH_URL).query(&[
        ("query", query_or_default(query)),
        ("tags", "story"),
        ("hitsPerPage", hits_per_page.as_str()),
    ]);
    let response: SearchResponse = fetch_json(request, "Hacker News").await?;
    Ok(normalize(response, limit, Utc::now()))
}

fn normalize(response: SearchResponse, limit: usize, now: DateTime<Utc>) -> Vec<Mention> {
    response
        .hits
        .into_iter()
        .take(limit)
        .map(|hit| {
            let title = hit
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| FALLBACK_TEXT.to_string());
            let text = hit
                .story_text
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| title.clone());
            let link = hit.url.filter(|u| !u.is_empty()).or_else(|| {
                hit.object_id
                    .map(|id| format!("https://news.ycombinator.com/item?id={id}"))
            });
            RawMention {
                source: Some(MentionSource::HackerNews),
                author: Some(
                    hit.author
                        .filter(|a| !a.is_empty())
                        .unwrap_or_else(|| "hn-user".to_string()),
                ),
                title: Some(title),
                text: Some(text),
                link,
                created_at: hit.created_at,
            }
            .normalize(now)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SearchResponse {
        serde_json::from_value(serde_json::json!({
            "hits": [
                {
                    "author": "pg",
                    "title": "InstantProof launches",
                    "story_text": null,
                    "url": "https://example.com/launch",
                    "objectID": "1",
                    "created_at": "2024-10-12T08:00:00Z"
                },
                {
                    "author": "",
                    "title": "",
                    "story_text": "A text-only mention",
                    "url": "",
                    "objectID": "42",
                    "created_at": "2024-09-05T00:00:00Z"
                },
                {
                    "author": "third",
                    "title": "Dropped by the limit",
                    "objectID": "3"
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn maps_hits_to_mentions() {
        let mentions = normalize(payload(), 2, Utc::now());
        assert_eq!(mentions.len(), 2);

        let first = &mentions[0];
        assert_eq!(first.source, MentionSource::HackerNews);
        assert_eq!(first.author, "pg");
        assert_eq!(first.title, "InstantProof launches");
        assert_eq!(first.text, "InstantProof launches");
        assert_eq!(first.link.as_deref(), Some("https://example.com/launch"));
        assert_eq!(first.date, "Oct 12, 2024");
    }

    #[test]
    fn incomplete_hits_get_fallbacks() {
        let mentions = normalize(payload(), 2, Utc::now());
        let second = &mentions[1];
        assert_eq!(second.author, "hn-user");
        assert_eq!(second.title, "Mention on Hacker News");
        assert_eq!(second.text, "A text-only mention");
        assert_eq!(
            second.link.as_deref(),
            Some("https://news.ycombinator.com/item?id=42")
        );
    }

    #[test]
    fn missing_timestamp_defaults_to_fetch_time() {
        let now = Utc::now();
        let mentions = normalize(payload(), 3, now);
        assert_eq!(mentions[2].created_at, now);
    }

    #[test]
    fn empty_payload_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(normalize(response, 5, Utc::now()).is_empty());
    }
}
