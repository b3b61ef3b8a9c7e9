//! News mention adapter backed by the GNews search API.
//!
//! The only adapter that needs an API key; callers skip it entirely when no
//! key is provisioned.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::mention::{Mention, RawMention};
use crate::domain::types::MentionSource;
use crate::sources::{FetchResult, fetch_json, query_or_default};

const SEARCH_URL: &str = "https://gnews.io/api/v4/search";
const FALLBACK_TEXT: &str = "News mention";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    author: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
    source: Option<ArticleSource>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: Option<String>,
}

/// Search news articles mentioning `query`, truncated to `limit`.
pub async fn fetch(
    client: &reqwest::Client,
    api_key: &str,
    query: &str,
    limit: usize,
) -> FetchResult<Vec<Mention>> {
    let max = limit.max(5).to_string();
    let request = client.get(SEARCH_URL).query(&[
        ("q", query_or_default(query)),
        ("lang", "en"),
        ("max", max.as_str()),
        ("token", api_key),
    ]);
    let response: SearchResponse = fetch_json(request, "GNews").await?;
    Ok(normalize(response, limit, Utc::now()))
}

fn normalize(response: SearchResponse, limit: usize, now: DateTime<Utc>) -> Vec<Mention> {
    response
        .articles
        .into_iter()
        .take(limit)
        .map(|article| {
            let author = article
                .source
                .and_then(|s| s.name)
                .filter(|n| !n.is_empty())
                .or(article.author.filter(|a| !a.is_empty()))
                .unwrap_or_else(|| "newswire".to_string());
            let title = article
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| FALLBACK_TEXT.to_string());
            let text = article
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| title.clone());
            RawMention {
                source: Some(MentionSource::News),
                author: Some(author),
                title: Some(title),
                text: Some(text),
                link: article.url.filter(|u| !u.is_empty()),
                created_at: article.published_at,
            }
            .normalize(now)
        })
        .collect()
}
