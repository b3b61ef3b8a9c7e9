//! Normalized third-party mentions and cross-source de-duplication.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::MentionSource;

/// A normalized record of a third-party reference to the business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mention {
    pub source: MentionSource,
    pub author: String,
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Human-readable rendering of `created_at`, computed once at
    /// normalization time for display.
    pub date: String,
}

/// Raw, provider-shaped mention data before normalization.
///
/// Source adapters build these from whatever fields the provider returned;
/// [`RawMention::normalize`] applies the title/text defaulting rules and
/// derives the display date.
#[derive(Debug, Clone, Default)]
pub struct RawMention {
    pub source: Option<MentionSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl RawMention {
    /// Normalize into a [`Mention`].
    ///
    /// `title` and `text` default to each other when one is absent, the
    /// source falls back to [`MentionSource::Unknown`] and a missing
    /// timestamp is replaced by `now` (the fetch time).
    pub fn normalize(self, now: DateTime<Utc>) -> Mention {
        let created_at = self.created_at.unwrap_or(now);
        let title = self.title.clone().or_else(|| self.text.clone());
        let text = self.text.or(title.clone());
        Mention {
            source: self.source.unwrap_or(MentionSource::Unknown),
            author: self.author.unwrap_or_default(),
            title: title.unwrap_or_default(),
            text: text.unwrap_or_default(),
            link: self.link,
            created_at,
            date: display_date(created_at),
        }
    }
}

/// Render a timestamp the way the widget displays it, e.g. "Oct 12, 2024".
pub fn display_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Composite identity of a mention used for cross-source de-duplication.
///
/// Keeping the components separate (rather than joining them with a
/// delimiter) rules out collisions between values that happen to contain the
/// delimiter sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MentionKey {
    source: String,
    link: String,
    text: String,
}

impl MentionKey {
    /// Derive the dedupe key for a mention.
    ///
    /// Returns `None` when every component is blank after trimming; such a
    /// mention carries no identity and is discarded.
    pub fn of(mention: &Mention) -> Option<Self> {
        let source = mention.source.as_str().to_lowercase();
        let link = mention.link.as_deref().unwrap_or("").to_lowercase();
        let text = if mention.title.is_empty() {
            mention.text.to_lowercase()
        } else {
            mention.title.to_lowercase()
        };
        if source.trim().is_empty() && link.trim().is_empty() && text.trim().is_empty() {
            return None;
        }
        Some(Self { source, link, text })
    }
}

/// Drop mentions whose key was already seen, preserving first-seen order.
///
/// Keyless mentions (all components blank) are discarded outright.
pub fn dedupe_mentions(mentions: Vec<Mention>) -> Vec<Mention> {
    let mut seen: HashSet<MentionKey> = HashSet::new();
    mentions
        .into_iter()
        .filter(|mention| match MentionKey::of(mention) {
            Some(key) => seen.insert(key),
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn mention(source: MentionSource, link: Option<&str>, title: &str) -> Mention {
        RawMention {
            source: Some(source),
            author: Some("author".into()),
            title: Some(title.to_string()),
            text: None,
            link: link.map(str::to_string),
            created_at: Some(Utc.with_ymd_and_hms(2024, 10, 12, 0, 0, 0).unwrap()),
        }
        .normalize(Utc::now())
    }

    #[test]
    fn normalize_defaults_title_and_text_to_each_other() {
        let now = Utc::now();
        let only_title = RawMention {
            source: Some(MentionSource::HackerNews),
            title: Some("A title".into()),
            ..Default::default()
        }
        .normalize(now);
        assert_eq!(only_title.text, "A title");

        let only_text = RawMention {
            source: Some(MentionSource::Reddit),
            text: Some("Some text".into()),
            ..Default::default()
        }
        .normalize(now);
        assert_eq!(only_text.title, "Some text");
    }

    #[test]
    fn normalize_defaults_source_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 10, 12, 9, 30, 0).unwrap();
        let normalized = RawMention::default().normalize(now);
        assert_eq!(normalized.source, MentionSource::Unknown);
        assert_eq!(normalized.created_at, now);
        assert_eq!(normalized.date, "Oct 12, 2024");
    }

    #[test]
    fn display_date_is_unpadded() {
        let date = Utc.with_ymd_and_hms(2024, 9, 5, 0, 0, 0).unwrap();
        assert_eq!(display_date(date), "Sep 5, 2024");
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let first = mention(MentionSource::HackerNews, Some("https://a"), "Launch");
        let mut second = first.clone();
        second.author = "someone-else".into();
        let deduped = dedupe_mentions(vec![first.clone(), second]);
        assert_eq!(deduped, vec![first]);
    }

    #[test]
    fn dedupe_key_is_case_insensitive() {
        let lower = mention(MentionSource::Reddit, Some("https://a"), "launch post");
        let upper = mention(MentionSource::Reddit, Some("HTTPS://A"), "LAUNCH POST");
        assert_eq!(dedupe_mentions(vec![lower, upper]).len(), 1);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let mentions = vec![
            mention(MentionSource::HackerNews, Some("https://a"), "one"),
            mention(MentionSource::Reddit, Some("https://b"), "two"),
            mention(MentionSource::HackerNews, Some("https://a"), "one"),
        ];
        let once = dedupe_mentions(mentions);
        let twice = dedupe_mentions(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn mentions_with_distinct_links_survive() {
        let mentions = vec![
            mention(MentionSource::News, Some("https://a"), "story"),
            mention(MentionSource::News, Some("https://b"), "story"),
        ];
        assert_eq!(dedupe_mentions(mentions).len(), 2);
    }

    #[test]
    fn serializes_without_null_link() {
        let m = RawMention {
            source: Some(MentionSource::Reddit),
            title: Some("t".into()),
            ..Default::default()
        }
        .normalize(Utc::now());
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("link").is_none());
        assert_eq!(json["source"], "Reddit");
    }
}
