use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::mention::Mention;

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Insertable mention row.
///
/// Persisted mentions are write-only for this service (kept for later
/// inspection), so no `Queryable` counterpart exists.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::mentions)]
pub struct NewMention {
    pub source: String,
    pub author: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<&Mention> for NewMention {
    fn from(mention: &Mention) -> Self {
        Self {
            source: mention.source.as_str().to_string(),
            author: none_if_empty(&mention.author),
            title: none_if_empty(&mention.title),
            text: none_if_empty(&mention.text),
            link: mention.link.clone(),
            created_at: mention.created_at.naive_utc(),
        }
    }
}
