//! On-page reviews, including the bundled fallback set.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::mention::{Mention, display_date};
use crate::domain::types::Rating;

/// A review as rendered by the widget and the `/api/reviews` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub source: String,
    pub author: String,
    pub rating: Rating,
    pub text: String,
    /// Display rendering of the review timestamp, e.g. "Oct 12, 2024".
    pub date: String,
}

/// Information required to persist a new [`Review`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    pub source: String,
    pub author: String,
    pub rating: Rating,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<NewReview> for Review {
    fn from(review: NewReview) -> Self {
        Self {
            source: review.source,
            author: review.author,
            rating: review.rating,
            text: review.text,
            date: display_date(review.created_at),
        }
    }
}

// External mentions surface in the reviews feed as five-star entries; the
// providers carry no rating of their own.
impl From<Mention> for Review {
    fn from(mention: Mention) -> Self {
        Self {
            source: mention.source.as_str().to_string(),
            author: mention.author,
            rating: Rating::MAX,
            text: mention.text,
            date: mention.date,
        }
    }
}

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or_else(Utc::now)
}

/// Bundled demo reviews shown when neither the store nor the network can
/// supply anything, and seeded into an empty reviews table.
pub fn bundled_reviews() -> Vec<NewReview> {
    vec![
        NewReview {
            source: "Google".into(),
            author: "Sarah M.".into(),
            rating: Rating::MAX,
            text: "Absolutely amazing service! Highly recommended.".into(),
            created_at: midnight(2024, 10, 12),
        },
        NewReview {
            source: "Facebook".into(),
            author: "John D.".into(),
            rating: Rating::MAX,
            text: "Best experience I have had in a long time.".into(),
            created_at: midnight(2024, 9, 29),
        },
        NewReview {
            source: "Twitter".into(),
            author: "@techguru".into(),
            rating: Rating::FOUR,
            text: "InstantProof is a game changer for social proof.".into(),
            created_at: midnight(2024, 9, 10),
        },
        NewReview {
            source: "Reddit".into(),
            author: "u/growth_hacker".into(),
            rating: Rating::MAX,
            text: "We boosted conversions by 3x in a week.".into(),
            created_at: midnight(2024, 9, 5),
        },
    ]
}
