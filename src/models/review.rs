use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::mention::display_date;
use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};
use crate::domain::types::{Rating, TypeConstraintError};

/// Diesel representation of a review row.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct Review {
    pub id: i32,
    pub source: String,
    pub author: String,
    pub rating: i32,
    pub text: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(DomainReview {
            source: review.source,
            author: review.author,
            rating: Rating::new(review.rating)?,
            text: review.text,
            date: display_date(review.created_at.and_utc()),
        })
    }
}

/// Insertable review row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub source: String,
    pub author: String,
    pub rating: i32,
    pub text: String,
    pub created_at: NaiveDateTime,
}

impl From<&DomainNewReview> for NewReview {
    fn from(review: &DomainNewReview) -> Self {
        Self {
            source: review.source.clone(),
            author: review.author.clone(),
            rating: review.rating.get(),
            text: review.text.clone(),
            created_at: review.created_at.naive_utc(),
        }
    }
}

impl From<DomainNewReview> for NewReview {
    fn from(review: DomainNewReview) -> Self {
        Self {
            rating: review.rating.get(),
            created_at: review.created_at.naive_utc(),
            source: review.source,
            author: review.author,
            text: review.text,
        }
    }
}
