//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! enumerations and numeric constraints are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A rating fell outside the 1..=5 range.
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// A trimmed, non-empty search term supplied by a caller.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, "query").map(Self)
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for SearchQuery {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SearchQuery {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Star rating constrained to the inclusive range 1..=5.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Rating(i32);

impl Rating {
    /// Four stars.
    pub const FOUR: Rating = Rating(4);
    /// The best rating the scale allows.
    pub const MAX: Rating = Rating(5);

    /// Creates a new rating ensuring it falls within 1..=5.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::RatingOutOfRange)
        }
    }

    /// Returns the raw `i32` backing this rating.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i32 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl PartialEq<i32> for Rating {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

/// Provider a mention was collected from.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MentionSource {
    HackerNews,
    Reddit,
    News,
    Unknown,
}

impl MentionSource {
    /// String representation used in persistence and API payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HackerNews => "HackerNews",
            Self::Reddit => "Reddit",
            Self::News => "News",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for MentionSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for MentionSource {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "HackerNews" => Ok(Self::HackerNews),
            "Reddit" => Ok(Self::Reddit),
            "News" => Ok(Self::News),
            "Unknown" => Ok(Self::Unknown),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "mention source: {other}"
            ))),
        }
    }
}

impl From<MentionSource> for String {
    fn from(value: MentionSource) -> Self {
        value.as_str().to_string()
    }
}
