use crate::db::{DbConnection, DbPool};
use crate::domain::mention::Mention;
use crate::domain::review::{NewReview, Review};

pub mod errors;
pub mod mention;
pub mod review;
pub mod widget;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for review entities.
pub trait ReviewReader {
    /// List up to `limit` reviews ordered by recency descending.
    fn list_reviews(&self, limit: i64) -> RepositoryResult<Vec<Review>>;
    /// Return the review count and average rating (0.0 when empty).
    fn review_totals(&self) -> RepositoryResult<(i64, f64)>;
}

/// Write operations for review entities.
pub trait ReviewWriter {
    /// Persist new review records, returning the number inserted.
    fn create_reviews(&self, reviews: &[NewReview]) -> RepositoryResult<usize>;
}

/// Best-effort write operations for collected mentions.
pub trait MentionWriter {
    /// Insert mentions one at a time, skipping rows that collide with the
    /// unique `(source, link)` index. Individual insert failures are logged
    /// and do not abort the remaining inserts. Returns the number of rows
    /// actually written.
    fn store_mentions(&self, mentions: &[Mention]) -> RepositoryResult<usize>;
}

/// Read-only operations for widget entities.
pub trait WidgetReader {
    /// Identifier of the first configured widget, if any.
    fn first_widget_id(&self) -> RepositoryResult<Option<String>>;
}

/// Write operations for widget entities.
pub trait WidgetWriter {
    /// Persist a widget record.
    fn create_widget(&self, id: &str, name: Option<&str>) -> RepositoryResult<usize>;
}
