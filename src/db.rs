//! SQLite connection pooling.
//!
//! The application treats the database as optional: when no `DATABASE_URL` is
//! configured the rest of the service keeps working from bundled fallback
//! data, so pool construction failures are reported rather than fatal.

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

/// Connection pool shared between request handlers.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A single pooled SQLite connection.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build an r2d2 pool for the given SQLite database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
