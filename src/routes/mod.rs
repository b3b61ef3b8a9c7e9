use crate::db::DbPool;
use crate::repository::DieselRepository;

pub mod auth;
pub mod reviews;
pub mod search;
pub mod widget;

/// Build a repository when a database pool is configured.
///
/// The service runs fine without one; every handler degrades to fallback
/// data in that case.
pub fn repository(pool: &Option<DbPool>) -> Option<DieselRepository> {
    pool.as_ref().cloned().map(DieselRepository::new)
}
