//! Demo data seeding, run once at startup after migrations.

use crate::domain::review::bundled_reviews;
use crate::repository::{
    RepositoryResult, ReviewReader, ReviewWriter, WidgetReader, WidgetWriter,
};
use crate::services::widget::DEFAULT_WIDGET_ID;

/// Seed the bundled demo reviews and the default widget into an empty store.
///
/// Idempotent: tables that already contain rows are left untouched, so this
/// can run unconditionally on every startup.
pub fn seed_demo_data<R>(repo: &R) -> RepositoryResult<()>
where
    R: ReviewReader + ReviewWriter + WidgetReader + WidgetWriter,
{
    let (total_reviews, _) = repo.review_totals()?;
    if total_reviews == 0 {
        let seeded = repo.create_reviews(&bundled_reviews())?;
        log::info!("Seeded {seeded} demo reviews");
    }

    if repo.first_widget_id()?.is_none() {
        repo.create_widget(DEFAULT_WIDGET_ID, Some("Default Demo Widget"))?;
        log::info!("Seeded default demo widget");
    }

    Ok(())
}
