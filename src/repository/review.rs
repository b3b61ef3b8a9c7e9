use diesel::prelude::*;

use crate::domain::review::{NewReview, Review};
use crate::models::review::{NewReview as DbNewReview, Review as DbReview};
use crate::repository::{DieselRepository, ReviewReader, ReviewWriter, RepositoryResult};

impl ReviewReader for DieselRepository {
    fn list_reviews(&self, limit: i64) -> RepositoryResult<Vec<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let rows = reviews::table
            .order(reviews::created_at.desc())
            .limit(limit)
            .get_results::<DbReview>(&mut conn)?;

        let rows = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Review>, _>>()?;
        Ok(rows)
    }

    fn review_totals(&self) -> RepositoryResult<(i64, f64)> {
        use crate::schema::reviews;
        use diesel::dsl::{count_star, sql};
        use diesel::sql_types::Double;

        let mut conn = self.conn()?;

        let totals = reviews::table
            .select((count_star(), sql::<Double>("COALESCE(AVG(rating), 0)")))
            .first::<(i64, f64)>(&mut conn)?;
        Ok(totals)
    }
}

impl ReviewWriter for DieselRepository {
    fn create_reviews(&self, reviews: &[NewReview]) -> RepositoryResult<usize> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let rows: Vec<DbNewReview> = reviews.iter().map(Into::into).collect();
        let inserted = diesel::insert_into(reviews::table)
            .values(&rows)
            .execute(&mut conn)?;
        Ok(inserted)
    }
}
