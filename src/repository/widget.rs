use chrono::Utc;
use diesel::prelude::*;

use crate::models::widget::NewWidget;
use crate::repository::{DieselRepository, RepositoryResult, WidgetReader, WidgetWriter};

impl WidgetReader for DieselRepository {
    fn first_widget_id(&self) -> RepositoryResult<Option<String>> {
        use crate::schema::widgets;

        let mut conn = self.conn()?;

        let id = widgets::table
            .select(widgets::id)
            .order(widgets::created_at.asc())
            .first::<String>(&mut conn)
            .optional()?;
        Ok(id)
    }
}

impl WidgetWriter for DieselRepository {
    fn create_widget(&self, id: &str, name: Option<&str>) -> RepositoryResult<usize> {
        use crate::schema::widgets;

        let mut conn = self.conn()?;

        let row = NewWidget {
            id: id.to_string(),
            name: name.map(str::to_string),
            created_at: Utc::now().naive_utc(),
        };
        let inserted = diesel::insert_into(widgets::table)
            .values(&row)
            .execute(&mut conn)?;
        Ok(inserted)
    }
}
