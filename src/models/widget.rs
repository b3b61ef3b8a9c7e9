use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Diesel representation of a widget row.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::widgets)]
pub struct Widget {
    pub id: String,
    pub name: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable widget row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::widgets)]
pub struct NewWidget {
    pub id: String,
    pub name: Option<String>,
    pub created_at: NaiveDateTime,
}
