use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

/// Longest content the edit form accepts. Generated content is already
/// bounded by the completion token cap.
pub const CONTENT_MAX_LEN: usize = 4096;

#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    /// The four generation selections joined with ", ", stored verbatim.
    pub options: String,
    pub name: String,
    pub content: String,
    pub date_created: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub options: &'a str,
    pub name: &'a str,
    pub content: &'a str,
}
