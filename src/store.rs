//! Persistence layer for recipes.
//!
//! Every operation is a single-statement unit of work against the pool; the
//! store is cloneable and injected into the router state so tests can build
//! one over an in-memory database.

use crate::db::{DbConn, DbPool};
use crate::models::{NewRecipe, Recipe};
use crate::schema::recipes;
use diesel::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Database connection failed: {0}")]
    Pool(String),
}

#[derive(Debug, Clone)]
pub struct RecipeStore {
    pool: DbPool,
}

impl RecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConn, StoreError> {
        self.pool.get().map_err(|e| StoreError::Pool(e.to_string()))
    }

    /// Insert a new recipe and return it with its assigned id.
    pub fn create(&self, options: &str, name: &str, content: &str) -> Result<Recipe, StoreError> {
        let mut conn = self.conn()?;
        let new_recipe = NewRecipe {
            options,
            name,
            content,
        };
        let recipe = diesel::insert_into(recipes::table)
            .values(&new_recipe)
            .returning(Recipe::as_returning())
            .get_result(&mut conn)?;
        Ok(recipe)
    }

    /// All recipes in creation order.
    pub fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut conn = self.conn()?;
        let rows = recipes::table
            .order((recipes::date_created.asc(), recipes::id.asc()))
            .select(Recipe::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    pub fn get(&self, id: i32) -> Result<Recipe, StoreError> {
        let mut conn = self.conn()?;
        recipes::table
            .find(id)
            .select(Recipe::as_select())
            .first(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => StoreError::NotFound,
                other => StoreError::Database(other),
            })
    }

    /// Overwrite the content of an existing recipe, leaving every other
    /// field untouched.
    pub fn update_content(&self, id: i32, content: &str) -> Result<(), StoreError> {
        let mut conn = self.conn()?;
        let updated = diesel::update(recipes::table.find(id))
            .set(recipes::content.eq(content))
            .execute(&mut conn)?;
        if updated == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(recipes::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::r2d2::{self, ConnectionManager};
    use diesel_migrations::MigrationHarness;

    // max_size(1) keeps every operation on the same in-memory database.
    fn test_store() -> RecipeStore {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = r2d2::Pool::builder().max_size(1).build(manager).unwrap();
        {
            let mut conn = pool.get().unwrap();
            conn.run_pending_migrations(crate::db::MIGRATIONS).unwrap();
        }
        RecipeStore::new(pool)
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let store = test_store();
        let first = store.create("a, b, c, d", "First", "text one").unwrap();
        let second = store.create("e, f, g, h", "Second", "text two").unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "First");
        assert_eq!(second.content, "text two");
    }

    #[test]
    fn list_returns_creation_order() {
        let store = test_store();
        store.create("a, b, c, d", "First", "one").unwrap();
        store.create("e, f, g, h", "Second", "two").unwrap();
        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "First");
        assert_eq!(all[1].name, "Second");
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = test_store();
        assert!(matches!(store.get(42), Err(StoreError::NotFound)));
    }

    #[test]
    fn update_content_touches_only_content() {
        let store = test_store();
        let created = store.create("a, b, c, d", "Soup", "old text").unwrap();
        store.update_content(created.id, "new text").unwrap();

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.content, "new text");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.options, created.options);
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.date_created, created.date_created);
    }

    #[test]
    fn update_missing_is_not_found() {
        let store = test_store();
        assert!(matches!(
            store.update_content(7, "anything"),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn delete_removes_the_record() {
        let store = test_store();
        let created = store.create("a, b, c, d", "Soup", "text").unwrap();
        store.delete(created.id).unwrap();
        assert!(matches!(store.get(created.id), Err(StoreError::NotFound)));
    }

    #[test]
    fn delete_missing_is_not_found() {
        let store = test_store();
        assert!(matches!(store.delete(9), Err(StoreError::NotFound)));
    }
}
