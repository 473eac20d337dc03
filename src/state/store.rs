use rusqlite::{Connection, OptionalExtension, Result as SqlResult};
use std::path::PathBuf;

use super::data::{Recipe, RecipeDraft};

/// The RecipeStore manages the SQLite database file.
/// It owns the single connection and exposes row-level operations
/// for the `recipes` table; it does not validate domain rules.
pub struct RecipeStore {
    conn: Connection,
}

impl RecipeStore {
    /// Open (or create) the database at its default location and
    /// initialize the schema.
    ///
    /// The database file lives in the user's data directory:
    /// - Linux: ~/.local/share/recipe-book/recipes.db
    /// - macOS: ~/Library/Application Support/recipe-book/recipes.db
    /// - Windows: %APPDATA%\recipe-book\recipes.db
    pub fn open_default() -> SqlResult<Self> {
        let db_path = Self::default_path();

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .expect("Failed to create application data directory");
        }

        let conn = Connection::open(&db_path)?;

        println!("📁 Database initialized at: {}", db_path.display());

        let store = RecipeStore { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// Open a throwaway in-memory database, used by the tests.
    #[cfg(test)]
    pub fn open_in_memory() -> SqlResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = RecipeStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Where the database file should live
    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");

        path.push("recipe-book");
        path.push("recipes.db");
        path
    }

    /// Create the `recipes` table if it doesn't exist yet.
    ///
    /// AUTOINCREMENT keeps ids monotonic, so a deleted recipe's id is
    /// never handed out again.
    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS recipes (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                title           TEXT NOT NULL,
                ingredients     TEXT,
                instructions    TEXT,
                image_path      TEXT
            )",
            [],
        )?;

        Ok(())
    }

    /// Insert a new recipe row and return its assigned id
    pub fn insert(&self, draft: &RecipeDraft) -> SqlResult<i64> {
        self.conn.execute(
            "INSERT INTO recipes (title, ingredients, instructions, image_path)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                draft.title,
                draft.ingredients,
                draft.instructions,
                draft.image_path,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrite every column of the row with the given id.
    /// Returns the number of rows changed (0 when the id is unknown).
    pub fn update(&self, id: i64, draft: &RecipeDraft) -> SqlResult<usize> {
        self.conn.execute(
            "UPDATE recipes
             SET title = ?1, ingredients = ?2, instructions = ?3, image_path = ?4
             WHERE id = ?5",
            rusqlite::params![
                draft.title,
                draft.ingredients,
                draft.instructions,
                draft.image_path,
                id,
            ],
        )
    }

    /// Delete the row with the given id.
    /// Returns the number of rows changed (0 when the id is unknown).
    pub fn delete(&self, id: i64) -> SqlResult<usize> {
        self.conn
            .execute("DELETE FROM recipes WHERE id = ?1", rusqlite::params![id])
    }

    /// Fetch every recipe, ordered by insertion (id ascending)
    pub fn fetch_all(&self) -> SqlResult<Vec<Recipe>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, ingredients, instructions, image_path
             FROM recipes ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], Recipe::from_row)?;

        let mut recipes = Vec::new();
        for recipe in rows {
            recipes.push(recipe?);
        }

        Ok(recipes)
    }

    /// Fetch a single recipe, or None when the id is unknown
    pub fn fetch_one(&self, id: i64) -> SqlResult<Option<Recipe>> {
        self.conn
            .query_row(
                "SELECT id, title, ingredients, instructions, image_path
                 FROM recipes WHERE id = ?1",
                rusqlite::params![id],
                Recipe::from_row,
            )
            .optional()
    }

    /// Number of recipes currently stored
    pub fn count(&self) -> SqlResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            ingredients: "some ingredients".to_string(),
            instructions: "some steps".to_string(),
            image_path: None,
        }
    }

    #[test]
    fn opens_with_empty_table() {
        let store = RecipeStore::open_in_memory().unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let store = RecipeStore::open_in_memory().unwrap();

        let first = store.insert(&draft("Toast")).unwrap();
        let second = store.insert(&draft("Soup")).unwrap();

        assert_eq!(first, 1);
        assert!(second > first);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = RecipeStore::open_in_memory().unwrap();

        let first = store.insert(&draft("Toast")).unwrap();
        assert_eq!(store.delete(first).unwrap(), 1);

        let second = store.insert(&draft("Soup")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn fetch_all_is_ordered_by_id() {
        let store = RecipeStore::open_in_memory().unwrap();

        store.insert(&draft("Zucchini bake")).unwrap();
        store.insert(&draft("Apple pie")).unwrap();

        let recipes = store.fetch_all().unwrap();
        let ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(recipes[0].title, "Zucchini bake");
    }

    #[test]
    fn fetch_one_reports_absence_explicitly() {
        let store = RecipeStore::open_in_memory().unwrap();
        assert!(store.fetch_one(42).unwrap().is_none());

        let id = store.insert(&draft("Toast")).unwrap();
        assert!(store.fetch_one(id).unwrap().is_some());
    }

    #[test]
    fn update_and_delete_report_zero_rows_for_unknown_ids() {
        let store = RecipeStore::open_in_memory().unwrap();

        assert_eq!(store.update(9, &draft("Ghost")).unwrap(), 0);
        assert_eq!(store.delete(9).unwrap(), 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn update_mutates_in_place_without_new_id() {
        let store = RecipeStore::open_in_memory().unwrap();

        let id = store.insert(&draft("Toast")).unwrap();
        let changed = store.update(id, &draft("French toast")).unwrap();

        assert_eq!(changed, 1);
        let recipes = store.fetch_all().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, id);
        assert_eq!(recipes[0].title, "French toast");
    }
}
