/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the database layer and the UI layer.

/// A single recipe as stored in the database
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Unique database ID
    pub id: i64,
    /// Recipe name, never empty
    pub title: String,
    /// Free-form ingredient list, stored as one text blob
    pub ingredients: String,
    /// Free-form cooking steps
    pub instructions: String,
    /// Path to an image file on disk (None if no image was chosen)
    pub image_path: Option<String>,
}

impl Recipe {
    /// Build a Recipe from a row shaped as
    /// `(id, title, ingredients, instructions, image_path)`.
    ///
    /// This is the one canonical row-to-recipe mapping; every query
    /// that selects recipe rows goes through it.
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            ingredients: row.get(2)?,
            instructions: row.get(3)?,
            image_path: row.get(4)?,
        })
    }
}

/// Form input for a recipe, before it has (or keyed separately from) an ID
///
/// The UI collects all field values into one of these and hands it to the
/// controller as a unit, instead of the controller reading widgets
/// field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_path: Option<String>,
}

impl RecipeDraft {
    /// Copy of the draft with surrounding whitespace stripped from the
    /// text fields. Text editors tend to leave a trailing newline behind.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            ingredients: self.ingredients.trim().to_string(),
            instructions: self.instructions.trim().to_string(),
            image_path: self.image_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let draft = RecipeDraft {
            title: "  Pancakes \n".to_string(),
            ingredients: "flour, milk, eggs\n".to_string(),
            instructions: "\nwhisk and fry\n".to_string(),
            image_path: Some("/img/pancakes.png".to_string()),
        };

        let trimmed = draft.trimmed();

        assert_eq!(trimmed.title, "Pancakes");
        assert_eq!(trimmed.ingredients, "flour, milk, eggs");
        assert_eq!(trimmed.instructions, "whisk and fry");
        assert_eq!(trimmed.image_path.as_deref(), Some("/img/pancakes.png"));
    }
}
