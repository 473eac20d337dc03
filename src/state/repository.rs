use super::data::{Recipe, RecipeDraft};
use super::error::StoreError;
use super::store::RecipeStore;

/// Domain-shaped wrapper over the RecipeStore.
///
/// This is the one layer that deals in `Recipe` values rather than rows.
/// It enforces the non-empty-title rule before anything reaches storage
/// and turns "zero rows changed" into an explicit not-found error.
pub struct RecipeRepository {
    store: RecipeStore,
}

impl RecipeRepository {
    /// Wrap an already-opened store. The store handle is constructed at
    /// composition time (in `main`) and owned here for the process lifetime.
    pub fn new(store: RecipeStore) -> Self {
        Self { store }
    }

    /// Trim the draft and reject it if the title came out empty.
    /// A rejected draft performs no storage operation at all.
    fn validated(draft: &RecipeDraft) -> Result<RecipeDraft, StoreError> {
        let draft = draft.trimmed();
        if draft.title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        Ok(draft)
    }

    /// Persist a new recipe and return it with its assigned id
    pub fn add(&self, draft: &RecipeDraft) -> Result<Recipe, StoreError> {
        let draft = Self::validated(draft)?;
        let id = self.store.insert(&draft)?;

        Ok(Recipe {
            id,
            title: draft.title,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            image_path: draft.image_path,
        })
    }

    /// Replace every field of an existing recipe (the id never changes)
    pub fn update(&self, id: i64, draft: &RecipeDraft) -> Result<(), StoreError> {
        let draft = Self::validated(draft)?;
        if self.store.update(id, &draft)? == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Permanently delete a recipe
    pub fn remove(&self, id: i64) -> Result<(), StoreError> {
        if self.store.delete(id)? == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Every stored recipe, in insertion order
    pub fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.store.fetch_all()?)
    }

    /// A single recipe, or None when the id is unknown
    pub fn get(&self, id: i64) -> Result<Option<Recipe>, StoreError> {
        Ok(self.store.fetch_one(id)?)
    }

    /// True when no recipes are stored yet (used for first-run seeding)
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.store.count()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> RecipeRepository {
        RecipeRepository::new(RecipeStore::open_in_memory().unwrap())
    }

    fn carbonara() -> RecipeDraft {
        RecipeDraft {
            title: "Carbonara".to_string(),
            ingredients: "eggs,pasta,pancetta".to_string(),
            instructions: "boil pasta...".to_string(),
            image_path: Some("/img/carbonara.jpg".to_string()),
        }
    }

    #[test]
    fn add_then_get_round_trips_every_field() {
        let repo = repository();

        let added = repo.add(&carbonara()).unwrap();
        let fetched = repo.get(added.id).unwrap().unwrap();

        assert_eq!(fetched, added);
        assert_eq!(fetched.title, "Carbonara");
        assert_eq!(fetched.ingredients, "eggs,pasta,pancetta");
        assert_eq!(fetched.instructions, "boil pasta...");
        assert_eq!(fetched.image_path.as_deref(), Some("/img/carbonara.jpg"));
    }

    #[test]
    fn add_trims_whitespace_before_storing() {
        let repo = repository();

        let draft = RecipeDraft {
            title: "  Tea  ".to_string(),
            ingredients: "water, leaves\n".to_string(),
            instructions: "steep\n".to_string(),
            image_path: None,
        };

        let added = repo.add(&draft).unwrap();
        assert_eq!(added.title, "Tea");
        assert_eq!(repo.get(added.id).unwrap().unwrap().title, "Tea");
    }

    #[test]
    fn add_rejects_empty_title_without_writing() {
        let repo = repository();

        let mut draft = carbonara();
        draft.title = "   ".to_string();

        assert!(matches!(repo.add(&draft), Err(StoreError::EmptyTitle)));
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn update_reflects_new_fields_and_keeps_id() {
        let repo = repository();
        let added = repo.add(&carbonara()).unwrap();

        let mut draft = carbonara();
        draft.title = "Spaghetti Carbonara".to_string();
        draft.image_path = None;
        repo.update(added.id, &draft).unwrap();

        let fetched = repo.get(added.id).unwrap().unwrap();
        assert_eq!(fetched.id, added.id);
        assert_eq!(fetched.title, "Spaghetti Carbonara");
        assert_eq!(fetched.image_path, None);
    }

    #[test]
    fn update_rejects_empty_title_and_leaves_row_untouched() {
        let repo = repository();
        let added = repo.add(&carbonara()).unwrap();

        let mut draft = carbonara();
        draft.title = String::new();

        assert!(matches!(
            repo.update(added.id, &draft),
            Err(StoreError::EmptyTitle)
        ));
        assert_eq!(repo.get(added.id).unwrap().unwrap().title, "Carbonara");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let repo = repository();
        assert!(matches!(
            repo.update(7, &carbonara()),
            Err(StoreError::NotFound(7))
        ));
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let repo = repository();
        repo.add(&carbonara()).unwrap();

        assert!(matches!(repo.remove(99), Err(StoreError::NotFound(99))));
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn removed_recipes_stay_gone() {
        let repo = repository();
        let added = repo.add(&carbonara()).unwrap();

        repo.remove(added.id).unwrap();

        assert!(repo.get(added.id).unwrap().is_none());
        assert!(repo
            .list_all()
            .unwrap()
            .iter()
            .all(|r| r.id != added.id));
    }

    #[test]
    fn list_length_tracks_adds_and_removes() {
        let repo = repository();

        let a = repo.add(&carbonara()).unwrap();
        let mut other = carbonara();
        other.title = "Chocolate Cake".to_string();
        repo.add(&other).unwrap();

        assert_eq!(repo.list_all().unwrap().len(), 2);

        repo.remove(a.id).unwrap();
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn sequential_adds_get_distinct_increasing_ids() {
        let repo = repository();

        let first = repo.add(&carbonara()).unwrap();
        let mut other = carbonara();
        other.title = "Chocolate Cake".to_string();
        let second = repo.add(&other).unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
    }

    // The end-to-end scenario: add, list, rename, remove.
    #[test]
    fn carbonara_lifecycle() {
        let repo = repository();

        let added = repo.add(&carbonara()).unwrap();
        assert_eq!(added.id, 1);

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);

        let mut renamed = carbonara();
        renamed.title = "Spaghetti Carbonara".to_string();
        repo.update(1, &renamed).unwrap();
        assert_eq!(repo.get(1).unwrap().unwrap().title, "Spaghetti Carbonara");

        repo.remove(1).unwrap();
        assert!(repo.list_all().unwrap().is_empty());
        assert!(repo.is_empty().unwrap());
    }
}
