use crate::state::data::{Recipe, RecipeDraft};
use crate::state::error::StoreError;
use crate::state::repository::RecipeRepository;

/// What the form area is currently doing.
///
/// `Viewing` keeps the fields read-only; `Editing` has an existing recipe
/// loaded into editable fields; `Adding` is an empty editable form with no
/// current id. Saving or cancelling always lands back in `Viewing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Editing,
    Adding,
}

/// Mediates between user actions and the repository.
///
/// Owns the in-memory copy of the recipe list used for display, the
/// current selection, and the mode state machine. Every mutation goes
/// through the repository and is followed by a list refresh, so the
/// cached list never outlives the row it came from.
pub struct Controller {
    repository: RecipeRepository,
    recipes: Vec<Recipe>,
    selected: Option<i64>,
    mode: Mode,
}

impl Controller {
    /// Take ownership of the repository and load the initial list
    pub fn new(repository: RecipeRepository) -> Result<Self, StoreError> {
        let recipes = repository.list_all()?;
        Ok(Self {
            repository,
            recipes,
            selected: None,
            mode: Mode::Viewing,
        })
    }

    /// The cached recipe list, in insertion order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    /// The currently selected recipe, looked up in the cached list
    pub fn selected(&self) -> Option<&Recipe> {
        self.selected
            .and_then(|id| self.recipes.iter().find(|r| r.id == id))
    }

    /// Re-read the full list from storage and drop any selection that no
    /// longer resolves to a row.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.recipes = self.repository.list_all()?;
        if let Some(id) = self.selected {
            if !self.recipes.iter().any(|r| r.id == id) {
                self.selected = None;
            }
        }
        Ok(())
    }

    /// Make a recipe current. Only meaningful while viewing; storage is
    /// never touched.
    pub fn select(&mut self, id: i64) {
        if self.mode == Mode::Viewing && self.recipes.iter().any(|r| r.id == id) {
            self.selected = Some(id);
        }
    }

    /// Switch to an empty editable form with no current recipe
    pub fn begin_add(&mut self) {
        if self.mode == Mode::Viewing {
            self.selected = None;
            self.mode = Mode::Adding;
        }
    }

    /// Load the selection into editable fields.
    /// Returns false (and stays put) when nothing is selected.
    pub fn begin_edit(&mut self) -> bool {
        if self.mode == Mode::Viewing && self.selected.is_some() {
            self.mode = Mode::Editing;
            true
        } else {
            false
        }
    }

    /// Abandon the form and go back to viewing whatever is selected
    pub fn cancel(&mut self) {
        self.mode = Mode::Viewing;
    }

    /// Persist a brand-new recipe from the form.
    ///
    /// On success the list is refreshed, the form mode ends and nothing is
    /// selected. A validation failure leaves the mode (and the user's
    /// half-typed form) in place.
    pub fn submit_add(&mut self, draft: &RecipeDraft) -> Result<Recipe, StoreError> {
        let recipe = self.repository.add(draft)?;
        self.refresh()?;
        self.selected = None;
        self.mode = Mode::Viewing;
        Ok(recipe)
    }

    /// Persist changes to an existing recipe.
    ///
    /// A stale id (recipe deleted since it was loaded) still refreshes the
    /// list so the display reconciles, then reports the failure upward.
    pub fn submit_edit(&mut self, id: i64, draft: &RecipeDraft) -> Result<(), StoreError> {
        match self.repository.update(id, draft) {
            Ok(()) => {
                self.refresh()?;
                self.selected = Some(id);
                self.mode = Mode::Viewing;
                Ok(())
            }
            Err(err @ StoreError::NotFound(_)) => {
                self.refresh()?;
                self.mode = Mode::Viewing;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Delete a recipe and clear the selection
    pub fn submit_delete(&mut self, id: i64) -> Result<(), StoreError> {
        match self.repository.remove(id) {
            Ok(()) => {
                self.refresh()?;
                self.selected = None;
                Ok(())
            }
            Err(err @ StoreError::NotFound(_)) => {
                // Already gone; reconcile the list anyway
                self.refresh()?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
