use iced::widget::{column, container, row, text, text_editor};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;

// Declare the application modules
mod controller;
mod state;
mod ui;

use controller::{Controller, Mode};
use state::data::{Recipe, RecipeDraft};
use state::error::StoreError;
use state::repository::RecipeRepository;
use state::store::RecipeStore;

/// Main application state
struct RecipeBook {
    /// Mediates between user actions and the database
    controller: Controller,
    /// Current content of the title field
    title: String,
    /// Current content of the ingredients editor
    ingredients: text_editor::Content,
    /// Current content of the instructions editor
    instructions: text_editor::Content,
    /// Image chosen for the recipe being viewed or edited
    image_path: Option<String>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The title field changed
    TitleChanged(String),
    /// The ingredients editor received an action
    IngredientsEdited(text_editor::Action),
    /// The instructions editor received an action
    InstructionsEdited(text_editor::Action),
    /// User clicked "Select Image"
    PickImage,
    /// User clicked a recipe in the sidebar
    RecipeSelected(i64),
    /// User clicked "New Recipe"
    NewRecipe,
    /// User clicked "Edit"
    EditRecipe,
    /// User clicked "Save"
    SaveRecipe,
    /// User clicked "Cancel"
    CancelEdit,
    /// User clicked "Delete"
    DeleteRecipe,
}

impl RecipeBook {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Initialize the database
        // If this fails, we panic because the app cannot function without it
        let store = RecipeStore::open_default()
            .expect("Failed to initialize database. Check permissions and disk space.");
        let repository = RecipeRepository::new(store);

        // A brand-new book gets a couple of examples so the window isn't blank
        if let Err(err) = seed_sample_recipes(&repository) {
            eprintln!("⚠️  Could not seed sample recipes: {err}");
        }

        let controller = Controller::new(repository)
            .expect("Failed to load recipes from the database.");

        let count = controller.recipes().len();
        println!("🍳 Recipe Book initialized with {} recipes", count);

        let status = format!("Ready. {} recipes in the book.", count);

        (
            RecipeBook {
                controller,
                title: String::new(),
                ingredients: text_editor::Content::new(),
                instructions: text_editor::Content::new(),
                image_path: None,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TitleChanged(title) => {
                self.title = title;
            }
            Message::IngredientsEdited(action) => {
                self.ingredients.perform(action);
            }
            Message::InstructionsEdited(action) => {
                self.instructions.perform(action);
            }
            Message::PickImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select Recipe Image")
                    .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
                    .pick_file();

                if let Some(path) = file {
                    self.image_path = Some(path.to_string_lossy().to_string());
                }
            }
            Message::RecipeSelected(id) => {
                self.controller.select(id);
                if let Some(recipe) = self.controller.selected().cloned() {
                    self.status = format!("Viewing \"{}\".", recipe.title);
                    self.populate_form(&recipe);
                }
            }
            Message::NewRecipe => {
                self.controller.begin_add();
                self.clear_form();
                self.status = String::from("Fill in the form and press Save.");
            }
            Message::EditRecipe => {
                if self.controller.begin_edit() {
                    if let Some(recipe) = self.controller.selected().cloned() {
                        self.status = format!("Editing \"{}\".", recipe.title);
                        self.populate_form(&recipe);
                    }
                }
            }
            Message::SaveRecipe => {
                self.save();
            }
            Message::CancelEdit => {
                self.controller.cancel();
                match self.controller.selected().cloned() {
                    Some(recipe) => self.populate_form(&recipe),
                    None => self.clear_form(),
                }
                self.status = String::from("Cancelled.");
            }
            Message::DeleteRecipe => {
                if let Some(id) = self.controller.selected_id() {
                    match self.controller.submit_delete(id) {
                        Ok(()) => {
                            self.clear_form();
                            self.status = String::from("🗑️  Recipe deleted.");
                        }
                        Err(err) => self.report(err),
                    }
                }
            }
        }

        Task::none()
    }

    /// Dispatch the Save button based on what the form is doing
    fn save(&mut self) {
        match self.controller.mode() {
            Mode::Adding => match self.controller.submit_add(&self.draft()) {
                Ok(recipe) => {
                    self.clear_form();
                    self.status = format!("✅ Added \"{}\".", recipe.title);
                }
                // Validation failure: the form stays open with its content
                Err(err) => self.report(err),
            },
            Mode::Editing => {
                let Some(id) = self.controller.selected_id() else {
                    return;
                };
                match self.controller.submit_edit(id, &self.draft()) {
                    Ok(()) => {
                        if let Some(recipe) = self.controller.selected().cloned() {
                            self.populate_form(&recipe);
                            self.status = format!("✅ Saved \"{}\".", recipe.title);
                        }
                    }
                    Err(err) => {
                        // A stale id means the recipe is gone; the controller
                        // already reconciled the list, so empty the form too
                        if matches!(err, StoreError::NotFound(_)) {
                            self.clear_form();
                        }
                        self.report(err);
                    }
                }
            }
            Mode::Viewing => {}
        }
    }

    /// Collect the form fields into one draft value
    fn draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            ingredients: self.ingredients.text(),
            instructions: self.instructions.text(),
            image_path: self.image_path.clone(),
        }
    }

    /// Load a recipe into the form fields
    fn populate_form(&mut self, recipe: &Recipe) {
        self.title = recipe.title.clone();
        self.ingredients = text_editor::Content::with_text(&recipe.ingredients);
        self.instructions = text_editor::Content::with_text(&recipe.instructions);
        self.image_path = recipe.image_path.clone();
    }

    /// Reset the form to empty fields
    fn clear_form(&mut self) {
        self.title.clear();
        self.ingredients = text_editor::Content::new();
        self.instructions = text_editor::Content::new();
        self.image_path = None;
    }

    /// Surface a failed operation on the status line
    fn report(&mut self, err: StoreError) {
        eprintln!("⚠️  {err}");
        self.status = format!("⚠️  {err}");
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mode = self.controller.mode();
        let editable = mode != Mode::Viewing;

        let details = column![
            ui::recipe_form(editable, &self.title, &self.ingredients, &self.instructions),
            ui::image_preview(self.image_path.as_deref(), editable),
            ui::action_row(mode, self.controller.selected_id().is_some()),
            text(&self.status).size(14),
        ]
        .spacing(15)
        .width(Length::FillPortion(2));

        let content = row![
            ui::sidebar(
                self.controller.recipes(),
                self.controller.selected_id(),
                mode == Mode::Viewing,
            ),
            details,
        ]
        .spacing(20)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Insert a couple of sample recipes the first time the app runs,
/// so the window isn't empty on first launch.
fn seed_sample_recipes(repository: &RecipeRepository) -> Result<(), StoreError> {
    if !repository.is_empty()? {
        return Ok(());
    }

    repository.add(&RecipeDraft {
        title: String::from("Spaghetti Carbonara"),
        ingredients: String::from("Spaghetti, Eggs, Parmesan cheese, Bacon, Pepper"),
        instructions: String::from(
            "1. Boil pasta.\n2. Fry bacon.\n3. Mix eggs and cheese.\n4. Combine all with pasta.",
        ),
        image_path: None,
    })?;

    repository.add(&RecipeDraft {
        title: String::from("Chocolate Cake"),
        ingredients: String::from("Flour, Cocoa powder, Sugar, Eggs, Butter, Baking powder"),
        instructions: String::from(
            "1. Mix dry ingredients.\n2. Add wet ingredients.\n3. Bake at 180°C for 35 min.",
        ),
        image_path: None,
    })?;

    println!("🌱 Added sample recipes to the empty book");

    Ok(())
}

fn main() -> iced::Result {
    iced::application(
        "Recipe Book",
        RecipeBook::update,
        RecipeBook::view,
    )
    .theme(RecipeBook::theme)
    .window_size((900.0, 640.0))
    .centered()
    .run_with(RecipeBook::new)
}
