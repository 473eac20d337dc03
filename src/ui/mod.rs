/// Widget builders for the main window
///
/// Pure view code: each function takes the pieces of state it needs and
/// returns an `Element`. All interaction flows back through `Message`.

use iced::widget::{button, column, container, image, row, scrollable, text, text_editor, text_input, Column};
use iced::{Element, Length};

use crate::controller::Mode;
use crate::state::data::Recipe;
use crate::Message;

/// Scrollable list of recipe titles, one button per recipe.
/// Selection is disabled while a form is open.
pub fn sidebar<'a>(
    recipes: &'a [Recipe],
    selected: Option<i64>,
    selectable: bool,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(5);

    for recipe in recipes {
        let entry = button(text(&recipe.title).size(16))
            .width(Length::Fill)
            .padding(8)
            .on_press_maybe(selectable.then_some(Message::RecipeSelected(recipe.id)));

        let entry = if selected == Some(recipe.id) {
            entry.style(button::primary)
        } else {
            entry.style(button::secondary)
        };

        list = list.push(entry);
    }

    column![
        text("Recipes").size(24),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(10)
    .width(Length::FillPortion(1))
    .into()
}

/// Title input plus the two multi-line editors.
/// Widgets without an `on_*` handler render read-only, which is exactly
/// what viewing mode wants.
pub fn recipe_form<'a>(
    editable: bool,
    title: &'a str,
    ingredients: &'a text_editor::Content,
    instructions: &'a text_editor::Content,
) -> Element<'a, Message> {
    let mut title_input = text_input("Recipe Title", title).padding(10);
    if editable {
        title_input = title_input.on_input(Message::TitleChanged);
    }

    let mut ingredients_editor = text_editor(ingredients)
        .placeholder("Ingredients")
        .height(Length::Fixed(110.0))
        .padding(10);
    if editable {
        ingredients_editor = ingredients_editor.on_action(Message::IngredientsEdited);
    }

    let mut instructions_editor = text_editor(instructions)
        .placeholder("Instructions")
        .height(Length::Fixed(160.0))
        .padding(10);
    if editable {
        instructions_editor = instructions_editor.on_action(Message::InstructionsEdited);
    }

    column![title_input, ingredients_editor, instructions_editor]
        .spacing(10)
        .into()
}

/// Fixed-size preview box for the recipe image.
///
/// Only the path is stored; loading and scaling the bytes is entirely the
/// image widget's business, and a missing file simply renders blank.
pub fn image_preview<'a>(image_path: Option<&'a str>, editable: bool) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match image_path {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fixed(300.0))
            .height(Length::Fixed(200.0))
            .into(),
        None => container(text("No image selected").size(14))
            .center_x(Length::Fixed(300.0))
            .center_y(Length::Fixed(200.0))
            .style(container::bordered_box)
            .into(),
    };

    let mut controls = row![].spacing(10).align_y(iced::Alignment::Center);
    if editable {
        controls = controls.push(
            button("Select Image")
                .on_press(Message::PickImage)
                .padding(10),
        );
    }
    if let Some(path) = image_path {
        let filename = std::path::Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string());
        controls = controls.push(text(filename).size(14));
    }

    column![preview, controls].spacing(10).into()
}

/// Action buttons, gated by the current mode
pub fn action_row<'a>(mode: Mode, has_selection: bool) -> Element<'a, Message> {
    let viewing = mode == Mode::Viewing;

    row![
        button("New Recipe")
            .on_press_maybe(viewing.then_some(Message::NewRecipe))
            .padding(10),
        button("Edit")
            .on_press_maybe((viewing && has_selection).then_some(Message::EditRecipe))
            .padding(10),
        button("Save")
            .on_press_maybe((!viewing).then_some(Message::SaveRecipe))
            .padding(10),
        button("Cancel")
            .on_press_maybe((!viewing).then_some(Message::CancelEdit))
            .padding(10),
        button("Delete")
            .style(button::danger)
            .on_press_maybe((viewing && has_selection).then_some(Message::DeleteRecipe))
            .padding(10),
    ]
    .spacing(10)
    .into()
}
