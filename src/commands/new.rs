use crate::render::Render;
use crate::utils::tui::create_spinner;
use anyhow::{Context, Result};
use dialoguer::Input;
use evcat_core::collection::EventCollection;
use evcat_core::{EventForm, HttpEventStore};
use owo_colors::OwoColorize;

/// Form values gathered from flags; anything missing is prompted for
/// (title) or left empty.
pub struct Fields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub categories: Option<String>,
}

pub async fn run(store: HttpEventStore, fields: Fields) -> Result<()> {
    let mut collection = EventCollection::new(store);
    collection.begin_create();
    fill_form(collection.form_mut(), fields)?;

    let spinner = create_spinner("Creating event");
    let result = collection.commit().await;
    spinner.finish_and_clear();

    let created = result.context("Failed to create event")?;
    println!("{} {}", "Created".green(), created.render());
    Ok(())
}

/// Apply flag values onto the pending form, prompting for a title when none
/// was given.
pub fn fill_form(form: &mut EventForm, fields: Fields) -> Result<()> {
    form.title = match fields.title {
        Some(title) => title,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    if let Some(description) = fields.description {
        form.description = description;
    }
    if let Some(image) = fields.image {
        form.image = image;
    }
    if let Some(start) = fields.start {
        form.start_time = start;
    }
    if let Some(end) = fields.end {
        form.end_time = end;
    }
    if let Some(categories) = fields.categories {
        form.categories = categories;
    }

    Ok(())
}
