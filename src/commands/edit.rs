use super::new::Fields;
use crate::render::Render;
use crate::utils::tui::create_spinner;
use anyhow::{Context, Result};
use evcat_core::HttpEventStore;
use evcat_core::collection::EventCollection;
use owo_colors::OwoColorize;

pub async fn run(store: HttpEventStore, id: &str, fields: Fields) -> Result<()> {
    let mut collection = EventCollection::new(store);

    let spinner = create_spinner("Fetching events");
    collection.load().await;
    spinner.finish_and_clear();

    let target = collection
        .events()
        .iter()
        .find(|event| event.id == id)
        .cloned()
        .with_context(|| format!("No event with id '{}'", id))?;

    collection.begin_edit(&target);
    apply_overrides(&mut collection, fields);

    let spinner = create_spinner("Saving event");
    let result = collection.commit().await;
    spinner.finish_and_clear();

    let updated = result.context("Failed to save event")?;
    println!("{} {}", "Saved".yellow(), updated.render());
    Ok(())
}

/// Overlay flag values onto the prefilled form; untouched fields keep the
/// record's current values.
fn apply_overrides(collection: &mut EventCollection<HttpEventStore>, fields: Fields) {
    let form = collection.form_mut();

    if let Some(title) = fields.title {
        form.title = title;
    }
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
}
