use crate::render::Render;
use crate::utils::tui::create_spinner;
use anyhow::Result;
use evcat_core::collection::EventCollection;
use evcat_core::{EventStore, HttpEventStore};
use owo_colors::OwoColorize;

pub async fn run(
    store: HttpEventStore,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let mut collection = EventCollection::new(store);

    let spinner = create_spinner("Fetching events");
    collection.load().await;
    spinner.finish_and_clear();

    print_events(&collection, search.unwrap_or(""), category);
    Ok(())
}

fn print_events<S: EventStore>(
    collection: &EventCollection<S>,
    search: &str,
    category: Option<&str>,
) {
    let visible = collection.visible(search, category);

    if visible.is_empty() {
        println!("{}", "No events found...".dimmed());
        return;
    }

    for event in visible {
        println!("{}", event.render());
    }
}
