use crate::utils::tui::create_spinner;
use anyhow::Result;
use evcat_core::HttpEventStore;
use evcat_core::collection::EventCollection;
use owo_colors::OwoColorize;

pub async fn run(store: HttpEventStore) -> Result<()> {
    let mut collection = EventCollection::new(store);

    let spinner = create_spinner("Fetching events");
    collection.load().await;
    spinner.finish_and_clear();

    let categories = collection.distinct_categories();
    if categories.is_empty() {
        println!("{}", "No categories in use".dimmed());
        return Ok(());
    }

    for category in categories {
        println!("{}", format!("#{}", category).blue());
    }
    Ok(())
}
