use crate::render::render_detail;
use crate::utils::tui::create_spinner;
use anyhow::Result;
use evcat_core::HttpEventStore;
use evcat_core::detail::{DetailState, EventDetail};

pub async fn run(store: HttpEventStore, id: &str) -> Result<()> {
    let mut detail = EventDetail::new(store, id);

    let spinner = create_spinner("Fetching event");
    detail.load().await;
    spinner.finish_and_clear();

    match detail.state() {
        DetailState::Loaded(event) => {
            println!("{}", render_detail(event));
            Ok(())
        }
        _ => anyhow::bail!("Could not load event '{}'", id),
    }
}
