use crate::utils::tui::create_spinner;
use anyhow::{Context, Result};
use dialoguer::Confirm;
use evcat_core::HttpEventStore;
use evcat_core::detail::{DetailState, EventDetail};
use owo_colors::OwoColorize;

/// Delete one event through the detail controller's confirmation gate.
///
/// `assume_yes` answers the gate's question up front; the request/confirm
/// two-step still runs through the state machine.
pub async fn run(store: HttpEventStore, id: &str, assume_yes: bool) -> Result<()> {
    let mut detail = EventDetail::new(store, id);

    let spinner = create_spinner("Fetching event");
    detail.load().await;
    spinner.finish_and_clear();

    if *detail.state() == DetailState::LoadFailed {
        anyhow::bail!("Could not load event '{}'", id);
    }

    let title = detail
        .record()
        .map(|event| event.title.clone())
        .unwrap_or_default();

    detail.request_delete();

    let confirmed = assume_yes
        || Confirm::new()
            .with_prompt(format!(
                "Delete '{}'? This action cannot be undone",
                title
            ))
            .default(false)
            .interact()?;

    if !confirmed {
        detail.cancel_delete();
        println!("{}", "Aborted, nothing deleted".dimmed());
        return Ok(());
    }

    let spinner = create_spinner("Deleting event");
    let result = detail.confirm_delete().await;
    spinner.finish_and_clear();

    result.context("Failed to delete event")?;
    println!("{} event '{}' ({})", "Deleted".red(), title, id);
    Ok(())
}
