//! Terminal rendering for catalog events.
//!
//! Timestamps come through as the raw strings the event form produced;
//! rendering parses them best-effort for a friendlier display and falls back
//! to the raw value.

use chrono::NaiveDateTime;
use evcat_core::Event;
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    /// One-line list entry: id, title, start time, tags.
    fn render(&self) -> String {
        let mut line = format!(
            "{}  {}",
            format!("[{}]", self.id).dimmed(),
            self.title.bold()
        );
        if !self.start_time.is_empty() {
            line = format!("{} {}", line, format_timestamp(&self.start_time).dimmed());
        }
        if !self.categories.is_empty() {
            line = format!("{} {}", line, render_tags(&self.categories));
        }
        line
    }
}

/// Full detail view of one event.
pub fn render_detail(event: &Event) -> String {
    let mut lines = vec![event.title.bold().to_string()];

    if !event.description.is_empty() {
        lines.push(event.description.clone());
    }
    if let Some(image) = &event.image {
        lines.push(format!("Image: {}", image.underline()));
    }
    lines.push(format!(
        "Start: {}",
        format_timestamp(&event.start_time).dimmed()
    ));
    lines.push(format!(
        "End:   {}",
        format_timestamp(&event.end_time).dimmed()
    ));
    if !event.categories.is_empty() {
        lines.push(render_tags(&event.categories));
    }

    lines.join("\n")
}

fn render_tags(categories: &[String]) -> String {
    categories
        .iter()
        .map(|cat| format!("#{}", cat).blue().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a raw `datetime-local` string (e.g. "2026-03-20T15:00") for
/// display. Unparseable or empty values pass through untouched.
fn format_timestamp(raw: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"));

    match parsed {
        Ok(dt) => dt.format("%a %b %-d %Y, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_datetime_local_strings() {
        assert_eq!(
            format_timestamp("2026-03-20T15:00"),
            "Fri Mar 20 2026, 15:00"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("whenever"), "whenever");
        assert_eq!(format_timestamp(""), "");
    }
}
