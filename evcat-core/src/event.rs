//! Event model types.
//!
//! `Event` is the canonical server-held record, `EventDraft` is the wire
//! payload for create/replace (everything except the server-assigned id),
//! and `EventForm` is the editable string-typed form state that a draft is
//! built from.

use serde::{Deserialize, Serialize};

/// A catalog event as held by the remote store.
///
/// `id` is opaque, assigned by the store on create, and immutable afterwards.
/// It is the only join key between the list view and the detail view.
/// `start_time`/`end_time` are carried as the raw strings a `datetime-local`
/// input produces (local time, no offset); the core never parses or reorders
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Optional image URL; `None` means "no image".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    /// Ordered tags; duplicates and the empty sequence are permitted.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// The request body for create/replace: a full event minus the id, with
/// categories already split into a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub categories: Vec<String>,
}

/// Pending create/edit form values, all string-typed.
///
/// `categories` holds the raw comma-separated text exactly as typed.
/// Joining and re-splitting is lossy: a category that itself contains a
/// comma is split apart on the next commit. Known limitation, kept as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub start_time: String,
    pub end_time: String,
    pub categories: String,
}

impl EventForm {
    /// Fill the form from an existing record for editing.
    pub fn from_event(event: &Event) -> Self {
        EventForm {
            title: event.title.clone(),
            description: event.description.clone(),
            image: event.image.clone().unwrap_or_default(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            categories: event.categories.join(", "),
        }
    }

    /// Convert the form into the wire payload.
    ///
    /// Splits `categories` on commas and trims surrounding whitespace from
    /// each entry; wholly empty input becomes an empty sequence. An empty
    /// image field becomes "no image".
    pub fn into_draft(self) -> EventDraft {
        EventDraft {
            title: self.title,
            description: self.description,
            image: if self.image.is_empty() { None } else { Some(self.image) },
            start_time: self.start_time,
            end_time: self.end_time,
            categories: split_categories(&self.categories),
        }
    }
}

/// Split a raw comma-separated categories string into entries.
pub fn split_categories(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|cat| cat.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event() -> Event {
        Event {
            id: "7".to_string(),
            title: "Launch".to_string(),
            description: "Release party".to_string(),
            image: Some("https://example.com/launch.png".to_string()),
            start_time: "2026-03-20T15:00".to_string(),
            end_time: "2026-03-20T17:00".to_string(),
            categories: vec!["music".to_string(), "tech".to_string()],
        }
    }

    #[test]
    fn form_splits_and_trims_categories() {
        let form = EventForm {
            title: "A".to_string(),
            categories: "x, y".to_string(),
            ..Default::default()
        };
        assert_eq!(form.into_draft().categories, vec!["x", "y"]);
    }

    #[test]
    fn empty_categories_text_becomes_empty_sequence() {
        let form = EventForm::default();
        assert!(form.into_draft().categories.is_empty());
    }

    #[test]
    fn form_round_trips_through_event() {
        let event = make_event();
        let form = EventForm::from_event(&event);
        assert_eq!(form.categories, "music, tech");

        let draft = form.into_draft();
        assert_eq!(draft.title, event.title);
        assert_eq!(draft.categories, event.categories);
        assert_eq!(draft.image.as_deref(), Some("https://example.com/launch.png"));
    }

    #[test]
    fn comma_inside_category_is_split_apart() {
        // The single-string edit form cannot represent a literal comma.
        let mut event = make_event();
        event.categories = vec!["rock, pop".to_string()];

        let draft = EventForm::from_event(&event).into_draft();
        assert_eq!(draft.categories, vec!["rock", "pop"]);
    }

    #[test]
    fn empty_image_becomes_none() {
        let form = EventForm {
            title: "A".to_string(),
            image: String::new(),
            ..Default::default()
        };
        assert_eq!(form.into_draft().image, None);
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let draft = EventForm {
            title: "Launch".to_string(),
            start_time: "2026-03-20T15:00".to_string(),
            ..Default::default()
        }
        .into_draft();

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["title"], "Launch");
        assert_eq!(value["startTime"], "2026-03-20T15:00");
        assert!(value.get("image").is_none());
        assert!(value["categories"].as_array().unwrap().is_empty());
    }

    #[test]
    fn event_decodes_with_missing_optional_fields() {
        let event: Event =
            serde_json::from_str(r#"{"id":"1","title":"Launch"}"#).unwrap();
        assert_eq!(event.id, "1");
        assert_eq!(event.description, "");
        assert_eq!(event.image, None);
        assert!(event.categories.is_empty());
    }
}
