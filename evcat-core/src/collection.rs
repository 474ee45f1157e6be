//! The event collection controller.
//!
//! Owns the canonical in-memory list and the pending create/edit form.
//! The list is mutated only after a remote call resolves successfully;
//! nothing is inserted or removed speculatively, so a failed mutation
//! leaves the pre-mutation state exactly as it was.

use crate::error::StoreResult;
use crate::event::{Event, EventForm};
use crate::filter;
use crate::store::EventStore;
use std::collections::BTreeSet;

/// Owns the canonical event list and performs create/edit/delete against
/// the remote store.
///
/// Mutation effects are applied in the order their store calls resolve.
/// The controller is a plain owned value: dropping it while a call is in
/// flight drops the whole flow, so a late response can never touch state
/// that has been torn down.
pub struct EventCollection<S> {
    store: S,
    events: Vec<Event>,
    form: EventForm,
    editing_id: Option<String>,
    editor_open: bool,
}

impl<S: EventStore> EventCollection<S> {
    pub fn new(store: S) -> Self {
        EventCollection {
            store,
            events: Vec::new(),
            form: EventForm::default(),
            editing_id: None,
            editor_open: false,
        }
    }

    /// The canonical collection.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The pending form values, for the edit surface to fill in.
    pub fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    /// Whether the edit surface should be showing.
    pub fn editor_open(&self) -> bool {
        self.editor_open
    }

    /// The id being edited, or `None` when the form is a new event.
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    /// Replace the collection wholesale from the store.
    ///
    /// On failure the collection keeps its prior value (empty on first
    /// load) and the failure is logged rather than propagated.
    pub async fn load(&mut self) {
        match self.store.list().await {
            Ok(events) => self.events = events,
            Err(err) => tracing::warn!(%err, "failed to load events, keeping stale list"),
        }
    }

    /// Start a fresh create: empty form, edit surface open.
    pub fn begin_create(&mut self) {
        self.form = EventForm::default();
        self.editing_id = None;
        self.editor_open = true;
    }

    /// Start editing an existing record: its fields are copied into the
    /// form, with categories re-joined into one comma-separated string.
    pub fn begin_edit(&mut self, event: &Event) {
        self.form = EventForm::from_event(event);
        self.editing_id = Some(event.id.clone());
        self.editor_open = true;
    }

    /// Commit the pending form.
    ///
    /// Replaces the record matching `editing_id` in place, or creates and
    /// appends when no id is set. On success the form resets and the edit
    /// surface closes; on failure both stay as they were, the collection is
    /// untouched, and the error is returned for reporting.
    pub async fn commit(&mut self) -> StoreResult<Event> {
        let draft = self.form.clone().into_draft();

        let committed = match &self.editing_id {
            Some(id) => {
                let updated = self.store.replace(id, &draft).await?;
                match self.events.iter_mut().find(|e| e.id == updated.id) {
                    Some(slot) => *slot = updated.clone(),
                    // Not in the list (e.g. loaded elsewhere); keep the
                    // collection consistent with the store.
                    None => self.events.push(updated.clone()),
                }
                updated
            }
            None => {
                let created = self.store.create(&draft).await?;
                self.events.push(created.clone());
                created
            }
        };

        self.form = EventForm::default();
        self.editing_id = None;
        self.editor_open = false;
        Ok(committed)
    }

    /// Delete a record by id.
    ///
    /// The collection drops the record only once the store confirms the
    /// deletion. There is no confirmation gate here; destructive-action
    /// confirmation lives in the detail controller.
    pub async fn remove(&mut self, id: &str) -> StoreResult<()> {
        self.store.remove(id).await?;
        self.events.retain(|event| event.id != id);
        Ok(())
    }

    /// The filtered subset currently eligible for display.
    pub fn visible(&self, search_term: &str, category: Option<&str>) -> Vec<&Event> {
        filter::visible(&self.events, search_term, category)
    }

    /// Choices for the category filter.
    pub fn distinct_categories(&self) -> BTreeSet<String> {
        filter::distinct_categories(&self.events)
    }
}

// In-flight calls and teardown: there is no test that races a response
// against a dropped controller because the situation is unrepresentable.
// Every mutation goes through `&mut self` futures, so the borrow checker
// prevents dropping the controller while a call it issued is still pending,
// and dropping the future abandons the response before it can be applied.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::test_store::MockStore;

    fn seeded(titles: &[&str]) -> MockStore {
        let store = MockStore::new();
        for title in titles {
            store.seed(title, &[]);
        }
        store
    }

    #[tokio::test]
    async fn load_replaces_collection_wholesale() {
        let mut collection = EventCollection::new(seeded(&["Launch", "Demo"]));
        collection.load().await;
        assert_eq!(collection.events().len(), 2);
        assert_eq!(collection.events()[0].title, "Launch");
    }

    #[tokio::test]
    async fn load_failure_keeps_prior_collection() {
        let store = seeded(&["Launch"]);
        let mut collection = EventCollection::new(store);
        collection.load().await;
        assert_eq!(collection.events().len(), 1);

        collection
            .store
            .fail_next(StoreError::Decode("unexpected token".to_string()));
        collection.load().await;
        assert_eq!(collection.events().len(), 1, "stale list survives a bad response");
    }

    #[tokio::test]
    async fn load_failure_on_first_load_leaves_empty() {
        let store = MockStore::new();
        store.fail_next(StoreError::Transport("connection refused".to_string()));
        let mut collection = EventCollection::new(store);
        collection.load().await;
        assert!(collection.events().is_empty());
    }

    #[tokio::test]
    async fn create_appends_and_closes_editor() {
        let mut collection = EventCollection::new(MockStore::new());
        collection.begin_create();
        assert!(collection.editor_open());
        assert_eq!(collection.editing_id(), None);

        collection.form_mut().title = "Launch".to_string();
        let created = collection.commit().await.unwrap();

        assert_eq!(created.id, "1");
        assert!(created.categories.is_empty());
        assert_eq!(collection.events().len(), 1);
        assert_eq!(collection.events()[0].title, "Launch");
        assert!(!collection.editor_open());
        assert_eq!(collection.form().title, "");
    }

    #[tokio::test]
    async fn commit_splits_and_trims_categories() {
        let mut collection = EventCollection::new(MockStore::new());
        collection.begin_create();
        collection.form_mut().title = "A".to_string();
        collection.form_mut().categories = "x, y".to_string();

        let created = collection.commit().await.unwrap();
        assert_eq!(created.categories, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn edit_replaces_in_place() {
        let mut collection = EventCollection::new(seeded(&["Launch", "Demo"]));
        collection.load().await;

        let target = collection.events()[0].clone();
        collection.begin_edit(&target);
        assert_eq!(collection.editing_id(), Some(target.id.as_str()));
        assert_eq!(collection.form().title, "Launch");

        collection.form_mut().title = "Launch v2".to_string();
        collection.commit().await.unwrap();

        assert_eq!(collection.events().len(), 2, "same length");
        assert_eq!(collection.events()[0].title, "Launch v2", "same position");
        assert_eq!(collection.events()[0].id, target.id);
        assert_eq!(collection.editing_id(), None);
        assert!(!collection.editor_open());
    }

    #[tokio::test]
    async fn failed_commit_leaves_editor_open_and_collection_untouched() {
        let mut collection = EventCollection::new(seeded(&["Launch"]));
        collection.load().await;

        let target = collection.events()[0].clone();
        collection.begin_edit(&target);
        collection.form_mut().title = "Launch v2".to_string();

        collection
            .store
            .fail_next(StoreError::Transport("server returned 500".to_string()));
        let err = collection.commit().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));

        assert!(collection.editor_open(), "surface stays open for retry");
        assert_eq!(collection.form().title, "Launch v2", "draft preserved");
        assert_eq!(collection.events()[0].title, "Launch", "no speculative update");
    }

    #[tokio::test]
    async fn remove_filters_collection_on_success() {
        let mut collection = EventCollection::new(seeded(&["Launch", "Demo"]));
        collection.load().await;

        let id = collection.events()[0].id.clone();
        collection.remove(&id).await.unwrap();

        assert_eq!(collection.events().len(), 1);
        assert!(collection.events().iter().all(|e| e.id != id));
    }

    #[tokio::test]
    async fn failed_remove_keeps_collection() {
        let mut collection = EventCollection::new(seeded(&["Launch"]));
        collection.load().await;

        let id = collection.events()[0].id.clone();
        collection
            .store
            .fail_next(StoreError::Transport("server returned 500".to_string()));
        assert!(collection.remove(&id).await.is_err());
        assert_eq!(collection.events().len(), 1);
    }
}
