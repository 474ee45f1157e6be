//! In-memory store used by controller tests.

use crate::error::{StoreError, StoreResult};
use crate::event::{Event, EventDraft};
use crate::store::EventStore;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory `EventStore` with single-shot failure injection.
pub(crate) struct MockStore {
    events: Mutex<Vec<Event>>,
    next_id: AtomicUsize,
    fail: Mutex<Option<StoreError>>,
}

impl MockStore {
    pub fn new() -> Self {
        MockStore {
            events: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            fail: Mutex::new(None),
        }
    }

    /// Insert a record directly, bypassing the contract.
    pub fn seed(&self, title: &str, categories: &[&str]) -> Event {
        let event = Event {
            id: self.assign_id(),
            title: title.to_string(),
            description: String::new(),
            image: None,
            start_time: String::new(),
            end_time: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        };
        self.events.lock().unwrap().push(event.clone());
        event
    }

    /// Make the next store call fail with `err`.
    pub fn fail_next(&self, err: StoreError) {
        *self.fail.lock().unwrap() = Some(err);
    }

    pub fn records(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn assign_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }

    fn take_failure(&self) -> StoreResult<()> {
        match self.fail.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn from_draft(id: String, draft: &EventDraft) -> Event {
    Event {
        id,
        title: draft.title.clone(),
        description: draft.description.clone(),
        image: draft.image.clone(),
        start_time: draft.start_time.clone(),
        end_time: draft.end_time.clone(),
        categories: draft.categories.clone(),
    }
}

#[async_trait]
impl EventStore for MockStore {
    async fn list(&self) -> StoreResult<Vec<Event>> {
        self.take_failure()?;
        Ok(self.records())
    }

    async fn get(&self, id: &str) -> StoreResult<Event> {
        self.take_failure()?;
        self.records()
            .into_iter()
            .find(|event| event.id == id)
            .ok_or_else(|| StoreError::Transport(format!("server returned 404 for {id}")))
    }

    async fn create(&self, draft: &EventDraft) -> StoreResult<Event> {
        self.take_failure()?;
        let event = from_draft(self.assign_id(), draft);
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn replace(&self, id: &str, draft: &EventDraft) -> StoreResult<Event> {
        self.take_failure()?;
        let mut events = self.events.lock().unwrap();
        let slot = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| StoreError::Transport(format!("server returned 404 for {id}")))?;
        *slot = from_draft(id.to_string(), draft);
        Ok(slot.clone())
    }

    async fn remove(&self, id: &str) -> StoreResult<()> {
        self.take_failure()?;
        let mut events = self.events.lock().unwrap();
        if !events.iter().any(|event| event.id == id) {
            return Err(StoreError::Transport(format!("server returned 404 for {id}")));
        }
        events.retain(|event| event.id != id);
        Ok(())
    }
}
