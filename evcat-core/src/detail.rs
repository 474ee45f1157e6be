//! The single-event detail controller.
//!
//! A small state machine over one record: fetch on mount, then a
//! confirm-then-commit delete gate. The two-step gate is structural; no
//! single call can go from a loaded record to a delete request.

use crate::error::StoreResult;
use crate::event::Event;
use crate::store::EventStore;

/// Lifecycle of the detail view's record.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Initial fetch not yet resolved.
    Loading,
    /// Record fetched; the normal resting state.
    Loaded(Event),
    /// The fetch failed. Terminal for this controller instance.
    LoadFailed,
    /// Delete requested, confirmation dialog open.
    ConfirmPending(Event),
    /// Delete confirmed, request in flight. Callers should disable the
    /// affected controls while in this state.
    Deleting(Event),
    /// The record is gone; the caller is expected to navigate away.
    Deleted,
}

/// Owns the fetch-and-delete lifecycle of one record.
pub struct EventDetail<S> {
    store: S,
    id: String,
    state: DetailState,
}

impl<S: EventStore> EventDetail<S> {
    pub fn new(store: S, id: impl Into<String>) -> Self {
        EventDetail {
            store,
            id: id.into(),
            state: DetailState::Loading,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The record, in any state that still holds one.
    pub fn record(&self) -> Option<&Event> {
        match &self.state {
            DetailState::Loaded(event)
            | DetailState::ConfirmPending(event)
            | DetailState::Deleting(event) => Some(event),
            _ => None,
        }
    }

    /// Fetch the record. Only meaningful from `Loading`; a failed fetch is
    /// terminal (no automatic retry).
    pub async fn load(&mut self) {
        if self.state != DetailState::Loading {
            return;
        }
        self.state = match self.store.get(&self.id).await {
            Ok(event) => DetailState::Loaded(event),
            Err(err) => {
                tracing::warn!(id = %self.id, %err, "failed to load event");
                DetailState::LoadFailed
            }
        };
    }

    /// Open the confirmation gate. Returns whether the transition happened
    /// (it only can from `Loaded`).
    pub fn request_delete(&mut self) -> bool {
        if let DetailState::Loaded(event) = &self.state {
            self.state = DetailState::ConfirmPending(event.clone());
            true
        } else {
            false
        }
    }

    /// Close the confirmation gate without deleting.
    pub fn cancel_delete(&mut self) -> bool {
        if let DetailState::ConfirmPending(event) = &self.state {
            self.state = DetailState::Loaded(event.clone());
            true
        } else {
            false
        }
    }

    /// Commit the pending deletion.
    ///
    /// Only acts from `ConfirmPending` (returns `Ok(false)` otherwise, so a
    /// stray call can never destroy anything). On success the state becomes
    /// `Deleted` and `Ok(true)` is returned; on failure the record is
    /// restored to `Loaded` and the error is returned for reporting.
    pub async fn confirm_delete(&mut self) -> StoreResult<bool> {
        let event = match &self.state {
            DetailState::ConfirmPending(event) => event.clone(),
            _ => return Ok(false),
        };

        self.state = DetailState::Deleting(event.clone());
        match self.store.remove(&self.id).await {
            Ok(()) => {
                self.state = DetailState::Deleted;
                Ok(true)
            }
            Err(err) => {
                self.state = DetailState::Loaded(event);
                Err(err)
            }
        }
    }
}
