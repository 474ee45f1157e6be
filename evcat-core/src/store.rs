//! The remote event store contract.

use crate::error::StoreResult;
use crate::event::{Event, EventDraft};
use async_trait::async_trait;

/// Thin contract for the remote resource store holding the events.
///
/// Implementations perform no retries; every failure is propagated to the
/// caller unchanged. Controllers decide what a failure means for their
/// state.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fetch the full collection.
    async fn list(&self) -> StoreResult<Vec<Event>>;

    /// Fetch a single record. A missing record surfaces as a transport
    /// failure, not a distinct not-found kind.
    async fn get(&self, id: &str) -> StoreResult<Event>;

    /// Create a record; the store assigns the id and echoes the full record.
    async fn create(&self, draft: &EventDraft) -> StoreResult<Event>;

    /// Full-record overwrite of an existing record.
    async fn replace(&self, id: &str, draft: &EventDraft) -> StoreResult<Event>;

    /// Delete a record.
    async fn remove(&self, id: &str) -> StoreResult<()>;
}
