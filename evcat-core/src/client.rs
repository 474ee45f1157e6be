//! HTTP implementation of the event store contract.

use crate::error::{StoreError, StoreResult};
use crate::event::{Event, EventDraft};
use crate::store::EventStore;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Event store backed by a REST resource at `{base_url}/events`.
#[derive(Clone)]
pub struct HttpEventStore {
    http: Client,
    base_url: String,
}

impl HttpEventStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpEventStore {
            http: Client::new(),
            base_url,
        }
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    fn event_url(&self, id: &str) -> String {
        format!("{}/events/{}", self.base_url, id)
    }
}

#[async_trait]
impl EventStore for HttpEventStore {
    async fn list(&self) -> StoreResult<Vec<Event>> {
        let resp = self.http.get(self.events_url()).send().await?;
        decode_json(check_status(resp).await?).await
    }

    async fn get(&self, id: &str) -> StoreResult<Event> {
        let resp = self.http.get(self.event_url(id)).send().await?;
        decode_json(check_status(resp).await?).await
    }

    async fn create(&self, draft: &EventDraft) -> StoreResult<Event> {
        tracing::debug!(title = %draft.title, "creating event");
        let resp = self
            .http
            .post(self.events_url())
            .json(draft)
            .send()
            .await?;
        decode_json(check_status(resp).await?).await
    }

    async fn replace(&self, id: &str, draft: &EventDraft) -> StoreResult<Event> {
        tracing::debug!(id, "replacing event");
        let resp = self
            .http
            .put(self.event_url(id))
            .json(draft)
            .send()
            .await?;
        decode_json(check_status(resp).await?).await
    }

    async fn remove(&self, id: &str) -> StoreResult<()> {
        tracing::debug!(id, "deleting event");
        let resp = self.http.delete(self.event_url(id)).send().await?;
        check_status(resp).await?;
        // The deletion response body is ignored.
        Ok(())
    }
}

/// Reject non-success responses, folding the status and a body snippet into
/// the error message.
async fn check_status(resp: Response) -> StoreResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let mut message = format!("server returned {}", status);
    if !body.is_empty() {
        let snippet: String = body.chars().take(200).collect();
        message = format!("{}: {}", message, snippet);
    }
    Err(StoreError::Transport(message))
}

/// Decode a JSON body, keeping body-read failures distinct from parse
/// failures.
async fn decode_json<T: DeserializeOwned>(resp: Response) -> StoreResult<T> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|err| StoreError::Decode(err.to_string()))
}
