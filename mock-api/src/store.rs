//! In-memory event storage.
//!
//! The store is a cheap cloneable handle over shared state, so the same
//! instance can be registered with the server and kept by tests to seed data
//! or inject faults while the server is running.

use payloads::{EventDetail, EventId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A canned deviation for the next requests to the events endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Respond with this status code and a plain text body.
    Status(u16),
    /// Respond 200 with a body that is not valid JSON.
    MalformedBody,
    /// Respond 200 with a JSON object lacking the `data` key.
    MissingData,
    /// Respond normally, but shaped like the real API: a `success` flag next
    /// to `data`, a `cohortId` on every event, and `null` for absent fields.
    ExtraFields,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("event {0} does not exist")]
    EventNotFound(EventId),
}

#[derive(Clone, Default)]
pub struct EventStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    events: Vec<EventDetail>,
    fault: Option<Fault>,
}

impl EventStore {
    pub fn new(events: Vec<EventDetail>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                events,
                fault: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Nothing panics while holding the lock, but don't take the server
        // down with a poisoned mutex if that changes.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<EventDetail> {
        self.lock().events.clone()
    }

    pub fn get(&self, event_id: EventId) -> Result<EventDetail, StoreError> {
        self.lock()
            .events
            .iter()
            .find(|event| event.id == event_id)
            .cloned()
            .ok_or(StoreError::EventNotFound(event_id))
    }

    /// Insert or replace an event by id.
    pub fn upsert(&self, event: EventDetail) {
        let mut inner = self.lock();
        match inner.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => inner.events.push(event),
        }
    }

    pub fn clear(&self) {
        self.lock().events.clear();
    }

    pub fn set_fault(&self, fault: Option<Fault>) {
        self.lock().fault = fault;
    }

    pub fn fault(&self) -> Option<Fault> {
        self.lock().fault
    }
}
