use crate::EventId;
use serde::{Deserialize, Serialize};

/// The part of an event needed to list it.
///
/// The collection endpoint returns full records; anything beyond `id` and
/// `name` is ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: EventId,
    pub name: String,
}

/// A single event as returned by `GET /events/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: EventId,
    pub name: String,
    /// ISO 8601 instant or calendar date, exactly as the server sent it.
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Every response body from the events API wraps its payload in `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}
