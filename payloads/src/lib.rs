//! Types exchanged with the party events API, and a client for it.

pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use reqwest::StatusCode;
pub use responses::{EventDetail, EventSummary};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier the remote API assigns to a party event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct EventId(pub i64);
