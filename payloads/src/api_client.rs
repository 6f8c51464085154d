use crate::{EventDetail, EventId, EventSummary};
use reqwest::StatusCode;
use serde_json::Value;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the events API.
///
/// `address` is the API base, e.g.
/// `https://example.herokuapp.com/api/2509-FTB-CT-WEB-PT`; endpoint paths
/// are appended to it.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }
}

/// Methods on the events API
impl APIClient {
    /// Fetch the full event collection.
    ///
    /// A successful response whose `data` is not an array is treated as an
    /// empty collection rather than an error.
    pub async fn list_events(&self) -> Result<Vec<EventSummary>, ClientError> {
        let path = "events";
        let response = self.empty_get(path).await?;
        let body: Value = ok_body(path, response).await?;
        match take_data(body) {
            Some(data @ Value::Array(_)) => decode(path, data),
            _ => Ok(Vec::new()),
        }
    }

    /// Fetch a single event.
    ///
    /// Returns `Ok(None)` when the server answers successfully but without a
    /// `data` object.
    pub async fn get_event(
        &self,
        event_id: &EventId,
    ) -> Result<Option<EventDetail>, ClientError> {
        let path = format!("events/{event_id}");
        let response = self.empty_get(&path).await?;
        let body: Value = ok_body(&path, response).await?;
        match take_data(body) {
            Some(data @ Value::Object(_)) => decode(&path, data).map(Some),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success status, with the message to display.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Malformed response from GET /{path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

/// Deserialize a successful response into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::APIError(
            status,
            format!("GET /{path} failed: {}", status.as_u16()),
        ));
    }
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|source| ClientError::Malformed {
        path: path.to_string(),
        source,
    })
}

fn take_data(body: Value) -> Option<Value> {
    match body {
        Value::Object(mut fields) => fields.remove("data"),
        _ => None,
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    path: &str,
    data: Value,
) -> Result<T, ClientError> {
    serde_json::from_value(data).map_err(|source| ClientError::Malformed {
        path: path.to_string(),
        source,
    })
}
