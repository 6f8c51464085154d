use actix_web::{HttpResponse, get, http::StatusCode, web};
use anyhow::Context;
use payloads::{EventId, responses::Data};
use serde_json::{Value, json};

use crate::store::{EventStore, Fault};

use super::APIError;

/// `cohortId` attached to events in [`Fault::ExtraFields`] responses.
const COHORT_ID: i64 = 2509;

#[tracing::instrument(skip(store))]
#[get("/events")]
pub async fn list_events(
    store: web::Data<EventStore>,
) -> Result<HttpResponse, APIError> {
    let fault = store.fault();
    if let Some(response) = injected_fault(fault)? {
        return Ok(response);
    }
    let events = serde_json::to_value(store.list())
        .context("failed to serialize events")?;
    Ok(data_response(events, fault))
}

#[tracing::instrument(skip(store))]
#[get("/events/{event_id}")]
pub async fn get_event(
    event_id: web::Path<i64>,
    store: web::Data<EventStore>,
) -> Result<HttpResponse, APIError> {
    let fault = store.fault();
    if let Some(response) = injected_fault(fault)? {
        return Ok(response);
    }
    let event = store.get(EventId(event_id.into_inner()))?;
    let event =
        serde_json::to_value(event).context("failed to serialize event")?;
    Ok(data_response(event, fault))
}

/// Wrap `data` in the response envelope.
///
/// With [`Fault::ExtraFields`] the body carries the columns the real API adds
/// around and inside each event.
fn data_response(mut data: Value, fault: Option<Fault>) -> HttpResponse {
    if fault != Some(Fault::ExtraFields) {
        return HttpResponse::Ok().json(Data { data });
    }
    match &mut data {
        Value::Array(events) => events.iter_mut().for_each(add_cohort_id),
        event => add_cohort_id(event),
    }
    HttpResponse::Ok().json(json!({ "success": true, "data": data }))
}

fn add_cohort_id(event: &mut Value) {
    if let Value::Object(fields) = event {
        fields.insert("cohortId".into(), json!(COHORT_ID));
    }
}

/// Build the response for a fault that replaces the normal body, if any.
fn injected_fault(
    fault: Option<Fault>,
) -> Result<Option<HttpResponse>, APIError> {
    let response = match fault {
        None | Some(Fault::ExtraFields) => return Ok(None),
        Some(Fault::Status(code)) => {
            let status = StatusCode::from_u16(code)
                .with_context(|| format!("invalid injected status {code}"))?;
            HttpResponse::build(status).body("Injected failure")
        }
        Some(Fault::MalformedBody) => HttpResponse::Ok()
            .content_type("application/json")
            .body(r#"{"data": [{"id": 1,"#),
        Some(Fault::MissingData) => {
            HttpResponse::Ok().json(json!({ "success": true }))
        }
    };
    tracing::warn!(?fault, "Responding with injected fault");
    Ok(Some(response))
}
