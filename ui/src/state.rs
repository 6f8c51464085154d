use payloads::{ClientError, EventDetail, EventId, EventSummary};
use yewdux::prelude::*;

/// Everything the page shows. Created once when the app starts and mutated
/// in place by the fetch hooks.
///
/// `loading` only ever covers the list fetch; detail fetches leave it alone.
/// `selected_id` changes as soon as an entry is clicked, while `selected`
/// changes when that entry's detail response arrives.
#[derive(Clone, PartialEq, Store)]
pub struct State {
    pub events: Vec<EventSummary>,
    pub selected_id: Option<EventId>,
    pub selected: Option<EventDetail>,
    pub error: Option<String>,
    pub loading: bool,
    /// Token of the most recently issued detail request.
    detail_request: u64,
}

impl Default for State {
    /// The list fetch starts as soon as the app mounts, so the first paint
    /// already shows the loading state.
    fn default() -> Self {
        Self {
            events: Vec::new(),
            selected_id: None,
            selected: None,
            error: None,
            loading: true,
            detail_request: 0,
        }
    }
}

/// A detail fetch issued by [`State::select`].
///
/// Only the most recent request's response is applied; see
/// [`State::finish_detail_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRequest {
    pub event_id: EventId,
    token: u64,
}

impl State {
    pub fn start_list_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the outcome of the list fetch. Any failure empties the list.
    pub fn finish_list_fetch(
        &mut self,
        result: Result<Vec<EventSummary>, ClientError>,
    ) {
        self.loading = false;
        match result {
            Ok(events) => self.events = events,
            Err(e) => {
                self.error = Some(e.to_string());
                self.events.clear();
            }
        }
    }

    /// True when `event_id` is selected and a detail is loaded for it.
    pub fn is_loaded(&self, event_id: EventId) -> bool {
        self.selected_id == Some(event_id) && self.selected.is_some()
    }

    /// Select an event, returning the detail request to issue, or `None` if
    /// the event is already selected and loaded.
    pub fn select(&mut self, event_id: EventId) -> Option<DetailRequest> {
        if self.is_loaded(event_id) {
            return None;
        }
        self.selected_id = Some(event_id);
        self.error = None;
        self.detail_request += 1;
        Some(DetailRequest {
            event_id,
            token: self.detail_request,
        })
    }

    /// Apply a detail response. Returns false, leaving the state untouched,
    /// if a newer request has been issued since.
    pub fn finish_detail_fetch(
        &mut self,
        request: DetailRequest,
        result: Result<Option<EventDetail>, ClientError>,
    ) -> bool {
        if request.token != self.detail_request {
            return false;
        }
        match result {
            Ok(detail) => self.selected = detail,
            Err(e) => {
                self.error = Some(e.to_string());
                self.selected = None;
            }
        }
        true
    }

    pub fn status_line(&self) -> String {
        if let Some(error) = &self.error {
            format!("Error: {error}")
        } else if self.loading {
            "Loading…".to_string()
        } else {
            format!("Loaded {} events.", self.events.len())
        }
    }

    /// Whether the list and details panes are shown under the status line.
    pub fn shows_panes(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}
