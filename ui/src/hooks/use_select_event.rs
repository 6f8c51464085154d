use payloads::{APIClient, EventId};
use std::future::Future;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

/// Callback for clicking an event in the list.
///
/// Does nothing if the event is already selected and loaded. Otherwise the
/// selection moves at once and the detail is fetched; if another event is
/// clicked before the response arrives, the response is discarded.
#[hook]
pub fn use_select_event() -> Callback<EventId> {
    let (_, dispatch) = use_store::<State>();

    use_callback((), move |event_id: EventId, _| {
        if let Some(fetch) = select_event(&dispatch, get_api_client(), event_id)
        {
            yew::platform::spawn_local(fetch);
        }
    })
}

/// Select `event_id` in the store and return the detail fetch to run, or
/// `None` when the event is already selected and loaded.
///
/// The fetch applies its response only if no other event was selected in the
/// meantime.
pub fn select_event(
    dispatch: &Dispatch<State>,
    client: APIClient,
    event_id: EventId,
) -> Option<impl Future<Output = ()> + use<>> {
    let Some(request) = dispatch.reduce_mut(|state| state.select(event_id))
    else {
        tracing::debug!(%event_id, "Event already loaded");
        return None;
    };

    let dispatch = dispatch.clone();
    Some(async move {
        let result = client.get_event(&request.event_id).await;
        if let Err(e) = &result {
            tracing::warn!(%event_id, "Failed to load event: {e}");
        }

        dispatch.reduce_mut(|state| {
            if !state.finish_detail_fetch(request, result) {
                tracing::debug!(
                    %event_id,
                    "Dropped detail response for a superseded selection"
                );
            }
        });
    })
}
