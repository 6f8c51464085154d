use payloads::APIClient;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

/// Hook giving the page state, loading the event list once on mount.
///
/// There is no refetch: after a failure the page has to be reloaded.
#[hook]
pub fn use_events() -> Rc<State> {
    let (state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        yew::platform::spawn_local(async move {
            load_events(&dispatch, &get_api_client()).await;
        });
    });

    state
}

/// Fetch the event list into the store, setting and clearing the loading
/// flag around the request.
pub async fn load_events(dispatch: &Dispatch<State>, client: &APIClient) {
    dispatch.reduce_mut(|state| state.start_list_fetch());

    let result = client.list_events().await;
    match &result {
        Ok(events) => tracing::debug!("Loaded {} events", events.len()),
        Err(e) => tracing::warn!("Failed to load events: {e}"),
    }

    dispatch.reduce_mut(|state| state.finish_list_fetch(result));
}
