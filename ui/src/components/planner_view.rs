use payloads::EventId;
use yew::prelude::*;

use crate::State;
use crate::components::{EventDetails, EventList, StatusLine};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: State,
    pub on_select: Callback<EventId>,
}

/// The whole page for a given state. While the list is loading, or after
/// any error, only the status line is shown.
#[function_component]
pub fn PlannerView(props: &Props) -> Html {
    let state = &props.state;

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-4">
            <h1 class="text-3xl font-bold">{"Party Planner"}</h1>
            <StatusLine
                text={state.status_line()}
                is_error={state.error.is_some()}
            />
            if state.shows_panes() {
                <div id="layout" class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <section>
                        <h2 class="text-xl font-semibold mb-2">{"Upcoming Parties"}</h2>
                        <EventList
                            events={state.events.clone()}
                            selected_id={state.selected_id}
                            on_select={props.on_select.clone()}
                        />
                    </section>
                    <section>
                        <h2 class="text-xl font-semibold mb-2">{"Party Details"}</h2>
                        <EventDetails detail={state.selected.clone()} />
                    </section>
                </div>
            }
        </main>
    }
}
