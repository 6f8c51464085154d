use payloads::EventDetail;
use yew::prelude::*;

use crate::view::DetailView;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub detail: Option<EventDetail>,
}

#[function_component]
pub fn EventDetails(props: &Props) -> Html {
    let Some(detail) = &props.detail else {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Select a party to see its details."}
            </p>
        };
    };
    let view = DetailView::from(detail);

    html! {
        <div class="space-y-2">
            <h3 class="text-lg font-semibold">{view.heading}</h3>
            <p class="event-date">{view.date}</p>
            <p class="event-location italic">{view.location}</p>
            <p class="event-description">{view.description}</p>
        </div>
    }
}
