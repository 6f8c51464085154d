use payloads::{EventId, EventSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub events: Vec<EventSummary>,
    pub selected_id: Option<EventId>,
    pub on_select: Callback<EventId>,
}

/// Clickable event names; the selected one carries the `selected` class.
#[function_component]
pub fn EventList(props: &Props) -> Html {
    html! {
        <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
            {props.events.iter().map(|event| {
                let is_selected = props.selected_id == Some(event.id);
                let onclick = {
                    let on_select = props.on_select.clone();
                    let event_id = event.id;
                    Callback::from(move |_: MouseEvent| on_select.emit(event_id))
                };
                html! {
                    <li
                        key={event.id.to_string()}
                        {onclick}
                        class={classes!(
                            "px-3",
                            "py-2",
                            "cursor-pointer",
                            "hover:bg-neutral-100",
                            "dark:hover:bg-neutral-800",
                            is_selected.then_some("selected"),
                        )}
                    >
                        {event.name.clone()}
                    </li>
                }
            }).collect::<Html>()}
        </ul>
    }
}
