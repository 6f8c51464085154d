use yew::prelude::*;

use crate::components::PlannerView;
use crate::hooks::{use_events, use_select_event};

#[function_component]
pub fn PartyPlannerPage() -> Html {
    let state = use_events();
    let on_select = use_select_event();

    html! {
        <PlannerView state={(*state).clone()} {on_select} />
    }
}
