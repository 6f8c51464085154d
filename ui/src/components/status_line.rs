use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub text: AttrValue,
    #[prop_or_default]
    pub is_error: bool,
}

#[function_component]
pub fn StatusLine(props: &Props) -> Html {
    let class = if props.is_error {
        "status text-sm text-red-700 dark:text-red-400"
    } else {
        "status text-sm text-neutral-600 dark:text-neutral-400"
    };

    html! {
        <p {class}>{props.text.clone()}</p>
    }
}
