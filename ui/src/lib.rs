use payloads::APIClient;
use yew::prelude::*;

pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;
pub mod utils;
pub mod view;

pub use state::State;

/// Where the events live unless `EVENTS_API_URL` was set at build time.
pub const DEFAULT_API_URL: &str =
    "https://fsa-crud-2aa9294fe819.herokuapp.com/api/2509-FTB-CT-WEB-PT";

/// API client for the events API.
///
/// `EVENTS_API_URL` is read at build time, e.g. to point a `trunk serve`
/// build at the dev-server.
pub fn get_api_client() -> APIClient {
    APIClient::new(option_env!("EVENTS_API_URL").unwrap_or(DEFAULT_API_URL))
}

#[function_component]
pub fn App() -> Html {
    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <pages::PartyPlannerPage />
        </div>
    }
}
