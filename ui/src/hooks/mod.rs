pub mod use_events;
pub mod use_select_event;

pub use use_events::{load_events, use_events};
pub use use_select_event::{select_event, use_select_event};
