pub mod event_details;
pub mod event_list;
pub mod planner_view;
pub mod status_line;

pub use event_details::EventDetails;
pub use event_list::EventList;
pub use planner_view::PlannerView;
pub use status_line::StatusLine;
