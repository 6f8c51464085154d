pub mod party_planner;

pub use party_planner::PartyPlannerPage;
