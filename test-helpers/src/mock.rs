//! Sample party data for the development server.
//!
//! Dates are RFC 3339 instants like the real API returns, spread over the
//! coming months, with one event per missing optional field so every branch
//! of the details pane can be seen in the browser.

use crate::TestApp;
use payloads::{EventDetail, EventId};

pub struct PartyDataset {
    pub events: Vec<EventDetail>,
}

impl PartyDataset {
    /// Seed the app with the sample parties.
    pub fn create(app: &TestApp) -> Self {
        let events = sample_events();
        tracing::info!("🎉 Seeding {} sample parties", events.len());
        app.seed_events(events.clone());
        Self { events }
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        for event in &self.events {
            tracing::info!(
                "   #{} {} ({})",
                event.id,
                event.name,
                event.date.as_deref().unwrap_or("no date")
            );
        }
    }
}

pub fn sample_events() -> Vec<EventDetail> {
    vec![
        event(
            1,
            "Winter Gala",
            Some("2026-12-12T03:00:00.000Z"),
            Some("Grand Ballroom"),
            Some("Black tie, string quartet, and far too many canapés."),
        ),
        event(
            2,
            "Rooftop Mixer",
            Some("2026-11-06T23:30:00.000Z"),
            Some("The Terrace"),
            Some("Meet the neighbours over lemonade and a sunset."),
        ),
        event(
            3,
            "Board Game Night",
            Some("2026-11-20T01:00:00.000Z"),
            None,
            Some("Bring your favourite game. Location to be announced."),
        ),
        event(
            4,
            "Mystery Picnic",
            None,
            Some("Riverside Park"),
            Some("Date depends on the weather."),
        ),
        event(5, "Surprise Party", Some("2027-01-09"), Some("Somewhere"), None),
    ]
}

fn event(
    id: i64,
    name: &str,
    date: Option<&str>,
    location: Option<&str>,
    description: Option<&str>,
) -> EventDetail {
    EventDetail {
        id: EventId(id),
        name: name.into(),
        date: date.map(Into::into),
        location: location.map(Into::into),
        description: description.map(Into::into),
    }
}
