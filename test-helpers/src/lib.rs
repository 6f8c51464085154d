pub mod mock;

use mock_api::store::{EventStore, Fault};
use mock_api::{Config, telemetry};
use payloads::{EventDetail, EventId};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    pub port: u16,
    pub client: payloads::APIClient,
    /// Shared with the running server; changes are visible to the next
    /// request.
    pub store: EventStore,
}

impl TestApp {
    /// Add events to the server, replacing any with the same id.
    pub fn seed_events(&self, events: impl IntoIterator<Item = EventDetail>) {
        for event in events {
            self.store.upsert(event);
        }
    }

    /// Make every following events request fail with this status code.
    pub fn fail_with_status(&self, code: u16) {
        self.store.set_fault(Some(Fault::Status(code)));
    }

    pub fn inject_fault(&self, fault: Fault) {
        self.store.set_fault(Some(fault));
    }

    pub fn clear_fault(&self) {
        self.store.set_fault(None);
    }

    pub async fn health_check(&self) -> anyhow::Result<()> {
        let url = format!("http://127.0.0.1:{}/api/health_check", self.port);
        self.client
            .inner_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    spawn_app_with_config(Config {
        port,
        ..Config::default()
    })
    .await
}

/// Spawn the mock API with a custom config, e.g. another cohort.
pub async fn spawn_app_with_config(mut config: Config) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = EventStore::default();
    let server = mock_api::build(&mut config, store.clone())
        .expect("Failed to bind mock api");
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient::new(config.base_url()),
        store,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// The event with every optional field filled in.
pub fn gala() -> EventDetail {
    EventDetail {
        id: EventId(1),
        name: "Gala".into(),
        date: Some("2025-01-01".into()),
        location: Some("Hall".into()),
        description: Some("Fun".into()),
    }
}

/// An event carrying only the required fields.
pub fn bare_event(id: i64, name: &str) -> EventDetail {
    EventDetail {
        id: EventId(id),
        name: name.into(),
        date: None,
        location: None,
        description: None,
    }
}
