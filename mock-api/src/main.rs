use anyhow::Context;
use mock_api::{
    Config, build,
    store::EventStore,
    telemetry::{get_subscriber, init_subscriber, log_error},
};
use payloads::EventDetail;

/// Mock party events API
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root. All of them are optional.
///
/// - IP_ADDRESS: Server bind address (default 127.0.0.1)
/// - PORT: Server port (default 8000)
/// - ALLOWED_ORIGINS: CORS origins ("*" or a comma-separated list)
/// - API_COHORT: Path segment events are served under (default 2509-FTB-CT-WEB-PT)
/// - EVENTS_FILE: JSON file holding an array of events to serve
///
/// Example development command:
/// PORT=8000 EVENTS_FILE=parties.json cargo run -p mock-api
///
/// For a server pre-filled with sample parties use `cargo run -p dev-server`.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if available
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info".into()))?;

    if let Err(e) = run().await {
        log_error(e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    let events = match std::env::var("EVENTS_FILE") {
        Ok(path) => load_events(&path)?,
        Err(_) => Vec::new(),
    };
    tracing::info!(count = events.len(), "Loaded events");

    let server = build(&mut config, EventStore::new(events))?;
    tracing::info!("Serving events at {}/events", config.base_url());
    server.await?;
    Ok(())
}

fn load_events(path: &str) -> anyhow::Result<Vec<EventDetail>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{path} is not a JSON array of events"))
}
