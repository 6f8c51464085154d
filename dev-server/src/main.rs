//! Development server for Party Planner UI development
//!
//! This binary runs the mock events API on a fixed port with a handful of
//! sample parties, so the UI can be served by trunk without touching the
//! real API.
//!
//! Usage: cargo run -p dev-server
//! Set PORT to choose a port other than 8000.

use anyhow::{Context, Result};
use test_helpers::mock::PartyDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = mock_api::telemetry::get_subscriber("info".into());
    mock_api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting Party Planner development server");

    let port = match std::env::var("PORT") {
        Ok(port) => port
            .parse()
            .with_context(|| format!("PORT is not a valid port: {port}"))?,
        Err(_) => 8000,
    };
    let app = test_helpers::spawn_app_on_port(port).await;
    app.health_check().await?;

    let dataset = PartyDataset::create(&app);

    info!("🎯 Development server ready!");
    info!("   API: {}", app.client.address);
    info!(
        "   UI:  cd ui && EVENTS_API_URL={} trunk serve",
        app.client.address
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
