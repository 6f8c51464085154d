mod events;
mod faults;

use mock_api::{Config, DEFAULT_COHORT};
use test_helpers::{gala, spawn_app, spawn_app_with_config};

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn events_are_served_under_the_configured_cohort() -> anyhow::Result<()> {
    let app = spawn_app_with_config(Config {
        port: 0,
        cohort: "2601-FTB-ET-WEB-FT".into(),
        ..Config::default()
    })
    .await;
    app.seed_events([gala()]);

    assert!(app.client.address.ends_with("/api/2601-FTB-ET-WEB-FT"));
    assert_eq!(app.client.list_events().await?.len(), 1);

    // The default cohort's path is not mounted.
    let url = format!(
        "http://127.0.0.1:{}/api/{DEFAULT_COHORT}/events",
        app.port
    );
    let response = app.client.inner_client.get(&url).send().await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    Ok(())
}
