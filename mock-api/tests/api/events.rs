use mock_api::store::Fault;
use payloads::{EventId, EventSummary};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, bare_event, gala, spawn_app};

#[tokio::test]
async fn list_events_returns_the_collection() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala(), bare_event(2, "Picnic")]);

    let events = app.client.list_events().await?;

    assert_eq!(
        events,
        vec![
            EventSummary {
                id: EventId(1),
                name: "Gala".into(),
            },
            EventSummary {
                id: EventId(2),
                name: "Picnic".into(),
            },
        ]
    );
    Ok(())
}

#[tokio::test]
async fn list_events_empty_collection() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert!(app.client.list_events().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn get_event_returns_every_field() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala()]);

    let event = app.client.get_event(&EventId(1)).await?;

    assert_eq!(event, Some(gala()));
    Ok(())
}

#[tokio::test]
async fn get_event_without_optional_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([bare_event(4, "Picnic")]);

    let event = app
        .client
        .get_event(&EventId(4))
        .await?
        .expect("event should be present");

    assert_eq!(event.name, "Picnic");
    assert_eq!(event.date, None);
    assert_eq!(event.location, None);
    assert_eq!(event.description, None);
    Ok(())
}

#[tokio::test]
async fn get_unknown_event_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala()]);

    let result = app.client.get_event(&EventId(99)).await;

    assert!(
        result
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("GET /events/99 failed: 404")
    );
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_events_ignores_extra_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala(), bare_event(2, "Picnic")]);
    app.inject_fault(Fault::ExtraFields);

    let events = app.client.list_events().await?;

    let names: Vec<_> = events.into_iter().map(|e| e.name).collect();
    assert_eq!(names, ["Gala", "Picnic"]);
    Ok(())
}

#[tokio::test]
async fn get_event_ignores_extra_fields_and_nulls() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala(), bare_event(2, "Picnic")]);
    app.inject_fault(Fault::ExtraFields);

    // The body really carries the extra columns and explicit nulls.
    let url = format!("{}/events/2", app.client.address);
    let body: serde_json::Value =
        app.client.inner_client.get(&url).send().await?.json().await?;
    assert_eq!(body["success"], true);
    assert!(body["data"]["cohortId"].is_number());
    assert!(body["data"]["location"].is_null());

    assert_eq!(app.client.get_event(&EventId(1)).await?, Some(gala()));
    assert_eq!(
        app.client.get_event(&EventId(2)).await?,
        Some(bare_event(2, "Picnic"))
    );
    Ok(())
}
