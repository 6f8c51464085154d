use mock_api::store::Fault;
use payloads::{ClientError, EventId};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, gala, spawn_app};

#[tokio::test]
async fn list_events_server_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala()]);
    app.fail_with_status(500);

    let result = app.client.list_events().await;

    assert_eq!(
        result.as_ref().unwrap_err().to_string(),
        "GET /events failed: 500"
    );
    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn list_events_malformed_body() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.inject_fault(Fault::MalformedBody);

    let result = app.client.list_events().await;

    match result {
        Err(ClientError::Malformed { path, .. }) => assert_eq!(path, "events"),
        other => panic!("Expected Malformed, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn list_events_without_data_is_empty() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala()]);
    app.inject_fault(Fault::MissingData);

    assert!(app.client.list_events().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn get_event_without_data_is_none() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala()]);
    app.inject_fault(Fault::MissingData);

    assert_eq!(app.client.get_event(&EventId(1)).await?, None);

    Ok(())
}

#[tokio::test]
async fn get_event_client_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala()]);
    app.fail_with_status(418);

    assert_status_code(
        app.client.get_event(&EventId(1)).await,
        StatusCode::IM_A_TEAPOT,
    );
    Ok(())
}

#[tokio::test]
async fn clearing_the_fault_restores_service() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_events([gala()]);
    app.fail_with_status(503);
    assert!(app.client.list_events().await.is_err());

    app.clear_fault();

    assert_eq!(app.client.list_events().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    // Take a free port, then release it so the connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    let client =
        payloads::APIClient::new(format!("http://127.0.0.1:{port}/api/x"));

    let result = client.list_events().await;

    assert!(matches!(result, Err(ClientError::Network(_))));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Network error. Please check your connection."
    );
    Ok(())
}
