//! Contract tests for `list_all` and `delete_by_id` against the PostgREST
//! wire format: `order=created_at.desc` listing and `id=eq.{id}` deletion.

use mothership_config::config::{SUPABASE_ANON_KEY_VAR, SUPABASE_URL_VAR};
use mothership_config::AppConfig;
use mothership_signups::{SignupsClient, SignupsError};
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> SignupsClient {
    let url = base_url.to_string();
    let config = AppConfig::from_lookup(move |name| match name {
        SUPABASE_URL_VAR => Some(url.clone()),
        SUPABASE_ANON_KEY_VAR => Some("test-anon-key-123456".to_string()),
        _ => None,
    })
    .unwrap();
    SignupsClient::new(&config).unwrap()
}

fn row_json(id: &str, name: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "artist_name": name,
        "artist_type": "solo",
        "email": "a@example.com",
        "location": "Austin, TX",
        "genres": ["ambient"],
        "bio": "bio",
        "terms_agreed": true,
        "privacy_agreed": true,
        "created_at": created_at
    })
}

// ── GET /rest/v1/artist_signups ──────────────────────────────────────

#[tokio::test]
async fn list_all_requests_newest_first_and_parses_rows() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/artist_signups"))
        .and(query_param("select", "*"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            row_json(
                "8a0b7e9c-1d2e-4f30-8c4d-5e6f7a8b9c0d",
                "Newest Act",
                "2026-08-02T10:00:00Z"
            ),
            row_json(
                "4f1c9df2-3a30-4b6e-9a53-0c5f6a2a9f11",
                "Older Act",
                "2026-08-01T10:00:00Z"
            ),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let rows = client.list_all().await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].artist_name, "Newest Act");
    assert!(rows[0].created_at > rows[1].created_at);
}

#[tokio::test]
async fn list_all_reaches_table_under_path_bearing_project_url() {
    let mock_server = MockServer::start().await;

    // Self-hosted projects can live behind a path prefix; the endpoint must
    // get exactly one separator whether or not the URL ends with a slash.
    Mock::given(method("GET"))
        .and(path("/tenant/rest/v1/artist_signups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = test_client(&format!("{}/tenant", mock_server.uri()));
    assert!(client.list_all().await.unwrap().is_empty());

    let client = test_client(&format!("{}/tenant/", mock_server.uri()));
    assert!(client.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_all_on_empty_store_returns_empty_vec() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/artist_signups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let rows = client.list_all().await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn list_all_propagates_remote_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/artist_signups"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    match client.list_all().await.unwrap_err() {
        SignupsError::Api { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── DELETE /rest/v1/artist_signups?id=eq.{id} ────────────────────────

#[tokio::test]
async fn delete_by_id_filters_on_the_row_id() {
    let mock_server = MockServer::start().await;
    let id: Uuid = "4f1c9df2-3a30-4b6e-9a53-0c5f6a2a9f11".parse().unwrap();

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/artist_signups"))
        .and(query_param("id", format!("eq.{id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.delete_by_id(id).await.unwrap();
}

#[tokio::test]
async fn delete_of_nonexistent_id_completes_without_error() {
    let mock_server = MockServer::start().await;

    // PostgREST reports success whether or not a row matched.
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/artist_signups"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.delete_by_id(Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn delete_propagates_remote_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/artist_signups"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    match client.delete_by_id(Uuid::new_v4()).await.unwrap_err() {
        SignupsError::Api { status, body, .. } => {
            assert_eq!(status, 403);
            assert!(body.contains("permission denied"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
