// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use homeport_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn listing_json(id: i64, name: &str, price: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "A lovely place with plenty of light.",
        "price": price,
        "image_url": null,
        "house_type_id": 2,
        "house_type": { "id": 2, "name": "Ranch" },
        "agent": {
            "first_name": "Dana",
            "last_name": "Reyes",
            "image_url": "/images/agents/dana.jpg"
        },
        "tags": ["garden", "garage"],
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-15T18:30:00Z"
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_listings() {
    let (server, client) = setup().await;

    let body = json!([
        listing_json(1, "Sunny Bungalow", 275_000.0),
        listing_json(2, "Hillside Ranch", 640_000.0),
    ]);

    Mock::given(method("GET"))
        .and(path("/api/houses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let listings = client.list_listings().await.unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].name, "Sunny Bungalow");
    assert_eq!(listings[0].house_type.as_ref().unwrap().name, "Ranch");
    assert_eq!(listings[1].id, 2);
    assert_eq!(listings[1].tags, vec!["garden", "garage"]);
}

#[tokio::test]
async fn test_top_listings_passes_limit() {
    let (server, client) = setup().await;

    let body = json!([listing_json(7, "Lakeview Loft", 980_000.0)]);

    Mock::given(method("GET"))
        .and(path("/api/houses/top"))
        .and(query_param("limit", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let listings = client.top_listings(6).await.unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].name, "Lakeview Loft");
}

#[tokio::test]
async fn test_get_listing_by_id() {
    let (server, client) = setup().await;

    // Id not present in any previously fetched list — the single-entity
    // endpoint is its own source of truth.
    Mock::given(method("GET"))
        .and(path("/api/houses/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing_json(42, "Coach House", 415_000.0)),
        )
        .mount(&server)
        .await;

    let listing = client.get_listing(42).await.unwrap();

    assert_eq!(listing.id, 42);
    assert_eq!(listing.agent.as_ref().unwrap().full_name(), "Dana Reyes");
    assert_eq!(listing.created_at.as_deref(), Some("2024-03-01T10:00:00Z"));
}

#[tokio::test]
async fn test_optional_fields_default() {
    let (server, client) = setup().await;

    // Minimal payload: no image, no joined house_type, no agent, no tags,
    // no timestamps.
    let body = json!([{
        "id": 9,
        "name": "Bare Lot",
        "description": "",
        "price": 50_000.0,
        "house_type_id": 1
    }]);

    Mock::given(method("GET"))
        .and(path("/api/houses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let listings = client.list_listings().await.unwrap();

    let listing = &listings[0];
    assert!(listing.image_url.is_none());
    assert!(listing.house_type.is_none());
    assert!(listing.agent.is_none());
    assert!(listing.tags.is_empty());
    assert!(listing.created_at.is_none());
}

#[tokio::test]
async fn test_list_agents_and_house_types() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "first_name": "Avery", "last_name": "Kim", "image_url": null },
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/house-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Bungalow" },
            { "id": 2, "name": "Ranch" },
        ])))
        .mount(&server)
        .await;

    let agents = client.list_agents().await.unwrap();
    assert_eq!(agents[0].full_name(), "Avery Kim");
    assert!(agents[0].image_url.is_none());

    let types = client.list_house_types().await.unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[1].name, "Ranch");
}

// ── Failure-path tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_get_listing_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/houses/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("house not found"))
        .mount(&server)
        .await;

    let err = client.get_listing(999).await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "house not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/houses"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.list_listings().await.unwrap_err();

    assert!(!err.is_not_found());
    assert!(matches!(err, Error::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_payload_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/houses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"oops\": tru"))
        .mount(&server)
        .await;

    let err = client.list_listings().await.unwrap_err();

    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "{\"oops\": tru"),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_list_is_ok_not_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/houses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let listings = client.list_listings().await.unwrap();
    assert!(listings.is_empty());
}
