//! Integration tests for `VendorClient::fetch_collection`.
//!
//! Each test stands up a local `wiremock` server, so no real network traffic
//! is made.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pasar_vendors::{FetchError, VendorClient};

fn test_client() -> VendorClient {
    VendorClient::new(5, "pasar-test/0.1", 0, 0).expect("failed to build test VendorClient")
}

fn test_client_with_retries(max_retries: u32) -> VendorClient {
    VendorClient::new(5, "pasar-test/0.1", max_retries, 0)
        .expect("failed to build test VendorClient")
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn returns_records_from_json_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/warung"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"kd_produk": "A001", "nm_brg": "Kopi Bubuk 100g", "hrg": "15000", "ket_stok": "ada"},
            {"kd_produk": "A002", "nm_brg": "Gula Pasir 1kg", "hrg": "12000", "ket_stok": "habis"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = test_client()
        .fetch_collection(&format!("{}/api/warung", server.uri()))
        .await
        .expect("fetch should succeed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["kd_produk"], "A001");
}

#[tokio::test]
async fn empty_array_is_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let records = test_client()
        .fetch_collection(&format!("{}/products", server.uri()))
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "pasar-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client().fetch_collection(&server.uri()).await;
    assert!(result.is_ok(), "{result:?}");
}

// ---------------------------------------------------------------------------
// Error variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_collection(&format!("{}/products", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, FetchError::UnexpectedStatus { status: 404, ref url } if url.ends_with("/products")),
        "expected UnexpectedStatus 404, got: {err:?}"
    );
}

#[tokio::test]
async fn object_body_is_not_a_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .mount(&server)
        .await;

    let err = test_client().fetch_collection(&server.uri()).await.unwrap_err();

    assert!(
        matches!(err, FetchError::NotACollection { found: "object", .. }),
        "expected NotACollection, got: {err:?}"
    );
}

#[tokio::test]
async fn html_body_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client().fetch_collection(&server.uri()).await.unwrap_err();

    assert!(
        matches!(err, FetchError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn refused_connection_is_http_error() {
    // Bind and drop a listener to get a port with nothing behind it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let err = test_client()
        .fetch_collection(&format!("http://127.0.0.1:{port}/products"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Http(_)), "expected Http, got: {err:?}");
}

// ---------------------------------------------------------------------------
// Retry behavior
// ---------------------------------------------------------------------------

#[tokio::test]
async fn retries_server_error_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"sku": "B1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let records = test_client_with_retries(3)
        .fetch_collection(&server.uri())
        .await
        .expect("third attempt should succeed");

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn retries_rate_limit_until_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let err = test_client_with_retries(2)
        .fetch_collection(&server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::UnexpectedStatus { status: 429, .. }));
}

#[tokio::test]
async fn does_not_retry_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client_with_retries(3)
        .fetch_collection(&server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::UnexpectedStatus { status: 403, .. }));
}

#[tokio::test]
async fn does_not_retry_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client_with_retries(3)
        .fetch_collection(&server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Deserialize { .. }));
}
