//! Mock-based client tests using wiremock.
//!
//! These tests verify the request sent to the volumes endpoint and how each
//! kind of response is surfaced.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use book_search::config::{Config, VolumeFilter};
use book_search::error::AppError;
use book_search::models::{AccessViewStatus, Saleability};
use book_search::{BooksClient, ClientError, SearchQuery, app};

fn setup_client(mock_server: &MockServer) -> BooksClient {
    BooksClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

/// Sample volume JSON for mocking.
fn sample_volume_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "kind": "books#volume",
        "id": id,
        "volumeInfo": {
            "title": title,
            "authors": ["Frank Herbert"],
            "industryIdentifiers": [
                {"type": "ISBN_13", "identifier": "9780441172719"}
            ],
            "averageRating": 4.2,
            "ratingsCount": 31,
            "infoLink": format!("http://books.google.com/books?id={id}")
        },
        "saleInfo": {
            "country": "US",
            "saleability": "FOR_SALE",
            "listPrice": {"amount": 10.0, "currencyCode": "USD"},
            "retailPrice": {"amount": 8.0, "currencyCode": "USD"}
        },
        "accessInfo": {"accessViewStatus": "SAMPLE", "publicDomain": false}
    })
}

// =============================================================================
// search_volumes
// =============================================================================

#[tokio::test]
async fn test_search_sends_query_and_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .and(query_param("q", "intitle:Dune"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "books#volumes",
            "totalItems": 1,
            "items": [sample_volume_json("d1", "Dune")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let query = SearchQuery::from_args(["--title", "Dune"]).unwrap();

    let volumes = client.search_volumes(&query).await.unwrap();

    assert_eq!(volumes.total_items, 1);
    assert_eq!(volumes.items.len(), 1);
    let volume = &volumes.items[0];
    assert_eq!(volume.volume_info.title.as_deref(), Some("Dune"));
    assert_eq!(volume.volume_info.ratings_count, Some(31));
    assert_eq!(volume.sale_info.as_ref().unwrap().saleability, Saleability::ForSale);
    assert_eq!(volume.access_info.access_view_status, AccessViewStatus::Sample);
}

#[tokio::test]
async fn test_search_sends_filter_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .and(query_param("filter", "free-ebooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalItems": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config =
        Config::for_testing(&mock_server.uri()).with_filter(Some(VolumeFilter::FreeEbooks));
    let client = BooksClient::new(config).unwrap();

    let volumes = client.search_volumes(&SearchQuery::new(None, "poetry")).await.unwrap();
    assert!(volumes.is_empty());
}

#[tokio::test]
async fn test_search_without_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"kind": "books#volumes", "totalItems": 0})),
        )
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let volumes = client.search_volumes(&SearchQuery::new(None, "qqqqzzzz")).await.unwrap();

    assert_eq!(volumes.total_items, 0);
    assert!(volumes.items.is_empty());
}

// =============================================================================
// Error Handling
// =============================================================================

#[tokio::test]
async fn test_api_error_envelope_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search_volumes(&SearchQuery::new(None, "x")).await.unwrap_err();

    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid. Please pass a valid API key.");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Backend Error"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search_volumes(&SearchQuery::new(None, "x")).await.unwrap_err();

    assert!(err.is_transport());
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search_volumes(&SearchQuery::new(None, "x")).await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_connection_refused_is_transport() {
    // Nothing listens on a server that has been shut down.
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let client = BooksClient::new(Config::for_testing(&uri)).unwrap();
    let err = client.search_volumes(&SearchQuery::new(None, "x")).await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_transport_error_does_not_reveal_api_key() {
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let config = Config { api_key: Some("super-secret-key".to_string()), ..Config::for_testing(&uri) };
    let client = BooksClient::new(config.clone()).unwrap();
    let err = client.search_volumes(&SearchQuery::new(None, "x")).await.unwrap_err();

    assert!(!err.to_string().contains("super-secret-key"));
    assert!(!format!("{err:?}").contains("super-secret-key"));

    let mut out = Vec::new();
    let err = app::run(config, ["x"], &mut out).await.unwrap_err();
    let shown = app::describe_error(&err, &book_search::Messages::default());
    assert!(!shown.contains("super-secret-key"));
}

// =============================================================================
// End to End
// =============================================================================

#[tokio::test]
async fn test_run_prints_header_records_and_totals() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .and(query_param("q", "inauthor:Herbert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 57,
            "items": [sample_volume_json("d1", "Dune"), sample_volume_json("d2", "Dune Messiah")]
        })))
        .mount(&mock_server)
        .await;

    let mut out = Vec::new();
    app::run(Config::for_testing(&mock_server.uri()), ["--author", "Herbert"], &mut out)
        .await
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.starts_with("Query: [inauthor:Herbert]\n==========\n"));
    assert!(output.contains("Title: Dune\n"));
    assert!(output.contains("Title: Dune Messiah\n"));
    assert!(output.contains("User Rating: **** (31 rating(s))"));
    assert!(output.contains("List: $10.00  Google eBooks Price: $8.00  You Save: $2.00 (20%)"));
    assert!(output.ends_with("57 total results at http://books.google.com/ebooks?q=inauthor%3AHerbert\n"));
}

#[tokio::test]
async fn test_run_missing_key_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalItems": 0})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = Config { api_key: None, ..Config::for_testing(&mock_server.uri()) };
    let mut out = Vec::new();
    let err = app::run(config, ["dune"], &mut out).await.unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_run_unknown_flag_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalItems": 0})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut out = Vec::new();
    let err = app::run(Config::for_testing(&mock_server.uri()), ["--year", "1965"], &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Usage(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_run_transport_failure_exits_cleanly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&mock_server)
        .await;

    let mut out = Vec::new();
    let err = app::run(Config::for_testing(&mock_server.uri()), ["dune"], &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Transport(_)));
    assert_eq!(err.exit_code(), 0);
}

#[tokio::test]
async fn test_run_malformed_response_is_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"totalItems\": \"many\"}"))
        .mount(&mock_server)
        .await;

    let mut out = Vec::new();
    let err = app::run(Config::for_testing(&mock_server.uri()), ["dune"], &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unexpected(_)));
    assert_eq!(err.exit_code(), 1);
    let detail = app::describe_error(&err, &book_search::Messages::default());
    assert!(detail.contains("Failed to parse response"));
}
