use flix_client::application::client::FlixClient;
use flix_client::application::services::{CatalogService, UserService};
use flix_client::config::{Config, RestApiConfig};
use flix_client::error::AppError;
use flix_client::session::TokenStore;
use mockito::Matcher;
use std::sync::Arc;

const FIXED_FAILURE_MESSAGE: &str = "something bad happened; please try again later";

// Helper function to create a test config pointing at the mock server
fn create_test_config(server_url: &str) -> Config {
    Config {
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 5,
        },
    }
}

// Helper function to create a client with a stored session token
async fn create_authenticated_client(server_url: &str, token: &str) -> FlixClient {
    let tokens = Arc::new(TokenStore::new());
    tokens.set(token).await;
    FlixClient::new(create_test_config(server_url), tokens).expect("client should build")
}

#[tokio::test]
async fn transport_failure_collapses_to_fixed_message() {
    // Port 9 (discard) is not listening; the connection is refused before
    // any HTTP exchange takes place.
    let client = create_authenticated_client("http://127.0.0.1:9", "test_token").await;

    let err = client
        .get_all_movies()
        .await
        .err()
        .expect("request should fail");

    assert!(matches!(err, AppError::RequestFailed));
    assert_eq!(err.to_string(), FIXED_FAILURE_MESSAGE);
}

#[tokio::test]
async fn not_found_collapses_to_fixed_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/movies/missing")
        .with_status(404)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error":"no such movie"}"#)
        .create_async()
        .await;

    let client = create_authenticated_client(&server.url(), "test_token").await;

    let err = client
        .get_movie("missing")
        .await
        .err()
        .expect("request should fail");

    assert!(matches!(err, AppError::RequestFailed));
    assert_eq!(err.to_string(), FIXED_FAILURE_MESSAGE);

    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_yields_the_same_message_as_not_found() {
    let mut server = mockito::Server::new_async().await;
    let not_found = server
        .mock("GET", "/movies/a")
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;
    let server_error = server
        .mock("GET", "/movies/b")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = create_authenticated_client(&server.url(), "test_token").await;

    let first = client.get_movie("a").await.err().expect("should fail");
    let second = client.get_movie("b").await.err().expect("should fail");

    // Callers cannot distinguish error kinds from the result alone
    assert_eq!(first.to_string(), second.to_string());

    not_found.assert_async().await;
    server_error.assert_async().await;
}

#[tokio::test]
async fn unauthorized_collapses_to_fixed_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/users/alice")
        .with_status(401)
        .with_body(r#"{"error":"invalid token"}"#)
        .create_async()
        .await;

    let client = create_authenticated_client(&server.url(), "stale_token").await;

    let err = client
        .delete_user("alice")
        .await
        .err()
        .expect("request should fail");

    assert_eq!(err.to_string(), FIXED_FAILURE_MESSAGE);

    mock.assert_async().await;
}

#[tokio::test]
async fn missing_token_sends_request_without_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/movies")
        .match_header("Authorization", Matcher::Missing)
        .with_status(401)
        .with_body(r#"{"error":"unauthenticated"}"#)
        .create_async()
        .await;

    let tokens = Arc::new(TokenStore::new());
    let client =
        FlixClient::new(create_test_config(&server.url()), tokens).expect("client should build");

    let err = client
        .get_all_movies()
        .await
        .err()
        .expect("request should fail");

    assert_eq!(err.to_string(), FIXED_FAILURE_MESSAGE);

    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_success_body_collapses_to_fixed_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/movies")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let client = create_authenticated_client(&server.url(), "test_token").await;

    let err = client
        .get_all_movies()
        .await
        .err()
        .expect("request should fail");

    assert_eq!(err.to_string(), FIXED_FAILURE_MESSAGE);

    mock.assert_async().await;
}
