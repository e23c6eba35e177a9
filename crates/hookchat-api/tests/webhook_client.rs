mod fixtures;

use fixtures::{truncated_body_url, unreachable_url, WebhookMockServer};
use hookchat_api::{ReplyFetcher, RequestLogging, WebhookClient};
use hookchat_types::{FetchError, SessionId, NETWORK_ERROR_MESSAGE};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_posts_session_and_message_as_json() {
    let server = WebhookMockServer::new().await;
    server
        .mock_reply_for("session-1", "Hello there", json!({ "message": "hi" }))
        .await;

    let client = WebhookClient::new(server.url());
    let reply = client
        .fetch_reply(&SessionId::new("session-1"), "Hello there")
        .await
        .unwrap();

    assert_eq!(reply, json!({ "message": "hi" }));
}

#[tokio::test]
async fn test_empty_session_id_is_forwarded() {
    let server = WebhookMockServer::new().await;
    server
        .mock_reply_for("", "anyone there?", json!({ "response": "yes" }))
        .await;

    let client = WebhookClient::new(server.url());
    let reply = client
        .fetch_reply(&SessionId::default(), "anyone there?")
        .await
        .unwrap();

    assert_eq!(reply["response"], "yes");
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let server = WebhookMockServer::new().await;
    server.mock_raw(500, "server error").await;

    let client = WebhookClient::new(server.url());
    let err = client
        .fetch_reply(&SessionId::new("s"), "hi")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        FetchError::Http {
            status: 500,
            body: "server error".to_string()
        }
    );
    let banner = err.user_message();
    assert!(banner.contains("500"));
    assert!(banner.contains("server error"));
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = WebhookMockServer::new().await;
    server.mock_raw(200, "<html>ok</html>").await;

    let client = WebhookClient::new(server.url());
    let err = client
        .fetch_reply(&SessionId::new("s"), "hi")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
    assert_ne!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let client = WebhookClient::new(unreachable_url());
    let err = client
        .fetch_reply(&SessionId::new("s"), "hi")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_connection_dropped_mid_body_is_network_error() {
    let client = WebhookClient::new(truncated_body_url().await);
    let err = client
        .fetch_reply(&SessionId::new("s"), "hi")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "unexpected error: {:?}", err);
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_request_logging_writes_files() {
    let server = WebhookMockServer::new().await;
    server
        .mock_reply_for("abcdef12-0000", "log me", json!({ "message": "logged" }))
        .await;
    let logs = tempfile::tempdir().unwrap();

    let client = WebhookClient::new(server.url()).with_logging(RequestLogging {
        verbose: false,
        logs_dir: Some(logs.path().to_path_buf()),
    });
    client
        .fetch_reply(&SessionId::new("abcdef12-0000"), "log me")
        .await
        .unwrap();

    let mut names: Vec<String> = std::fs::read_dir(logs.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names.len(), 2);
    assert!(names[0].starts_with("req-") && names[0].ends_with("-abcdef12.txt"));
    assert!(names[1].starts_with("resp-") && names[1].ends_with("-abcdef12.txt"));
}
