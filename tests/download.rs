use hatch::core::download::fetch_to_file;
use hatch::error::HatchError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_body(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

#[tokio::test]
async fn downloads_body_byte_for_byte() {
    let server = MockServer::start().await;
    let body = test_body(524_288);
    Mock::given(method("GET"))
        .and(path("/skiffd"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("skiffd");
    let client = reqwest::Client::new();

    let written = fetch_to_file(
        &client,
        &format!("{}/skiffd", server.uri()),
        &dest,
        "Downloading skiffd",
    )
    .await
    .unwrap();

    // The returned counter, the file size, and the body must all agree.
    assert_eq!(written, body.len() as u64);
    assert_eq!(std::fs::metadata(&dest).unwrap().len(), written);
    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn truncates_stale_destination() {
    let server = MockServer::start().await;
    let body = test_body(1_024);
    Mock::given(method("GET"))
        .and(path("/skiffd"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("skiffd");
    // Pre-existing longer file must not leave trailing garbage behind.
    std::fs::write(&dest, test_body(8_192)).unwrap();

    let client = reqwest::Client::new();
    fetch_to_file(
        &client,
        &format!("{}/skiffd", server.uri()),
        &dest,
        "Downloading skiffd",
    )
    .await
    .unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn failed_status_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("missing");
    let client = reqwest::Client::new();

    let err = fetch_to_file(
        &client,
        &format!("{}/missing", server.uri()),
        &dest,
        "Downloading missing",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, HatchError::FetchFailed { .. }));
    assert!(!dest.exists());
}

#[tokio::test]
async fn unreachable_server_is_a_fetch_failure() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("skiffd");
    let client = reqwest::Client::new();

    // Port 1 on localhost refuses connections.
    let err = fetch_to_file(&client, "http://127.0.0.1:1/skiffd", &dest, "Downloading")
        .await
        .unwrap_err();

    assert!(matches!(err, HatchError::FetchFailed { .. }));
    assert!(!dest.exists());
}

#[tokio::test]
async fn downloads_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(Vec::new()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("empty");
    let client = reqwest::Client::new();

    let written = fetch_to_file(
        &client,
        &format!("{}/empty", server.uri()),
        &dest,
        "Downloading empty",
    )
    .await
    .unwrap();

    assert_eq!(written, 0);
    assert_eq!(std::fs::metadata(&dest).unwrap().len(), 0);
}
