mod common;

use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let server = common::shortener_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();

    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        json["short_url"],
        format!("{}/{code}", common::TEST_BASE_URL)
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_yields_distinct_codes() {
    let server = common::shortener_server();

    let first = common::shorten(&server, "https://example.com").await;
    let second = common::shorten(&server, "https://example.com").await;

    assert_ne!(first, second);

    // Both codes resolve independently.
    for code in [&first, &second] {
        let response = server.get(&format!("/{code}")).await;
        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), "https://example.com");
    }
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::shortener_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["error"], "Invalid URL");
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = common::shortener_server();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "URL not provided"
    );
}

#[tokio::test]
async fn test_shorten_accepts_ftp_and_ipv4() {
    let server = common::shortener_server();

    common::shorten(&server, "ftp://files.example.com/archive.tar.gz").await;
    common::shorten(&server, "http://192.168.1.1:8080/admin").await;
}
