mod common;

#[tokio::test]
async fn test_shortener_root() {
    let server = common::shortener_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "URL Shortener API");
}

#[tokio::test]
async fn test_shortener_api_health() {
    let server = common::shortener_server();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "URL Shortener API is running");
}
