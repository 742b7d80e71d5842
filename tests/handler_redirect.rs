mod common;

#[tokio::test]
async fn test_redirect_success() {
    let server = common::shortener_server();

    let code = common::shorten(&server, "https://example.com/target").await;

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::shortener_server();

    let response = server.get("/nosuch").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_increments_clicks() {
    let server = common::shortener_server();

    let code = common::shorten(&server, "http://example.com").await;

    let before = server.get(&format!("/api/stats/{code}")).await;
    assert_eq!(before.json::<serde_json::Value>()["clicks"], 0);

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "http://example.com");

    let after = server.get(&format!("/api/stats/{code}")).await;
    assert_eq!(after.json::<serde_json::Value>()["clicks"], 1);
}
