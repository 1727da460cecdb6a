use crate::support::spawn_server;
use serde_json::Value;

#[tokio::test]
async fn home_lists_registered_agents() {
    let server = spawn_server().await;

    let empty = server.client.get(server.url("/")).send().await.unwrap();
    assert_eq!(empty.status().as_u16(), 200);
    let html = empty.text().await.unwrap();
    assert!(html.contains("Voice Agent Directory"));
    assert!(!html.contains("Available Agents"));

    server.registry.create("spanish", "abc").await.unwrap();
    server.registry.create("customer-support", "def").await.unwrap();

    let html = server
        .client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Available Agents"));
    assert!(html.contains("href=\"/agent/spanish\""));
    assert!(html.contains("href=\"/agent/customer-support\""));
}

#[tokio::test]
async fn agent_page_embeds_widget_with_public_key() {
    let server = spawn_server().await;
    server.registry.create("customer-support", "asst-42").await.unwrap();

    let response = server
        .client
        .get(server.url("/agent/customer-support"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.unwrap();
    assert!(html.contains("<title>Customer support Voice Agent</title>"));
    assert!(html.contains("<h1>Customer Support</h1>"));
    assert!(html.contains("assistant-id=\"asst-42\""));
    assert!(html.contains("public-key=\"pk-test\""));
}

#[tokio::test]
async fn agent_lookup_is_exact() {
    let server = spawn_server().await;
    server.registry.create("spanish", "abc").await.unwrap();

    for path in ["/agent/Spanish", "/agent/french", "/agent/admin"] {
        let response = server.client.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 404, "path {}", path);
        let html = response.text().await.unwrap();
        assert!(html.contains("Agent Not Found"));
    }
}

#[tokio::test]
async fn unknown_routes_fall_back_to_not_found_page() {
    let server = spawn_server().await;
    let response = server
        .client
        .get(server.url("/nowhere/at/all"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
    assert!(response.text().await.unwrap().contains("404"));
}

#[tokio::test]
async fn health_check_reports_ok() {
    let server = spawn_server().await;
    let response = server.client.get(server.url("/healthz")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
