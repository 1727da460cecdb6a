use crate::support::{session_pair, spawn_server, PASSWORD};
use chrono::{Duration, Utc};
use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use serde_json::{json, Value};
use voicedir::auth::{create_session_at, encode_session, SessionPayload};

#[tokio::test]
async fn login_create_view_delete_flow() {
    let server = spawn_server().await;

    let wrong = server
        .client
        .post(server.url("/api/auth"))
        .json(&json!({ "action": "login", "password": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong.status().as_u16(), 401);
    assert!(wrong.headers().get(SET_COOKIE).is_none());
    let body: Value = wrong.json().await.unwrap();
    assert_eq!(body["error"], "Invalid password");

    let cookie = server.login().await;
    assert!(cookie.starts_with("admin_session="));

    let created = server
        .client
        .post(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .json(&json!({ "name": "spanish", "assistantId": "abc123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status().as_u16(), 201);
    let body: Value = created.json().await.unwrap();
    assert_eq!(body["agent"]["name"], "spanish");
    assert_eq!(body["agent"]["assistantId"], "abc123");
    assert!(body["agent"]["createdAt"].is_string());

    let page = server
        .client
        .get(server.url("/agent/spanish"))
        .send()
        .await
        .unwrap();
    assert_eq!(page.status().as_u16(), 200);
    let html = page.text().await.unwrap();
    assert!(html.contains("assistant-id=\"abc123\""));

    let deleted = server
        .client
        .delete(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .json(&json!({ "name": "spanish" }))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status().as_u16(), 200);
    let body: Value = deleted.json().await.unwrap();
    assert_eq!(body["success"], true);

    let again = server
        .client
        .delete(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .json(&json!({ "name": "spanish" }))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status().as_u16(), 404);
    let body: Value = again.json().await.unwrap();
    assert_eq!(body["error"], "Agent not found");

    let gone = server
        .client
        .get(server.url("/agent/spanish"))
        .send()
        .await
        .unwrap();
    assert_eq!(gone.status().as_u16(), 404);
}

#[tokio::test]
async fn agent_routes_require_session_before_reading_body() {
    let server = spawn_server().await;

    let list = server.client.get(server.url("/api/agents")).send().await.unwrap();
    assert_eq!(list.status().as_u16(), 401);
    let body: Value = list.json().await.unwrap();
    assert_eq!(body["error"], "Unauthorized");

    for method in [reqwest::Method::POST, reqwest::Method::PUT, reqwest::Method::DELETE] {
        let response = server
            .client
            .request(method, server.url("/api/agents"))
            .header(CONTENT_TYPE, "application/json")
            .body("{ not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 401);
    }

    assert!(server.registry.list().await.is_empty());
}

#[tokio::test]
async fn expired_or_garbled_sessions_are_rejected() {
    let server = spawn_server().await;

    let expired = create_session_at(Utc::now() - Duration::hours(25));
    for token in [expired.as_str(), "garbage", ""] {
        let response = server
            .client
            .get(server.url("/api/agents"))
            .header(COOKIE, format!("admin_session={}", token))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 401, "token {:?}", token);
    }
}

#[tokio::test]
async fn hand_built_session_is_accepted() {
    // Tokens are encoded, not signed.
    let server = spawn_server().await;
    let token = encode_session(&SessionPayload {
        authenticated: true,
        expires_at: Utc::now() + Duration::hours(1),
    });
    let response = server
        .client
        .get(server.url("/api/agents"))
        .header(COOKIE, format!("admin_session={}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn create_reports_validation_and_conflicts() {
    let server = spawn_server().await;
    let cookie = server.login().await;

    let cases = [
        (json!({ "name": "spanish" }), "Name and assistant ID are required"),
        (json!({ "name": "", "assistantId": "abc" }), "Name and assistant ID are required"),
        (json!({ "name": "admin", "assistantId": "abc" }), "This agent name is reserved"),
        (
            json!({ "name": "no spaces", "assistantId": "abc" }),
            "Agent name must be lowercase letters, numbers, and hyphens only",
        ),
        (json!({ "name": "spanish", "assistantId": "   " }), "Assistant ID is required"),
    ];
    for (payload, message) in cases {
        let response = server
            .client
            .post(server.url("/api/agents"))
            .header(COOKIE, &cookie)
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400, "payload {}", payload);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], message);
    }

    let first = server
        .client
        .post(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .json(&json!({ "name": "  Spanish ", "assistantId": "abc" }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status().as_u16(), 201);
    let body: Value = first.json().await.unwrap();
    assert_eq!(body["agent"]["name"], "spanish");

    let duplicate = server
        .client
        .post(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .json(&json!({ "name": "spanish", "assistantId": "other" }))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status().as_u16(), 400);
    let body: Value = duplicate.json().await.unwrap();
    assert_eq!(body["error"], "Agent with this name already exists");
}

#[tokio::test]
async fn update_changes_assistant_only() {
    let server = spawn_server().await;
    let cookie = server.login().await;

    let missing = server
        .client
        .put(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .json(&json!({ "name": "ghost", "assistantId": "abc" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 400);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["error"], "Agent not found");

    let original = server.registry.create("support", "first").await.unwrap();

    let updated = server
        .client
        .put(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .json(&json!({ "name": "support", "assistantId": " second " }))
        .send()
        .await
        .unwrap();
    assert_eq!(updated.status().as_u16(), 200);
    let body: Value = updated.json().await.unwrap();
    assert_eq!(body["agent"]["assistantId"], "second");

    let stored = server.registry.get("support").await.unwrap();
    assert_eq!(stored.created_at, original.created_at);
    assert_eq!(stored.assistant_id, "second");
}

#[tokio::test]
async fn list_returns_agents_in_creation_order() {
    let server = spawn_server().await;
    let cookie = server.login().await;

    for name in ["zulu", "alpha", "mike"] {
        server.registry.create(name, "abc").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let response = server
        .client
        .get(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let names: Vec<&str> = body["agents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|agent| agent["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["zulu", "alpha", "mike"]);
}

#[tokio::test]
async fn auth_endpoint_edge_cases() {
    let server = spawn_server().await;

    let no_password = server
        .client
        .post(server.url("/api/auth"))
        .json(&json!({ "action": "login" }))
        .send()
        .await
        .unwrap();
    assert_eq!(no_password.status().as_u16(), 400);
    let body: Value = no_password.json().await.unwrap();
    assert_eq!(body["error"], "Password is required");

    let bad_action = server
        .client
        .post(server.url("/api/auth"))
        .json(&json!({ "action": "sudo", "password": PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_action.status().as_u16(), 400);
    let body: Value = bad_action.json().await.unwrap();
    assert_eq!(body["error"], "Invalid action");

    let malformed = server
        .client
        .post(server.url("/api/auth"))
        .header(CONTENT_TYPE, "application/json")
        .body("{")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status().as_u16(), 400);

    let logout = server
        .client
        .post(server.url("/api/auth"))
        .json(&json!({ "action": "logout" }))
        .send()
        .await
        .unwrap();
    assert_eq!(logout.status().as_u16(), 200);
    let set_cookie = logout
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("Max-Age=0"));
    assert_eq!(session_pair(&logout).as_deref(), Some("admin_session="));
}

#[tokio::test]
async fn login_cookie_attributes() {
    let server = spawn_server().await;
    let response = server
        .client
        .post(server.url("/api/auth"))
        .json(&json!({ "action": "login", "password": PASSWORD }))
        .send()
        .await
        .unwrap();
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(set_cookie.contains("Max-Age=86400"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn bodies_parse_without_json_content_type() {
    let server = spawn_server().await;

    let login = server
        .client
        .post(server.url("/api/auth"))
        .header(CONTENT_TYPE, "text/plain")
        .body(json!({ "action": "login", "password": PASSWORD }).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(login.status().as_u16(), 200);
    let cookie = session_pair(&login).unwrap();

    let created = server
        .client
        .post(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .body(json!({ "name": "spanish", "assistantId": "abc" }).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(created.status().as_u16(), 201);

    let deleted = server
        .client
        .delete(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .header(CONTENT_TYPE, "text/plain")
        .body(json!({ "name": "spanish" }).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status().as_u16(), 200);

    let empty = server
        .client
        .put(server.url("/api/agents"))
        .header(COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(empty.status().as_u16(), 400);
    let body: Value = empty.json().await.unwrap();
    assert_eq!(body["error"], "Invalid request body");
}
