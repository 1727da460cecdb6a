use std::sync::Arc;
use tokio::net::TcpListener;
use voicedir::agent::AgentRegistry;
use voicedir::auth::SessionAuthenticator;
use voicedir::config::{AuthConfig, WidgetConfig};
use voicedir::server::{self, AppState};
use voicedir::store::{AgentStore, MemoryBackend};

pub const PASSWORD: &str = "correct horse";

pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
    pub registry: AgentRegistry,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Log in and return the `name=value` pair to send back as a Cookie header.
    pub async fn login(&self) -> String {
        let response = self
            .client
            .post(self.url("/api/auth"))
            .json(&serde_json::json!({ "action": "login", "password": PASSWORD }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        session_pair(&response).expect("login sets the session cookie")
    }
}

/// The `name=value` part of the response's Set-Cookie header.
pub fn session_pair(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|pair| pair.trim().to_string())
}

/// Serve a fresh in-memory directory on an ephemeral port.
pub async fn spawn_server() -> TestServer {
    let store = Arc::new(AgentStore::with_backend(Arc::new(MemoryBackend::new())));
    let registry = AgentRegistry::new(store);
    let state = Arc::new(AppState {
        registry: registry.clone(),
        auth: SessionAuthenticator::new(&AuthConfig {
            admin_password: Some(PASSWORD.to_string()),
            secure_cookie: false,
        }),
        widget: WidgetConfig {
            public_key: Some("pk-test".to_string()),
            ..WidgetConfig::default()
        },
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, state, std::future::pending()));

    TestServer {
        base: format!("http://{}", addr),
        client: reqwest::Client::new(),
        registry,
    }
}
