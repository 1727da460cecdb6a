//! Session Authenticator
//!
//! Single shared-password admin gate. The server keeps no session table: every
//! request re-derives its state from the cookie it presents (no token or a
//! garbled one: unauthenticated; expired: unauthenticated; valid: authenticated).

pub mod cookie;
pub mod password;
pub mod session;

pub use cookie::{clear_session_cookie, read_session_cookie, session_cookie};
pub use password::verify_password;
pub use session::{
    create_session, create_session_at, decode_session, encode_session, verify_session,
    verify_session_at, SessionPayload, SESSION_COOKIE_NAME, SESSION_DURATION_SECS,
};

use crate::config::AuthConfig;
use axum::http::HeaderMap;

/// Authenticator bound to the configured admin secret.
#[derive(Clone)]
pub struct SessionAuthenticator {
    admin_password: Option<String>,
    secure_cookie: bool,
}

impl SessionAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        if config.admin_password.as_deref().map_or(true, str::is_empty) {
            tracing::warn!("No admin password configured; admin login is disabled");
        }
        Self {
            admin_password: config.admin_password.clone(),
            secure_cookie: config.secure_cookie,
        }
    }

    pub fn create_session(&self) -> String {
        create_session()
    }

    pub fn verify_session(&self, token: &str) -> bool {
        verify_session(token)
    }

    pub fn verify_password(&self, candidate: &str) -> bool {
        verify_password(candidate, self.admin_password.as_deref())
    }

    /// Whether the request carries a valid session cookie.
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        match read_session_cookie(headers) {
            Some(token) => self.verify_session(&token),
            None => false,
        }
    }

    pub fn session_cookie(&self, token: &str) -> String {
        session_cookie(token, self.secure_cookie)
    }

    pub fn clear_session_cookie(&self) -> String {
        clear_session_cookie(self.secure_cookie)
    }
}
