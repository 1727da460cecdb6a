//! Session token encoding.
//!
//! A token is the base64 of the JSON payload `{authenticated, expiresAt}`. It is
//! encoded, not signed: anyone who can produce the same encoding holds a valid
//! session.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Session lifetime, also used as the cookie max age.
pub const SESSION_DURATION_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub authenticated: bool,
    pub expires_at: DateTime<Utc>,
}

/// Issue a token valid for `SESSION_DURATION_SECS` from `now`.
pub fn create_session_at(now: DateTime<Utc>) -> String {
    let payload = SessionPayload {
        authenticated: true,
        expires_at: now + Duration::seconds(SESSION_DURATION_SECS),
    };
    encode_session(&payload)
}

pub fn create_session() -> String {
    create_session_at(Utc::now())
}

pub fn encode_session(payload: &SessionPayload) -> String {
    // Serializing a struct of a bool and a timestamp cannot fail.
    let json = serde_json::to_string(payload).unwrap_or_default();
    STANDARD.encode(json)
}

/// Decode a token; `None` on any base64, UTF-8 or JSON error.
pub fn decode_session(token: &str) -> Option<SessionPayload> {
    let bytes = STANDARD.decode(token.trim()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// True iff the token decodes, claims authentication and has not expired at `now`.
pub fn verify_session_at(token: &str, now: DateTime<Utc>) -> bool {
    match decode_session(token) {
        Some(payload) => payload.authenticated && now < payload.expires_at,
        None => false,
    }
}

pub fn verify_session(token: &str) -> bool {
    verify_session_at(token, Utc::now())
}
