// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth token record persisted in the credential store.

use serde::{Deserialize, Serialize};

/// Stored OAuth token pair.
///
/// Written by the authorization flow on the initial code exchange and
/// overwritten in place on every refresh. Fields the provider returns
/// beyond the three we act on (athlete profile, token_type, ...) are
/// carried in `extra` and persisted untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Bearer token for API calls
    pub access_token: String,
    /// Token used to obtain a new pair once the access token expires
    pub refresh_token: String,
    /// When the access token expires (seconds since epoch)
    pub expires_at: i64,
    /// Additional provider fields, passed through opaquely
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TokenRecord {
    /// Whether the access token has expired as of `now` (seconds since
    /// epoch). Strictly less-than: a token expiring this very second is
    /// still used as-is.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_strict() {
        let record = TokenRecord {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: 1_000,
            extra: serde_json::Map::new(),
        };

        assert!(!record.is_expired(999));
        assert!(!record.is_expired(1_000));
        assert!(record.is_expired(1_001));
    }

    #[test]
    fn unknown_fields_round_trip() {
        let raw = r#"{
            "access_token": "a",
            "refresh_token": "r",
            "expires_at": 123,
            "token_type": "Bearer",
            "athlete": {"id": 42}
        }"#;

        let record: TokenRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.extra["token_type"], "Bearer");
        assert_eq!(record.extra["athlete"]["id"], 42);

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["token_type"], "Bearer");
        assert_eq!(out["athlete"]["id"], 42);
    }
}
