// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::json;
use strava_receipt::models::TokenRecord;
use strava_receipt::services::{StravaClient, TokenStore};
use tempfile::TempDir;

/// A token record with the given expiry and well-known test values.
#[allow(dead_code)]
pub fn token_record(expires_at: i64) -> TokenRecord {
    TokenRecord {
        access_token: "stored_access".to_string(),
        refresh_token: "stored_refresh".to_string(),
        expires_at,
        extra: serde_json::Map::new(),
    }
}

/// An expiry timestamp comfortably in the future.
#[allow(dead_code)]
pub fn future_expiry() -> i64 {
    chrono::Utc::now().timestamp() + 3_600
}

/// An expiry timestamp in the past.
#[allow(dead_code)]
pub fn past_expiry() -> i64 {
    chrono::Utc::now().timestamp() - 3_600
}

/// A credential store inside a temp directory.
#[allow(dead_code)]
pub fn temp_store(dir: &TempDir) -> TokenStore {
    TokenStore::new(dir.path().join("tokens.json"))
}

/// A Strava client pointed at a wiremock server.
#[allow(dead_code)]
pub fn mock_client(server_uri: &str) -> StravaClient {
    StravaClient::with_base_urls(
        "test_client_id".to_string(),
        "test_secret".to_string(),
        format!("{}/api/v3", server_uri),
        format!("{}/oauth/token", server_uri),
    )
}

/// A wire-shaped activity JSON object.
#[allow(dead_code)]
pub fn activity_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "type": "Run",
        "start_date_local": "2026-07-14T06:32:11Z",
        "distance": 5000.0,
        "moving_time": 1500,
        "average_speed": 2.8,
        "total_elevation_gain": 42.0,
        "kudos_count": 2
    })
}
