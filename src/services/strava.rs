// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client and token lifecycle.
//!
//! Handles:
//! - Activity list fetching
//! - Authorization-code and refresh-token exchanges
//! - Token refresh when expired, persisted back to the credential store

use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Activity, TokenRecord};
use crate::services::token_store::TokenStore;

/// Default number of activities fetched when no limit is given.
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 10;

/// All requests carry an explicit timeout so a stalled call cannot hang
/// the process indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    api_base: String,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials, pointed at the
    /// production endpoints.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::with_base_urls(
            client_id,
            client_secret,
            "https://www.strava.com/api/v3",
            "https://www.strava.com/oauth/token",
        )
    }

    /// Create a client against custom base URLs (used by tests to point at
    /// a mock server).
    pub fn with_base_urls(
        client_id: String,
        client_secret: String,
        api_base: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("HTTP client construction"),
            api_base: api_base.into(),
            token_url: token_url.into(),
            client_id,
            client_secret,
        }
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenRecord> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::RefreshFailed(format!("HTTP {}: {}", status, body)));
        }

        let raw: RawTokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::RefreshFailed(format!("JSON parse error: {}", e)))?;

        // Strava includes expires_at in refresh responses; a provider that
        // omits it would otherwise leave us storing an undefined expiry.
        raw.into_record().ok_or(AppError::RefreshResponseIncomplete)
    }

    /// Exchange an authorization code for the initial token pair.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenRecord> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Strava token exchange failed");
            return Err(AppError::TokenExchangeFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let raw: RawTokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::TokenExchangeFailed(format!("JSON parse error: {}", e)))?;

        raw.into_record().ok_or_else(|| {
            AppError::TokenExchangeFailed("response missing expires_at".to_string())
        })
    }

    /// List recent activities, most recent first (server order).
    pub async fn list_activities(
        &self,
        access_token: &str,
        per_page: u32,
    ) -> Result<Vec<Activity>> {
        let url = format!("{}/athlete/activities", self.api_base);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("per_page", per_page.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::FetchFailed { status, body });
        }

        Ok(response.json().await?)
    }
}

/// Token endpoint response. `expires_at` stays optional until checked so
/// an incomplete refresh is reported instead of silently stored.
#[derive(Debug, Deserialize)]
struct RawTokenResponse {
    access_token: String,
    refresh_token: String,
    expires_at: Option<i64>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl RawTokenResponse {
    fn into_record(self) -> Option<TokenRecord> {
        Some(TokenRecord {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: self.expires_at?,
            extra: self.extra,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StravaService - token lifecycle + activity fetching
// ─────────────────────────────────────────────────────────────────────────────

/// High-level Strava service that manages the token lifecycle and wraps
/// the API calls the presentation adapters need.
pub struct StravaService {
    client: StravaClient,
    store: TokenStore,
}

impl StravaService {
    pub fn new(client: StravaClient, store: TokenStore) -> Self {
        Self { client, store }
    }

    /// Get a valid (non-expired) access token.
    ///
    /// Reads the credential store; if the stored token is still valid it
    /// is returned unchanged with no network call. An expired token is
    /// exchanged once via the refresh grant and the full new record is
    /// persisted before returning.
    pub async fn get_valid_token(&self) -> Result<String> {
        let tokens = self.store.load()?;

        let now = Utc::now().timestamp();
        if !tokens.is_expired(now) {
            return Ok(tokens.access_token);
        }

        tracing::info!("Access token expired, refreshing");
        let new_tokens = self.client.refresh_token(&tokens.refresh_token).await?;
        self.store.save(&new_tokens)?;
        tracing::info!("Token refreshed and stored");

        Ok(new_tokens.access_token)
    }

    /// Fetch the most recent activities, in server order.
    pub async fn get_activities(&self, limit: u32) -> Result<Vec<Activity>> {
        let access_token = self.get_valid_token().await?;
        self.client.list_activities(&access_token, limit).await
    }
}
