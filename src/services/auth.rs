// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot interactive OAuth2 authorization flow.
//!
//! Opens a browser to Strava's consent page, captures the redirect on a
//! local loopback listener, exchanges the authorization code for tokens,
//! and persists them to the credential store.
//!
//! The capture is modeled as a two-state machine in the types: a bound
//! [`CallbackListener`] is `AWAITING_CALLBACK`; `capture` consumes it, so
//! after the first request no further connections can be accepted.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::strava::StravaClient;
use crate::services::token_store::TokenStore;

const STRAVA_AUTH_URL: &str = "https://www.strava.com/oauth/authorize";

/// Run the interactive authorization flow to completion.
///
/// Binds the loopback listener before opening the browser, so a port
/// conflict fails fast instead of sending the user through a consent
/// screen that can never redirect back.
pub async fn authorize(config: &Config, client: &StravaClient, store: &TokenStore) -> Result<()> {
    let listener = CallbackListener::bind(config.redirect_port).await?;

    let state = oauth_state::issue(config.strava_client_secret.as_bytes());
    let auth_url = authorize_url(
        STRAVA_AUTH_URL,
        &config.strava_client_id,
        &config.redirect_uri(),
        &state,
    );

    if let Err(e) = open::that(&auth_url) {
        tracing::warn!(error = %e, "Could not open a browser automatically");
    }
    println!("Waiting for Strava authorization at {} ...", config.redirect_uri());
    println!("If no browser opened, visit:\n{}", auth_url);

    let callback = listener.capture().await?;

    let Some(code) = callback.code.clone() else {
        let _ = callback.respond_failure().await;
        return Err(AppError::AuthorizationDenied(
            "no authorization code in callback".to_string(),
        ));
    };

    let state_ok = callback
        .state
        .as_deref()
        .map(|s| oauth_state::verify(config.strava_client_secret.as_bytes(), s))
        .unwrap_or(false);
    if !state_ok {
        let _ = callback.respond_failure().await;
        return Err(AppError::AuthorizationDenied(
            "state parameter missing or tampered".to_string(),
        ));
    }

    match client.exchange_code(&code).await {
        Ok(record) => {
            store.save(&record)?;
            callback.respond_success().await?;
            tracing::info!("Authorization complete, tokens stored");
            Ok(())
        }
        Err(e) => {
            // Store is left untouched; the user can re-run the flow.
            let _ = callback.respond_failure().await;
            Err(e)
        }
    }
}

/// Build the provider authorization URL.
pub fn authorize_url(auth_base: &str, client_id: &str, redirect_uri: &str, state: &str) -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope=activity:read_all&approval_prompt=force&state={}",
        auth_base,
        client_id,
        urlencoding::encode(redirect_uri),
        state,
    )
}

/// Loopback listener awaiting the provider redirect.
pub struct CallbackListener {
    listener: TcpListener,
}

impl CallbackListener {
    /// Bind the loopback port named in the redirect URI.
    ///
    /// A port already in use is fatal; there is no fallback port search
    /// because the redirect URI registered with the provider is fixed.
    pub async fn bind(port: u16) -> Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", port)).await?;
        Ok(Self { listener })
    }

    /// The bound address (useful when binding port 0 in tests).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept exactly one inbound request, regardless of path, and parse
    /// its query string. Consumes the listener: this is a single-shot
    /// capture, not a long-running server.
    pub async fn capture(self) -> Result<CapturedCallback> {
        let (mut stream, peer) = self.listener.accept().await?;
        tracing::debug!(%peer, "Callback connection accepted");

        // Read the request head; the body (if any) is irrelevant.
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() > 16 * 1024 {
                break;
            }
        }

        let head = String::from_utf8_lossy(&buf);
        let request_line = head.lines().next().unwrap_or_default();
        let target = request_line.split_whitespace().nth(1).unwrap_or("/");
        let query = target.split_once('?').map(|(_, q)| q).unwrap_or("");
        let params = parse_query(query);

        Ok(CapturedCallback {
            stream,
            code: params.get("code").cloned(),
            state: params.get("state").cloned(),
        })
    }
}

/// A captured callback request, holding the connection open until the
/// flow knows whether to report success or failure to the browser.
pub struct CapturedCallback {
    stream: TcpStream,
    /// `code` query parameter, if the user approved
    pub code: Option<String>,
    /// `state` query parameter echoed by the provider
    pub state: Option<String>,
}

impl CapturedCallback {
    pub async fn respond_success(mut self) -> Result<()> {
        write_response(
            &mut self.stream,
            "200 OK",
            "Authentication successful! You can close this window.",
        )
        .await
    }

    pub async fn respond_failure(mut self) -> Result<()> {
        write_response(&mut self.stream, "400 Bad Request", "Authentication failed!").await
    }
}

async fn write_response(stream: &mut TcpStream, status: &str, message: &str) -> Result<()> {
    let body = format!("<html><body><p>{}</p></body></html>", message);
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Parse a URL query string into its decoded key/value pairs.
fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            Some((
                urlencoding::decode(key).ok()?.into_owned(),
                urlencoding::decode(value).ok()?.into_owned(),
            ))
        })
        .collect()
}

/// Signed OAuth `state` parameter.
///
/// The payload is a millisecond timestamp, HMAC-SHA256 signed with the
/// client secret and base64url-encoded as `payload|signature_hex`. The
/// callback must echo a state that verifies against the same secret.
pub mod oauth_state {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    use super::{SystemTime, UNIX_EPOCH};

    type HmacSha256 = Hmac<Sha256>;

    /// Create a fresh signed state value.
    pub fn issue(secret: &[u8]) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let payload = format!("{:x}", timestamp);
        let signature = sign(secret, &payload);
        URL_SAFE_NO_PAD.encode(format!("{}|{}", payload, signature))
    }

    /// Verify a state value echoed by the provider.
    pub fn verify(secret: &[u8], state: &str) -> bool {
        let Ok(bytes) = URL_SAFE_NO_PAD.decode(state) else {
            return false;
        };
        let Ok(decoded) = String::from_utf8(bytes) else {
            return false;
        };
        let Some((payload, signature)) = decoded.split_once('|') else {
            return false;
        };
        signature == sign(secret, payload)
    }

    fn sign(secret: &[u8], payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
