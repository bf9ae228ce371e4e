// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Receipt web server
//!
//! Serves a single-page "receipt" view of the latest Strava activity.
//! Run the `authorize` binary once first to populate the credential store.

use std::sync::Arc;

use strava_receipt::{
    config::Config,
    services::{StravaClient, StravaService, TokenStore},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    strava_receipt::init_tracing();

    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting receipt server");

    let client = StravaClient::new(
        config.strava_client_id.clone(),
        config.strava_client_secret.clone(),
    );
    let store = TokenStore::new(config.token_file.clone());
    let strava = StravaService::new(client, store);

    let state = Arc::new(AppState {
        config: config.clone(),
        strava,
    });
    let app = strava_receipt::routes::create_router(state);

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
