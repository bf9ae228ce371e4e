// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Polling monitor: announce new activities as they appear.

use std::time::Duration;

use strava_receipt::{
    config::Config,
    services::{monitor, StravaClient, StravaService, TokenStore},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    strava_receipt::init_tracing();

    let config = Config::from_env()?;
    let client = StravaClient::new(
        config.strava_client_id.clone(),
        config.strava_client_secret.clone(),
    );
    let store = TokenStore::new(config.token_file.clone());
    let service = StravaService::new(client, store);

    monitor::run(&service, Duration::from_secs(config.poll_interval_secs)).await?;
    Ok(())
}
