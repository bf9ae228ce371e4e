// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot OAuth authorization flow.
//!
//! Opens a browser to Strava's consent page, captures the loopback
//! redirect, and writes the resulting tokens to the credential store.

use strava_receipt::{
    config::Config,
    services::{authorize, StravaClient, TokenStore},
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

    authorize(&config, &client, &store).await?;

    println!("Tokens saved to {}", store.path().display());
    Ok(())
}
