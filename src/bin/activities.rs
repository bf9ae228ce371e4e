// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Terminal report of recent activities.
//!
//! Usage: `activities [limit]` (default 10).

use strava_receipt::{
    config::Config,
    services::{format, strava::DEFAULT_ACTIVITY_LIMIT, StravaClient, StravaService, TokenStore},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    strava_receipt::init_tracing();

    let config = Config::from_env()?;
    let limit = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u32>())
        .transpose()?
        .unwrap_or(DEFAULT_ACTIVITY_LIMIT);

    let client = StravaClient::new(
        config.strava_client_id.clone(),
        config.strava_client_secret.clone(),
    );
    let store = TokenStore::new(config.token_file.clone());
    let service = StravaService::new(client, store);

    let activities = service.get_activities(limit).await?;

    for activity in &activities {
        println!();
        println!("{}", format::format_for_display(activity));
        println!("----------------------------------------");
    }

    Ok(())
}
