// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Receipt: display recent Strava activities as a terminal report,
//! a polling monitor, or a single-page web "receipt".
//!
//! This crate provides the OAuth token lifecycle, the Strava REST client,
//! and the pure formatting functions shared by all presentation adapters.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::StravaService;

/// Shared application state for the web receipt view.
pub struct AppState {
    pub config: Config,
    pub strava: StravaService,
}

/// Initialize tracing for the binaries.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_receipt=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
