// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod auth;
pub mod format;
pub mod monitor;
pub mod strava;
pub mod token_store;

pub use auth::{authorize, CallbackListener};
pub use monitor::Monitor;
pub use strava::{StravaClient, StravaService};
pub use token_store::TokenStore;
