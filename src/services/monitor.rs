// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Polling monitor that announces newly appeared activities.

use std::time::Duration;

use crate::error::Result;
use crate::models::Activity;
use crate::services::format;
use crate::services::strava::StravaService;

/// Tracks the most-recently-seen activity id, in memory only.
#[derive(Debug, Default)]
pub struct Monitor {
    last_seen: Option<u64>,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one poll result (most recent activity first).
    ///
    /// The first non-empty observation records the top id silently; after
    /// that, a changed top id is returned as the new activity. Empty poll
    /// results leave the tracked id untouched.
    pub fn observe<'a>(&mut self, activities: &'a [Activity]) -> Option<&'a Activity> {
        let top = activities.first()?;
        match self.last_seen.replace(top.id) {
            None => None,
            Some(previous) if previous != top.id => Some(top),
            Some(_) => None,
        }
    }
}

/// Poll for the latest activity on a fixed interval until interrupted.
///
/// Fetch failures are logged and the loop carries on to the next tick; a
/// ctrl-c terminates the loop cleanly.
pub async fn run(service: &StravaService, interval: Duration) -> Result<()> {
    let mut monitor = Monitor::new();
    let mut ticker = tokio::time::interval(interval);

    tracing::info!(
        interval_secs = interval.as_secs(),
        "Monitoring for new activities"
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received, stopping monitor");
                return Ok(());
            }
            _ = ticker.tick() => {
                match service.get_activities(1).await {
                    Ok(activities) => {
                        if let Some(activity) = monitor.observe(&activities) {
                            println!("\nNew activity!");
                            println!("{}", format::format_for_display(activity));
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "Activity poll failed"),
                }
            }
        }
    }
}
