// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model as returned by the activity list endpoint.

use serde::{Deserialize, Serialize};

/// Summary activity from `GET /athlete/activities`.
///
/// Only the fields the presentation adapters consume; everything else the
/// API returns is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    pub id: u64,
    /// Activity name/title
    pub name: String,
    /// Activity type (Run, Ride, Hike, etc.)
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Start date/time in the athlete's local timezone (ISO 8601)
    pub start_date_local: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    /// Average speed in meters per second
    pub average_speed: f64,
    /// Total elevation gain in meters
    pub total_elevation_gain: f64,
    /// Average heart rate in bpm, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_heartrate: Option<f64>,
    /// Kudos received, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kudos_count: Option<u32>,
    /// Per-kilometer splits, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splits_metric: Option<Vec<Split>>,
}

/// Per-kilometer timing segment within an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Split {
    /// 1-based kilometer index
    pub split: u32,
    /// Moving time for this kilometer in seconds
    pub moving_time: u64,
    /// Distance covered in this split in meters (the last split is
    /// usually shorter than a full kilometer)
    #[serde(default)]
    pub distance: f64,
}
