// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure formatting of raw activity fields into display-ready strings.
//!
//! Distances arrive in meters, durations in seconds, speeds in m/s; the
//! functions here convert to kilometers, `m:ss` paces, and km/h. No I/O,
//! no shared state.

use crate::models::{Activity, Receipt, ReceiptSplit, ReceiptStats};
use crate::time_utils::split_local_timestamp;

/// 1000 m/km divided by 60 s/min: converts m/s into min/km by division.
const MIN_PER_KM_FACTOR: f64 = 16.6667;

/// Pace string for runs (`m:ss /km`), speed string for everything else
/// (`km/h`, one decimal).
///
/// A run with non-positive average speed has no defined pace (manual or
/// stationary entries) and formats as a placeholder.
pub fn pace_or_speed(activity: &Activity) -> String {
    if activity.activity_type == "Run" {
        if activity.average_speed <= 0.0 {
            return "-- /km".to_string();
        }
        let pace = MIN_PER_KM_FACTOR / activity.average_speed;
        let mins = pace as u64;
        let secs = ((pace - mins as f64) * 60.0) as u64;
        format!("{}:{:02} /km", mins, secs)
    } else {
        format!("{:.1} km/h", activity.average_speed * 3.6)
    }
}

/// Multi-line terminal report for one activity.
///
/// Heart rate and kudos lines appear only when the fields are present.
pub fn format_for_display(activity: &Activity) -> String {
    let (date, time) = split_local_timestamp(&activity.start_date_local);

    let mut out = format!(
        "Activity: {}\nDate: {} at {}\nType: {}\nDistance: {:.2}km\nDuration: {:.0} minutes\nPace: {}\nElevation Gain: {}m",
        activity.name,
        date,
        time,
        activity.activity_type,
        activity.distance / 1000.0,
        activity.moving_time as f64 / 60.0,
        pace_or_speed(activity),
        activity.total_elevation_gain,
    );

    if let Some(heartrate) = activity.average_heartrate {
        out.push_str(&format!("\nAverage Heart Rate: {:.0} bpm", heartrate));
    }
    if let Some(kudos) = activity.kudos_count {
        out.push_str(&format!("\nKudos: {}", kudos));
    }

    out
}

/// Build the structured receipt for the web view.
///
/// Average pace is `(moving_time / distance) * 1000` seconds per km; a
/// zero-distance activity has no defined pace and gets a placeholder.
pub fn format_for_receipt(activity: &Activity) -> Receipt {
    let (date, time) = split_local_timestamp(&activity.start_date_local);

    let avg_pace = if activity.distance > 0.0 {
        format_min_sec(activity.moving_time as f64 / activity.distance * 1000.0)
    } else {
        "--:--".to_string()
    };

    let splits = activity
        .splits_metric
        .iter()
        .flatten()
        .map(|split| ReceiptSplit {
            km: format!("{:02}", split.split),
            time: format_min_sec(split.moving_time as f64),
        })
        .collect();

    Receipt {
        date: date.to_string(),
        time: time.to_string(),
        name: activity.name.clone(),
        stats: ReceiptStats {
            distance: format!("{:.2} km", activity.distance / 1000.0),
            moving_time: format_min_sec(activity.moving_time as f64),
            avg_pace,
        },
        splits,
    }
}

/// Format a duration in seconds as `m:ss`, seconds zero-padded.
fn format_min_sec(total_secs: f64) -> String {
    let mins = (total_secs / 60.0) as u64;
    let secs = (total_secs % 60.0) as u64;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Split;

    fn run_activity() -> Activity {
        Activity {
            id: 1,
            name: "Morning Run".to_string(),
            activity_type: "Run".to_string(),
            start_date_local: "2026-07-14T06:32:11Z".to_string(),
            distance: 5000.0,
            moving_time: 1500,
            average_speed: 16.6667 / 6.0,
            total_elevation_gain: 42.0,
            average_heartrate: None,
            kudos_count: None,
            splits_metric: None,
        }
    }

    #[test]
    fn run_pace_six_minutes_per_km() {
        let activity = run_activity();
        assert_eq!(pace_or_speed(&activity), "6:00 /km");
    }

    #[test]
    fn non_run_speed_in_kmh() {
        let mut activity = run_activity();
        activity.activity_type = "Ride".to_string();
        activity.average_speed = 2.7778; // 10 km/h
        assert_eq!(pace_or_speed(&activity), "10.0 km/h");
    }

    #[test]
    fn zero_speed_does_not_panic() {
        let mut activity = run_activity();
        activity.average_speed = 0.0;
        assert_eq!(pace_or_speed(&activity), "-- /km");

        activity.activity_type = "Workout".to_string();
        assert_eq!(pace_or_speed(&activity), "0.0 km/h");
    }

    #[test]
    fn display_includes_core_fields() {
        let report = format_for_display(&run_activity());

        assert!(report.contains("Activity: Morning Run"));
        assert!(report.contains("Date: 2026-07-14 at 06:32"));
        assert!(report.contains("Type: Run"));
        assert!(report.contains("Distance: 5.00km"));
        assert!(report.contains("Duration: 25 minutes"));
        assert!(report.contains("Pace: 6:00 /km"));
        assert!(report.contains("Elevation Gain: 42m"));
        assert!(!report.contains("Heart Rate"));
        assert!(!report.contains("Kudos"));
    }

    #[test]
    fn display_appends_optional_fields() {
        let mut activity = run_activity();
        activity.average_heartrate = Some(151.6);
        activity.kudos_count = Some(3);

        let report = format_for_display(&activity);
        assert!(report.contains("Average Heart Rate: 152 bpm"));
        assert!(report.contains("Kudos: 3"));
    }

    #[test]
    fn receipt_average_pace() {
        let receipt = format_for_receipt(&run_activity());
        assert_eq!(receipt.stats.avg_pace, "5:00");
        assert_eq!(receipt.stats.distance, "5.00 km");
        assert_eq!(receipt.stats.moving_time, "25:00");
        assert_eq!(receipt.date, "2026-07-14");
        assert_eq!(receipt.time, "06:32");
    }

    #[test]
    fn receipt_zero_distance_guard() {
        let mut activity = run_activity();
        activity.distance = 0.0;
        let receipt = format_for_receipt(&activity);
        assert_eq!(receipt.stats.avg_pace, "--:--");
    }

    #[test]
    fn receipt_splits_keep_order_and_padding() {
        let mut activity = run_activity();
        activity.splits_metric = Some(vec![
            Split { split: 1, moving_time: 301, distance: 1000.0 },
            Split { split: 2, moving_time: 295, distance: 1000.0 },
            Split { split: 3, moving_time: 304, distance: 1000.0 },
        ]);

        let receipt = format_for_receipt(&activity);
        let indices: Vec<&str> = receipt.splits.iter().map(|s| s.km.as_str()).collect();
        assert_eq!(indices, ["01", "02", "03"]);
        assert_eq!(receipt.splits[0].time, "5:01");
        assert_eq!(receipt.splits[1].time, "4:55");
    }

    #[test]
    fn receipt_without_splits_is_empty() {
        let receipt = format_for_receipt(&run_activity());
        assert!(receipt.splits.is_empty());
    }
}
