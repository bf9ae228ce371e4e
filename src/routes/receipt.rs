// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The single-page web "receipt" for the latest activity.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::error::Result;
use crate::models::Receipt;
use crate::services::format::format_for_receipt;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(show_latest_receipt))
}

/// Fetch the latest activity and render it as a receipt page.
async fn show_latest_receipt(State(state): State<Arc<AppState>>) -> Result<Response> {
    let activities = state.strava.get_activities(1).await?;

    let Some(activity) = activities.first() else {
        return Ok((StatusCode::NOT_FOUND, "No recent activities found").into_response());
    };

    let receipt = format_for_receipt(activity);
    Ok(Html(render_receipt(&receipt)).into_response())
}

/// Render the receipt as a minimal standalone HTML page.
fn render_receipt(receipt: &Receipt) -> String {
    let mut splits_rows = String::new();
    for split in &receipt.splits {
        splits_rows.push_str(&format!(
            "      <tr><td>km {}</td><td>{}</td></tr>\n",
            escape_html(&split.km),
            escape_html(&split.time),
        ));
    }

    let splits_section = if splits_rows.is_empty() {
        String::new()
    } else {
        format!(
            "    <table class=\"splits\">\n      <tr><th>Split</th><th>Time</th></tr>\n{}    </table>\n",
            splits_rows
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{name}</title>
  <style>
    body {{ font-family: monospace; max-width: 24rem; margin: 2rem auto; }}
    h1 {{ font-size: 1.2rem; border-bottom: 1px dashed #000; padding-bottom: 0.5rem; }}
    dl {{ display: grid; grid-template-columns: auto auto; gap: 0.25rem 1rem; }}
    dt {{ font-weight: bold; }}
    table.splits {{ width: 100%; border-top: 1px dashed #000; margin-top: 1rem; }}
    td, th {{ text-align: left; padding: 0.1rem 0; }}
  </style>
</head>
<body>
  <h1>{name}</h1>
  <p>{date} at {time}</p>
  <dl>
    <dt>Distance</dt><dd>{distance}</dd>
    <dt>Time</dt><dd>{moving_time}</dd>
    <dt>Avg pace</dt><dd>{avg_pace} /km</dd>
  </dl>
{splits}</body>
</html>
"#,
        name = escape_html(&receipt.name),
        date = escape_html(&receipt.date),
        time = escape_html(&receipt.time),
        distance = escape_html(&receipt.stats.distance),
        moving_time = escape_html(&receipt.stats.moving_time),
        avg_pace = escape_html(&receipt.stats.avg_pace),
        splits = splits_section,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReceiptSplit, ReceiptStats};

    fn receipt() -> Receipt {
        Receipt {
            date: "2026-07-14".to_string(),
            time: "06:32".to_string(),
            name: "Morning Run <with> & \"quotes\"".to_string(),
            stats: ReceiptStats {
                distance: "5.00 km".to_string(),
                moving_time: "25:00".to_string(),
                avg_pace: "5:00".to_string(),
            },
            splits: vec![ReceiptSplit {
                km: "01".to_string(),
                time: "5:01".to_string(),
            }],
        }
    }

    #[test]
    fn renders_stats_and_splits() {
        let html = render_receipt(&receipt());

        assert!(html.contains("2026-07-14 at 06:32"));
        assert!(html.contains("5.00 km"));
        assert!(html.contains("5:00 /km"));
        assert!(html.contains("km 01"));
    }

    #[test]
    fn escapes_activity_name() {
        let html = render_receipt(&receipt());

        assert!(html.contains("Morning Run &lt;with&gt; &amp; &quot;quotes&quot;"));
        assert!(!html.contains("<with>"));
    }

    #[test]
    fn omits_splits_table_when_empty() {
        let mut r = receipt();
        r.splits.clear();
        let html = render_receipt(&r);
        assert!(!html.contains("class=\"splits\""));
    }
}
