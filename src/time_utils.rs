// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

/// Split an ISO8601 local timestamp into `(date, HH:MM)` components.
///
/// Strava reports `start_date_local` as e.g. `2026-07-14T06:32:11Z`; the
/// date is everything before the `T`, the time is the first five
/// characters after it. A string without a `T` yields an empty time.
pub fn split_local_timestamp(start_date_local: &str) -> (&str, &str) {
    match start_date_local.split_once('T') {
        Some((date, rest)) => (date, rest.get(..5).unwrap_or(rest)),
        None => (start_date_local, ""),
    }
}
