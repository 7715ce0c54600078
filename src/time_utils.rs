// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for activity timestamps.
//!
//! Activity dates are wall-clock times with no timezone. Input carrying an
//! RFC 3339 offset is accepted, but only its local part is kept.

use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an activity timestamp without any timezone conversion.
pub fn parse_activity_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Format a timestamp the way it travels on the wire (fraction only if non-zero).
pub fn format_activity_date(date: NaiveDateTime) -> String {
    date.format(NAIVE_FORMAT).to_string()
}

/// Drop any fractional-second suffix (`2020-01-02T10:00:00.123` -> `2020-01-02T10:00:00`).
pub fn truncate_fractional_seconds(raw: &str) -> &str {
    raw.split('.').next().unwrap_or(raw)
}

/// Calendar-date portion of a timestamp, as given (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDateTime) -> String {
    date.date().format("%Y-%m-%d").to_string()
}
