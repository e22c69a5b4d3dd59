// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pace model: baseline pace from a recent run and the derived zones.

use crate::models::PaceSet;

/// Used when the recent time is missing or unparseable (6:00/km).
pub const FALLBACK_BASE_PACE_SEC_PER_KM: f64 = 360.0;

/// Distance assumed for the pace calculation when none was given.
pub const DEFAULT_CURRENT_DISTANCE_KM: f64 = 5.0;

/// Recent time assumed when none was given ("00:30:00").
pub const DEFAULT_RECENT_TIME_SECONDS: f64 = 1800.0;

// Zone offsets from the base pace, seconds per km. Positive is slower.
const EASY_OFFSET_SEC: f64 = 45.0;
const LONG_RUN_OFFSET_SEC: f64 = 75.0;
const INTERVAL_OFFSET_SEC: f64 = -30.0;
const TEMPO_OFFSET_SEC: f64 = -15.0;

/// Baseline pace in seconds per km.
///
/// `current_distance_km` must be positive; callers substitute
/// [`DEFAULT_CURRENT_DISTANCE_KM`] otherwise.
pub fn compute_base_pace(current_distance_km: f64, recent_time_seconds: f64) -> f64 {
    if recent_time_seconds.is_nan() || recent_time_seconds <= 0.0 {
        tracing::debug!(
            recent_time_seconds,
            "No usable recent time, using fallback base pace"
        );
        return FALLBACK_BASE_PACE_SEC_PER_KM;
    }
    recent_time_seconds / current_distance_km
}

/// Apply the fixed zone offsets to a base pace.
pub fn derive_zone_paces(base_sec_per_km: f64) -> PaceSet {
    PaceSet {
        base_sec_per_km,
        easy_sec_per_km: base_sec_per_km + EASY_OFFSET_SEC,
        long_run_sec_per_km: base_sec_per_km + LONG_RUN_OFFSET_SEC,
        interval_sec_per_km: base_sec_per_km + INTERVAL_OFFSET_SEC,
        tempo_sec_per_km: base_sec_per_km + TEMPO_OFFSET_SEC,
    }
}

/// Parse `hh:mm:ss` or `mm:ss` into seconds.
///
/// Anything else, including non-numeric parts, yields 0 so the caller
/// falls back to the default pace.
pub fn parse_duration(raw: &str) -> f64 {
    let parts: Option<Vec<f64>> = raw
        .trim()
        .split(':')
        .map(|p| p.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect();

    match parts.as_deref() {
        Some([h, m, s]) => h * 3600.0 + m * 60.0 + s,
        Some([m, s]) => m * 60.0 + s,
        _ => 0.0,
    }
}
