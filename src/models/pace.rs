// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training-zone paces.

use serde::Serialize;

/// Paces derived from a recent performance, in seconds per km.
///
/// Lower is faster. Values are kept unrounded; rounding happens only
/// when a pace is rendered with [`format_pace`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceSet {
    pub base_sec_per_km: f64,
    pub easy_sec_per_km: f64,
    pub long_run_sec_per_km: f64,
    pub interval_sec_per_km: f64,
    pub tempo_sec_per_km: f64,
}

impl PaceSet {
    pub fn easy(&self) -> String {
        format_pace(self.easy_sec_per_km)
    }

    pub fn long_run(&self) -> String {
        format_pace(self.long_run_sec_per_km)
    }

    pub fn interval(&self) -> String {
        format_pace(self.interval_sec_per_km)
    }

    pub fn tempo(&self) -> String {
        format_pace(self.tempo_sec_per_km)
    }
}

/// Render seconds-per-km as `m:ss`.
///
/// Zero, negative and non-finite input renders as `0:00`.
pub fn format_pace(sec_per_km: f64) -> String {
    if !sec_per_km.is_finite() || sec_per_km <= 0.0 {
        return "0:00".to_string();
    }
    // Round the total first so 359.6 becomes 6:00, not 5:60
    let total = sec_per_km.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Render seconds-per-km the way the dashboard shows it: `m'ss" /km`.
pub fn format_pace_label(sec_per_km: f64) -> String {
    let (min, sec) = format_pace(sec_per_km)
        .split_once(':')
        .map(|(m, s)| (m.to_string(), s.to_string()))
        .unwrap_or_else(|| ("0".to_string(), "00".to_string()));
    format!("{}'{}\" /km", min, sec)
}
