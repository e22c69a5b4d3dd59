// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pace calculator route.

use crate::error::{AppError, Result};
use crate::models::format_pace_label;
use crate::routes::plans::json_body;
use crate::services::pace::{compute_base_pace, derive_zone_paces};
use crate::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/pace", post(calculate_pace))
}

/// A finished run: distance plus elapsed time split into fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PaceRequest {
    pub distance_km: f64,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PaceResponse {
    pub pace_sec_per_km: f64,
    /// `m'ss" /km`
    pub pace: String,
    /// Training zones derived from this run, each `m:ss`
    pub easy: String,
    pub long_run: String,
    pub interval: String,
    pub tempo: String,
}

/// Pace of a run and the training zones it implies.
async fn calculate_pace(
    payload: std::result::Result<Json<PaceRequest>, JsonRejection>,
) -> Result<Json<PaceResponse>> {
    let request = json_body(payload)?;
    if !request.distance_km.is_finite() || request.distance_km <= 0.0 {
        return Err(AppError::BadRequest(
            "Invalid 'distanceKm' parameter: must be positive".to_string(),
        ));
    }

    let total_seconds = f64::from(request.hours) * 3600.0
        + f64::from(request.minutes) * 60.0
        + f64::from(request.seconds);
    if total_seconds <= 0.0 {
        return Err(AppError::BadRequest(
            "Elapsed time must be greater than zero".to_string(),
        ));
    }

    let base = compute_base_pace(request.distance_km, total_seconds);
    let zones = derive_zone_paces(base);

    Ok(Json(PaceResponse {
        pace_sec_per_km: base,
        pace: format_pace_label(base),
        easy: zones.easy(),
        long_run: zones.long_run(),
        interval: zones.interval(),
        tempo: zones.tempo(),
    }))
}
