// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan routes.

use crate::error::{AppError, Result};
use crate::models::{CompletedWorkout, PlanStats, TrainingPlan, WeekPlan};
use crate::services::{
    calendar_entries, generate_plan, plan_start_date, CalendarEntry, PlanInput, PlanRequest,
};
use crate::time_utils::{parse_date, today_utc};
use crate::AppState;
use axum::{extract::rejection::JsonRejection, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Longest horizon the API plans for (two years).
const MAX_PLAN_WEEKS: i64 = 104;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/plans", post(create_plan))
        .route("/api/plans/calendar", post(plan_calendar))
        .route("/api/plans/stats", post(plan_stats))
}

/// Unwrap a JSON body, reporting malformed input as a bad request.
pub(crate) fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

// ─── Generation ──────────────────────────────────────────────

/// Generate a new training plan.
async fn create_plan(
    payload: std::result::Result<Json<PlanInput>, JsonRejection>,
) -> Result<(StatusCode, Json<TrainingPlan>)> {
    let input = json_body(payload)?;
    let race_date = parse_date(&input.race_date).ok_or_else(|| {
        AppError::BadRequest("Invalid 'raceDate' parameter: must be YYYY-MM-DD".to_string())
    })?;

    let today = today_utc();
    if race_date.signed_duration_since(today).num_days() > MAX_PLAN_WEEKS * 7 {
        return Err(AppError::BadRequest(format!(
            "Invalid 'raceDate' parameter: must be within {} weeks",
            MAX_PLAN_WEEKS
        )));
    }

    let request = PlanRequest::from_input(&input, race_date);
    let plan = generate_plan(&request, today).inspect_err(|e| {
        tracing::info!(race_date = %race_date, error = %e, "Plan request rejected");
    })?;

    tracing::info!(
        total_weeks = plan.total_weeks,
        start_date = %plan.start_date,
        "Training plan generated"
    );
    Ok((StatusCode::CREATED, Json(plan)))
}

// ─── Calendar ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalendarRequest {
    /// Plan creation or start date; week 1 begins on the Monday on or after it
    pub start_date: Option<String>,
    pub schedule: Vec<WeekPlan>,
}

/// Map a schedule onto calendar dates.
async fn plan_calendar(
    payload: std::result::Result<Json<CalendarRequest>, JsonRejection>,
) -> Result<Json<Vec<CalendarEntry>>> {
    let request = json_body(payload)?;
    let created = match request.start_date.as_deref() {
        Some(raw) => parse_date(raw).ok_or_else(|| {
            AppError::BadRequest("Invalid 'startDate' parameter: must be YYYY-MM-DD".to_string())
        })?,
        None => today_utc(),
    };

    let start = plan_start_date(created).ok_or_else(|| {
        AppError::BadRequest("Invalid 'startDate' parameter: out of range".to_string())
    })?;
    Ok(Json(calendar_entries(start, &request.schedule)?))
}

// ─── Progress ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsRequest {
    pub schedule: Vec<WeekPlan>,
    #[serde(default)]
    pub completed: Vec<CompletedWorkout>,
}

/// Progress statistics for a schedule and its completed workouts.
async fn plan_stats(
    payload: std::result::Result<Json<StatsRequest>, JsonRejection>,
) -> Result<Json<PlanStats>> {
    let request = json_body(payload)?;
    let completed: HashSet<CompletedWorkout> = request.completed.into_iter().collect();
    Ok(Json(PlanStats::compute(&request.schedule, &completed)))
}
