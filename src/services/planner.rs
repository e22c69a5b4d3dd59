// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan generation.
//!
//! Generation is a pure function of the request and the generation date:
//! 1. Check lead time and count weeks
//! 2. Derive zone paces from the recent performance
//! 3. Fold the long-run progression over the weeks
//! 4. Expand each week through the level's template
//!
//! Everything except the lead time is normalized rather than rejected.

use crate::models::{DistanceCategory, FitnessLevel, TrainingPlan, WeekPlan};
use crate::services::calendar::plan_start_date;
use crate::services::pace::{
    compute_base_pace, derive_zone_paces, parse_duration, DEFAULT_CURRENT_DISTANCE_KM,
    DEFAULT_RECENT_TIME_SECONDS,
};
use crate::services::periodization::{compute_total_weeks, progression, PlanError};
use crate::services::templates::build_week_workouts;
use chrono::NaiveDate;
use serde::Deserialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Plan request as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanInput {
    /// "5k", "10k", "half marathon" or "marathon"
    pub distance: String,
    /// ISO 8601 date
    pub race_date: String,
    #[serde(default)]
    pub level: Option<String>,
    /// Distance of the recent run, km
    #[serde(default)]
    pub current_distance: Option<f64>,
    /// Time of the recent run, "hh:mm:ss" or "mm:ss"
    #[serde(default)]
    pub recent_time: Option<String>,
}

/// Normalized plan request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub category: DistanceCategory,
    pub race_date: NaiveDate,
    pub level: FitnessLevel,
    /// Positive distance of the recent run, if one was given
    pub current_distance_km: Option<f64>,
    pub recent_time_seconds: f64,
}

impl PlanRequest {
    /// Normalize raw input whose race date has already been parsed.
    pub fn from_input(input: &PlanInput, race_date: NaiveDate) -> Self {
        let current_distance_km = input
            .current_distance
            .filter(|km| km.is_finite() && *km > 0.0);

        let recent_time_seconds = input
            .recent_time
            .as_deref()
            .map(parse_duration)
            .unwrap_or(DEFAULT_RECENT_TIME_SECONDS);

        Self {
            category: DistanceCategory::from_label(&input.distance),
            race_date,
            level: FitnessLevel::from_label(input.level.as_deref()),
            current_distance_km,
            recent_time_seconds,
        }
    }
}

/// Generate a plan for a race on `request.race_date`, as seen from `today`.
pub fn generate_plan(request: &PlanRequest, today: NaiveDate) -> Result<TrainingPlan, PlanError> {
    if request.race_date < today {
        return Err(PlanError::InsufficientLeadTime { weeks: 0 });
    }
    let total_weeks = compute_total_weeks(today, request.race_date)?;

    let base_pace = compute_base_pace(
        request
            .current_distance_km
            .unwrap_or(DEFAULT_CURRENT_DISTANCE_KM),
        request.recent_time_seconds,
    );
    let paces = derive_zone_paces(base_pace);
    let config = request.category.config();

    tracing::info!(
        category = ?request.category,
        level = ?request.level,
        total_weeks,
        base_pace,
        "Generating training plan"
    );

    let schedule = progression(total_weeks, &config, request.current_distance_km)
        .into_iter()
        .map(|week| WeekPlan {
            week_number: week.week_number,
            phase: week.phase,
            workouts: build_week_workouts(request.level, week.phase, &paces, week.long_run_km),
        })
        .collect();

    // The race lies weeks after today, so the next Monday always exists
    let start_date = plan_start_date(today).unwrap_or(request.race_date);

    Ok(TrainingPlan {
        target_race: request.category,
        level: request.level,
        race_date: request.race_date,
        start_date,
        total_weeks,
        schedule,
    })
}
