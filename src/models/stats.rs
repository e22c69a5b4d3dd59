// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress statistics for a training plan.
//!
//! Completion is tracked outside the plan, keyed by the workout's
//! position: `(week_number, day_index)`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{WeekPlan, Workout, WorkoutDistance};
use crate::models::pace::format_pace_label;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Pace assumed for km workouts without a pace cue (6:00/km).
const DEFAULT_PACE_SEC_PER_KM: f64 = 360.0;

/// Position of a completed workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CompletedWorkout {
    pub week_number: u32,
    pub day_index: usize,
}

/// Dashboard statistics for a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanStats {
    // ─── Position ────────────────────────────────────────────────
    /// First week with an incomplete workout (last week once all done)
    pub current_week: u32,
    /// Running workouts planned in the current week
    pub runs_this_week: u32,
    pub completed_runs_this_week: u32,
    pub completed_runs_total: u32,

    // ─── Volume ──────────────────────────────────────────────────
    /// Completed kilometres, rounded to 0.1
    pub total_distance_km: f64,
    /// Completed training time, e.g. "3h 25m"
    pub active_hours: String,
    /// Average pace of completed runs, e.g. `5'42" /km`
    pub avg_pace: String,
}

/// Estimated duration of a workout in seconds.
fn duration_sec(workout: &Workout) -> f64 {
    match workout.distance {
        WorkoutDistance::Kilometers(km) => {
            let pace = workout
                .target_pace_sec()
                .map(f64::from)
                .unwrap_or(DEFAULT_PACE_SEC_PER_KM);
            f64::from(km) * pace
        }
        WorkoutDistance::Minutes(mins) => f64::from(mins) * 60.0,
        WorkoutDistance::None => 0.0,
    }
}

fn format_active_time(total_sec: f64) -> String {
    let minutes = (total_sec / 60.0).round() as u64;
    format!("{}h {}m", minutes / 60, minutes % 60)
}

impl PlanStats {
    /// Compute statistics for `schedule` given the completed positions.
    pub fn compute(schedule: &[WeekPlan], completed: &HashSet<CompletedWorkout>) -> Self {
        let is_done = |week: &WeekPlan, day_index: usize| {
            completed.contains(&CompletedWorkout {
                week_number: week.week_number,
                day_index,
            })
        };

        let current_week = schedule
            .iter()
            .find(|week| (0..week.workouts.len()).any(|i| !is_done(*week, i)))
            .or(schedule.last())
            .map(|week| week.week_number)
            .unwrap_or(1);

        let mut stats = PlanStats {
            current_week,
            runs_this_week: 0,
            completed_runs_this_week: 0,
            completed_runs_total: 0,
            total_distance_km: 0.0,
            active_hours: String::new(),
            avg_pace: String::new(),
        };

        let mut active_sec = 0.0;
        let mut run_sec = 0.0;
        let mut run_km = 0.0;

        for week in schedule {
            let in_current_week = week.week_number == current_week;

            for (day_index, workout) in week.workouts.iter().enumerate() {
                let is_run = workout.workout_type.is_run();
                if in_current_week && is_run {
                    stats.runs_this_week += 1;
                }

                if !is_done(week, day_index) {
                    continue;
                }

                let duration = duration_sec(workout);
                active_sec += duration;

                if let Some(km) = workout.distance.kilometers() {
                    stats.total_distance_km += f64::from(km);
                    if is_run {
                        run_km += f64::from(km);
                        run_sec += duration;
                    }
                }

                if is_run {
                    stats.completed_runs_total += 1;
                    if in_current_week {
                        stats.completed_runs_this_week += 1;
                    }
                }
            }
        }

        stats.total_distance_km = (stats.total_distance_km * 10.0).round() / 10.0;
        stats.active_hours = format_active_time(active_sec);
        stats.avg_pace = if run_km > 0.0 {
            format_pace_label(run_sec / run_km)
        } else {
            format_pace_label(0.0)
        };

        stats
    }
}
