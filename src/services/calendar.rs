// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar dates for plan workouts.
//!
//! Week 1 starts on the Monday on or after the day the plan was created.
//! Each workout maps to one all-day entry on
//! `start + (week - 1) * 7 + day offset`. Date arithmetic is checked
//! since week numbers come from client-supplied schedules.

use crate::models::{DayOfWeek, WeekPlan, Workout, WorkoutDistance, WorkoutType};
use crate::time_utils::format_date;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Last line of every entry description.
const DESCRIPTION_TRAILER: &str = "Generated by Meterun Training App";

/// Errors from mapping a schedule onto the calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Week {week_number} falls outside the supported calendar range")]
    DateOutOfRange { week_number: u32 },
}

/// First Monday on or after `created`, or `None` past the last
/// representable date.
pub fn plan_start_date(created: NaiveDate) -> Option<NaiveDate> {
    let days_until_monday = (7 - created.weekday().num_days_from_monday()) % 7;
    created.checked_add_days(Days::new(u64::from(days_until_monday)))
}

/// Calendar date of a workout, or `None` when it overflows.
pub fn workout_date(start: NaiveDate, week_number: u32, day: DayOfWeek) -> Option<NaiveDate> {
    let offset = u64::from(week_number.saturating_sub(1)) * 7 + day.index() as u64;
    start.checked_add_days(Days::new(offset))
}

/// An all-day calendar entry for one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalendarEntry {
    /// YYYY-MM-DD
    pub date: String,
    pub week_number: u32,
    pub day_index: usize,
    pub summary: String,
    pub description: String,
    pub color_id: String,
}

/// Calendar color per workout type.
fn color_id(kind: WorkoutType) -> &'static str {
    match kind {
        WorkoutType::Rest | WorkoutType::RestRecovery | WorkoutType::RestCrossTrain => "8",
        WorkoutType::EasyRun => "2",
        WorkoutType::LongRun => "11",
        WorkoutType::Intervals => "6",
        WorkoutType::LightIntervals => "7",
        WorkoutType::TempoRun => "5",
        // Calendar default
        WorkoutType::Strength => "1",
    }
}

/// Days of complete rest with nothing scheduled get no entry.
fn is_skipped(workout: &Workout) -> bool {
    workout.workout_type == WorkoutType::Rest && workout.distance == WorkoutDistance::None
}

fn entry(
    start: NaiveDate,
    week: &WeekPlan,
    day_index: usize,
    workout: &Workout,
) -> Result<CalendarEntry, CalendarError> {
    let date = workout_date(start, week.week_number, workout.day).ok_or(
        CalendarError::DateOutOfRange {
            week_number: week.week_number,
        },
    )?;

    // Any "Rest ..." label, including strength days, reads as a rest day
    let summary = if workout.workout_type.label().contains("Rest") {
        "🏃 Rest Day".to_string()
    } else {
        format!("🏃 {}", workout.workout_type)
    };

    let description = [
        format!("📅 Week {} - {} Phase", week.week_number, week.phase),
        String::new(),
        format!("📏 Distance: {}", workout.distance),
        format!("💪 Intensity: {}", workout.intensity),
        String::new(),
        DESCRIPTION_TRAILER.to_string(),
    ]
    .join("\n");

    Ok(CalendarEntry {
        date: format_date(date),
        week_number: week.week_number,
        day_index,
        summary,
        description,
        color_id: color_id(workout.workout_type).to_string(),
    })
}

/// Calendar entries for a schedule, skipping days of complete rest.
pub fn calendar_entries(
    start: NaiveDate,
    schedule: &[WeekPlan],
) -> Result<Vec<CalendarEntry>, CalendarError> {
    let entries = schedule
        .iter()
        .flat_map(|week| {
            week.workouts
                .iter()
                .enumerate()
                .filter(|(_, w)| !is_skipped(w))
                .map(move |(i, w)| entry(start, week, i, w))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        weeks = schedule.len(),
        entries = entries.len(),
        "Built calendar entries"
    );
    Ok(entries)
}
