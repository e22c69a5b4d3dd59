// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Periodization: plan length, phase per week and long-run progression.
//!
//! The long run is carried as an explicit accumulator folded over the
//! weeks. Non-taper weeks run the current distance and then grow it by
//! the category increment (capped at the category maximum). Taper weeks
//! run 70% of the current distance and leave it untouched.

use crate::models::{DistanceConfig, Phase, WorkoutType};
use chrono::NaiveDate;

/// Plans shorter than this cannot fit a base, peak and taper block.
pub const MIN_PLAN_WEEKS: u32 = 4;

/// Share of the prevailing long run that is run in a taper week.
pub const TAPER_FACTOR: f64 = 0.7;

/// Number of weeks at the end of every plan that taper.
const TAPER_WEEKS: u32 = 2;

/// Errors from plan generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("Please pick a race date at least 4 weeks from now.")]
    InsufficientLeadTime { weeks: u32 },
}

/// Whole weeks between today and the race, rounded up.
pub fn compute_total_weeks(today: NaiveDate, race_date: NaiveDate) -> Result<u32, PlanError> {
    let days = (race_date - today).num_days().unsigned_abs();
    let weeks = u32::try_from(days.div_ceil(7)).unwrap_or(u32::MAX);

    if weeks < MIN_PLAN_WEEKS {
        return Err(PlanError::InsufficientLeadTime { weeks });
    }
    Ok(weeks)
}

/// Phase of a 1-based week.
///
/// Base covers the first 30% (inclusive), Taper the final two weeks,
/// Peak everything between. Base is checked first.
pub fn phase_for_week(week_number: u32, total_weeks: u32) -> Phase {
    // week <= total * 0.3, in integers so the boundary is exact
    if u64::from(week_number) * 10 <= u64::from(total_weeks) * 3 {
        Phase::Base
    } else if week_number + TAPER_WEEKS > total_weeks {
        Phase::Taper
    } else {
        Phase::Peak
    }
}

/// Quality session type for a phase.
pub fn speed_work_for_phase(phase: Phase) -> WorkoutType {
    match phase {
        Phase::Base => WorkoutType::Intervals,
        Phase::Taper => WorkoutType::LightIntervals,
        Phase::Peak => WorkoutType::TempoRun,
    }
}

/// Phase and effective long run of one week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekProgression {
    pub week_number: u32,
    pub phase: Phase,
    /// Long run for this week, after any taper reduction (km)
    pub long_run_km: f64,
}

/// Progression state carried from week to week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongRunState {
    pub distance_km: f64,
}

impl LongRunState {
    /// Start from the runner's current distance, but never below the
    /// category start or above its maximum.
    pub fn initial(config: &DistanceConfig, current_distance_km: Option<f64>) -> Self {
        let current = current_distance_km.unwrap_or(config.start_km);
        Self {
            distance_km: current.max(config.start_km).min(config.max_km),
        }
    }

    /// Emit the long run for a week in `phase` and advance the state.
    pub fn step(&mut self, phase: Phase, config: &DistanceConfig) -> f64 {
        if phase == Phase::Taper {
            return self.distance_km * TAPER_FACTOR;
        }
        let this_week = self.distance_km;
        self.distance_km = (self.distance_km + config.weekly_increment_km).min(config.max_km);
        this_week
    }
}

/// Phase and long run for every week of a plan.
pub fn progression(
    total_weeks: u32,
    config: &DistanceConfig,
    current_distance_km: Option<f64>,
) -> Vec<WeekProgression> {
    (1..=total_weeks)
        .scan(
            LongRunState::initial(config, current_distance_km),
            |state, week_number| {
                let phase = phase_for_week(week_number, total_weeks);
                let long_run_km = state.step(phase, config);
                tracing::debug!(week_number, %phase, long_run_km, "Planned week");
                Some(WeekProgression {
                    week_number,
                    phase,
                    long_run_km,
                })
            },
        )
        .collect()
}
