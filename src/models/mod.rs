// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod pace;
pub mod plan;
pub mod route;
pub mod stats;

pub use pace::{format_pace, format_pace_label, PaceSet};
pub use plan::{
    DayOfWeek, DistanceCategory, DistanceConfig, FitnessLevel, Phase, TrainingPlan, WeekPlan,
    Workout, WorkoutDistance, WorkoutType,
};
pub use route::RouteSummary;
pub use stats::{CompletedWorkout, PlanStats};
