// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan model: race categories, weekly schedule and workouts.
//!
//! The JSON shape of [`TrainingPlan`] is what the dashboard and the
//! calendar export consume, so field names and labels are part of the
//! wire contract.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

// ─── Race Category ───────────────────────────────────────────

/// Target race distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DistanceCategory {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "half marathon")]
    HalfMarathon,
    #[serde(rename = "marathon")]
    Marathon,
}

/// Long-run progression bounds for a race category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceConfig {
    /// Minimum long run in week 1 (km)
    pub start_km: f64,
    /// Long run never grows beyond this (km)
    pub max_km: f64,
    /// Growth per non-taper week (km)
    pub weekly_increment_km: f64,
}

impl DistanceCategory {
    /// Match a user-supplied label. Unknown labels fall back to 5K.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "5k" => Self::FiveK,
            "10k" => Self::TenK,
            "half marathon" | "half-marathon" | "half_marathon" | "half" => Self::HalfMarathon,
            "marathon" => Self::Marathon,
            other => {
                tracing::warn!(category = other, "Unknown race distance, using 5k");
                Self::FiveK
            }
        }
    }

    pub fn config(self) -> DistanceConfig {
        match self {
            Self::FiveK => DistanceConfig {
                start_km: 3.0,
                max_km: 5.0,
                weekly_increment_km: 0.5,
            },
            Self::TenK => DistanceConfig {
                start_km: 4.0,
                max_km: 10.0,
                weekly_increment_km: 1.0,
            },
            Self::HalfMarathon => DistanceConfig {
                start_km: 8.0,
                max_km: 21.0,
                weekly_increment_km: 1.5,
            },
            Self::Marathon => DistanceConfig {
                start_km: 12.0,
                max_km: 42.0,
                weekly_increment_km: 2.0,
            },
        }
    }
}

// ─── Fitness Level ───────────────────────────────────────────

/// Runner's self-reported fitness level; selects the weekly template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// Missing or blank input means beginner. Any other unrecognized
    /// value selects the advanced template, which is the catch-all.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) else {
            return Self::Beginner;
        };
        match label.to_ascii_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            other => {
                tracing::warn!(level = other, "Unknown fitness level, using advanced");
                Self::Advanced
            }
        }
    }
}

// ─── Phase ───────────────────────────────────────────────────

/// Periodization phase of a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Phase {
    Base,
    Peak,
    Taper,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Base => write!(f, "Base"),
            Phase::Peak => write!(f, "Peak"),
            Phase::Taper => write!(f, "Taper"),
        }
    }
}

// ─── Day of Week ─────────────────────────────────────────────

/// Training day. Weeks always run Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Offset from Monday (0..=6).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

// ─── Workout ─────────────────────────────────────────────────

/// Kind of session scheduled for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutType {
    #[serde(rename = "Rest")]
    Rest,
    #[serde(rename = "Easy Run")]
    EasyRun,
    #[serde(rename = "Long Run")]
    LongRun,
    #[serde(rename = "Intervals")]
    Intervals,
    #[serde(rename = "Light Intervals")]
    LightIntervals,
    #[serde(rename = "Tempo Run")]
    TempoRun,
    #[serde(rename = "Rest / Strength")]
    Strength,
    #[serde(rename = "Rest / Recovery")]
    RestRecovery,
    #[serde(rename = "Rest / Cross Train")]
    RestCrossTrain,
}

impl WorkoutType {
    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Rest => "Rest",
            WorkoutType::EasyRun => "Easy Run",
            WorkoutType::LongRun => "Long Run",
            WorkoutType::Intervals => "Intervals",
            WorkoutType::LightIntervals => "Light Intervals",
            WorkoutType::TempoRun => "Tempo Run",
            WorkoutType::Strength => "Rest / Strength",
            WorkoutType::RestRecovery => "Rest / Recovery",
            WorkoutType::RestCrossTrain => "Rest / Cross Train",
        }
    }

    /// Rest days carry no distance.
    pub fn is_rest(self) -> bool {
        matches!(
            self,
            WorkoutType::Rest | WorkoutType::RestRecovery | WorkoutType::RestCrossTrain
        )
    }

    pub fn is_run(self) -> bool {
        matches!(
            self,
            WorkoutType::EasyRun
                | WorkoutType::LongRun
                | WorkoutType::Intervals
                | WorkoutType::LightIntervals
                | WorkoutType::TempoRun
        )
    }

    /// Interval sessions are paced off the interval zone, not tempo.
    pub fn is_interval(self) -> bool {
        matches!(self, WorkoutType::Intervals | WorkoutType::LightIntervals)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prescribed volume of a workout.
///
/// On the wire this is the legacy free-text label (`"5 km"`, `"45 mins"`,
/// `"-"`) that existing consumers parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutDistance {
    Kilometers(u32),
    Minutes(u32),
    None,
}

impl WorkoutDistance {
    pub fn kilometers(self) -> Option<u32> {
        match self {
            WorkoutDistance::Kilometers(km) => Some(km),
            _ => None,
        }
    }
}

impl fmt::Display for WorkoutDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutDistance::Kilometers(km) => write!(f, "{} km", km),
            WorkoutDistance::Minutes(mins) => write!(f, "{} mins", mins),
            WorkoutDistance::None => f.write_str("-"),
        }
    }
}

/// Error parsing a distance label.
#[derive(Debug, thiserror::Error)]
#[error("Invalid workout distance: {0}")]
pub struct InvalidDistance(String);

impl FromStr for WorkoutDistance {
    type Err = InvalidDistance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "-" {
            return Ok(WorkoutDistance::None);
        }

        let (amount, unit) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| InvalidDistance(s.to_string()))?;
        let amount: f64 = amount
            .parse()
            .map_err(|_| InvalidDistance(s.to_string()))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(InvalidDistance(s.to_string()));
        }
        let amount = amount.round() as u32;

        match unit.trim().to_ascii_lowercase().as_str() {
            "km" => Ok(WorkoutDistance::Kilometers(amount)),
            "min" | "mins" | "minutes" => Ok(WorkoutDistance::Minutes(amount)),
            _ => Err(InvalidDistance(s.to_string())),
        }
    }
}

impl Serialize for WorkoutDistance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkoutDistance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A single day's session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    pub day: DayOfWeek,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub distance: WorkoutDistance,
    /// Human-readable cue, usually embedding a pace ("Easy pace @ 6:45/km")
    pub intensity: String,
}

impl Workout {
    /// Target pace embedded in the intensity cue, in seconds per km.
    ///
    /// `None` unless the cue holds an `m:ss` pace with seconds below 60
    /// that fits in a `u32`.
    pub fn target_pace_sec(&self) -> Option<u32> {
        let (_, after) = self.intensity.split_once('@')?;
        let pace = after.trim().strip_suffix("/km")?;
        let (min, sec) = pace.split_once(':')?;
        let min: u32 = min.trim().parse().ok()?;
        let sec: u32 = sec.trim().parse().ok().filter(|s| *s < 60)?;
        min.checked_mul(60)?.checked_add(sec)
    }
}

// ─── Plan ────────────────────────────────────────────────────

/// One week of the schedule. `workouts` is always Monday..Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeekPlan {
    /// 1-based
    pub week_number: u32,
    pub phase: Phase,
    pub workouts: Vec<Workout>,
}

/// A generated training plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrainingPlan {
    pub target_race: DistanceCategory,
    pub level: FitnessLevel,
    pub race_date: NaiveDate,
    /// Monday of week 1
    pub start_date: NaiveDate,
    pub total_weeks: u32,
    pub schedule: Vec<WeekPlan>,
}
