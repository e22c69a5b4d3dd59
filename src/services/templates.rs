// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly workout templates per fitness level.
//!
//! Each level has a fixed Monday..Sunday pattern. Running days are sized
//! as a fraction of the week's long run. In taper weeks every quality
//! session (speed work or tempo) becomes an easy run of the same size.

use crate::models::{DayOfWeek, FitnessLevel, PaceSet, Phase, Workout, WorkoutDistance, WorkoutType};
use crate::services::periodization::speed_work_for_phase;

/// What a template puts on a given day.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Easy-pace run; `cue` prefixes the pace ("Easy pace @ ...")
    Easy { fraction: f64, cue: &'static str },
    /// The phase's speed-work session
    SpeedWork { fraction: f64 },
    /// A tempo session regardless of phase
    Tempo { fraction: f64 },
    Long { fraction: f64 },
    Strength { minutes: u32, cue: &'static str },
    Off { kind: WorkoutType, cue: &'static str },
}

const BEGINNER: [Slot; 7] = [
    Slot::Easy {
        fraction: 0.5,
        cue: "Easy pace",
    },
    Slot::Off {
        kind: WorkoutType::RestCrossTrain,
        cue: "Recovery or Light Activity",
    },
    Slot::SpeedWork { fraction: 0.4 },
    Slot::Strength {
        minutes: 30,
        cue: "Core & Mobility Work",
    },
    Slot::Long { fraction: 1.0 },
    Slot::Off {
        kind: WorkoutType::Rest,
        cue: "Complete Rest",
    },
    Slot::Off {
        kind: WorkoutType::RestCrossTrain,
        cue: "Recovery or Light Cycle/Walk",
    },
];

const INTERMEDIATE: [Slot; 7] = [
    Slot::Easy {
        fraction: 0.4,
        cue: "Easy pace",
    },
    Slot::SpeedWork { fraction: 0.4 },
    Slot::Strength {
        minutes: 45,
        cue: "Leg Day (Squats, Lunges, Calf Raises)",
    },
    Slot::Easy {
        fraction: 0.5,
        cue: "Easy pace",
    },
    Slot::Off {
        kind: WorkoutType::RestRecovery,
        cue: "Stretching or Light Mobility",
    },
    Slot::Long { fraction: 1.0 },
    Slot::Off {
        kind: WorkoutType::RestCrossTrain,
        cue: "Recovery or Light Cycle/Swim",
    },
];

const ADVANCED: [Slot; 7] = [
    Slot::Easy {
        fraction: 0.4,
        cue: "Easy pace",
    },
    Slot::SpeedWork { fraction: 0.5 },
    Slot::Easy {
        fraction: 0.4,
        cue: "Recovery run",
    },
    Slot::Tempo { fraction: 0.5 },
    Slot::Strength {
        minutes: 45,
        cue: "Strength & Mobility",
    },
    Slot::Long { fraction: 1.2 },
    Slot::Off {
        kind: WorkoutType::RestCrossTrain,
        cue: "Active Recovery",
    },
];

fn template(level: FitnessLevel) -> &'static [Slot; 7] {
    match level {
        FitnessLevel::Beginner => &BEGINNER,
        FitnessLevel::Intermediate => &INTERMEDIATE,
        FitnessLevel::Advanced => &ADVANCED,
    }
}

/// Whole kilometres for `fraction` of the long run.
fn km(long_run_km: f64, fraction: f64) -> WorkoutDistance {
    WorkoutDistance::Kilometers((long_run_km * fraction).round().max(0.0) as u32)
}

fn easy_run(day: DayOfWeek, distance: WorkoutDistance, cue: &str, paces: &PaceSet) -> Workout {
    Workout {
        day,
        workout_type: WorkoutType::EasyRun,
        distance,
        intensity: format!("{} @ {}/km", cue, paces.easy()),
    }
}

/// Intensity cue for a quality session: intervals run at interval pace,
/// everything else at tempo pace.
fn quality_cue(kind: WorkoutType, paces: &PaceSet) -> String {
    if kind.is_interval() {
        format!("400m repeats @ {}/km", paces.interval())
    } else {
        format!("Steady effort @ {}/km", paces.tempo())
    }
}

/// Build the seven workouts of one week.
pub fn build_week_workouts(
    level: FitnessLevel,
    phase: Phase,
    paces: &PaceSet,
    long_run_km: f64,
) -> Vec<Workout> {
    let taper = phase == Phase::Taper;

    DayOfWeek::ALL
        .iter()
        .zip(template(level))
        .map(|(&day, slot)| match *slot {
            Slot::Easy { fraction, cue } => easy_run(day, km(long_run_km, fraction), cue, paces),
            Slot::SpeedWork { fraction } | Slot::Tempo { fraction } if taper => {
                easy_run(day, km(long_run_km, fraction), "Easy pace", paces)
            }
            Slot::SpeedWork { fraction } => {
                let kind = speed_work_for_phase(phase);
                Workout {
                    day,
                    workout_type: kind,
                    distance: km(long_run_km, fraction),
                    intensity: quality_cue(kind, paces),
                }
            }
            Slot::Tempo { fraction } => Workout {
                day,
                workout_type: WorkoutType::TempoRun,
                distance: km(long_run_km, fraction),
                intensity: quality_cue(WorkoutType::TempoRun, paces),
            },
            Slot::Long { fraction } => Workout {
                day,
                workout_type: WorkoutType::LongRun,
                distance: km(long_run_km, fraction),
                intensity: format!("Conversational pace @ {}/km", paces.long_run()),
            },
            Slot::Strength { minutes, cue } => Workout {
                day,
                workout_type: WorkoutType::Strength,
                distance: WorkoutDistance::Minutes(minutes),
                intensity: cue.to_string(),
            },
            Slot::Off { kind, cue } => Workout {
                day,
                workout_type: kind,
                distance: WorkoutDistance::None,
                intensity: cue.to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pace::derive_zone_paces;

    fn paces() -> PaceSet {
        derive_zone_paces(360.0)
    }

    fn types(workouts: &[Workout]) -> Vec<WorkoutType> {
        workouts.iter().map(|w| w.workout_type).collect()
    }

    #[test]
    fn test_every_level_fills_the_week() {
        for level in [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ] {
            for phase in [Phase::Base, Phase::Peak, Phase::Taper] {
                let workouts = build_week_workouts(level, phase, &paces(), 10.0);
                let days: Vec<DayOfWeek> = workouts.iter().map(|w| w.day).collect();
                assert_eq!(days, DayOfWeek::ALL.to_vec());

                for workout in &workouts {
                    if workout.workout_type.is_rest() {
                        assert_eq!(workout.distance, WorkoutDistance::None);
                    }
                }
            }
        }
    }

    #[test]
    fn test_beginner_base_week() {
        let workouts = build_week_workouts(FitnessLevel::Beginner, Phase::Base, &paces(), 10.0);
        assert_eq!(
            types(&workouts),
            vec![
                WorkoutType::EasyRun,
                WorkoutType::RestCrossTrain,
                WorkoutType::Intervals,
                WorkoutType::Strength,
                WorkoutType::LongRun,
                WorkoutType::Rest,
                WorkoutType::RestCrossTrain,
            ]
        );
        assert_eq!(workouts[0].distance, WorkoutDistance::Kilometers(5));
        assert_eq!(workouts[0].intensity, "Easy pace @ 6:45/km");
        assert_eq!(workouts[2].distance, WorkoutDistance::Kilometers(4));
        assert_eq!(workouts[2].intensity, "400m repeats @ 5:30/km");
        assert_eq!(workouts[3].distance, WorkoutDistance::Minutes(30));
        assert_eq!(workouts[4].distance, WorkoutDistance::Kilometers(10));
        assert_eq!(workouts[4].intensity, "Conversational pace @ 7:15/km");
    }

    #[test]
    fn test_intermediate_peak_week() {
        let workouts =
            build_week_workouts(FitnessLevel::Intermediate, Phase::Peak, &paces(), 10.0);
        assert_eq!(workouts[1].workout_type, WorkoutType::TempoRun);
        assert_eq!(workouts[1].intensity, "Steady effort @ 5:45/km");
        assert_eq!(workouts[2].distance, WorkoutDistance::Minutes(45));
        assert_eq!(workouts[3].distance, WorkoutDistance::Kilometers(5));
        assert_eq!(workouts[4].workout_type, WorkoutType::RestRecovery);
        assert_eq!(workouts[5].workout_type, WorkoutType::LongRun);
        assert_eq!(workouts[5].distance, WorkoutDistance::Kilometers(10));
    }

    #[test]
    fn test_advanced_long_run_is_longer() {
        let workouts = build_week_workouts(FitnessLevel::Advanced, Phase::Peak, &paces(), 10.0);
        assert_eq!(workouts[5].workout_type, WorkoutType::LongRun);
        assert_eq!(workouts[5].distance, WorkoutDistance::Kilometers(12));
        assert_eq!(workouts[2].intensity, "Recovery run @ 6:45/km");
        assert_eq!(workouts[3].workout_type, WorkoutType::TempoRun);
        assert_eq!(workouts[3].intensity, "Steady effort @ 5:45/km");
    }

    #[test]
    fn test_taper_replaces_quality_sessions() {
        for level in [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ] {
            let workouts = build_week_workouts(level, Phase::Taper, &paces(), 7.0);
            assert!(workouts.iter().all(|w| !matches!(
                w.workout_type,
                WorkoutType::Intervals | WorkoutType::LightIntervals | WorkoutType::TempoRun
            )));
        }

        let advanced = build_week_workouts(FitnessLevel::Advanced, Phase::Taper, &paces(), 7.0);
        assert_eq!(advanced[1].workout_type, WorkoutType::EasyRun);
        assert_eq!(advanced[1].intensity, "Easy pace @ 6:45/km");
        assert_eq!(advanced[3].workout_type, WorkoutType::EasyRun);
        // 7.0 * 0.5 = 3.5 rounds up
        assert_eq!(advanced[3].distance, WorkoutDistance::Kilometers(4));
    }
}
