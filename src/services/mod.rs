// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - plan generation and the helpers that consume plans.

pub mod calendar;
pub mod pace;
pub mod periodization;
pub mod planner;
pub mod route;
pub mod templates;

pub use calendar::{calendar_entries, plan_start_date, CalendarEntry, CalendarError};
pub use periodization::PlanError;
pub use planner::{generate_plan, PlanInput, PlanRequest};
pub use route::{decode_route, RouteError};
