// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meterun: periodized running plans toward a race goal.
//!
//! The core is a pure plan generator (`services::planner`). The HTTP
//! routes are a thin, stateless JSON surface over it and over the
//! helpers that consume plans (calendar dates, progress stats, route
//! decoding).

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
