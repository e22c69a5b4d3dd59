// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Decoded GPS route for map display.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RouteBounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

/// A route ready for a map view. Points are `[lat, lng]` pairs, the
/// order map widgets expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RouteSummary {
    pub points: Vec<[f64; 2]>,
    /// Middle point of the route, used to center the map
    pub center: Option<[f64; 2]>,
    pub bounds: Option<RouteBounds>,
}

impl RouteSummary {
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            center: None,
            bounds: None,
        }
    }
}
