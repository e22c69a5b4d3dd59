// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route decoding for activity map views.

use crate::models::route::{RouteBounds, RouteSummary};
use geo::{BoundingRect, LineString};

/// Decode a Google-encoded polyline (Strava format, precision 5).
pub fn decode_route(encoded: &str) -> Result<RouteSummary, RouteError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Ok(RouteSummary::empty());
    }

    let line = polyline::decode_polyline(encoded, 5)
        .map_err(|e| RouteError::Polyline(e.to_string()))?;
    Ok(summarize(&line))
}

/// Build a summary from a decoded line (x = longitude, y = latitude).
pub fn summarize(line: &LineString<f64>) -> RouteSummary {
    let points: Vec<[f64; 2]> = line.coords().map(|c| [c.y, c.x]).collect();
    let center = points.get(points.len() / 2).copied();
    let bounds = line.bounding_rect().map(|rect| RouteBounds {
        min_lat: rect.min().y,
        min_lng: rect.min().x,
        max_lat: rect.max().y,
        max_lng: rect.max().x,
    });

    tracing::debug!(points = points.len(), "Decoded route");
    RouteSummary {
        points,
        center,
        bounds,
    }
}

/// Errors from route decoding.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Failed to decode polyline: {0}")]
    Polyline(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference example from the polyline algorithm documentation
    const SAMPLE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[test]
    fn test_decode_sample_route() {
        let route = decode_route(SAMPLE).expect("sample should decode");
        assert_eq!(route.points.len(), 3);

        let expected = [[38.5, -120.2], [40.7, -120.95], [43.252, -126.453]];
        for (got, want) in route.points.iter().zip(expected.iter()) {
            assert!((got[0] - want[0]).abs() < 1e-6, "{:?} vs {:?}", got, want);
            assert!((got[1] - want[1]).abs() < 1e-6, "{:?} vs {:?}", got, want);
        }

        let center = route.center.unwrap();
        assert!((center[0] - 40.7).abs() < 1e-6);

        let bounds = route.bounds.unwrap();
        assert!((bounds.min_lat - 38.5).abs() < 1e-6);
        assert!((bounds.max_lat - 43.252).abs() < 1e-6);
        assert!((bounds.min_lng - -126.453).abs() < 1e-6);
        assert!((bounds.max_lng - -120.2).abs() < 1e-6);
    }

    #[test]
    fn test_empty_route() {
        let route = decode_route("  ").unwrap();
        assert!(route.points.is_empty());
        assert!(route.center.is_none());
        assert!(route.bounds.is_none());
    }

    #[test]
    fn test_invalid_polyline_error() {
        // Invalid polylines should return an error, not panic
        assert!(decode_route("invalid!!!").is_err());
    }
}
