// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP tests for plan generation, calendar export and progress stats.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("Cache-Control").unwrap(), "no-store");
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_plan() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::post_json(
            "/api/plans",
            &json!({
                "distance": "10k",
                "raceDate": common::date_in(70),
                "level": "intermediate",
                "currentDistance": 5,
                "recentTime": "00:27:30",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let plan = common::body_json(response).await;
    assert_eq!(plan["totalWeeks"], 10);
    assert_eq!(plan["targetRace"], "10k");

    let schedule = plan["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 10);
    for week in schedule {
        assert_eq!(week["workouts"].as_array().unwrap().len(), 7);
    }
    assert_eq!(schedule[9]["phase"], "Taper");

    // 1650 s / 5 km = 330 s/km => easy 6:15
    assert_eq!(
        schedule[0]["workouts"][0]["intensity"],
        "Easy pace @ 6:15/km"
    );
}

#[tokio::test]
async fn test_create_plan_defaults() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::post_json(
            "/api/plans",
            &json!({ "distance": "5k", "raceDate": common::date_in(35) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let plan = common::body_json(response).await;
    assert_eq!(plan["level"], "beginner");
    // Default recent run: 30:00 over 5 km = 6:00/km => long run 7:15
    assert_eq!(
        plan["schedule"][0]["workouts"][4]["intensity"],
        "Conversational pace @ 7:15/km"
    );
}

#[tokio::test]
async fn test_create_plan_too_soon() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::post_json(
            "/api/plans",
            &json!({ "distance": "5k", "raceDate": common::date_in(20) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "invalid_schedule");
    assert_eq!(
        body["details"],
        "Please pick a race date at least 4 weeks from now."
    );
}

#[tokio::test]
async fn test_calendar_entries() {
    let (app, _state) = common::create_test_app();

    let schedule = json!([{
        "weekNumber": 1,
        "phase": "Base",
        "workouts": [
            { "day": "Monday", "type": "Easy Run", "distance": "2 km", "intensity": "Easy pace @ 6:45/km" },
            { "day": "Tuesday", "type": "Rest / Cross Train", "distance": "-", "intensity": "Recovery or Light Activity" },
            { "day": "Wednesday", "type": "Intervals", "distance": "1 km", "intensity": "400m repeats @ 5:30/km" },
            { "day": "Thursday", "type": "Rest / Strength", "distance": "30 mins", "intensity": "Core & Mobility Work" },
            { "day": "Friday", "type": "Long Run", "distance": "3 km", "intensity": "Conversational pace @ 7:15/km" },
            { "day": "Saturday", "type": "Rest", "distance": "-", "intensity": "Complete Rest" },
            { "day": "Sunday", "type": "Rest / Cross Train", "distance": "-", "intensity": "Recovery or Light Cycle/Walk" }
        ]
    }]);

    // 2026-03-04 is a Wednesday; week 1 starts Monday 2026-03-09
    let response = app
        .oneshot(common::post_json(
            "/api/plans/calendar",
            &json!({ "startDate": "2026-03-04", "schedule": schedule }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let entries = common::body_json(response).await;
    let entries = entries.as_array().unwrap();

    // Saturday's complete rest is skipped
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["date"], "2026-03-09");
    assert_eq!(entries[0]["summary"], "🏃 Easy Run");
    // Strength days read as rest days in the default color
    assert_eq!(entries[3]["summary"], "🏃 Rest Day");
    assert_eq!(entries[3]["colorId"], "1");
    assert_eq!(entries[4]["date"], "2026-03-13");
    assert_eq!(entries[4]["colorId"], "11");
    assert_eq!(entries[5]["date"], "2026-03-15");
    assert_eq!(entries[5]["dayIndex"], 6);
}

#[tokio::test]
async fn test_plan_stats() {
    let (app, _state) = common::create_test_app();

    let schedule = json!([
        {
            "weekNumber": 1,
            "phase": "Base",
            "workouts": [
                { "day": "Monday", "type": "Easy Run", "distance": "4 km", "intensity": "Easy pace @ 6:00/km" },
                { "day": "Tuesday", "type": "Rest", "distance": "-", "intensity": "Complete Rest" }
            ]
        },
        {
            "weekNumber": 2,
            "phase": "Peak",
            "workouts": [
                { "day": "Monday", "type": "Tempo Run", "distance": "5 km", "intensity": "Steady effort @ 5:00/km" },
                { "day": "Tuesday", "type": "Rest", "distance": "-", "intensity": "Complete Rest" }
            ]
        }
    ]);

    let response = app
        .oneshot(common::post_json(
            "/api/plans/stats",
            &json!({
                "schedule": schedule,
                "completed": [
                    { "weekNumber": 1, "dayIndex": 0 },
                    { "weekNumber": 1, "dayIndex": 1 }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let stats = common::body_json(response).await;
    assert_eq!(stats["currentWeek"], 2);
    assert_eq!(stats["runsThisWeek"], 1);
    assert_eq!(stats["completedRunsTotal"], 1);
    assert_eq!(stats["totalDistanceKm"], 4.0);
    assert_eq!(stats["activeHours"], "0h 24m");
    assert_eq!(stats["avgPace"], "6'00\" /km");
}
