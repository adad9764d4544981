//! Integration tests for the Meeting Cost Engine HTTP API.
//!
//! This test suite drives the router end to end:
//! - Cost estimates and meeting creation
//! - Finalizing meetings into scored reports, with and without agendas
//! - Partial updates and listing order
//! - Dashboard statistics and savings
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use meeting_cost_engine::api::{AppState, create_router};
use meeting_cost_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal serialized as a JSON string.
fn decimal_field(value: &Value) -> Decimal {
    decimal(value.as_str().expect("decimal fields serialize as strings"))
}

async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, Value) {
    send(create_router(state.clone()), "GET", uri, None).await
}

async fn post(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    send(create_router(state.clone()), "POST", uri, Some(body)).await
}

async fn patch(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    send(create_router(state.clone()), "PATCH", uri, Some(body)).await
}

fn attendees(roles: &[&str]) -> Value {
    Value::Array(
        roles
            .iter()
            .enumerate()
            .map(|(i, role)| {
                json!({
                    "id": format!("att_{}", i),
                    "name": format!("Person {}", i),
                    "role": role
                })
            })
            .collect(),
    )
}

async fn create_meeting(state: &AppState, body: Value) -> Value {
    let (status, meeting) = post(state, "/meetings", body).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", meeting);
    meeting
}

async fn finalize(state: &AppState, meeting_id: &str, body: Value) -> (StatusCode, Value) {
    post(state, &format!("/meetings/{}/report", meeting_id), body).await
}

/// 30 scheduled minutes, no agenda, ten Mid attendees.
fn overlong_meeting_body() -> Value {
    json!({
        "title": "All hands prep",
        "scheduled_duration_minutes": 30,
        "has_agenda": false,
        "attendees": attendees(&["Mid"; 10]),
        "started_at": "2025-03-10T09:00:00Z"
    })
}

/// 30 scheduled minutes, no agenda flag, a Senior and a Junior.
fn pair_meeting_body() -> Value {
    json!({
        "title": "Budget pairing",
        "scheduled_duration_minutes": 30,
        "has_agenda": false,
        "attendees": attendees(&["Senior", "Junior"]),
        "started_at": "2025-03-11T14:00:00Z"
    })
}

fn pair_meeting_finalize_body() -> Value {
    json!({
        "elapsed_seconds": 1500,
        "ended_at": "2025-03-11T14:25:00Z",
        "agenda": [
            { "id": "i1", "title": "Budget", "minutes": 10 },
            { "id": "i2", "title": "Intro", "minutes": 5 }
        ],
        "records": {
            "i1": { "checked": true, "skipped": true, "actual_seconds": 0 },
            "i2": { "checked": true, "skipped": false, "actual_seconds": 300 }
        }
    })
}

// =============================================================================
// Estimates
// =============================================================================

#[tokio::test]
async fn test_estimate_mixed_team() {
    let body = json!({
        "scheduled_duration_minutes": 30,
        "attendees": attendees(&["Junior", "Mid", "Senior", "Manager"])
    });

    let (status, estimate) = post(&create_test_state(), "/estimate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(estimate["attendee_count"], 4);
    // (45 + 65 + 85 + 110) / 2
    assert_eq!(decimal_field(&estimate["estimated_cost"]), decimal("152.50"));
}

#[tokio::test]
async fn test_estimate_role_lookup_is_case_insensitive() {
    let body = json!({
        "scheduled_duration_minutes": 60,
        "attendees": attendees(&["manager"])
    });

    let (status, estimate) = post(&create_test_state(), "/estimate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&estimate["estimated_cost"]), decimal("110.00"));
}

// =============================================================================
// Meeting lifecycle
// =============================================================================

#[tokio::test]
async fn test_create_meeting_records_estimate() {
    let state = create_test_state();
    let meeting = create_meeting(&state, overlong_meeting_body()).await;

    assert_eq!(meeting["title"], "All hands prep");
    assert_eq!(meeting["attendee_count"], 10);
    // 10 × 65 / 2
    assert_eq!(decimal_field(&meeting["total_cost"]), decimal("325.00"));
    assert!(meeting["actual_duration_minutes"].is_null());
    assert!(meeting["efficiency_grade"].is_null());
}

#[tokio::test]
async fn test_overlong_meeting_scores_c() {
    let state = create_test_state();
    let meeting = create_meeting(&state, overlong_meeting_body()).await;
    let id = meeting["id"].as_str().unwrap();

    let (status, report) = finalize(&state, id, json!({ "elapsed_seconds": 2700 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["base"]["score"], 60);
    assert_eq!(report["final_score"], 60);
    assert_eq!(report["final_grade"], "C");
    assert_eq!(report["final_grade_description"], "Could've Been Napping");

    let labels: Vec<&str> = report["final_breakdown"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["Started on time", "Ran over time", "No agenda", "Too many attendees"]
    );
    assert_eq!(report["final_breakdown"][1]["points"], -5);
    assert_eq!(report["final_breakdown"][2]["points"], -15);
    assert_eq!(report["final_breakdown"][3]["points"], -20);

    // 2700 s at 650 per hour
    assert_eq!(decimal_field(&report["total_cost"]), decimal("487.50"));

    let (status, stored) = get(&state, &format!("/meetings/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["actual_duration_minutes"], 45);
    assert_eq!(stored["efficiency_score"], 60);
    assert_eq!(stored["efficiency_grade"], "C");
}

#[tokio::test]
async fn test_skipped_agenda_item_costs_five_points() {
    let state = create_test_state();
    let meeting = create_meeting(&state, pair_meeting_body()).await;
    let id = meeting["id"].as_str().unwrap();

    let (status, report) = finalize(&state, id, pair_meeting_finalize_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["base"]["score"], 85);
    assert_eq!(report["final_score"], 80);
    assert_eq!(report["final_grade"], "B+");

    let base_len = report["base"]["breakdown"].as_array().unwrap().len();
    let final_breakdown = report["final_breakdown"].as_array().unwrap();
    assert_eq!(final_breakdown.len(), base_len + 1);
    assert_eq!(final_breakdown[base_len]["label"], "Agenda: Budget");
    assert_eq!(final_breakdown[base_len]["points"], -5);

    assert_eq!(report["agenda_report"][0]["skipped"], true);
    assert_eq!(decimal_field(&report["agenda_report"][1]["ratio"]), Decimal::ONE);
}

#[tokio::test]
async fn test_runaway_agenda_times_grade_f() {
    let state = create_test_state();
    let meeting = create_meeting(&state, pair_meeting_body()).await;
    let id = meeting["id"].as_str().unwrap();

    let body = json!({
        "elapsed_seconds": 1500,
        "agenda": [
            { "id": "i1", "title": "Budget", "minutes": 1 },
            { "id": "i2", "title": "Intro", "minutes": 1 }
        ],
        "records": {
            "i1": { "checked": true, "skipped": false, "actual_seconds": u64::MAX },
            "i2": { "checked": true, "skipped": false, "actual_seconds": 10_000_000_000u64 }
        }
    });
    let (status, report) = finalize(&state, id, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["final_score"], i32::MIN);
    assert_eq!(report["final_grade"], "F");
    assert_eq!(report["agenda_adjustments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_report_is_stored_after_finalize() {
    let state = create_test_state();
    let meeting = create_meeting(&state, pair_meeting_body()).await;
    let id = meeting["id"].as_str().unwrap();
    let uri = format!("/meetings/{}/report", id);

    let (status, error) = get(&state, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "REPORT_NOT_FOUND");

    let (_, finalized) = finalize(&state, id, pair_meeting_finalize_body()).await;
    let (status, stored) = get(&state, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored, finalized);
    assert_eq!(stored["version"], 1);
}

#[tokio::test]
async fn test_meetings_listed_newest_first() {
    let state = create_test_state();
    create_meeting(&state, overlong_meeting_body()).await;
    create_meeting(&state, pair_meeting_body()).await;

    let (status, meetings) = get(&state, "/meetings").await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = meetings
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Budget pairing", "All hands prep"]);
}

#[tokio::test]
async fn test_patch_updates_present_fields() {
    let state = create_test_state();
    let meeting = create_meeting(&state, pair_meeting_body()).await;
    let uri = format!("/meetings/{}", meeting["id"].as_str().unwrap());

    let body = json!({ "title": "Budget review", "has_agenda": true });
    let (status, updated) = patch(&state, &uri, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Budget review");
    assert_eq!(updated["has_agenda"], true);
    assert_eq!(updated["scheduled_duration_minutes"], 30);
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_without_meetings() {
    let (status, stats) = get(&create_test_state(), "/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["meeting_count"], 0);
    assert!(stats["average_score"].is_null());
    assert_eq!(stats["average_grade"], "F");
    assert_eq!(decimal_field(&stats["total_cost"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_dashboard_aggregates_reports() {
    let state = create_test_state();

    let overlong = create_meeting(&state, overlong_meeting_body()).await;
    let overlong_id = overlong["id"].as_str().unwrap();
    finalize(&state, overlong_id, json!({ "elapsed_seconds": 2700 })).await;

    let pair = create_meeting(&state, pair_meeting_body()).await;
    finalize(&state, pair["id"].as_str().unwrap(), pair_meeting_finalize_body()).await;

    // A meeting that was never finalized does not count.
    create_meeting(&state, pair_meeting_body()).await;

    let (status, stats) = get(&state, "/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["meeting_count"], 2);
    // 487.50 + 54.17
    assert_eq!(decimal_field(&stats["total_cost"]), decimal("541.67"));
    // 70 minutes
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("1.2"));
    assert_eq!(stats["average_score"], 70);
    assert_eq!(stats["average_grade"], "B-");

    // The skipped 10 minute item is emailable: 600 s at 54.17 / 1500 s.
    assert_eq!(stats["savings"]["emailable_count"], 1);
    let savings = &stats["savings"];
    assert_eq!(decimal_field(&savings["emailable_burned_cash"]), decimal("21.67"));
    assert_eq!(decimal_field(&savings["potential_savings"]), decimal("21.67"));
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_unknown_role_returns_400() {
    let mut body = pair_meeting_body();
    body["attendees"] = attendees(&["Senior", "Intern"]);

    let (status, error) = post(&create_test_state(), "/meetings", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "ROLE_NOT_FOUND");
    assert!(error["message"].as_str().unwrap().contains("Intern"));
}

#[tokio::test]
async fn test_zero_duration_returns_400() {
    let mut body = pair_meeting_body();
    body["scheduled_duration_minutes"] = json!(0);

    let (status, error) = post(&create_test_state(), "/meetings", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_MEETING");
}

#[tokio::test]
async fn test_patch_blank_title_returns_400() {
    let state = create_test_state();
    let meeting = create_meeting(&state, pair_meeting_body()).await;
    let uri = format!("/meetings/{}", meeting["id"].as_str().unwrap());

    let (status, error) = patch(&state, &uri, json!({ "title": "  " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_MEETING");
}

#[tokio::test]
async fn test_unknown_meeting_returns_404() {
    let state = create_test_state();
    let id = "00000000-0000-0000-0000-000000000000";

    let uri = format!("/meetings/{}", id);

    let (status, error) = patch(&state, &uri, json!({ "title": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "MEETING_NOT_FOUND");

    let (status, _) = finalize(&state, id, json!({ "elapsed_seconds": 60 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_negative_elapsed_is_malformed() {
    let state = create_test_state();
    let meeting = create_meeting(&state, pair_meeting_body()).await;

    let id = meeting["id"].as_str().unwrap();

    let (status, error) = finalize(&state, id, json!({ "elapsed_seconds": -5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}
