//! HTTP request handlers for the Meeting Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_weekly_stats, estimate_meeting_cost, finalize_meeting};
use crate::error::EngineError;
use crate::session::MeetingSetup;

use super::request::{
    CreateMeetingRequest, EstimateRequest, FinalizeMeetingRequest, UpdateMeetingRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route(
            "/meetings",
            post(create_meeting_handler).get(list_meetings_handler),
        )
        .route(
            "/meetings/:id",
            get(get_meeting_handler).patch(update_meeting_handler),
        )
        .route(
            "/meetings/:id/report",
            post(finalize_meeting_handler).get(get_report_handler),
        )
        .route("/dashboard", get(dashboard_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

/// Parses a meeting id path segment. Ids that are not UUIDs match no meeting.
fn parse_meeting_id(correlation_id: Uuid, raw: &str) -> Result<Uuid, ApiErrorResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        warn!(correlation_id = %correlation_id, meeting_id = raw, "Malformed meeting id");
        EngineError::MeetingNotFound {
            meeting_id: raw.to_string(),
        }
        .into()
    })
}

fn engine_failure(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    err.into()
}

/// Handler for POST /estimate.
///
/// Prices a planned meeting from its attendees and scheduled duration.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = parse_body(correlation_id, payload)?;
    let estimate = estimate_meeting_cost(
        &request.attendees,
        request.scheduled_duration_minutes,
        state.config().salary_bands(),
    )
    .map_err(|err| engine_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        attendees = estimate.attendee_count,
        estimated_cost = %estimate.estimated_cost,
        "Estimate completed"
    );
    Ok(json_response(StatusCode::OK, estimate))
}

/// Handler for POST /meetings.
async fn create_meeting_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMeetingRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create meeting request");

    let request = parse_body(correlation_id, payload)?;
    let started_at = request.started_at.unwrap_or_else(Utc::now);
    let setup: MeetingSetup = request.into();

    let meeting = setup
        .build_meeting(state.config().salary_bands(), Some(started_at))
        .and_then(|meeting| state.store().create_meeting(meeting))
        .map_err(|err| engine_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        meeting_id = %meeting.id,
        estimated_cost = %meeting.total_cost,
        "Meeting created"
    );
    Ok(json_response(StatusCode::CREATED, meeting))
}

/// Handler for GET /meetings.
async fn list_meetings_handler(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();

    let meetings = state
        .store()
        .list_meetings()
        .map_err(|err| engine_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        count = meetings.len(),
        "Listed meetings"
    );
    Ok(json_response(StatusCode::OK, meetings))
}

/// Handler for GET /meetings/:id.
async fn get_meeting_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let meeting_id = parse_meeting_id(correlation_id, &id)?;

    let meeting = state
        .store()
        .get_meeting(meeting_id)
        .map_err(|err| engine_failure(correlation_id, err))?;

    Ok(json_response(StatusCode::OK, meeting))
}

/// Handler for PATCH /meetings/:id.
///
/// Applies a partial update to a stored meeting.
async fn update_meeting_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMeetingRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, meeting_id = %id, "Processing update request");

    let meeting_id = parse_meeting_id(correlation_id, &id)?;
    let request = parse_body(correlation_id, payload)?;

    let mut meeting = state
        .store()
        .get_meeting(meeting_id)
        .map_err(|err| engine_failure(correlation_id, err))?;
    request
        .apply(&mut meeting)
        .map_err(|err| engine_failure(correlation_id, err))?;
    let meeting = state
        .store()
        .update_meeting(meeting)
        .map_err(|err| engine_failure(correlation_id, err))?;

    Ok(json_response(StatusCode::OK, meeting))
}

/// Handler for POST /meetings/:id/report.
///
/// Ends the meeting with the tracked agenda records, stores the scored
/// meeting and its report, and returns the report.
async fn finalize_meeting_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<FinalizeMeetingRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, meeting_id = %id, "Processing finalize request");

    let meeting_id = parse_meeting_id(correlation_id, &id)?;
    let request = parse_body(correlation_id, payload)?;

    let start_time = Instant::now();
    let mut meeting = state
        .store()
        .get_meeting(meeting_id)
        .map_err(|err| engine_failure(correlation_id, err))?;

    let report = finalize_meeting(
        &mut meeting,
        request.elapsed_seconds,
        request.ended_at.unwrap_or_else(Utc::now),
        &request.agenda,
        &request.records,
    );

    state
        .store()
        .update_meeting(meeting)
        .and_then(|_| state.store().save_report(report.clone()))
        .map_err(|err| engine_failure(correlation_id, err))?;

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        meeting_id = %meeting_id,
        total_cost = %report.total_cost,
        final_score = report.final_score,
        final_grade = %report.final_grade,
        duration_us = duration.as_micros(),
        "Meeting finalized"
    );
    Ok(json_response(StatusCode::OK, report))
}

/// Handler for GET /meetings/:id/report.
async fn get_report_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let meeting_id = parse_meeting_id(correlation_id, &id)?;

    let report = state
        .store()
        .get_meeting(meeting_id)
        .and_then(|_| state.store().get_report(meeting_id))
        .map_err(|err| engine_failure(correlation_id, err))?;

    Ok(json_response(StatusCode::OK, report))
}

/// Handler for GET /dashboard.
///
/// Aggregates every stored report into dashboard statistics.
async fn dashboard_handler(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();

    let reports = state
        .store()
        .list_reports()
        .map_err(|err| engine_failure(correlation_id, err))?;
    let stats = calculate_weekly_stats(&reports);

    info!(
        correlation_id = %correlation_id,
        meetings = stats.meeting_count,
        total_cost = %stats.total_cost,
        "Dashboard computed"
    );
    Ok(json_response(StatusCode::OK, stats))
}
