//! Response types for the Meeting Cost Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a meeting not found error response.
    pub fn meeting_not_found(meeting_id: &str) -> Self {
        Self::with_details(
            "MEETING_NOT_FOUND",
            format!("Meeting not found: {}", meeting_id),
            format!("No meeting is stored under id '{}'", meeting_id),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RoleNotFound { role } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ROLE_NOT_FOUND",
                    format!("Salary band not found for role: {}", role),
                    format!("The role '{}' has no configured salary band", role),
                ),
            },
            EngineError::MeetingNotFound { meeting_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::meeting_not_found(&meeting_id),
            },
            EngineError::ReportNotFound { meeting_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "REPORT_NOT_FOUND",
                    format!("Report not found for meeting: {}", meeting_id),
                    "The meeting has not been finalized",
                ),
            },
            EngineError::AgendaItemNotFound { item_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "AGENDA_ITEM_NOT_FOUND",
                    format!("Agenda item not found: {}", item_id),
                ),
            },
            error @ EngineError::AgendaOutOfOrder { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("AGENDA_OUT_OF_ORDER", error.to_string()),
            },
            EngineError::InvalidMeeting { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MEETING",
                    format!("Invalid meeting field '{}': {}", field, message),
                    "The meeting data contains invalid information",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_meeting_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::MeetingNotFound {
            meeting_id: "abc".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "MEETING_NOT_FOUND");
        assert!(api_error.error.message.contains("abc"));
    }

    #[test]
    fn test_unknown_role_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::RoleNotFound {
            role: "Intern".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "ROLE_NOT_FOUND");
    }

    #[test]
    fn test_out_of_order_keeps_engine_message() {
        let api_error: ApiErrorResponse = EngineError::AgendaOutOfOrder {
            item_id: "a2".to_string(),
            pending_item_id: "a1".to_string(),
        }
        .into();
        assert_eq!(api_error.error.code, "AGENDA_OUT_OF_ORDER");
        assert!(api_error.error.message.contains("'a1'"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "engine.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
