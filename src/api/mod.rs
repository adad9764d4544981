//! HTTP API module for the Meeting Cost Engine.
//!
//! This module provides the REST endpoints for estimating meeting cost,
//! recording meetings, finalizing them into scored reports and reading the
//! dashboard aggregates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateMeetingRequest, EstimateRequest, FinalizeMeetingRequest, UpdateMeetingRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
