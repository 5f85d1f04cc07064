//! HTTP API module for the HRMS calculation engine.
//!
//! This module provides the REST endpoints through which the surrounding
//! request layer computes leave durations, attendance pro-ration and payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LeaveDurationRequest, LeaveSubmissionRequest, PayrollRequest, ProrationRequest};
pub use response::{ApiError, ApiErrorResponse, LeaveDurationResponse, ProrationResponse};
pub use state::AppState;
