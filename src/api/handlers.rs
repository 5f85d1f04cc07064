//! HTTP request handlers for the HRMS calculation engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler calls straight into [`crate::calculation`]; none of them does its
//! own day counting or salary arithmetic.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_leave_duration, calculate_payroll, calculate_proration, stamp_leave_request,
};
use crate::error::EngineError;
use crate::models::{DateRange, PayrollInput};

use super::request::{
    LeaveDurationRequest, LeaveSubmissionRequest, PayrollRequest, ProrationRequest,
};
use super::response::{ApiError, ApiErrorResponse, LeaveDurationResponse, ProrationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/duration", post(leave_duration_handler))
        .route("/leave/submit", post(leave_submit_handler))
        .route("/attendance/proration", post(proration_handler))
        .route("/payroll/calculate", post(payroll_handler))
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

/// Maps a JSON extraction failure onto a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
    json_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /leave/duration.
async fn leave_duration_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveDurationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave duration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let range = match DateRange::new(request.start_date, request.end_date) {
        Ok(range) => range,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    let result = calculate_leave_duration(state.calendar(), &range, request.half_day, 1);
    info!(
        correlation_id = %correlation_id,
        working_days = result.working_days,
        number_of_days = %result.number_of_days,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Leave duration calculated"
    );

    json_response(
        StatusCode::OK,
        LeaveDurationResponse {
            start_date: range.start(),
            end_date: range.end(),
            half_day: request.half_day,
            working_days: result.working_days,
            number_of_days: result.number_of_days,
            holidays: state.config().holidays_in(&range).into_iter().cloned().collect(),
        },
    )
}

/// Handler for POST /leave/submit.
///
/// Stamps the submission with its day count and hands back the pending
/// request for the caller to persist.
async fn leave_submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveSubmissionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match stamp_leave_request(state.calendar(), request.into()) {
        Ok(leave) => {
            info!(
                correlation_id = %correlation_id,
                leave_id = %leave.id,
                employee_id = %leave.employee_id,
                number_of_days = %leave.number_of_days,
                "Leave request stamped"
            );
            json_response(StatusCode::OK, leave)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /attendance/proration.
async fn proration_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProrationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing proration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = match calculate_proration(
        &request.attendance,
        request.basic_salary,
        &state.payroll_policy(),
        1,
    ) {
        Ok(result) => result,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    if let Some(warning) = &result.warning {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    json_response(StatusCode::OK, ProrationResponse::from(result))
}

/// Handler for POST /payroll/calculate.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let input: PayrollInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match calculate_payroll(&input, &state.payroll_policy()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.payroll.employee_id,
                gross_salary = %result.payroll.gross_salary,
                net_salary = %result.payroll.net_salary,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Payroll calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}
