//! Response types for the HRMS calculation engine API.
//!
//! This module defines the success bodies returned by the calculation
//! endpoints and the error response structures for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ProrationResult;
use crate::error::EngineError;
use crate::models::{AuditWarning, Holiday};

/// Response body for the `/leave/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDurationResponse {
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Whether each day is taken as a half day.
    pub half_day: bool,
    /// Working days inside the range.
    pub working_days: u32,
    /// Countable leave days.
    pub number_of_days: Decimal,
    /// Configured holidays inside the range, omitted when there are none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holidays: Vec<Holiday>,
}

/// Response body for the `/attendance/proration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProrationResponse {
    /// Fraction of scheduled days attended.
    pub attendance_ratio: Decimal,
    /// Basic salary scaled by the attendance ratio.
    pub pro_rated_basic_salary: Decimal,
    /// Data-quality warnings, omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AuditWarning>,
}

impl From<ProrationResult> for ProrationResponse {
    fn from(result: ProrationResult) -> Self {
        Self {
            attendance_ratio: result.proration.attendance_ratio,
            pro_rated_basic_salary: result.proration.pro_rated_basic_salary,
            warnings: result.warning.into_iter().collect(),
        }
    }
}

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
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    format!("Start date {} is after end date {}", start, end),
                    "The leave start date must be on or before the end date",
                ),
            },
            EngineError::InvalidPayroll { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PAYROLL",
                    format!("Invalid payroll field '{}': {}", field, message),
                    "The payroll data contains invalid information",
                ),
            },
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{Proration, PRESENT_EXCEEDS_WORKING};
    use crate::models::AuditStep;

    fn audit_step() -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: "attendance_proration".to_string(),
            rule_name: "Attendance Pro-ration".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: String::new(),
        }
    }

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
    fn test_invalid_range_maps_to_bad_request() {
        let engine_error = EngineError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RANGE");
        assert!(api_error.error.message.contains("2025-09-15"));
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_proration_response_omits_empty_warnings() {
        let response: ProrationResponse = ProrationResult {
            proration: Proration {
                attendance_ratio: Decimal::ONE,
                pro_rated_basic_salary: Decimal::from(60000),
            },
            audit_step: audit_step(),
            warning: None,
        }
        .into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"attendance_ratio\":\"1\""));
        assert!(json.contains("\"pro_rated_basic_salary\":\"60000\""));
        assert!(!json.contains("warnings"));
    }

    #[test]
    fn test_proration_response_carries_warning() {
        let response: ProrationResponse = ProrationResult {
            proration: Proration {
                attendance_ratio: Decimal::from_str_exact("1.1").unwrap(),
                pro_rated_basic_salary: Decimal::from(1100),
            },
            audit_step: audit_step(),
            warning: Some(AuditWarning {
                code: PRESENT_EXCEEDS_WORKING.to_string(),
                message: "Present days (22) exceed working days (20)".to_string(),
                severity: "medium".to_string(),
            }),
        }
        .into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["warnings"][0]["code"], PRESENT_EXCEEDS_WORKING);
    }
}
