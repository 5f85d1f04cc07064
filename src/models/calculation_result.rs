//! Calculation result models for the HRMS calculation engine.
//!
//! This module contains the [`PayrollCalculation`] envelope returned by a payroll
//! run and the audit structures that record every decision the engine made
//! along the way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayrollRecord;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag data-quality issues that don't prevent calculation
/// but may require attention from HR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use hrms_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(!trace.has_warnings());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if any warning was raised during the calculation.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// The complete result of a payroll run for one employee and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The computed payroll record.
    pub payroll: PayrollRecord,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_step() -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: "attendance_proration".to_string(),
            rule_name: "Attendance Pro-ration".to_string(),
            input: serde_json::json!({"working_days": 22, "present_days": 20}),
            output: serde_json::json!({"attendance_ratio": "0.9090909090909090909090909091"}),
            reasoning: "20 / 22 days attended".to_string(),
        }
    }

    #[test]
    fn test_audit_step_serialization() {
        let json = serde_json::to_string(&create_sample_step()).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"attendance_proration\""));
        assert!(json.contains("\"working_days\":22"));
    }

    #[test]
    fn test_audit_trace_has_warnings() {
        let mut trace = AuditTrace {
            steps: vec![create_sample_step()],
            warnings: vec![],
            duration_us: 10,
        };
        assert!(!trace.has_warnings());

        trace.warnings.push(AuditWarning {
            code: "PRESENT_EXCEEDS_WORKING".to_string(),
            message: "present days exceed working days".to_string(),
            severity: "medium".to_string(),
        });
        assert!(trace.has_warnings());
    }

    #[test]
    fn test_audit_warning_deserialization() {
        let json = r#"{"code": "X", "message": "y", "severity": "low"}"#;
        let warning: AuditWarning = serde_json::from_str(json).unwrap();
        assert_eq!(warning.code, "X");
        assert_eq!(warning.severity, "low");
    }
}
