//! Response types for the payroll engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
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
            EngineError::InvalidRateTable { version, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RATE_TABLE",
                    format!("Rate table '{}' is invalid", version),
                    message,
                ),
            },
            EngineError::RateTableNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_TABLE_NOT_FOUND",
                    format!("No rate table in force on {}", date),
                    "No published rate table's validity interval covers the requested date",
                ),
            },
            EngineError::RateTableConflict { version, existing } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "RATE_TABLE_CONFLICT",
                    format!("Rate table '{}' conflicts with '{}'", version, existing),
                    "Published rate tables must have disjoint validity intervals",
                ),
            },
            EngineError::LevelNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "LEVEL_NOT_FOUND",
                    format!("CCNL level not found: {}", code),
                    format!("The level code '{}' is not priced by the rate table", code),
                ),
            },
            EngineError::InvalidTimesheet {
                employee_id,
                period,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMESHEET",
                    format!(
                        "Invalid timesheet for employee '{}' in {}",
                        employee_id, period
                    ),
                    message,
                ),
            },
            EngineError::ContributionThresholdUnresolved {
                employee_id,
                weekly_hours,
                version,
                message,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "CONTRIBUTION_UNRESOLVED",
                    format!(
                        "Cannot resolve contribution regime for employee '{}' at {} weekly hours",
                        employee_id, weekly_hours
                    ),
                    format!("table '{}': {}", version, message),
                ),
            },
            EngineError::PayslipInconsistent {
                employee_id,
                period,
                version,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PAYSLIP_INCONSISTENT",
                    format!(
                        "Inconsistent payslip for employee '{}' in {}",
                        employee_id, period
                    ),
                    format!("table '{}': {}", version, message),
                ),
            },
            EngineError::IncompleteYear {
                employee_id,
                year,
                month,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INCOMPLETE_YEAR",
                    format!(
                        "Missing payslip for employee '{}', month {} of {}",
                        employee_id, month, year
                    ),
                    "Every month the contract was active must have a payslip",
                ),
            },
            EngineError::CuStatusRegression { from, to } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "CU_STATUS_REGRESSION",
                    format!("CU status cannot regress from {} to {}", from, to),
                    "CU status moves strictly forward: draft, generated, submitted",
                ),
            },
        }
    }
}
