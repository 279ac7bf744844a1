//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EmployeeContract, Quarter};

use super::request::{AnnualCuRequest, PayslipRequest, QuarterlyRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslip", post(payslip_handler))
        .route("/contributions/quarterly", post(quarterly_handler))
        .route("/cu/annual", post(annual_cu_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error(error: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for the POST /payslip endpoint.
///
/// Accepts a contract, a timesheet entry, and the year-to-date taxed gross,
/// and returns the computed payslip.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let contract: EmployeeContract = request.contract.into();
    let entry = request.timesheet.into_entry(&contract.employee_id);

    match state
        .engine()
        .compute_payslip(&contract, &entry, request.as_of_date, request.ytd_gross)
    {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %payslip.employee_id,
                period = %payslip.period,
                gross = payslip.gross.total,
                net = payslip.net,
                "Payslip computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(payslip),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payslip computation failed");
            engine_error(err)
        }
    }
}

/// Handler for the POST /contributions/quarterly endpoint.
///
/// Summarizes the quarter's INPS contributions from finished payslips.
async fn quarterly_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuarterlyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quarterly contribution request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let Some(quarter) = Quarter::new(request.year, request.quarter) else {
        return bad_request(ApiError::validation_error(format!(
            "quarter must be 1-4, got {}",
            request.quarter
        )));
    };

    let summary = state
        .engine()
        .compute_quarterly_contributions(quarter, &request.payslips);
    info!(
        correlation_id = %correlation_id,
        quarter = %quarter,
        employees = summary.lines.len(),
        total = summary.total,
        "Quarterly contributions summarized"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Handler for the POST /cu/annual endpoint.
///
/// Composes the annual CU from the year's monthly payslips.
async fn annual_cu_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnnualCuRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing annual CU request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let contract: EmployeeContract = request.contract.into();
    match state
        .engine()
        .compute_annual_cu(&contract, request.tax_year, &request.payslips)
    {
        Ok(cu) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %cu.employee_id,
                tax_year = cu.tax_year,
                months = cu.months.len(),
                "Annual CU composed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(cu),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Annual CU composition failed");
            engine_error(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::engine::PayrollEngine;
    use crate::models::{CuDocument, PayslipResult, QuarterlyContributionSummary};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/ccnl_domestico").expect("Failed to load config");
        AppState::new(PayrollEngine::new(config))
    }

    async fn post(router: Router, uri: &str, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    fn cs_quarterly_request() -> String {
        r#"{
            "contract": {
                "employee_id": "emp_001",
                "level_code": "CS",
                "weekly_hours": "40",
                "room_and_board": false,
                "start_date": "2023-03-01"
            },
            "timesheet": {
                "period": {"quarter": {"year": 2025, "quarter": 1}},
                "regular_hours": "480"
            },
            "as_of_date": "2025-03-31"
        }"#
        .to_string()
    }

    #[tokio::test]
    async fn test_valid_payslip_request_returns_200() {
        let router = create_router(create_test_state());
        let response = post(router, "/payslip", cs_quarterly_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payslip: PayslipResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(payslip.employee_id, "emp_001");
        assert_eq!(payslip.gross.total, 564_000);
        assert_eq!(payslip.contribution.employer, 42_276);
        assert_eq!(payslip.contribution.employee, 14_100);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = post(router, "/payslip", "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() {
        let router = create_router(create_test_state());
        // No employee_id in contract
        let body = r#"{
            "contract": {
                "level_code": "CS",
                "weekly_hours": "40",
                "start_date": "2023-03-01"
            },
            "timesheet": {
                "period": {"month": {"year": 2025, "month": 2}},
                "regular_hours": "160"
            },
            "as_of_date": "2025-02-28"
        }"#;

        let response = post(router, "/payslip", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("employee_id"),
            "Expected a missing-field message, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_unknown_level_returns_400() {
        let router = create_router(create_test_state());
        let body = cs_quarterly_request().replace("\"CS\"", "\"ZZ\"");

        let response = post(router, "/payslip", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "LEVEL_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_date_without_table_returns_400() {
        let router = create_router(create_test_state());
        let body = cs_quarterly_request().replace("2025-03-31", "2019-03-31");

        let response = post(router, "/payslip", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "RATE_TABLE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_quarterly_summary_endpoint() {
        let router = create_router(create_test_state());

        // Compute a payslip first, then feed it back for the summary
        let response = post(router.clone(), "/payslip", cs_quarterly_request()).await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payslip: PayslipResult = serde_json::from_slice(&body).unwrap();

        let request = serde_json::json!({
            "year": 2025,
            "quarter": 1,
            "payslips": [payslip],
        });
        let response = post(router, "/contributions/quarterly", request.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let summary: QuarterlyContributionSummary = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total, 56_376);
        assert_eq!(summary.due_date.to_string(), "2025-04-10");
    }

    #[tokio::test]
    async fn test_quarterly_rejects_quarter_out_of_range() {
        let router = create_router(create_test_state());
        let body = r#"{"year": 2025, "quarter": 5, "payslips": []}"#;

        let response = post(router, "/contributions/quarterly", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_annual_cu_with_missing_month_returns_400() {
        let router = create_router(create_test_state());
        let request = serde_json::json!({
            "contract": {
                "employee_id": "emp_001",
                "level_code": "B",
                "weekly_hours": "24",
                "start_date": "2023-03-01"
            },
            "tax_year": 2024,
            "payslips": [],
        });

        let response = post(router, "/cu/annual", request.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INCOMPLETE_YEAR");
        assert!(error.message.contains("month 1"));
    }

    #[tokio::test]
    async fn test_annual_cu_for_full_year() {
        let router = create_router(create_test_state());
        let state = create_test_state();

        // Build the year's monthly payslips through the engine
        let contract = crate::models::EmployeeContract {
            employee_id: "emp_001".to_string(),
            level_code: "B".to_string(),
            weekly_hours: rust_decimal::Decimal::from(24),
            room_and_board: false,
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
        };
        let mut payslips = Vec::new();
        let mut ytd = 0;
        for month in 1..=12 {
            let entry = crate::models::TimesheetEntry {
                employee_id: "emp_001".to_string(),
                period: crate::models::Period::month(2024, month).unwrap(),
                regular_hours: rust_decimal::Decimal::from(100),
                overtime_hours: rust_decimal::Decimal::ZERO,
                holiday_hours: rust_decimal::Decimal::ZERO,
                absence_days: 0,
                revision: 0,
            };
            let payslip = state
                .engine()
                .compute_payslip(
                    &contract,
                    &entry,
                    chrono::NaiveDate::from_ymd_opt(2024, month, 28).unwrap(),
                    ytd,
                )
                .unwrap();
            ytd += payslip.gross.total;
            payslips.push(payslip);
        }

        let request = serde_json::json!({
            "contract": {
                "employee_id": "emp_001",
                "level_code": "B",
                "weekly_hours": "24",
                "start_date": "2024-01-01"
            },
            "tax_year": 2024,
            "payslips": payslips,
        });

        let response = post(router, "/cu/annual", request.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let cu: CuDocument = serde_json::from_slice(&body).unwrap();
        assert_eq!(cu.months.len(), 12);
        assert_eq!(
            cu.total_gross,
            payslips.iter().map(|p| p.gross.total).sum::<i64>()
        );
    }
}
