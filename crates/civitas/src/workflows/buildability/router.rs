use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::IntakeRecord;
use super::intake::IntakeForm;
use super::report::ReportAvailability;
use super::service::{BuildabilityService, BuildabilityServiceError, IntakeReceipt};
use super::store::IntakeStore;

/// Router builder exposing HTTP endpoints for intake and report retrieval.
pub fn buildability_router<S>(service: Arc<BuildabilityService<S>>) -> Router
where
    S: IntakeStore + 'static,
{
    Router::new()
        .route("/api/v1/buildability/intake", post(intake_handler::<S>))
        .route("/api/v1/buildability/report", get(report_handler::<S>))
        .route("/api/v1/buildability/evaluate", post(evaluate_handler::<S>))
        .with_state(service)
}

pub(crate) async fn intake_handler<S>(
    State(service): State<Arc<BuildabilityService<S>>>,
    axum::Json(form): axum::Json<IntakeForm>,
) -> Response
where
    S: IntakeStore + 'static,
{
    match service.submit(form) {
        Ok(record) => {
            let receipt = IntakeReceipt::from(&record);
            (StatusCode::ACCEPTED, axum::Json(receipt)).into_response()
        }
        Err(BuildabilityServiceError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<BuildabilityService<S>>>,
) -> Response
where
    S: IntakeStore + 'static,
{
    match service.latest_report() {
        Ok(availability @ ReportAvailability::Ready { .. }) => {
            (StatusCode::OK, axum::Json(availability)).into_response()
        }
        Ok(availability @ ReportAvailability::NoReport { .. }) => {
            (StatusCode::NOT_FOUND, axum::Json(availability)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluate_handler<S>(
    State(service): State<Arc<BuildabilityService<S>>>,
    axum::Json(record): axum::Json<IntakeRecord>,
) -> Response
where
    S: IntakeStore + 'static,
{
    let report = service.evaluate(&record);
    (StatusCode::OK, axum::Json(report)).into_response()
}
