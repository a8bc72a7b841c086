use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::buildability::{BuildabilityServiceError, KnowledgeBaseError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Knowledge(KnowledgeBaseError),
    Buildability(BuildabilityServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Knowledge(err) => write!(f, "knowledge base error: {}", err),
            AppError::Buildability(err) => write!(f, "buildability check error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Knowledge(err) => Some(err),
            AppError::Buildability(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Buildability(BuildabilityServiceError::Intake(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Knowledge(_)
            | AppError::Buildability(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<KnowledgeBaseError> for AppError {
    fn from(value: KnowledgeBaseError) -> Self {
        Self::Knowledge(value)
    }
}

impl From<BuildabilityServiceError> for AppError {
    fn from(value: BuildabilityServiceError) -> Self {
        Self::Buildability(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::buildability::IntakeViolation;

    #[test]
    fn intake_violations_map_to_unprocessable() {
        let err = AppError::from(BuildabilityServiceError::from(
            IntakeViolation::InvalidEmail,
        ));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn io_failures_map_to_internal_error() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
