use crate::config::ConfigError;
use crate::survey::scoring::ScoringError;
use crate::survey::service::SurveyServiceError;
use crate::survey::session::AdminSessionError;
use crate::telemetry::TelemetryError;
use std::fmt;

/// Process-level error for the service binary: everything `run()` can fail
/// with, from configuration through serving.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Survey(SurveyServiceError),
    Session(AdminSessionError),
    Scoring(ScoringError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Survey(err) => write!(f, "survey error: {}", err),
            AppError::Session(err) => write!(f, "admin session error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
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
            AppError::Survey(err) => Some(err),
            AppError::Session(err) => Some(err),
            AppError::Scoring(err) => Some(err),
        }
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

impl From<SurveyServiceError> for AppError {
    fn from(value: SurveyServiceError) -> Self {
        Self::Survey(value)
    }
}

impl From<AdminSessionError> for AppError {
    fn from(value: AdminSessionError) -> Self {
        Self::Session(value)
    }
}

impl From<ScoringError> for AppError {
    fn from(value: ScoringError) -> Self {
        Self::Scoring(value)
    }
}
