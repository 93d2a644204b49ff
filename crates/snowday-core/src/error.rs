//! Centralized error types for SnowDay.
//!
//! This module provides a typed error hierarchy that:
//! - Separates transport failures from data and configuration problems
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// Domain crates convert their own errors into this type at the boundary.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Forecast(e) => e.user_message(),
        }
    }
}

/// Network-related errors (HTTP, connectivity, undecodable bodies).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    /// Status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to connect. Check your internet connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The service is experiencing issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    ReadFailed(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::ReadFailed(_) => {
                "Configuration file could not be read. Check permissions."
            }
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Forecast pipeline errors that are not transport failures.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Invalid postal code: {0}")]
    InvalidPostalCode(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Invalid weather data: {0}")]
    InvalidData(String),
}

impl ForecastError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ForecastError::InvalidPostalCode(_) => {
                "That postal code doesn't look right. Check the format and try again."
            }
            ForecastError::LocationNotFound(_) => {
                "Unable to find location. Please check your postal code."
            }
            ForecastError::InvalidData(_) => {
                "Unable to fetch weather data. Please try again."
            }
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = vec![
            AppError::Network(NetworkError::Timeout),
            AppError::Network(NetworkError::ServerError {
                status: 503,
                message: "down".into(),
            }),
            AppError::Config(ConfigError::Invalid("test".into())),
            AppError::Config(ConfigError::ReadFailed("denied".into())),
            AppError::Forecast(ForecastError::LocationNotFound("00000".into())),
            AppError::Forecast(ForecastError::InvalidData("no daily".into())),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty(), "empty message for {err}");
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let err: AppError = NetworkError::Timeout.into();
        assert!(matches!(err, AppError::Network(NetworkError::Timeout)));

        let err: AppError = ForecastError::InvalidData("x".into()).into();
        assert!(matches!(err, AppError::Forecast(ForecastError::InvalidData(_))));
    }

    #[test]
    fn test_server_error_messages_depend_on_status() {
        let outage = NetworkError::ServerError {
            status: 502,
            message: String::new(),
        };
        let client = NetworkError::ServerError {
            status: 400,
            message: String::new(),
        };
        assert!(outage.user_message().contains("later"));
        assert_eq!(client.user_message(), "The request failed. Please try again.");
    }

    #[test]
    fn test_status_only_for_server_errors() {
        let err = NetworkError::ServerError {
            status: 429,
            message: "slow down".into(),
        };
        assert_eq!(err.status(), Some(429));
        assert_eq!(NetworkError::Timeout.status(), None);
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Forecast(ForecastError::LocationNotFound("H0H0H0".into()));
        assert_eq!(
            app_err.user_message(),
            "Unable to find location. Please check your postal code."
        );
    }
}
