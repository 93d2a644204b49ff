//! Error types for the snow day pipeline.

use snowday_core::{AppError, ForecastError, NetworkError, ReqwestErrorExt};
use thiserror::Error;

use crate::types::Country;

/// Why a postal code was rejected before any lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a postal code")]
    Empty,

    #[error("Invalid ZIP code (e.g., 90210) format: {0}")]
    MalformedZip(String),

    #[error("Invalid postal code (e.g., M5V 3L9) format: {0}")]
    MalformedPostal(String),
}

impl ValidationError {
    pub(crate) fn malformed(country: Country, input: &str) -> Self {
        match country {
            Country::UnitedStates => Self::MalformedZip(input.to_string()),
            Country::Canada => Self::MalformedPostal(input.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum SnowDayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No location found for {query}")]
    NotFound { query: String },

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Invalid weather data: {0}")]
    InvalidData(String),
}

impl From<reqwest::Error> for SnowDayError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.into_network_error())
    }
}

impl SnowDayError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { .. } => {
                "Unable to find location. Please check your postal code.".to_string()
            }
            Self::Network(e) => e.user_message().to_string(),
            Self::InvalidData(_) => "Unable to fetch weather data. Please try again.".to_string(),
        }
    }
}

impl From<SnowDayError> for AppError {
    fn from(e: SnowDayError) -> Self {
        match e {
            SnowDayError::Validation(v) => {
                AppError::Forecast(ForecastError::InvalidPostalCode(v.to_string()))
            }
            SnowDayError::NotFound { query } => {
                AppError::Forecast(ForecastError::LocationNotFound(query))
            }
            SnowDayError::Network(n) => AppError::Network(n),
            SnowDayError::InvalidData(s) => AppError::Forecast(ForecastError::InvalidData(s)),
        }
    }
}
