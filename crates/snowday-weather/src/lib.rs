//! Snow day probability for US ZIP codes and Canadian postal codes.
//!
//! Looks up the code with Nominatim, fetches today's forecast from
//! Open-Meteo and scores the chance that schools close.

pub mod calculator;
pub mod error;
pub mod geocode;
pub mod http;
pub mod model;
pub mod postal;
pub mod provider;
pub mod report;
pub mod sample;
pub mod types;
pub mod units;

pub use calculator::{SnowDayCalculator, SnowDayOutcome};
pub use error::{SnowDayError, ValidationError};
pub use geocode::LocationResolver;
pub use http::build_client;
pub use model::{score, Outlook, ProbabilityResult, RiskLevel, ScoreBreakdown};
pub use postal::PostalCode;
pub use provider::WeatherProvider;
pub use report::SnowDayReport;
pub use sample::sample_snapshot;
pub use types::*;
