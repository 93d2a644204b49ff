//! Today's forecast from Open-Meteo (free, no API key required).

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use snowday_core::ForecastConfig;
use tracing::instrument;

use crate::error::SnowDayError;
use crate::types::WeatherSnapshot;

const FORECAST_PATH: &str = "/v1/forecast";
const CURRENT_FIELDS: &str = "temperature_2m,precipitation,snowfall,weather_code";
const DAILY_FIELDS: &str = "temperature_2m_min,temperature_2m_max,snowfall_sum,precipitation_sum";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentData>,
    daily: Option<DailyData>,
}

#[derive(Debug, Deserialize)]
struct CurrentData {
    temperature_2m: Option<f64>,
    precipitation: Option<f64>,
    snowfall: Option<f64>,
    weather_code: Option<i32>,
}

/// Daily arrays; index 0 is today in the location's timezone.
#[derive(Debug, Deserialize)]
struct DailyData {
    time: Option<Vec<String>>,
    temperature_2m_min: Option<Vec<Option<f64>>>,
    temperature_2m_max: Option<Vec<Option<f64>>>,
    snowfall_sum: Option<Vec<Option<f64>>>,
    precipitation_sum: Option<Vec<Option<f64>>>,
}

fn today(values: Option<Vec<Option<f64>>>) -> Option<f64> {
    values?.into_iter().next().flatten()
}

impl ForecastResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, SnowDayError> {
        let (current, daily) = match (self.current, self.daily) {
            (Some(c), Some(d)) => (c, d),
            (c, d) => {
                let missing = match (c.is_none(), d.is_none()) {
                    (true, true) => "current and daily sections",
                    (true, false) => "current section",
                    _ => "daily section",
                };
                return Err(SnowDayError::InvalidData(format!("response has no {missing}")));
            }
        };

        let forecast_date = daily
            .time
            .as_ref()
            .and_then(|t| t.first())
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

        Ok(WeatherSnapshot {
            current_temperature_c: current.temperature_2m,
            current_snowfall_cm: current.snowfall,
            current_precipitation_mm: current.precipitation,
            weather_code: current.weather_code,
            daily_min_temp_c: today(daily.temperature_2m_min),
            daily_max_temp_c: today(daily.temperature_2m_max),
            daily_snowfall_cm: today(daily.snowfall_sum),
            daily_precipitation_mm: today(daily.precipitation_sum),
            forecast_date,
        })
    }
}

/// Fetches one-day forecasts. Values stay in provider units.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    forecast_url: String,
}

impl WeatherProvider {
    pub fn new(client: Client, config: &ForecastConfig) -> Self {
        Self {
            client,
            forecast_url: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                FORECAST_PATH
            ),
        }
    }

    /// Current conditions and today's aggregates at a coordinate pair.
    ///
    /// # Errors
    /// `Network` on transport failure, non-success status or unreadable
    /// body; `InvalidData` when the current or daily section is absent.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, SnowDayError> {
        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let request = self.client.get(&self.forecast_url).query(&[
            ("latitude", lat.as_str()),
            ("longitude", lon.as_str()),
            ("current", CURRENT_FIELDS),
            ("daily", DAILY_FIELDS),
            ("timezone", "auto"),
            ("forecast_days", "1"),
        ]);

        let body: ForecastResponse = crate::http::get_json(request, "forecast").await?;
        let snapshot = body.into_snapshot()?;

        tracing::debug!(?snapshot, "Fetched forecast");
        Ok(snapshot)
    }
}
