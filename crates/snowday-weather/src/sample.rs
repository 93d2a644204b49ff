//! Fixed sample weather for when the live services are unreachable.
//!
//! These values are synthetic. They are not derived from any measurement
//! and must never be presented as a real forecast.

use crate::types::{Country, WeatherSnapshot};

/// WMO code for moderate snowfall
const SAMPLE_WEATHER_CODE: i32 = 71;

pub fn sample_snapshot(country: Country) -> WeatherSnapshot {
    let (current, min, max, snow, precip) = match country {
        Country::UnitedStates => (-2.0, -5.0, 2.0, 7.6, 8.2),
        Country::Canada => (-8.0, -12.0, -3.0, 12.4, 15.1),
    };

    WeatherSnapshot {
        current_temperature_c: Some(current),
        current_snowfall_cm: Some(0.0),
        current_precipitation_mm: Some(0.0),
        weather_code: Some(SAMPLE_WEATHER_CODE),
        daily_min_temp_c: Some(min),
        daily_max_temp_c: Some(max),
        daily_snowfall_cm: Some(snow),
        daily_precipitation_mm: Some(precip),
        forecast_date: None,
    }
}
