use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Country a query is for. Drives validation, scoring ladders and display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "CA")]
    Canada,
}

impl Country {
    /// Two-letter code, upper case ("US", "CA")
    pub fn code(self) -> &'static str {
        match self {
            Self::UnitedStates => "US",
            Self::Canada => "CA",
        }
    }

    /// Lower-case code used as the geocoder's country filter
    pub fn filter_code(self) -> &'static str {
        match self {
            Self::UnitedStates => "us",
            Self::Canada => "ca",
        }
    }

    /// Unit system used for scoring thresholds and display
    pub fn units(self) -> UnitSystem {
        match self {
            Self::UnitedStates => UnitSystem::Imperial,
            Self::Canada => UnitSystem::Metric,
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Fahrenheit and inches
    Imperial,
    /// Celsius and centimeters
    Metric,
}

/// Kind of school; larger institutions close less readily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchoolType {
    #[default]
    Public,
    Private,
    College,
}

impl SchoolType {
    /// Factor applied to the summed points
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Public => 1.0,
            Self::Private => 0.8,
            Self::College => 0.6,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Public => "Public School",
            Self::Private => "Private School",
            Self::College => "College/University",
        }
    }
}

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    Sleet,
    Thunderstorm,
}

impl WeatherCondition {
    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::Sleet, // Freezing drizzle
            61 | 63 | 80 => Self::Rain,
            65 | 81 | 82 => Self::HeavyRain,
            66 | 67 => Self::Sleet, // Freezing rain
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Snow => "Snow",
            Self::Sleet => "Sleet",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

/// Resolved coordinates for a postal code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl GeoLocation {
    /// Coordinates formatted to four decimals, e.g. "43.6426, -79.3871"
    pub fn coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Today's weather at one location, in provider units
/// (Celsius, centimeters of snow, millimeters of precipitation).
///
/// Every reading is optional. A missing value means the provider did not
/// report it; deciding what that means for scoring is up to the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current_temperature_c: Option<f64>,
    pub current_snowfall_cm: Option<f64>,
    pub current_precipitation_mm: Option<f64>,
    pub weather_code: Option<i32>,
    pub daily_min_temp_c: Option<f64>,
    pub daily_max_temp_c: Option<f64>,
    pub daily_snowfall_cm: Option<f64>,
    pub daily_precipitation_mm: Option<f64>,
    /// Local date the daily values apply to
    pub forecast_date: Option<NaiveDate>,
}

impl WeatherSnapshot {
    pub fn condition(&self) -> WeatherCondition {
        self.weather_code
            .map(WeatherCondition::from_wmo_code)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_code_clear() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::Clear);
    }

    #[test]
    fn test_wmo_code_partly_cloudy() {
        assert_eq!(WeatherCondition::from_wmo_code(1), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_wmo_code(2), WeatherCondition::PartlyCloudy);
    }

    #[test]
    fn test_wmo_code_snow() {
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(WeatherCondition::from_wmo_code(code), WeatherCondition::Snow);
        }
    }

    #[test]
    fn test_wmo_code_sleet() {
        for code in [56, 57, 66, 67] {
            assert_eq!(WeatherCondition::from_wmo_code(code), WeatherCondition::Sleet);
        }
    }

    #[test]
    fn test_wmo_code_unknown_defaults_to_clear() {
        assert_eq!(WeatherCondition::from_wmo_code(999), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_wmo_code(-1), WeatherCondition::Clear);
    }

    #[test]
    fn test_snapshot_condition_without_code_is_clear() {
        let snapshot = WeatherSnapshot::default();
        assert_eq!(snapshot.condition(), WeatherCondition::Clear);

        let snowy = WeatherSnapshot {
            weather_code: Some(73),
            ..Default::default()
        };
        assert_eq!(snowy.condition().description(), "Snow");
    }

    #[test]
    fn test_country_codes() {
        assert_eq!(Country::UnitedStates.code(), "US");
        assert_eq!(Country::Canada.to_string(), "CA");
        assert_eq!(Country::Canada.filter_code(), "ca");
        assert_eq!(Country::UnitedStates.units(), UnitSystem::Imperial);
    }

    #[test]
    fn test_country_serde_uses_codes() {
        let json = serde_json::to_string(&Country::Canada).unwrap_or_default();
        assert_eq!(json, "\"CA\"");
        let school: SchoolType = serde_json::from_str("\"college\"").unwrap_or_default();
        assert_eq!(school, SchoolType::College);
    }

    #[test]
    fn test_school_multipliers_never_exceed_public() {
        for school in [SchoolType::Public, SchoolType::Private, SchoolType::College] {
            assert!(school.multiplier() <= SchoolType::Public.multiplier());
        }
    }

    #[test]
    fn test_coordinates_format() {
        let loc = GeoLocation {
            latitude: 43.642_57,
            longitude: -79.387_06,
            display_name: "Toronto, Ontario".into(),
        };
        assert_eq!(loc.coordinates(), "43.6426, -79.3871");
    }
}
