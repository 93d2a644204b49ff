//! Display projection of a finished calculation.
//!
//! Everything here is formatted for the query's country: inches and °F for
//! the US, centimeters and °C for Canada.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{ProbabilityResult, RiskLevel};
use crate::types::{Country, GeoLocation, SchoolType, UnitSystem, WeatherSnapshot};
use crate::units::{celsius_to_fahrenheit, cm_to_inches};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnowDayReport {
    pub location: String,
    pub coordinates: String,
    pub snowfall: String,
    pub temperature: String,
    pub temp_min: String,
    pub temp_max: String,
    pub condition: String,
    /// e.g. "College/University"
    pub school: String,
    pub probability: u8,
    pub risk: RiskLevel,
    pub alert: String,
    pub generated_at: DateTime<Utc>,
}

impl SnowDayReport {
    pub fn build(
        location: &GeoLocation,
        snapshot: &WeatherSnapshot,
        result: &ProbabilityResult,
        country: Country,
        school: SchoolType,
    ) -> Self {
        let units = country.units();
        Self {
            location: location.display_name.clone(),
            coordinates: location.coordinates(),
            snowfall: format_snowfall(snapshot.daily_snowfall_cm, units),
            temperature: format_temperature(snapshot.current_temperature_c, units),
            temp_min: format_temperature(snapshot.daily_min_temp_c, units),
            temp_max: format_temperature(snapshot.daily_max_temp_c, units),
            condition: snapshot.condition().description().to_string(),
            school: school.description().to_string(),
            probability: result.score,
            risk: result.risk_level(),
            alert: result.outlook().message().to_string(),
            generated_at: Utc::now(),
        }
    }
}

/// Missing values display as zero, matching how they were scored.
pub fn format_snowfall(cm: Option<f64>, units: UnitSystem) -> String {
    let cm = cm.filter(|v| v.is_finite()).unwrap_or(0.0);
    match units {
        UnitSystem::Imperial => format!("{:.1} inches", cm_to_inches(cm)),
        UnitSystem::Metric => format!("{:.1} cm", cm),
    }
}

pub fn format_temperature(celsius: Option<f64>, units: UnitSystem) -> String {
    let c = celsius.filter(|v| v.is_finite()).unwrap_or(0.0);
    match units {
        UnitSystem::Imperial => format!("{:.1}°F", celsius_to_fahrenheit(c)),
        UnitSystem::Metric => format!("{:.1}°C", c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::score;

    fn location() -> GeoLocation {
        GeoLocation {
            latitude: 44.9778,
            longitude: -93.265,
            display_name: "Minneapolis, Minnesota".into(),
        }
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            current_temperature_c: Some(-15.0),
            daily_min_temp_c: Some(-20.0),
            daily_max_temp_c: Some(-10.0),
            daily_snowfall_cm: Some(20.32),
            weather_code: Some(75),
            ..Default::default()
        }
    }

    #[test]
    fn us_report_uses_imperial_units() {
        let snap = snapshot();
        let result = score(&snap, Country::UnitedStates, SchoolType::Public);
        let report = SnowDayReport::build(
            &location(),
            &snap,
            &result,
            Country::UnitedStates,
            SchoolType::Public,
        );

        assert_eq!(report.location, "Minneapolis, Minnesota");
        assert_eq!(report.coordinates, "44.9778, -93.2650");
        assert_eq!(report.snowfall, "8.0 inches");
        assert_eq!(report.temperature, "5.0°F");
        assert_eq!(report.temp_min, "-4.0°F");
        assert_eq!(report.temp_max, "14.0°F");
        assert_eq!(report.condition, "Snow");
        assert_eq!(report.school, "Public School");
        assert_eq!(report.probability, 100);
        assert_eq!(report.risk, RiskLevel::High);
        assert!(report.alert.starts_with("Very High"));
    }

    #[test]
    fn canadian_report_uses_metric_units() {
        let snap = snapshot();
        let result = score(&snap, Country::Canada, SchoolType::College);
        let report = SnowDayReport::build(
            &location(),
            &snap,
            &result,
            Country::Canada,
            SchoolType::College,
        );

        assert_eq!(report.snowfall, "20.3 cm");
        assert_eq!(report.temperature, "-15.0°C");
        assert_eq!(report.temp_min, "-20.0°C");
        assert_eq!(report.school, "College/University");
        // (50 + 20 + 20) * 0.6
        assert_eq!(report.probability, 54);
        assert_eq!(report.risk, RiskLevel::Medium);
    }

    #[test]
    fn missing_values_display_as_zero() {
        assert_eq!(format_snowfall(None, UnitSystem::Metric), "0.0 cm");
        assert_eq!(format_temperature(None, UnitSystem::Imperial), "32.0°F");
    }
}
