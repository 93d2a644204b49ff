//! Snow day probability model.
//!
//! Points are collected from three bands (forecast snowfall, forecast
//! minimum temperature, and a combined snowfall + current temperature bonus),
//! scaled by school type and clamped to 0-100. Each country evaluates its
//! thresholds in its own units: inches and °F for the US, centimeters and °C
//! for Canada.

use serde::{Deserialize, Serialize};

use crate::types::{Country, SchoolType, WeatherSnapshot};
use crate::units::{celsius_to_fahrenheit, cm_to_inches};

/// Which way a ladder's thresholds are crossed.
#[derive(Debug, Clone, Copy)]
enum Direction {
    /// value >= threshold
    AtLeast,
    /// value <= threshold
    AtMost,
}

/// Ordered `(threshold, points)` steps, most severe first. The first step
/// the value reaches wins; nothing is summed across steps.
#[derive(Debug)]
struct Ladder {
    direction: Direction,
    steps: &'static [(f64, u32)],
}

impl Ladder {
    fn points(&self, value: f64) -> u32 {
        self.steps
            .iter()
            .find(|(threshold, _)| match self.direction {
                Direction::AtLeast => value >= *threshold,
                Direction::AtMost => value <= *threshold,
            })
            .map_or(0, |(_, points)| *points)
    }
}

/// Bonus awarded when snowfall and current temperature are both severe.
#[derive(Debug)]
struct BonusRule {
    min_snowfall: f64,
    max_current_temp: f64,
    points: u32,
}

impl BonusRule {
    const fn new(min_snowfall: f64, max_current_temp: f64, points: u32) -> Self {
        Self {
            min_snowfall,
            max_current_temp,
            points,
        }
    }
}

#[derive(Debug)]
struct ScoringTable {
    snow: Ladder,
    temperature: Ladder,
    bonus: &'static [BonusRule],
}

impl ScoringTable {
    fn bonus_points(&self, snowfall: f64, current_temp: f64) -> u32 {
        self.bonus
            .iter()
            .find(|r| snowfall >= r.min_snowfall && current_temp <= r.max_current_temp)
            .map_or(0, |r| r.points)
    }
}

/// Inches and °F
static US_TABLE: ScoringTable = ScoringTable {
    snow: Ladder {
        direction: Direction::AtLeast,
        steps: &[(8.0, 50), (6.0, 45), (4.0, 35), (2.0, 25), (1.0, 15), (0.5, 8)],
    },
    temperature: Ladder {
        direction: Direction::AtMost,
        steps: &[(5.0, 30), (15.0, 25), (25.0, 20), (32.0, 10)],
    },
    bonus: &[
        BonusRule::new(6.0, 20.0, 20),
        BonusRule::new(4.0, 30.0, 15),
        BonusRule::new(2.0, 32.0, 10),
    ],
};

/// Centimeters and °C
static CA_TABLE: ScoringTable = ScoringTable {
    snow: Ladder {
        direction: Direction::AtLeast,
        steps: &[(20.0, 50), (15.0, 45), (10.0, 35), (5.0, 25), (2.0, 15), (1.0, 8)],
    },
    temperature: Ladder {
        direction: Direction::AtMost,
        steps: &[
            (-30.0, 30),
            (-25.0, 25),
            (-20.0, 20),
            (-15.0, 15),
            (-10.0, 10),
            (-5.0, 5),
        ],
    },
    bonus: &[
        BonusRule::new(15.0, -15.0, 20),
        BonusRule::new(10.0, -10.0, 15),
        BonusRule::new(5.0, -5.0, 10),
    ],
};

fn table_for(country: Country) -> &'static ScoringTable {
    match country {
        Country::UnitedStates => &US_TABLE,
        Country::Canada => &CA_TABLE,
    }
}

/// Missing or non-finite readings count as zero (0 cm of snow, 0 °C).
///
/// This mirrors how the forecast service has always been read: an absent
/// value scores as "no snow, freezing point" rather than failing the lookup.
fn reading(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Snapshot readings converted to the country's scoring units.
#[derive(Debug, Clone, Copy)]
struct Readings {
    snowfall: f64,
    min_temp: f64,
    current_temp: f64,
}

impl Readings {
    fn from_snapshot(snapshot: &WeatherSnapshot, country: Country) -> Self {
        let snowfall_cm = reading(snapshot.daily_snowfall_cm);
        let min_c = reading(snapshot.daily_min_temp_c);
        let current_c = reading(snapshot.current_temperature_c);

        match country {
            Country::UnitedStates => Self {
                snowfall: cm_to_inches(snowfall_cm),
                min_temp: celsius_to_fahrenheit(min_c),
                current_temp: celsius_to_fahrenheit(current_c),
            },
            Country::Canada => Self {
                snowfall: snowfall_cm,
                min_temp: min_c,
                current_temp: current_c,
            },
        }
    }
}

/// Points per band before the school multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0-50
    pub snow_points: u32,
    /// 0-30
    pub temperature_points: u32,
    /// 0-20
    pub bonus_points: u32,
    pub multiplier: f64,
}

impl ScoreBreakdown {
    pub fn total_points(&self) -> u32 {
        self.snow_points + self.temperature_points + self.bonus_points
    }
}

/// Model output. `score` is `raw` rounded to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityResult {
    pub score: u8,
    pub raw: f64,
    pub breakdown: ScoreBreakdown,
}

impl ProbabilityResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }

    /// Picked from the unrounded value, so 19.8 is still "very low".
    pub fn outlook(&self) -> Outlook {
        Outlook::from_probability(self.raw)
    }
}

/// Score the chance of a school closure today.
///
/// Pure and total: the same inputs always give the same result, and every
/// snapshot (including an empty one) produces a score in 0..=100.
pub fn score(
    snapshot: &WeatherSnapshot,
    country: Country,
    school: SchoolType,
) -> ProbabilityResult {
    let table = table_for(country);
    let r = Readings::from_snapshot(snapshot, country);

    let breakdown = ScoreBreakdown {
        snow_points: table.snow.points(r.snowfall),
        temperature_points: table.temperature.points(r.min_temp),
        bonus_points: table.bonus_points(r.snowfall, r.current_temp),
        multiplier: school.multiplier(),
    };

    let raw = (f64::from(breakdown.total_points()) * breakdown.multiplier).clamp(0.0, 100.0);

    ProbabilityResult {
        // raw is clamped to 0..=100, so the cast cannot truncate
        score: raw.round() as u8,
        raw,
        breakdown,
    }
}

/// Coarse bucket for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::High,
            40..=69 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Narrative shown with the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outlook {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Outlook {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 80.0 {
            Self::VeryHigh
        } else if probability >= 60.0 {
            Self::High
        } else if probability >= 40.0 {
            Self::Moderate
        } else if probability >= 20.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High: Schools will likely close!",
            Self::High => "High: Strong chance of closure or delays.",
            Self::Moderate => "Moderate: Possible delays, monitor conditions.",
            Self::Low => "Low: Unlikely closure, but watch weather.",
            Self::VeryLow => "Very Low: Normal school day expected.",
        }
    }
}
