//! Country-specific postal code validation.
//!
//! A [`PostalCode`] can only be built through [`PostalCode::parse`], so
//! anything handed to the geocoder has already passed its country's pattern.

use serde::Serialize;

use crate::error::ValidationError;
use crate::types::Country;

/// A validated, normalized postal or ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostalCode {
    country: Country,
    normalized: String,
}

impl PostalCode {
    /// Validate `input` for `country`.
    ///
    /// Whitespace anywhere is ignored and letters are case-insensitive.
    /// US: `NNNNN` or `NNNNN-NNNN`. Canada: `ANA NAN`.
    pub fn parse(input: &str, country: Country) -> Result<Self, ValidationError> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        if compact.is_empty() {
            return Err(ValidationError::Empty);
        }

        let valid = match country {
            Country::UnitedStates => is_us_zip(&compact),
            Country::Canada => is_canadian_postal(&compact),
        };
        if !valid {
            return Err(ValidationError::malformed(country, input.trim()));
        }

        let normalized = match country {
            Country::UnitedStates => compact,
            Country::Canada => format!("{} {}", &compact[..3], &compact[3..]),
        };

        Ok(Self {
            country,
            normalized,
        })
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// Canonical text: `90210`, `90210-1234` or `M5V 3L9`
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized)
    }
}

fn is_us_zip(code: &str) -> bool {
    let bytes = code.as_bytes();
    let five_digits = |b: &[u8]| b.len() == 5 && b.iter().all(u8::is_ascii_digit);

    match bytes.len() {
        5 => five_digits(bytes),
        10 => {
            five_digits(&bytes[..5])
                && bytes[5] == b'-'
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

fn is_canadian_postal(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 6
        && bytes.iter().enumerate().all(|(i, b)| {
            if i % 2 == 0 {
                b.is_ascii_uppercase()
            } else {
                b.is_ascii_digit()
            }
        })
}
