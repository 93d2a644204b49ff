//! Metric to imperial conversions.

/// Inches per centimeter
pub const INCHES_PER_CM: f64 = 0.393701;

pub fn cm_to_inches(cm: f64) -> f64 {
    cm * INCHES_PER_CM
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(-15.0), 5.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn eight_inches() {
        assert!((cm_to_inches(20.32) - 8.0).abs() < 1e-4);
        assert!(cm_to_inches(20.32) >= 8.0);
    }
}
