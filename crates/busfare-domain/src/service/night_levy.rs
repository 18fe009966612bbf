//! Night-service levy

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NIGHT_START_HOUR: u32 = 22;
pub const DEFAULT_NIGHT_END_HOUR: u32 = 5;
pub const DEFAULT_NIGHT_SURCHARGE_FACTOR: f64 = 1.18;

/// Tolerance for float noise before rounding a fare up
const FARE_EPSILON: f64 = 1e-9;

/// Round a currency amount up to a whole unit, ignoring float noise below 1e-9
pub fn ceil_fare(amount: f64) -> u64 {
    (amount - FARE_EPSILON).ceil().max(0.0) as u64
}

/// Surcharge applied to fares evaluated inside the night window.
///
/// The window is `[start_hour, 24:00) ∪ [00:00, end_hour)` when it wraps
/// midnight, `[start_hour, end_hour)` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightLevy {
    pub start_hour: u32,
    pub end_hour: u32,
    pub factor: f64,
}

impl Default for NightLevy {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_NIGHT_START_HOUR,
            end_hour: DEFAULT_NIGHT_END_HOUR,
            factor: DEFAULT_NIGHT_SURCHARGE_FACTOR,
        }
    }
}

impl NightLevy {
    pub fn contains(&self, time: NaiveTime) -> bool {
        let hour = time.hour();
        if self.start_hour <= self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }

    /// Multiply by the factor and round up
    pub fn apply(&self, fare: u64) -> u64 {
        ceil_fare(fare as f64 * self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_window_edges() {
        let levy = NightLevy::default();
        assert!(!levy.contains(at(21, 59)));
        assert!(levy.contains(at(22, 0)));
        assert!(levy.contains(at(23, 59)));
        assert!(levy.contains(at(0, 0)));
        assert!(levy.contains(at(4, 59)));
        assert!(!levy.contains(at(5, 0)));
        assert!(!levy.contains(at(12, 0)));
    }

    #[test]
    fn test_non_wrapping_window() {
        let levy = NightLevy {
            start_hour: 1,
            end_hour: 4,
            factor: 1.1,
        };
        assert!(levy.contains(at(1, 0)));
        assert!(!levy.contains(at(4, 0)));
        assert!(!levy.contains(at(23, 0)));
    }

    #[test]
    fn test_apply_exact_factor() {
        let levy = NightLevy::default();
        assert_eq!(levy.apply(7000), 8260);
        assert_eq!(levy.apply(100), 118);
        assert_eq!(levy.apply(0), 0);
    }

    #[test]
    fn test_apply_rounds_up() {
        // 15 * 1.18 = 17.7
        assert_eq!(NightLevy::default().apply(15), 18);
    }

    #[test]
    fn test_ceil_fare_ignores_noise() {
        assert_eq!(ceil_fare(7000.000000000001), 7000);
        assert_eq!(ceil_fare(7000.2), 7001);
        assert_eq!(ceil_fare(-3.0), 0);
    }
}
