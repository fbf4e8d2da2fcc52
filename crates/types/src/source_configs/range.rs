//! Closed numeric range used to bound generated values.

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds finite and `min <= max`
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map a normalized position (0.0 to 1.0) into the range
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t.clamp(0.0, 1.0) * self.span()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(ValueRange::new(-30.0, -25.0).is_valid());
        assert!(ValueRange::new(5.0, 5.0).is_valid());
        assert!(!ValueRange::new(95.0, 70.0).is_valid());
        assert!(!ValueRange::new(f64::NAN, 1.0).is_valid());
        assert!(!ValueRange::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_lerp_clamps() {
        let range = ValueRange::new(70.0, 95.0);
        assert_eq!(range.lerp(0.0), 70.0);
        assert_eq!(range.lerp(1.0), 95.0);
        assert_eq!(range.lerp(2.0), 95.0);
        assert!(range.contains(range.lerp(0.5)));
    }
}
