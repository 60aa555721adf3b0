use crate::consts::{DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD};
use crate::errors::{CourseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Economic,
    Standard,
    Premium,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Economic, Category::Standard, Category::Premium];

    pub fn label(self) -> &'static str {
        match self {
            Category::Economic => "Economic",
            Category::Standard => "Standard",
            Category::Premium => "Premium",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cost cutoffs between the three categories. Always `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    low: f64,
    high: f64,
}

#[derive(Deserialize)]
struct RawThresholds {
    low: f64,
    high: f64,
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = CourseError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        Thresholds::new(raw.low, raw.high)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low: DEFAULT_LOW_THRESHOLD, high: DEFAULT_HIGH_THRESHOLD }
    }
}

impl Thresholds {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(CourseError::InvalidThresholds { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 { self.low }
    pub fn high(&self) -> f64 { self.high }

    /// Boundaries belong to the higher band.
    pub fn category(&self, cost: f64) -> Category {
        if cost < self.low {
            Category::Economic
        } else if cost < self.high {
            Category::Standard
        } else {
            Category::Premium
        }
    }
}

pub fn categorize(cost: f64, thresholds: &Thresholds) -> Category {
    thresholds.category(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands() {
        let t = Thresholds::default();
        assert_eq!(categorize(0.0, &t), Category::Economic);
        assert_eq!(categorize(19_999.99, &t), Category::Economic);
        assert_eq!(categorize(20_000.0, &t), Category::Standard);
        assert_eq!(categorize(59_999.99, &t), Category::Standard);
        assert_eq!(categorize(60_000.0, &t), Category::Premium);
        assert_eq!(categorize(1e12, &t), Category::Premium);
    }

    #[test]
    fn category_is_monotonic_in_cost() {
        let t = Thresholds::new(10.0, 20.0).unwrap();
        let mut prev = Category::Economic;
        for step in 0..=300 {
            let c = t.category(step as f64 * 0.1);
            assert!(c >= prev);
            prev = c;
        }
        assert_eq!(prev, Category::Premium);
    }

    #[test]
    fn rejects_inverted_or_equal_thresholds() {
        assert!(matches!(Thresholds::new(5.0, 5.0), Err(CourseError::InvalidThresholds { .. })));
        assert!(Thresholds::new(6.0, 5.0).is_err());
        assert!(Thresholds::new(f64::NAN, 5.0).is_err());
        assert!(Thresholds::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn deserialization_enforces_invariant() {
        let ok: Thresholds = serde_json::from_str(r#"{"low": 1.0, "high": 2.0}"#).unwrap();
        assert_eq!((ok.low(), ok.high()), (1.0, 2.0));
        assert!(serde_json::from_str::<Thresholds>(r#"{"low": 3.0, "high": 2.0}"#).is_err());
    }
}
