//! Confidence value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A heuristic score between 0.0 and 1.0 inclusive.
///
/// Every constructor clamps, so a `Confidence` can never leave the unit interval
/// no matter how many bonuses are stacked onto it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Zero confidence.
    pub const ZERO: Self = Self(0.0);

    /// Full confidence.
    pub const CERTAIN: Self = Self(1.0);

    /// Creates a new Confidence, clamping to the valid range.
    ///
    /// NaN collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Confidence, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("confidence", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw score.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns a new confidence with `bonus` added, clamped.
    pub fn boosted(self, bonus: f64) -> Self {
        Self::new(self.0 + bonus)
    }

    /// Absolute distance between two scores.
    pub fn gap(&self, other: Confidence) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_new_accepts_valid_values() {
        assert_eq!(Confidence::new(0.0).value(), 0.0);
        assert_eq!(Confidence::new(0.5).value(), 0.5);
        assert_eq!(Confidence::new(1.0).value(), 1.0);
    }

    #[test]
    fn confidence_new_clamps_both_ends() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.3).value(), 0.0);
        assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn confidence_try_new_rejects_out_of_range() {
        assert!(Confidence::try_new(0.95).is_ok());
        match Confidence::try_new(1.2) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "confidence");
                assert!((actual - 1.2).abs() < f64::EPSILON);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn boosted_stacks_and_clamps() {
        let c = Confidence::new(0.5).boosted(0.1).boosted(0.2);
        assert!((c.value() - 0.8).abs() < 1e-9);
        assert_eq!(c.boosted(0.5), Confidence::CERTAIN);
    }

    #[test]
    fn gap_is_symmetric() {
        let a = Confidence::new(0.8);
        let b = Confidence::new(0.7);
        assert!((a.gap(b) - b.gap(a)).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_serializes_as_bare_number() {
        let json = serde_json::to_string(&Confidence::new(0.9)).unwrap();
        assert_eq!(json, "0.9");
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        let ok: Confidence = serde_json::from_str("0.75").unwrap();
        assert_eq!(ok.value(), 0.75);
        assert!(serde_json::from_str::<Confidence>("5.0").is_err());
        assert!(serde_json::from_str::<Confidence>("-0.1").is_err());
    }

    #[test]
    fn confidence_displays_two_decimals() {
        assert_eq!(format!("{}", Confidence::new(0.95)), "0.95");
    }
}
