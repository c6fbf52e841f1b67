//! Strength calculators backing the calculator intents.

use crate::domain::intent::{slot, IntentId, Slots};

/// Epley estimated one-rep max, rounded to one decimal.
///
/// A single rep is already a max, so it is returned as-is.
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps <= 1 {
        return round1(weight);
    }
    round1(weight * (1.0 + f64::from(reps) / 30.0))
}

/// `percentage`% of `base`, rounded to one decimal.
pub fn percent_of(percentage: f64, base: f64) -> f64 {
    round1(base * percentage / 100.0)
}

/// Runs the calculator for a resolved calculator intent.
///
/// `None` for any other intent, or when a required number is absent.
pub fn calculate(intent: IntentId, slots: &Slots) -> Option<f64> {
    let number = |name: &str| slots.get(name).and_then(|v| v.as_number());
    match intent {
        IntentId::CalculateOneRepMax => {
            let reps = number(slot::REPS)?;
            Some(estimate_one_rep_max(number(slot::WEIGHT)?, reps as u32))
        }
        IntentId::CalculatePercent => Some(percent_of(
            number(slot::PERCENTAGE)?,
            number(slot::ONE_REP_MAX)?,
        )),
        _ => None,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::SlotValue;

    #[test]
    fn epley() {
        assert_eq!(estimate_one_rep_max(225.0, 5), 262.5);
        assert_eq!(estimate_one_rep_max(100.0, 10), 133.3);
    }

    #[test]
    fn single_rep_is_the_max() {
        assert_eq!(estimate_one_rep_max(315.0, 1), 315.0);
    }

    #[test]
    fn percentages() {
        assert_eq!(percent_of(80.0, 225.0), 180.0);
        assert_eq!(percent_of(72.5, 300.0), 217.5);
    }

    #[test]
    fn calculate_dispatches_on_intent() {
        let mut slots = Slots::new();
        slots.insert(slot::WEIGHT.into(), SlotValue::Number(225.0));
        slots.insert(slot::REPS.into(), SlotValue::Number(5.0));
        assert_eq!(calculate(IntentId::CalculateOneRepMax, &slots), Some(262.5));
        assert_eq!(calculate(IntentId::LogSet, &slots), None);
        assert_eq!(calculate(IntentId::CalculatePercent, &slots), None);
    }
}
