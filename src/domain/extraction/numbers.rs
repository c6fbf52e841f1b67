//! Numeric slot extraction: weight, reps, percentages, training frequency.
//!
//! The composite `<weight>x<reps>` pattern always wins over the single-slot
//! patterns. When it matches, the weight-only and reps-only patterns are not
//! consulted at all, so a message can never yield two different weights.

use once_cell::sync::Lazy;
use regex::Regex;

static WEIGHT_BY_REPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:x|×|by)\s*(\d+)\b").expect("valid weight-by-reps regex")
});

static WEIGHT_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:lbs?|pounds?|kgs?|kilos?)\b").expect("valid weight regex")
});

static REPS_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:reps?|repetitions?)\b").expect("valid reps regex")
});

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:%|percent\b)").expect("valid percentage regex")
});

static PERCENT_BASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:%|percent)\s*of\s+(?:my\s+)?(\d+(?:\.\d+)?)").expect("valid percent base regex")
});

static DAYS_PER_WEEK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([1-7])\s*(?:days?|x|times)\s*(?:per|/|a)?\s*(?:week|wk)\b")
        .expect("valid days-per-week regex")
});

static ANY_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("valid number regex"));

/// A `<weight>x<reps>` hit and where it sits in the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetMatch {
    pub weight: f64,
    pub reps: u32,
    pub start: usize,
    pub end: usize,
}

/// Weight and reps pulled from one message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightReps {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    /// Present only when the composite pattern matched.
    pub set: Option<SetMatch>,
}

/// Finds the first composite `185x5` / `185 × 5` / `185 by 5` pattern.
pub fn find_weight_by_reps(text: &str) -> Option<SetMatch> {
    WEIGHT_BY_REPS.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let weight = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let reps = caps.get(2)?.as_str().parse::<u32>().ok()?;
        Some(SetMatch {
            weight,
            reps,
            start: whole.start(),
            end: whole.end(),
        })
    })
}

/// Weight and reps with composite precedence.
pub fn extract_weight_and_reps(text: &str) -> WeightReps {
    if let Some(set) = find_weight_by_reps(text) {
        return WeightReps {
            weight: Some(set.weight),
            reps: Some(set.reps),
            set: Some(set),
        };
    }
    WeightReps {
        weight: first_capture(&WEIGHT_ONLY, text).and_then(|s| s.parse().ok()),
        reps: first_capture(&REPS_ONLY, text).and_then(|s| s.parse().ok()),
        set: None,
    }
}

/// `80%` or `80 percent`.
pub fn extract_percentage(text: &str) -> Option<f64> {
    first_capture(&PERCENTAGE, text).and_then(|s| s.parse().ok())
}

/// The weight a percentage is taken of: `80% of 225`.
pub fn extract_percent_base(text: &str) -> Option<f64> {
    first_capture(&PERCENT_BASE, text).and_then(|s| s.parse().ok())
}

/// `4 days a week`, `3x/week`, `5 times per week`.
pub fn extract_days_per_week(text: &str) -> Option<u8> {
    first_capture(&DAYS_PER_WEEK, text).and_then(|s| s.parse().ok())
}

/// Weight-only pattern, ignoring the composite form.
pub fn extract_weight(text: &str) -> Option<f64> {
    first_capture(&WEIGHT_ONLY, text).and_then(|s| s.parse().ok())
}

/// First bare number anywhere in the text.
pub fn extract_number(text: &str) -> Option<f64> {
    first_capture(&ANY_NUMBER, text).and_then(|s| s.parse().ok())
}

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_pattern_variants() {
        for text in ["185x5", "185 x 5", "185×5", "185 by 5"] {
            let wr = extract_weight_and_reps(text);
            assert_eq!(wr.weight, Some(185.0), "{}", text);
            assert_eq!(wr.reps, Some(5), "{}", text);
        }
    }

    #[test]
    fn composite_takes_precedence_over_single_patterns() {
        // "200 lbs" and "8 reps" would each match alone.
        let wr = extract_weight_and_reps("185x5 then 200 lbs for 8 reps");
        assert_eq!(wr.weight, Some(185.0));
        assert_eq!(wr.reps, Some(5));
        assert!(wr.set.is_some());
    }

    #[test]
    fn single_patterns_when_no_composite() {
        let wr = extract_weight_and_reps("did 225 lbs for 3 reps");
        assert_eq!(wr.weight, Some(225.0));
        assert_eq!(wr.reps, Some(3));
        assert!(wr.set.is_none());
    }

    #[test]
    fn single_patterns_are_independent() {
        assert_eq!(extract_weight_and_reps("8 reps").weight, None);
        assert_eq!(extract_weight_and_reps("8 reps").reps, Some(8));
        assert_eq!(extract_weight_and_reps("100 kg").reps, None);
    }

    #[test]
    fn decimal_weights() {
        let set = find_weight_by_reps("ohp 102.5x6").unwrap();
        assert_eq!(set.weight, 102.5);
        assert_eq!(set.reps, 6);
        assert_eq!(set.start, 4);
    }

    #[test]
    fn percentage_and_base() {
        assert_eq!(extract_percentage("what's 80% of 225"), Some(80.0));
        assert_eq!(extract_percent_base("what's 80% of 225"), Some(225.0));
        assert_eq!(extract_percent_base("75 percent of my 300"), Some(300.0));
        assert_eq!(extract_percentage("no numbers"), None);
    }

    #[test]
    fn days_per_week_forms() {
        assert_eq!(extract_days_per_week("4 days a week"), Some(4));
        assert_eq!(extract_days_per_week("3x/week"), Some(3));
        assert_eq!(extract_days_per_week("5 times per week"), Some(5));
        assert_eq!(extract_days_per_week("3 days/week"), Some(3));
        assert_eq!(extract_days_per_week("twice a week"), None);
    }
}
