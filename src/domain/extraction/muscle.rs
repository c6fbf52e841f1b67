//! Muscle-group and workout-split extraction.
//!
//! Split vocabulary ("push day", "upper body") is checked first and is
//! exclusive: the first split that matches is the whole answer. Only when no
//! split matches are anatomical keywords accumulated, in a fixed order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::text::{contains_any_word, contains_word};

static LEG_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:legs?\s+day|leg\s+workout|leg\s+session)\b").expect("valid leg day regex")
});
static FULL_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:full|total|whole)[\s-]?body\b").expect("valid full body regex")
});
static UPPER_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bupper[\s-]?body\b").expect("valid upper body regex"));
static LOWER_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blower[\s-]?body\b").expect("valid lower body regex"));

/// Canonical muscle buckets used for workout generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Triceps,
    Biceps,
    Arms,
    Core,
    #[serde(rename = "Full Body")]
    FullBody,
}

impl MuscleGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Anatomical keyword table in accumulation order.
const ANATOMY: &[(MuscleGroup, &[&str])] = &[
    (MuscleGroup::Chest, &["chest", "pecs", "pec"]),
    (MuscleGroup::Back, &["back", "lats", "lat"]),
    (MuscleGroup::Legs, &["legs", "leg", "quads", "hamstrings", "glutes", "calves"]),
    (MuscleGroup::Shoulders, &["shoulders", "shoulder", "delts"]),
    (MuscleGroup::Triceps, &["triceps", "tricep", "tris"]),
    (MuscleGroup::Biceps, &["biceps", "bicep", "bis"]),
    (MuscleGroup::Arms, &["arms", "arm"]),
    (MuscleGroup::Core, &["core", "abs", "ab", "obliques"]),
];

/// Muscle groups named in `text`, defaulting to full body.
pub fn extract_muscle_groups(text: &str) -> Vec<MuscleGroup> {
    explicit_muscle_groups(text).unwrap_or_else(|| vec![MuscleGroup::FullBody])
}

/// Muscle groups only when the text actually names some.
pub fn explicit_muscle_groups(text: &str) -> Option<Vec<MuscleGroup>> {
    if let Some(split) = split_groups(text) {
        return Some(split);
    }
    let groups = anatomical_groups(text);
    if groups.is_empty() {
        None
    } else {
        Some(groups)
    }
}

/// First anatomical keyword hit, used where a single focus is expected.
pub fn extract_muscle_group(text: &str) -> Option<MuscleGroup> {
    anatomical_groups(text).into_iter().next()
}

fn split_groups(text: &str) -> Option<Vec<MuscleGroup>> {
    use MuscleGroup::*;

    let push = contains_word(text, "push");
    let pull = contains_word(text, "pull");

    if push {
        return Some(vec![Chest, Shoulders, Triceps]);
    }
    if pull && !push {
        return Some(vec![Back, Biceps]);
    }
    if LEG_DAY.is_match(text) && !push && !pull {
        return Some(vec![Legs]);
    }
    if FULL_BODY.is_match(text) {
        return Some(vec![FullBody]);
    }
    if UPPER_BODY.is_match(text) {
        return Some(vec![Chest, Back, Shoulders, Arms]);
    }
    if LOWER_BODY.is_match(text) {
        return Some(vec![Legs]);
    }
    None
}

fn anatomical_groups(text: &str) -> Vec<MuscleGroup> {
    let mut groups: Vec<MuscleGroup> = Vec::new();
    for (group, keywords) in ANATOMY {
        if *group == MuscleGroup::Arms
            && (groups.contains(&MuscleGroup::Triceps) || groups.contains(&MuscleGroup::Biceps))
        {
            continue;
        }
        if contains_any_word(text, keywords) && !groups.contains(group) {
            groups.push(*group);
        }
    }
    groups
}
