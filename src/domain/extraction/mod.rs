//! Slot extractors.
//!
//! Pure functions from text to typed values. None of them fail: a value the
//! text does not contain is simply `None`, and the caller decides whether
//! that makes a slot missing.
//!
//! - `text` - normalization and keyword helpers
//! - `numbers` - weight, reps, percentages, days per week
//! - `exercise` - exercise names by adjacency to a weight-by-reps match
//! - `date` - relative, absolute and named dates
//! - `muscle` - muscle groups and workout splits

pub mod date;
pub mod exercise;
pub mod muscle;
pub mod numbers;
pub mod text;

pub use date::{extract_date_from_message, next_weekday, DateKind, ExtractedDate};
pub use exercise::{exercise_near_set, find_exercise_mention, match_vocabulary, EXERCISE_VOCABULARY};
pub use muscle::{explicit_muscle_groups, extract_muscle_group, extract_muscle_groups, MuscleGroup};
pub use numbers::{
    extract_days_per_week, extract_number, extract_percent_base, extract_percentage,
    extract_weight, extract_weight_and_reps, find_weight_by_reps, SetMatch, WeightReps,
};
pub use text::{contains_any, contains_any_word, contains_word, normalize, tokens};
