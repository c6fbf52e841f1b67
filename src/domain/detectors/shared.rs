//! Predicates and parameter builders used by more than one screen.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::extraction::{
    contains_any, explicit_muscle_groups, extract_date_from_message, extract_days_per_week,
    extract_muscle_groups, extract_weight_and_reps, exercise_near_set, find_exercise_mention,
    ExtractedDate,
};
use crate::domain::intent::{slot, MessageContext, SlotExtractor, SlotValue, Slots};

static MEAL_VOCABULARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:meals?|food|nutrition|diet|recipes?|calories|macros)\b").expect("valid meal regex")
});

static CREATE_PROGRAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:create|make|build|design|write|generate|give me)\b.*\b(?:program|split|training plan)\b")
        .expect("valid create program regex")
});

static PR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bprs?\b|\bbest\b|\bmax\b|personal record").expect("valid pr regex")
});

static START_WORKOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:start|begin)\b.*\b(?:workout|session|training|lifting|day)\b|\blet'?s\s+(?:lift|train|go|work\s?out)\b|\btime to (?:lift|train)\b",
    )
    .expect("valid start workout regex")
});

static SCHEDULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:schedule|reschedule|book|plan)\b").expect("valid schedule regex")
});

/// Collects only the parameters that were actually found.
pub fn params<I>(pairs: I) -> Slots
where
    I: IntoIterator<Item = (&'static str, Option<SlotValue>)>,
{
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
}

pub fn no_params(_text: &str, _context: &MessageContext) -> Slots {
    Slots::new()
}

pub fn mentions_meal(text: &str) -> bool {
    MEAL_VOCABULARY.is_match(text)
}

/// "create ... program", unless the text is about food.
pub fn is_create_program(text: &str, _context: &MessageContext) -> bool {
    CREATE_PROGRAM.is_match(text) && !mentions_meal(text)
}

pub fn program_params(text: &str, context: &MessageContext) -> Slots {
    params([
        (slot::DAYS_PER_WEEK, extract_days_per_week(text).map(SlotValue::from)),
        (slot::GOAL, SlotExtractor::TrainingGoal.extract(text, context.today())),
    ])
}

/// PR / best / max, guarded against "program" and "personalized".
pub fn is_check_pr(text: &str, _context: &MessageContext) -> bool {
    PR.is_match(text) && !contains_any(text, &["program", "personalized"])
}

pub fn check_pr_params(text: &str, _context: &MessageContext) -> Slots {
    params([(slot::EXERCISE, find_exercise_mention(text).map(SlotValue::from))])
}

pub fn is_start_workout(text: &str, _context: &MessageContext) -> bool {
    START_WORKOUT.is_match(text)
}

/// Explicit muscle groups and a date that defaults to today.
pub fn start_workout_params(text: &str, context: &MessageContext) -> Slots {
    let today = context.today();
    let date = extract_date_from_message(text, today).unwrap_or_else(|| ExtractedDate::today(today));
    params([
        (slot::MUSCLE_GROUPS, explicit_muscle_groups(text).map(SlotValue::from)),
        (slot::DATE, Some(date.into())),
    ])
}

/// "schedule", or a planning verb with a date attached, unless the text is about food.
pub fn is_schedule_workout(text: &str, context: &MessageContext) -> bool {
    SCHEDULE.is_match(text)
        && !mentions_meal(text)
        && (text.contains("schedule") || extract_date_from_message(text, context.today()).is_some())
}

pub fn schedule_params(text: &str, context: &MessageContext) -> Slots {
    params([
        (slot::DATE, extract_date_from_message(text, context.today()).map(SlotValue::from)),
        (slot::MUSCLE_GROUPS, Some(extract_muscle_groups(text).into())),
    ])
}

/// Weight, reps and exercise for a set, topped up from the active workout.
pub fn set_params(text: &str, context: &MessageContext) -> Slots {
    let wr = extract_weight_and_reps(text);
    let workout = context.active_workout.as_ref();

    let exercise = wr
        .set
        .and_then(|set| exercise_near_set(text, &set))
        .or_else(|| find_exercise_mention(text))
        .map(SlotValue::from)
        .or_else(|| {
            workout
                .and_then(|w| w.current_exercise.clone())
                .map(SlotValue::from)
        });
    let weight = wr
        .weight
        .or_else(|| workout.and_then(|w| w.last_weight))
        .map(SlotValue::from);

    params([
        (slot::WEIGHT, weight),
        (slot::REPS, wr.reps.map(SlotValue::from)),
        (slot::EXERCISE, exercise),
    ])
}
