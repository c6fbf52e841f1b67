//! Candidate construction and confidence scoring.
//!
//! Confidence is additive and hand-tuned: a base score plus independent
//! bonuses, clamped to [0, 1]. Every number that moves a score lives here or
//! in the registry, so a score can always be explained term by term.

use super::registry::{IntentDefinition, PatternRegistry};
use super::values::{slot, IntentCandidate, MessageContext, SlotValue, Slots};
use crate::domain::extraction::ExtractedDate;
use crate::domain::foundation::Confidence;

pub const BASE_CONFIDENCE: f64 = 0.5;
pub const CANONICAL_SCREEN_BONUS: f64 = 0.1;
pub const COMPLETE_SLOTS_BONUS: f64 = 0.2;

/// Every registered intent whose patterns match `text`, in registry order.
pub fn score_candidates(
    registry: &PatternRegistry,
    text: &str,
    screen: &str,
    context: &MessageContext,
) -> Vec<IntentCandidate> {
    registry
        .intents()
        .iter()
        .filter(|def| def.matches(text))
        .map(|def| build_candidate(registry, def, text, screen, context))
        .collect()
}

fn build_candidate(
    registry: &PatternRegistry,
    def: &IntentDefinition,
    text: &str,
    screen: &str,
    context: &MessageContext,
) -> IntentCandidate {
    let slots = fill_slots(registry, def, text, context);
    let missing_slots: Vec<String> = def
        .required
        .iter()
        .filter(|name| !slots.contains_key(**name))
        .map(|name| name.to_string())
        .collect();

    let confidence = confidence_for(
        def.canonical_screen.is(screen),
        missing_slots.is_empty(),
        def.lexical_bonus(text),
    );

    IntentCandidate {
        intent: def.id,
        confidence,
        slots,
        missing_slots,
    }
}

/// Base + screen + completeness + lexical bonuses, clamped.
pub fn confidence_for(on_canonical_screen: bool, slots_complete: bool, lexical: f64) -> Confidence {
    let mut score = Confidence::new(BASE_CONFIDENCE);
    if on_canonical_screen {
        score = score.boosted(CANONICAL_SCREEN_BONUS);
    }
    if slots_complete {
        score = score.boosted(COMPLETE_SLOTS_BONUS);
    }
    score.boosted(lexical)
}

fn fill_slots(
    registry: &PatternRegistry,
    def: &IntentDefinition,
    text: &str,
    context: &MessageContext,
) -> Slots {
    let today = context.today();
    let mut slots = Slots::new();

    for name in def.slot_names() {
        let value = registry
            .slot(name)
            .and_then(|spec| spec.extractor.extract(text, today));
        if let Some(value) = value {
            slots.insert(name.to_string(), value);
        }
    }

    if def.use_active_workout {
        if let Some(workout) = &context.active_workout {
            if !slots.contains_key(slot::EXERCISE) {
                if let Some(exercise) = &workout.current_exercise {
                    slots.insert(slot::EXERCISE.to_string(), SlotValue::from(exercise.clone()));
                }
            }
            if !slots.contains_key(slot::WEIGHT) {
                if let Some(weight) = workout.last_weight {
                    slots.insert(slot::WEIGHT.to_string(), SlotValue::from(weight));
                }
            }
        }
    }

    if def.default_date_today && !slots.contains_key(slot::DATE) {
        slots.insert(slot::DATE.to_string(), ExtractedDate::today(today).into());
    }

    slots
}
