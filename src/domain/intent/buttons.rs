//! Button fast path.
//!
//! UI buttons send their label verbatim. Labels are matched exactly (after
//! trimming, case-sensitive) and bypass every pattern.

use serde::{Deserialize, Serialize};

use super::values::{slot, IntentId, SlotValue, Slots};
use crate::domain::extraction::MuscleGroup;

/// Intent and prefilled data for a known button label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonIntent {
    pub intent: IntentId,
    pub data: Slots,
}

const SIMPLE_BUTTONS: &[(&str, IntentId)] = &[
    ("Start Workout", IntentId::StartWorkout),
    ("Finish Workout", IntentId::FinishWorkout),
    ("Log Set", IntentId::LogSet),
    ("Create Workout", IntentId::CreateWorkout),
    ("Create Program", IntentId::CreateProgram),
    ("Start Rest Timer", IntentId::StartRestTimer),
    ("Log Meal", IntentId::LogMeal),
    ("Log Water", IntentId::LogWater),
    ("Check Macros", IntentId::CheckMacros),
    ("View Progress", IntentId::ShowProgress),
    ("Check PRs", IntentId::CheckPr),
    ("Find Recipes", IntentId::FindRecipe),
    ("View Program", IntentId::ViewProgram),
    ("What's Today", IntentId::ViewToday),
    ("Help", IntentId::Help),
];

const SPLIT_BUTTONS: &[(&str, &[MuscleGroup])] = &[
    (
        "Push Day",
        &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
    ),
    ("Pull Day", &[MuscleGroup::Back, MuscleGroup::Biceps]),
    ("Leg Day", &[MuscleGroup::Legs]),
    ("Full Body", &[MuscleGroup::FullBody]),
];

pub fn is_button_press(text: &str) -> bool {
    get_button_intent(text).is_some()
}

pub fn get_button_intent(text: &str) -> Option<ButtonIntent> {
    let label = text.trim();

    if let Some((_, intent)) = SIMPLE_BUTTONS.iter().find(|(l, _)| *l == label) {
        return Some(ButtonIntent {
            intent: *intent,
            data: Slots::new(),
        });
    }

    SPLIT_BUTTONS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, groups)| {
            let mut data = Slots::new();
            data.insert(slot::MUSCLE_GROUPS.to_string(), SlotValue::from(groups.to_vec()));
            ButtonIntent {
                intent: IntentId::CreateWorkout,
                data,
            }
        })
}
