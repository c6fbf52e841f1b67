//! Screen-scoped detectors.
//!
//! Each detector owns one screen and an ordered rule list. A detector asked
//! about any other screen returns `None`, so detectors never cross-fire.
//! Within a detector the first matching rule wins; the order of the `RULES`
//! table is the priority order.

mod global;
mod home;
mod nutrition;
mod program;
mod progress;
mod recipe;
mod shared;
mod workout;

pub use global::{detect_global_intents, GlobalDetector};
pub use home::{detect_home_intents, HomeDetector};
pub use nutrition::{detect_nutrition_intents, NutritionDetector};
pub use program::{detect_program_intents, ProgramDetector};
pub use progress::{detect_progress_intents, ProgressDetector};
pub use recipe::{detect_recipe_intents, RecipeDetector};
pub use workout::{detect_workout_intents, WorkoutDetector};

use tracing::debug;

use crate::domain::extraction::normalize;
use crate::domain::foundation::{Confidence, Screen};
use crate::domain::intent::{IntentGuess, IntentId, MessageContext, Slots};

/// One `(predicate, builder)` entry in a detector's priority list.
#[derive(Clone, Copy)]
pub struct DetectionRule {
    pub intent: IntentId,
    pub confidence: f64,
    pub when: fn(&str, &MessageContext) -> bool,
    pub params: fn(&str, &MessageContext) -> Slots,
}

impl std::fmt::Debug for DetectionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionRule")
            .field("intent", &self.intent)
            .field("confidence", &self.confidence)
            .finish()
    }
}

/// First rule whose predicate holds, applied to normalized text.
pub fn first_match(
    rules: &[DetectionRule],
    text: &str,
    context: &MessageContext,
) -> Option<IntentGuess> {
    let rule = rules.iter().find(|r| (r.when)(text, context))?;
    Some(IntentGuess {
        intent: rule.intent,
        confidence: Confidence::new(rule.confidence),
        parameters: (rule.params)(text, context),
    })
}

/// A detector bound to one screen.
pub trait ScreenDetector: Send + Sync {
    fn screen(&self) -> Screen;

    fn rules(&self) -> &'static [DetectionRule];

    /// `None` for any screen other than [`ScreenDetector::screen`].
    fn detect(&self, message: &str, screen: &str, context: &MessageContext) -> Option<IntentGuess> {
        if !self.screen().is(screen) {
            return None;
        }
        let text = normalize(message);
        let guess = first_match(self.rules(), &text, context);
        if let Some(guess) = &guess {
            debug!(
                screen,
                intent = %guess.intent,
                confidence = %guess.confidence,
                "Screen detector matched"
            );
        }
        guess
    }
}

static DETECTORS: [&dyn ScreenDetector; 7] = [
    &WorkoutDetector,
    &NutritionDetector,
    &ProgressDetector,
    &ProgramDetector,
    &RecipeDetector,
    &HomeDetector,
    &GlobalDetector,
];

/// All detectors, one per screen.
pub fn all_detectors() -> &'static [&'static dyn ScreenDetector] {
    &DETECTORS
}

/// The detector owning `screen`, if the name is known.
pub fn detector_for(screen: &str) -> Option<&'static dyn ScreenDetector> {
    DETECTORS.iter().copied().find(|d| d.screen().is(screen))
}

/// Runs the detector for the active screen.
pub fn detect_for_screen(message: &str, screen: &str, context: &MessageContext) -> Option<IntentGuess> {
    detector_for(screen)?.detect(message, screen, context)
}
