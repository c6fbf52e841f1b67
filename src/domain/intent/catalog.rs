//! Built-in intent catalogue.
//!
//! All patterns run against normalized (lowercased, trimmed) text.

use super::registry::{
    ClarificationTemplate, ConfusablePair, IntentSpec, RegistryBuilder, SlotExtractor,
    SmallTalkSpec,
};
use super::values::{slot, IntentId, SmallTalkKind};
use crate::domain::foundation::Screen;

const MEAL_VOCABULARY: &str = r"\b(?:meals?|food|nutrition|diet|recipes?|calories|macros)\b";
/// `5x5` next to these words names a scheme, not a logged set.
const TRAINING_SCHEME: &str = r"\b(?:programs?|splits?|plans?|routines?)\b";
const CREATION_VERBS: &str = r"\b(?:create|make|build|generate|design)\b";

pub(super) fn register_builtin(builder: RegistryBuilder) -> RegistryBuilder {
    let builder = register_slots(builder);
    let builder = register_intents(builder);
    let builder = register_clarifications(builder);
    let builder = register_confusables(builder);
    register_small_talk(builder)
}

fn register_slots(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .slot(slot::WEIGHT, SlotExtractor::Weight)
        .slot(slot::REPS, SlotExtractor::Reps)
        .slot(slot::EXERCISE, SlotExtractor::Exercise)
        .slot(slot::PERCENTAGE, SlotExtractor::Percentage)
        .slot(slot::ONE_REP_MAX, SlotExtractor::PercentBase)
        .slot(slot::DAYS_PER_WEEK, SlotExtractor::DaysPerWeek)
        .slot(slot::DATE, SlotExtractor::Date)
        .slot(slot::MUSCLE_GROUPS, SlotExtractor::MuscleGroups)
        .slot(slot::GOAL, SlotExtractor::TrainingGoal)
}

fn register_intents(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .intent(
            IntentSpec::new(IntentId::CreateWorkout, Screen::Workout)
                .patterns(&[
                    r"\b(?:create|make|build|generate|design|give me|plan)\b.*\b(?:workout|routine|session)\b",
                    r"\b(?:push|pull|legs?|upper body|lower body|full body|chest|back|arms?|shoulders?|core|abs)\s+(?:day|workout|session|routine)\b",
                ])
                .excludes(&[MEAL_VOCABULARY])
                .bonuses(&[(CREATION_VERBS, 0.2)])
                .required(&[slot::MUSCLE_GROUPS])
                .optional(&[slot::DATE]),
        )
        .intent(
            IntentSpec::new(IntentId::StartWorkout, Screen::Workout)
                .patterns(&[
                    r"\b(?:start|begin)\b.*\b(?:workout|session|training|lifting|day)\b",
                    r"\blet'?s\s+(?:lift|train|go|work\s?out)\b",
                    r"\btime to (?:lift|train|work\s?out)\b",
                ])
                .bonuses(&[(r"\b(?:start|begin)\b", 0.15)])
                .optional(&[slot::DATE, slot::MUSCLE_GROUPS])
                .default_date_today(),
        )
        .intent(
            IntentSpec::new(IntentId::LogSet, Screen::Workout)
                .patterns(&[
                    r"\d+(?:\.\d+)?\s*(?:x|×|by)\s*\d+",
                    r"\b(?:log|record|did|just did)\b.*\b(?:sets?|reps?|lbs?|kgs?|pounds)\b",
                ])
                .excludes(&[TRAINING_SCHEME])
                .bonuses(&[(r"\d+(?:\.\d+)?\s*(?:x|×|by)\s*\d+", 0.2)])
                .required(&[slot::WEIGHT, slot::REPS, slot::EXERCISE])
                .use_active_workout(),
        )
        .intent(
            IntentSpec::new(IntentId::CalculateOneRepMax, Screen::Progress)
                .patterns(&[
                    r"\b(?:1\s?rm|one[\s-]rep[\s-]max|e1rm)\b",
                    r"\b(?:estimate|calculate)\b.*\bmax\b",
                ])
                .bonuses(&[(r"\b(?:1\s?rm|one[\s-]rep[\s-]max|e1rm)\b", 0.15)])
                .required(&[slot::WEIGHT, slot::REPS])
                .optional(&[slot::EXERCISE]),
        )
        .intent(
            IntentSpec::new(IntentId::CalculatePercent, Screen::Progress)
                .patterns(&[r"\d+(?:\.\d+)?\s*(?:%|percent\b)"])
                .excludes(&[MEAL_VOCABULARY, r"\bbody\s?fat\b"])
                .bonuses(&[(r"(?:%|percent)\s*of\b", 0.15)])
                .required(&[slot::PERCENTAGE, slot::ONE_REP_MAX]),
        )
        .intent(
            IntentSpec::new(IntentId::CreateProgram, Screen::Program)
                .patterns(&[
                    r"\b(?:create|make|build|design|write|give me)\b.*\b(?:program|split|training plan)\b",
                    r"\b[1-7]\s*(?:days?|x|times)\s*(?:per|/|a)?\s*(?:week|wk)\b.*\b(?:program|plan|split|routine)\b",
                    r"\b(?:program|split)\b.*\b[1-7]\s*(?:days?|x|times)\b",
                ])
                .excludes(&[MEAL_VOCABULARY])
                .bonuses(&[(r"\b(?:program|split)\b", 0.15)])
                .required(&[slot::DAYS_PER_WEEK])
                .optional(&[slot::GOAL]),
        )
}

fn register_clarifications(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .clarification(ClarificationTemplate {
            intent: IntentId::CreateWorkout,
            prompt: "What do you want to train?",
            placeholder: Some("e.g. chest and triceps"),
            options: &["Push day", "Pull day", "Leg day", "Full body"],
        })
        .clarification(ClarificationTemplate {
            intent: IntentId::LogSet,
            prompt: "What did you lift? Give me the exercise, weight and reps.",
            placeholder: Some("e.g. bench 185x5"),
            options: &["bench 135x10", "squat 225x5", "deadlift 315x3"],
        })
        .clarification(ClarificationTemplate {
            intent: IntentId::CalculateOneRepMax,
            prompt: "What weight and how many reps?",
            placeholder: Some("e.g. 225x5"),
            options: &["225x5", "185x8", "315x3"],
        })
        .clarification(ClarificationTemplate {
            intent: IntentId::CalculatePercent,
            prompt: "What percentage of which max?",
            placeholder: Some("e.g. 80% of 225"),
            options: &["70% of 225", "80% of 225", "90% of 225"],
        })
        .clarification(ClarificationTemplate {
            intent: IntentId::CreateProgram,
            prompt: "How many days a week can you train?",
            placeholder: Some("e.g. 4 days a week"),
            options: &["3 days a week", "4 days a week", "5 days a week"],
        })
}

fn register_confusables(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .confusable(ConfusablePair {
            first: IntentId::StartWorkout,
            first_label: "Start a workout now",
            second: IntentId::CreateWorkout,
            second_label: "Build a new workout",
            prompt: "Do you want to start training now or build a new workout?",
        })
        .confusable(ConfusablePair {
            first: IntentId::CreateWorkout,
            first_label: "A single workout",
            second: IntentId::CreateProgram,
            second_label: "A multi-week program",
            prompt: "Should I build one workout or a full program?",
        })
        .confusable(ConfusablePair {
            first: IntentId::LogSet,
            first_label: "Log this set",
            second: IntentId::CalculateOneRepMax,
            second_label: "Estimate my 1RM",
            prompt: "Do you want to log that set or estimate your max from it?",
        })
        .confusable(ConfusablePair {
            first: IntentId::CalculateOneRepMax,
            first_label: "Estimate my 1RM",
            second: IntentId::CalculatePercent,
            second_label: "Work out a percentage",
            prompt: "Are you after your max or a percentage of it?",
        })
}

fn register_small_talk(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .small_talk(SmallTalkSpec {
            kind: SmallTalkKind::Thanks,
            patterns: &[r"^(?:thanks|thank you|thx|ty|cheers|much appreciated|appreciate it)\b"],
            responses: &[
                "You're welcome! Keep it up.",
                "Anytime. Go crush it!",
                "Happy to help!",
            ],
        })
        .small_talk(SmallTalkSpec {
            kind: SmallTalkKind::Greeting,
            patterns: &[
                r"^(?:hi|hello|hey|hiya|yo|howdy|sup|what'?s up|good (?:morning|afternoon|evening))(?:\s+(?:there|coach|buddy|friend))?[\s!.,?]*$",
                r"^how(?:'?s it going| are you(?: doing)?)[\s!.,?]*$",
            ],
            responses: &[
                "Hey! Ready to train?",
                "Hi there! What are we working on today?",
                "Hello! Want to start a workout or log a meal?",
            ],
        })
        .small_talk(SmallTalkSpec {
            kind: SmallTalkKind::Farewell,
            patterns: &[r"^(?:bye|goodbye|see ya|see you(?: later| tomorrow)?|good night|later)[\s!.]*$"],
            responses: &["See you next session!", "Rest up and recover well.", "Bye! Stay consistent."],
        })
        .small_talk(SmallTalkSpec {
            kind: SmallTalkKind::Interjection,
            patterns: &[
                r"^(?:ok|okay|k|cool|nice|awesome|great|lol|haha|got it|sounds good|perfect|sweet)[\s!.]*$",
            ],
            responses: &["👍", "Great!", "Got it."],
        })
        .small_talk(SmallTalkSpec {
            kind: SmallTalkKind::Capabilities,
            patterns: &[r"\b(?:what can you do|what do you do|how can you help|who are you|what are you)\b"],
            responses: &[
                "I can build workouts, log your sets, track nutrition and show your progress.",
                "Ask me to create a workout, log a set like \"bench 185x5\", or check your PRs.",
            ],
        })
}
