//! WorkoutScreen detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shared::{
    is_create_program, is_schedule_workout, is_start_workout, no_params, params, program_params,
    schedule_params, set_params, start_workout_params,
};
use super::{DetectionRule, ScreenDetector};
use crate::domain::extraction::{
    extract_date_from_message, extract_muscle_groups, extract_weight_and_reps, find_exercise_mention,
    find_weight_by_reps,
};
use crate::domain::foundation::Screen;
use crate::domain::intent::{slot, IntentGuess, IntentId, MessageContext, SlotValue, Slots};

static FINISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:finish(?:ed)?|end|complete|wrap up|done with)\b.*\b(?:workout|session|training)\b|^(?:i'?m |all |im )?(?:done|finished)[!.]*$",
    )
    .expect("valid finish regex")
});

static CREATE_WORKOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:create|make|build|generate|design|give me)\b.*\b(?:workout|routine|session)\b|\b(?:push|pull|legs?|upper body|lower body|full body)\s+(?:day|workout|session)\b",
    )
    .expect("valid create workout regex")
});

static SWAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:swap|replace|substitute|switch)\b").expect("valid swap regex")
});

static ADD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\badd\b").expect("valid add regex"));

static REST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:rest|timer|break)\b").expect("valid rest regex")
});

static SECONDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:s|sec|secs|seconds?)\b").expect("valid seconds regex")
});

static MINUTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:m|min|mins|minutes?)\b").expect("valid minutes regex")
});

const RULES: &[DetectionRule] = &[
    DetectionRule {
        intent: IntentId::LogSet,
        confidence: 0.95,
        when: is_log_set,
        params: set_params,
    },
    DetectionRule {
        intent: IntentId::FinishWorkout,
        confidence: 0.9,
        when: is_finish,
        params: no_params,
    },
    DetectionRule {
        intent: IntentId::CreateProgram,
        confidence: 0.85,
        when: is_create_program,
        params: program_params,
    },
    DetectionRule {
        intent: IntentId::StartWorkout,
        confidence: 0.9,
        when: is_start_workout,
        params: start_workout_params,
    },
    DetectionRule {
        intent: IntentId::ScheduleWorkout,
        confidence: 0.85,
        when: is_schedule_workout,
        params: schedule_params,
    },
    DetectionRule {
        intent: IntentId::CreateWorkout,
        confidence: 0.85,
        when: is_create_workout,
        params: create_workout_params,
    },
    DetectionRule {
        intent: IntentId::SwapExercise,
        confidence: 0.85,
        when: is_swap,
        params: exercise_params,
    },
    DetectionRule {
        intent: IntentId::AddExercise,
        confidence: 0.8,
        when: is_add_exercise,
        params: exercise_params,
    },
    DetectionRule {
        intent: IntentId::StartRestTimer,
        confidence: 0.8,
        when: is_rest,
        params: rest_params,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutDetector;

impl ScreenDetector for WorkoutDetector {
    fn screen(&self) -> Screen {
        Screen::Workout
    }

    fn rules(&self) -> &'static [DetectionRule] {
        RULES
    }
}

pub fn detect_workout_intents(
    message: &str,
    screen: &str,
    context: &MessageContext,
) -> Option<IntentGuess> {
    WorkoutDetector.detect(message, screen, context)
}

/// A `185x5` set, or bare reps while a workout is running.
fn is_log_set(text: &str, context: &MessageContext) -> bool {
    find_weight_by_reps(text).is_some()
        || (context.has_active_workout() && extract_weight_and_reps(text).reps.is_some())
}

fn is_finish(text: &str, _context: &MessageContext) -> bool {
    FINISH.is_match(text)
}

fn is_create_workout(text: &str, _context: &MessageContext) -> bool {
    CREATE_WORKOUT.is_match(text)
}

fn create_workout_params(text: &str, context: &MessageContext) -> Slots {
    params([
        (slot::MUSCLE_GROUPS, Some(extract_muscle_groups(text).into())),
        (slot::DATE, extract_date_from_message(text, context.today()).map(SlotValue::from)),
    ])
}

fn is_swap(text: &str, _context: &MessageContext) -> bool {
    SWAP.is_match(text)
}

fn is_add_exercise(text: &str, _context: &MessageContext) -> bool {
    ADD.is_match(text) && (find_exercise_mention(text).is_some() || text.contains("exercise"))
}

fn exercise_params(text: &str, _context: &MessageContext) -> Slots {
    params([(slot::EXERCISE, find_exercise_mention(text).map(SlotValue::from))])
}

fn is_rest(text: &str, _context: &MessageContext) -> bool {
    REST.is_match(text)
}

fn rest_params(text: &str, _context: &MessageContext) -> Slots {
    let seconds = capture_u32(&SECONDS, text)
        .or_else(|| capture_u32(&MINUTES, text).map(|m| m * 60));
    params([(slot::SECONDS, seconds.map(SlotValue::from))])
}

fn capture_u32(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::ActiveWorkout;

    const SCREEN: &str = "WorkoutScreen";

    fn detect(text: &str) -> Option<IntentGuess> {
        detect_workout_intents(text, SCREEN, &MessageContext::default())
    }

    fn intent(text: &str) -> Option<IntentId> {
        detect(text).map(|g| g.intent)
    }

    #[test]
    fn logs_sets_with_exercise() {
        let guess = detect("squat 225x5").unwrap();
        assert_eq!(guess.intent, IntentId::LogSet);
        assert_eq!(guess.confidence.value(), 0.95);
        assert_eq!(guess.parameters[slot::EXERCISE], SlotValue::from("squat"));
    }

    #[test]
    fn bare_reps_need_an_active_workout() {
        assert_eq!(intent("8 reps"), None);
        let ctx = MessageContext::default().with_active_workout(ActiveWorkout {
            current_exercise: Some("bench".into()),
            last_weight: Some(185.0),
            last_reps: None,
        });
        let guess = detect_workout_intents("8 reps", SCREEN, &ctx).unwrap();
        assert_eq!(guess.intent, IntentId::LogSet);
        assert_eq!(guess.parameters[slot::WEIGHT], SlotValue::Number(185.0));
    }

    #[test]
    fn finish_and_start() {
        assert_eq!(intent("finish workout"), Some(IntentId::FinishWorkout));
        assert_eq!(intent("i'm done"), Some(IntentId::FinishWorkout));
        assert_eq!(intent("start my workout"), Some(IntentId::StartWorkout));
    }

    #[test]
    fn program_creation_requires_no_food_words() {
        assert_eq!(intent("create a 4 days a week program"), Some(IntentId::CreateProgram));
        assert_ne!(intent("create a meal plan"), Some(IntentId::CreateProgram));
        assert_ne!(intent("create a meal plan"), Some(IntentId::CreateWorkout));
    }

    #[test]
    fn create_workout_defaults_to_full_body() {
        let guess = detect("make me a workout").unwrap();
        assert_eq!(guess.intent, IntentId::CreateWorkout);
        assert_eq!(
            guess.parameters[slot::MUSCLE_GROUPS].as_list().unwrap(),
            &["Full Body".to_string()]
        );
    }

    #[test]
    fn schedule_with_date() {
        let guess = detect_workout_intents(
            "schedule leg day for tuesday",
            SCREEN,
            &MessageContext::on(chrono::NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()),
        )
        .unwrap();
        assert_eq!(guess.intent, IntentId::ScheduleWorkout);
        assert_eq!(guess.parameters[slot::DATE].as_date().unwrap().iso(), "2026-10-20");
    }

    #[test]
    fn swap_add_and_rest() {
        assert_eq!(intent("swap bench for dips"), Some(IntentId::SwapExercise));
        assert_eq!(intent("add curls"), Some(IntentId::AddExercise));
        let rest = detect("rest 90 seconds").unwrap();
        assert_eq!(rest.intent, IntentId::StartRestTimer);
        assert_eq!(rest.parameters[slot::SECONDS], SlotValue::Number(90.0));
        let minutes = detect("start a 2 min timer").unwrap();
        assert_eq!(minutes.parameters[slot::SECONDS], SlotValue::Number(120.0));
    }

    #[test]
    fn unrelated_text_is_none() {
        assert_eq!(intent("what's the weather"), None);
    }

    #[test]
    fn meal_plans_are_not_scheduled_workouts() {
        assert_ne!(intent("create a meal plan for tomorrow"), Some(IntentId::ScheduleWorkout));
        assert_ne!(intent("plan my meals for friday"), Some(IntentId::ScheduleWorkout));
    }

    #[test]
    fn workout_plan_is_a_workout_not_a_program() {
        assert_eq!(intent("make me a workout plan"), Some(IntentId::CreateWorkout));
    }
}
