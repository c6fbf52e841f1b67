//! HomeScreen detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shared::{
    is_schedule_workout, is_start_workout, no_params, params, schedule_params, start_workout_params,
};
use super::{DetectionRule, ScreenDetector};
use crate::domain::foundation::Screen;
use crate::domain::intent::{slot, IntentGuess, IntentId, MessageContext, SlotValue, Slots};

static TODAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:today'?s|what'?s (?:on|up|planned)(?: for)? today|plan for today|my day|agenda)\b")
        .expect("valid today regex")
});

static LOG_MEAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:ate|had|eaten|log (?:my )?(?:meal|breakfast|lunch|dinner|snack))\b")
        .expect("valid log meal regex")
});

static MEAL_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(breakfast|lunch|dinner|snack)\b").expect("valid meal type regex")
});

const RULES: &[DetectionRule] = &[
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
        intent: IntentId::ViewToday,
        confidence: 0.85,
        when: is_view_today,
        params: no_params,
    },
    DetectionRule {
        intent: IntentId::LogMeal,
        confidence: 0.8,
        when: is_log_meal,
        params: meal_params,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HomeDetector;

impl ScreenDetector for HomeDetector {
    fn screen(&self) -> Screen {
        Screen::Home
    }

    fn rules(&self) -> &'static [DetectionRule] {
        RULES
    }
}

pub fn detect_home_intents(
    message: &str,
    screen: &str,
    context: &MessageContext,
) -> Option<IntentGuess> {
    HomeDetector.detect(message, screen, context)
}

fn is_view_today(text: &str, _context: &MessageContext) -> bool {
    TODAY.is_match(text)
}

fn is_log_meal(text: &str, _context: &MessageContext) -> bool {
    LOG_MEAL.is_match(text)
}

fn meal_params(text: &str, _context: &MessageContext) -> Slots {
    let meal_type = MEAL_TYPE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());
    params([(slot::MEAL_TYPE, meal_type.map(SlotValue::from))])
}
