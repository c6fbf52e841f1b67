//! ChatScreen detector: the catch-all chat surface.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shared::{
    check_pr_params, is_check_pr, is_schedule_workout, no_params, params, schedule_params,
};
use super::{DetectionRule, ScreenDetector};
use crate::domain::foundation::Screen;
use crate::domain::intent::{slot, IntentGuess, IntentId, MessageContext, SlotValue, Slots};

static NAVIGATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:go to|open|take me to|switch to|navigate to)\s+(?:the\s+|my\s+)?(workouts?|nutrition|food|progress|programs?|recipes?|home)\b",
    )
    .expect("valid navigate regex")
});

static HELP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:help|how do i|how does|what does|explain)\b").expect("valid help regex")
});

const RULES: &[DetectionRule] = &[
    DetectionRule {
        intent: IntentId::Navigate,
        confidence: 0.9,
        when: is_navigate,
        params: navigate_params,
    },
    DetectionRule {
        intent: IntentId::ScheduleWorkout,
        confidence: 0.85,
        when: is_schedule_workout,
        params: schedule_params,
    },
    DetectionRule {
        intent: IntentId::CheckPr,
        confidence: 0.85,
        when: is_check_pr,
        params: check_pr_params,
    },
    DetectionRule {
        intent: IntentId::Help,
        confidence: 0.8,
        when: is_help,
        params: no_params,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalDetector;

impl ScreenDetector for GlobalDetector {
    fn screen(&self) -> Screen {
        Screen::Chat
    }

    fn rules(&self) -> &'static [DetectionRule] {
        RULES
    }
}

pub fn detect_global_intents(
    message: &str,
    screen: &str,
    context: &MessageContext,
) -> Option<IntentGuess> {
    GlobalDetector.detect(message, screen, context)
}

fn is_navigate(text: &str, _context: &MessageContext) -> bool {
    NAVIGATE.is_match(text)
}

fn navigate_params(text: &str, _context: &MessageContext) -> Slots {
    let target = NAVIGATE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| target_screen(m.as_str()));
    params([(slot::SCREEN, target.map(|s| SlotValue::from(s.name())))])
}

fn target_screen(word: &str) -> Option<Screen> {
    let screen = match word {
        "workout" | "workouts" => Screen::Workout,
        "nutrition" | "food" => Screen::Nutrition,
        "progress" => Screen::Progress,
        "program" | "programs" => Screen::Program,
        "recipe" | "recipes" => Screen::Recipe,
        "home" => Screen::Home,
        _ => return None,
    };
    Some(screen)
}

fn is_help(text: &str, _context: &MessageContext) -> bool {
    HELP.is_match(text)
}
