//! ProgramScreen detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shared::{is_create_program, no_params, params, program_params};
use super::{DetectionRule, ScreenDetector};
use crate::domain::extraction::extract_days_per_week;
use crate::domain::foundation::Screen;
use crate::domain::intent::{slot, IntentGuess, IntentId, MessageContext, SlotValue, Slots};

static START_PROGRAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:start|begin|follow|join|enroll in)\b.*\b(?:program|plan)\b")
        .expect("valid start program regex")
});

static MODIFY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:change|modify|edit|adjust|update|tweak)\b").expect("valid modify regex")
});

static VIEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:show|view|see|what'?s|current)\b|\bprogram\b").expect("valid view regex")
});

const RULES: &[DetectionRule] = &[
    DetectionRule {
        intent: IntentId::StartProgram,
        confidence: 0.9,
        when: is_start_program,
        params: no_params,
    },
    DetectionRule {
        intent: IntentId::CreateProgram,
        confidence: 0.9,
        when: is_create_program,
        params: program_params,
    },
    DetectionRule {
        intent: IntentId::ModifyProgram,
        confidence: 0.85,
        when: is_modify,
        params: modify_params,
    },
    DetectionRule {
        intent: IntentId::ViewProgram,
        confidence: 0.8,
        when: is_view,
        params: no_params,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramDetector;

impl ScreenDetector for ProgramDetector {
    fn screen(&self) -> Screen {
        Screen::Program
    }

    fn rules(&self) -> &'static [DetectionRule] {
        RULES
    }
}

pub fn detect_program_intents(
    message: &str,
    screen: &str,
    context: &MessageContext,
) -> Option<IntentGuess> {
    ProgramDetector.detect(message, screen, context)
}

fn is_start_program(text: &str, _context: &MessageContext) -> bool {
    START_PROGRAM.is_match(text)
}

fn is_modify(text: &str, _context: &MessageContext) -> bool {
    MODIFY.is_match(text)
}

fn modify_params(text: &str, _context: &MessageContext) -> Slots {
    params([(slot::DAYS_PER_WEEK, extract_days_per_week(text).map(SlotValue::from))])
}

fn is_view(text: &str, _context: &MessageContext) -> bool {
    VIEW.is_match(text)
}
