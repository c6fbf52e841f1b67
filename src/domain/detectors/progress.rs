//! ProgressScreen detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shared::{check_pr_params, is_check_pr, params};
use super::{DetectionRule, ScreenDetector};
use crate::domain::extraction::{
    extract_muscle_group, extract_number, extract_weight, find_exercise_mention,
};
use crate::domain::foundation::Screen;
use crate::domain::intent::{slot, IntentGuess, IntentId, MessageContext, SlotValue, Slots};

static BODY_WEIGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:weigh|weighed|weighing|body\s?weight|scale|my weight is|i'?m at)\b")
        .expect("valid body weight regex")
});

static COMPARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:compare|comparison|vs|versus|than last)\b").expect("valid compare regex")
});

static SHOW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:progress|stats|history|chart|trend|graph|how am i doing)\b")
        .expect("valid progress regex")
});

static PERIOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:this|last|past)\s+(?:week|month|year)|all time)\b").expect("valid period regex")
});

const RULES: &[DetectionRule] = &[
    DetectionRule {
        intent: IntentId::CheckPr,
        confidence: 0.9,
        when: is_check_pr,
        params: check_pr_params,
    },
    DetectionRule {
        intent: IntentId::LogBodyWeight,
        confidence: 0.9,
        when: is_body_weight,
        params: body_weight_params,
    },
    DetectionRule {
        intent: IntentId::CompareProgress,
        confidence: 0.85,
        when: is_compare,
        params: progress_params,
    },
    DetectionRule {
        intent: IntentId::ShowProgress,
        confidence: 0.85,
        when: is_show,
        params: progress_params,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressDetector;

impl ScreenDetector for ProgressDetector {
    fn screen(&self) -> Screen {
        Screen::Progress
    }

    fn rules(&self) -> &'static [DetectionRule] {
        RULES
    }
}

pub fn detect_progress_intents(
    message: &str,
    screen: &str,
    context: &MessageContext,
) -> Option<IntentGuess> {
    ProgressDetector.detect(message, screen, context)
}

fn is_body_weight(text: &str, _context: &MessageContext) -> bool {
    BODY_WEIGHT.is_match(text) && extract_number(text).is_some()
}

fn body_weight_params(text: &str, _context: &MessageContext) -> Slots {
    let weight = extract_weight(text).or_else(|| extract_number(text));
    params([(slot::WEIGHT, weight.map(SlotValue::from))])
}

fn is_compare(text: &str, _context: &MessageContext) -> bool {
    COMPARE.is_match(text)
}

fn is_show(text: &str, _context: &MessageContext) -> bool {
    SHOW.is_match(text)
}

fn progress_params(text: &str, _context: &MessageContext) -> Slots {
    let period = PERIOD
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());
    params([
        (slot::EXERCISE, find_exercise_mention(text).map(SlotValue::from)),
        (slot::PERIOD, period.map(SlotValue::from)),
        (
            slot::MUSCLE_GROUP,
            extract_muscle_group(text).map(|g| SlotValue::from(g.label())),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: &str = "ProgressScreen";

    fn detect(text: &str) -> Option<IntentGuess> {
        detect_progress_intents(text, SCREEN, &MessageContext::default())
    }

    #[test]
    fn squat_pr() {
        let guess = detect("what's my squat PR").unwrap();
        assert_eq!(guess.intent, IntentId::CheckPr);
        assert_eq!(guess.confidence.value(), 0.9);
        assert_eq!(guess.parameters.len(), 1);
        assert_eq!(guess.parameters[slot::EXERCISE], SlotValue::from("squat"));
    }

    #[test]
    fn pr_without_exercise_has_no_parameters() {
        let guess = detect("show my prs").unwrap();
        assert_eq!(guess.intent, IntentId::CheckPr);
        assert!(guess.parameters.is_empty());
    }

    #[test]
    fn program_never_reads_as_pr() {
        assert_ne!(
            detect("show progress on my program").map(|g| g.intent),
            Some(IntentId::CheckPr)
        );
    }

    #[test]
    fn body_weight_needs_a_number() {
        let guess = detect("weighed in at 182.5 lbs").unwrap();
        assert_eq!(guess.intent, IntentId::LogBodyWeight);
        assert_eq!(guess.parameters[slot::WEIGHT], SlotValue::Number(182.5));
        assert_ne!(detect("how much do i weigh").map(|g| g.intent), Some(IntentId::LogBodyWeight));
    }

    #[test]
    fn compare_and_show() {
        let compare = detect("compare bench this month vs last month").unwrap();
        assert_eq!(compare.intent, IntentId::CompareProgress);
        assert_eq!(compare.parameters[slot::PERIOD], SlotValue::from("this month"));

        assert_eq!(detect("show my deadlift progress").unwrap().intent, IntentId::ShowProgress);

        let abs = detect("abs progress this year").unwrap();
        assert_eq!(abs.parameters[slot::MUSCLE_GROUP], SlotValue::from("Core"));
    }
}
