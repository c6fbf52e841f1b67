//! NutritionScreen detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shared::params;
use super::{DetectionRule, ScreenDetector};
use crate::domain::extraction::extract_number;
use crate::domain::foundation::Screen;
use crate::domain::intent::{slot, IntentGuess, IntentId, MessageContext, SlotExtractor, SlotValue, Slots};

static WATER_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(oz|ounces?|ml|cups?|glasses?|liters?|litres?|l)\b")
        .expect("valid water amount regex")
});

static MEAL_PLAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bmeal\s*plan\b").expect("valid meal plan regex"));

static GOAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:goal|target)\b|\bset (?:my )?(?:calories|protein|carbs|fat|macros)\b")
        .expect("valid nutrition goal regex")
});

static MACRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(calories|protein|carbs|fat|macros?)\b").expect("valid macro regex")
});

static CHECK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:how|what|check|left|remaining|much|show)\b").expect("valid check regex")
});

static LOG_MEAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:ate|had|eaten|eat|log|logged|breakfast|lunch|dinner|snack)\b")
        .expect("valid log meal regex")
});

static MEAL_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(breakfast|lunch|dinner|snack)\b").expect("valid meal type regex")
});

const RULES: &[DetectionRule] = &[
    DetectionRule {
        intent: IntentId::LogWater,
        confidence: 0.9,
        when: is_water,
        params: water_params,
    },
    DetectionRule {
        intent: IntentId::CreateMealPlan,
        confidence: 0.9,
        when: is_meal_plan,
        params: meal_plan_params,
    },
    DetectionRule {
        intent: IntentId::SetNutritionGoal,
        confidence: 0.85,
        when: is_goal,
        params: goal_params,
    },
    DetectionRule {
        intent: IntentId::CheckMacros,
        confidence: 0.85,
        when: is_check_macros,
        params: macro_params,
    },
    DetectionRule {
        intent: IntentId::LogMeal,
        confidence: 0.85,
        when: is_log_meal,
        params: meal_params,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionDetector;

impl ScreenDetector for NutritionDetector {
    fn screen(&self) -> Screen {
        Screen::Nutrition
    }

    fn rules(&self) -> &'static [DetectionRule] {
        RULES
    }
}

pub fn detect_nutrition_intents(
    message: &str,
    screen: &str,
    context: &MessageContext,
) -> Option<IntentGuess> {
    NutritionDetector.detect(message, screen, context)
}

fn is_water(text: &str, _context: &MessageContext) -> bool {
    text.contains("water")
}

fn water_params(text: &str, _context: &MessageContext) -> Slots {
    let caps = WATER_AMOUNT.captures(text);
    let amount = caps
        .as_ref()
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    let unit = caps.as_ref().and_then(|c| c.get(2)).map(|m| normalize_unit(m.as_str()));
    params([
        (slot::AMOUNT, amount.map(SlotValue::from)),
        (slot::UNIT, unit.map(SlotValue::from)),
    ])
}

fn normalize_unit(unit: &str) -> &'static str {
    match unit {
        "oz" | "ounce" | "ounces" => "oz",
        "ml" => "ml",
        "cup" | "cups" => "cups",
        "glass" | "glasses" => "glasses",
        _ => "liters",
    }
}

fn is_meal_plan(text: &str, _context: &MessageContext) -> bool {
    MEAL_PLAN.is_match(text)
}

fn meal_plan_params(text: &str, context: &MessageContext) -> Slots {
    params([(slot::GOAL, SlotExtractor::TrainingGoal.extract(text, context.today()))])
}

fn is_goal(text: &str, _context: &MessageContext) -> bool {
    GOAL.is_match(text)
}

fn goal_params(text: &str, _context: &MessageContext) -> Slots {
    params([
        (slot::MACRO, macro_name(text).map(SlotValue::from)),
        (slot::TARGET, extract_number(text).map(SlotValue::from)),
    ])
}

fn is_check_macros(text: &str, _context: &MessageContext) -> bool {
    MACRO.is_match(text) && CHECK.is_match(text)
}

fn macro_params(text: &str, _context: &MessageContext) -> Slots {
    params([(slot::MACRO, macro_name(text).map(SlotValue::from))])
}

fn macro_name(text: &str) -> Option<&'static str> {
    let caps = MACRO.captures(text)?;
    let name = match caps.get(1)?.as_str() {
        "calories" => "calories",
        "protein" => "protein",
        "carbs" => "carbs",
        "fat" => "fat",
        _ => "macros",
    };
    Some(name)
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
