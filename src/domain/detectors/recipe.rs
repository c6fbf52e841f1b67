//! RecipeScreen detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shared::{no_params, params};
use super::{DetectionRule, ScreenDetector};
use crate::domain::extraction::{contains_word, extract_number};
use crate::domain::foundation::Screen;
use crate::domain::intent::{slot, IntentGuess, IntentId, MessageContext, SlotValue, Slots};

static SAVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:save|bookmark|favorite|favourite)\b").expect("valid save regex")
});

static SCALE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:scale|double|triple|halve|servings?|serves|portions?)\b").expect("valid scale regex")
});

static LOG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:ate|had|log|logged|made|cooked)\b").expect("valid log recipe regex")
});

static FIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:find|search|show|recipes?|ideas?|suggest|cook|make)\b").expect("valid find regex")
});

static MAX_CALORIES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|below|less than)\s+(\d+)\s*(?:cal|calories|kcal)?\b").expect("valid calorie cap regex")
});

const DIETS: &[&str] = &[
    "vegan",
    "vegetarian",
    "keto",
    "paleo",
    "high protein",
    "low carb",
    "gluten free",
    "dairy free",
];

const MEAL_TYPES: &[&str] = &["breakfast", "lunch", "dinner", "snack", "dessert"];

const RULES: &[DetectionRule] = &[
    DetectionRule {
        intent: IntentId::SaveRecipe,
        confidence: 0.9,
        when: is_save,
        params: no_params,
    },
    DetectionRule {
        intent: IntentId::ScaleRecipe,
        confidence: 0.8,
        when: is_scale,
        params: scale_params,
    },
    DetectionRule {
        intent: IntentId::LogRecipe,
        confidence: 0.85,
        when: is_log,
        params: no_params,
    },
    DetectionRule {
        intent: IntentId::FindRecipe,
        confidence: 0.85,
        when: is_find,
        params: find_params,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeDetector;

impl ScreenDetector for RecipeDetector {
    fn screen(&self) -> Screen {
        Screen::Recipe
    }

    fn rules(&self) -> &'static [DetectionRule] {
        RULES
    }
}

pub fn detect_recipe_intents(
    message: &str,
    screen: &str,
    context: &MessageContext,
) -> Option<IntentGuess> {
    RecipeDetector.detect(message, screen, context)
}

fn is_save(text: &str, _context: &MessageContext) -> bool {
    SAVE.is_match(text)
}

fn is_scale(text: &str, _context: &MessageContext) -> bool {
    SCALE.is_match(text)
}

/// Explicit serving count, or a multiplier word.
fn scale_params(text: &str, _context: &MessageContext) -> Slots {
    let factor = if contains_word(text, "double") {
        Some(2.0)
    } else if contains_word(text, "triple") {
        Some(3.0)
    } else if contains_word(text, "halve") {
        Some(0.5)
    } else {
        None
    };
    params([
        (slot::SERVINGS, extract_number(text).map(SlotValue::from)),
        (slot::AMOUNT, factor.map(SlotValue::from)),
    ])
}

fn is_log(text: &str, _context: &MessageContext) -> bool {
    LOG.is_match(text)
}

fn is_find(text: &str, _context: &MessageContext) -> bool {
    FIND.is_match(text)
}

fn find_params(text: &str, _context: &MessageContext) -> Slots {
    let diet = DIETS.iter().copied().find(|d| contains_word(text, d));
    let meal_type = MEAL_TYPES.iter().copied().find(|m| contains_word(text, m));
    let max_calories = MAX_CALORIES
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    params([
        (slot::DIET, diet.map(SlotValue::from)),
        (slot::MEAL_TYPE, meal_type.map(SlotValue::from)),
        (slot::MAX_CALORIES, max_calories.map(SlotValue::from)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<IntentGuess> {
        detect_recipe_intents(text, "RecipeScreen", &MessageContext::default())
    }

    #[test]
    fn recipe_rules() {
        assert_eq!(detect("save this one").unwrap().intent, IntentId::SaveRecipe);
        assert_eq!(detect("i made this last night").unwrap().intent, IntentId::LogRecipe);
    }

    #[test]
    fn scale_by_servings_or_multiplier() {
        let servings = detect("make it 4 servings").unwrap();
        assert_eq!(servings.intent, IntentId::ScaleRecipe);
        assert_eq!(servings.parameters[slot::SERVINGS], SlotValue::Number(4.0));

        let double = detect("double it").unwrap();
        assert_eq!(double.parameters[slot::AMOUNT], SlotValue::Number(2.0));
    }

    #[test]
    fn find_with_filters() {
        let guess = detect("find vegan dinner recipes under 500 calories").unwrap();
        assert_eq!(guess.intent, IntentId::FindRecipe);
        assert_eq!(guess.parameters[slot::DIET], SlotValue::from("vegan"));
        assert_eq!(guess.parameters[slot::MEAL_TYPE], SlotValue::from("dinner"));
        assert_eq!(guess.parameters[slot::MAX_CALORIES], SlotValue::Number(500.0));
    }
}
