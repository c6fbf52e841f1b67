//! Pattern Registry
//!
//! Immutable tables that drive the router: intent patterns and bonuses, the
//! slot catalogue, clarification templates, confusable pairs and small-talk
//! categories. A registry is built once (usually via [`PatternRegistry::builtin`]),
//! validated, and then shared read-only.
//!
//! New intents are added by registering another [`IntentSpec`]; existing
//! entries never need to change.

use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashSet;

use super::errors::RegistryError;
use super::values::{ClarificationRequest, IntentId, SlotValue, SmallTalkKind};
use crate::domain::extraction::{
    exercise_near_set, explicit_muscle_groups, extract_date_from_message, extract_days_per_week,
    extract_percent_base, extract_percentage, extract_weight_and_reps, find_exercise_mention,
};
use crate::domain::foundation::{Confidence, Screen};

/// Default closeness threshold for confusable pairs.
pub const DEFAULT_DISAMBIGUATION_THRESHOLD: f64 = 0.15;

/// Fixed confidence attached to small-talk results.
pub const DEFAULT_SMALL_TALK_CONFIDENCE: f64 = 0.95;

// ════════════════════════════════════════════════════════════════════════════
// Slots
// ════════════════════════════════════════════════════════════════════════════

/// Which extractor fills a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotExtractor {
    Weight,
    Reps,
    Exercise,
    Percentage,
    PercentBase,
    DaysPerWeek,
    Date,
    MuscleGroups,
    TrainingGoal,
}

impl SlotExtractor {
    /// Runs the extractor on normalized text. `None` means "not mentioned".
    pub fn extract(&self, text: &str, today: NaiveDate) -> Option<SlotValue> {
        match self {
            SlotExtractor::Weight => extract_weight_and_reps(text).weight.map(SlotValue::from),
            SlotExtractor::Reps => extract_weight_and_reps(text).reps.map(SlotValue::from),
            SlotExtractor::Exercise => extract_weight_and_reps(text)
                .set
                .and_then(|set| exercise_near_set(text, &set))
                .or_else(|| find_exercise_mention(text))
                .map(SlotValue::from),
            SlotExtractor::Percentage => extract_percentage(text).map(SlotValue::from),
            SlotExtractor::PercentBase => extract_percent_base(text).map(SlotValue::from),
            SlotExtractor::DaysPerWeek => extract_days_per_week(text).map(SlotValue::from),
            SlotExtractor::Date => extract_date_from_message(text, today).map(SlotValue::from),
            SlotExtractor::MuscleGroups => explicit_muscle_groups(text).map(SlotValue::from),
            SlotExtractor::TrainingGoal => training_goal(text).map(SlotValue::from),
        }
    }
}

fn training_goal(text: &str) -> Option<&'static str> {
    const GOALS: &[(&str, &[&str])] = &[
        ("strength", &["strength", "strong", "stronger", "powerlifting"]),
        ("hypertrophy", &["hypertrophy", "muscle", "size", "bulk", "mass"]),
        ("fat_loss", &["fat loss", "lose fat", "lose weight", "cut", "shred", "lean"]),
        ("endurance", &["endurance", "conditioning", "cardio", "stamina"]),
    ];
    GOALS
        .iter()
        .find(|(_, words)| crate::domain::extraction::contains_any_word(text, words))
        .map(|(goal, _)| *goal)
}

/// Catalogue entry for one named slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSpec {
    pub name: &'static str,
    pub extractor: SlotExtractor,
    /// Intents that cannot resolve without this slot. Filled in at build time.
    pub required_for: Vec<IntentId>,
}

impl SlotSpec {
    pub fn new(name: &'static str, extractor: SlotExtractor) -> Self {
        Self {
            name,
            extractor,
            required_for: Vec::new(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Intents
// ════════════════════════════════════════════════════════════════════════════

/// Declarative input for one router-owned intent.
#[derive(Debug, Clone)]
pub struct IntentSpec {
    pub id: IntentId,
    pub canonical_screen: Screen,
    pub patterns: &'static [&'static str],
    pub excludes: &'static [&'static str],
    pub bonuses: &'static [(&'static str, f64)],
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    /// Pull missing exercise/weight/reps from the active workout.
    pub use_active_workout: bool,
    /// Fill a missing `date` slot with today instead of leaving it out.
    pub default_date_today: bool,
}

impl IntentSpec {
    pub fn new(id: IntentId, canonical_screen: Screen) -> Self {
        Self {
            id,
            canonical_screen,
            patterns: &[],
            excludes: &[],
            bonuses: &[],
            required: &[],
            optional: &[],
            use_active_workout: false,
            default_date_today: false,
        }
    }

    pub fn patterns(mut self, patterns: &'static [&'static str]) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn excludes(mut self, excludes: &'static [&'static str]) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn bonuses(mut self, bonuses: &'static [(&'static str, f64)]) -> Self {
        self.bonuses = bonuses;
        self
    }

    pub fn required(mut self, required: &'static [&'static str]) -> Self {
        self.required = required;
        self
    }

    pub fn optional(mut self, optional: &'static [&'static str]) -> Self {
        self.optional = optional;
        self
    }

    pub fn use_active_workout(mut self) -> Self {
        self.use_active_workout = true;
        self
    }

    pub fn default_date_today(mut self) -> Self {
        self.default_date_today = true;
        self
    }
}

/// A strong lexical signal worth a fixed confidence bonus.
#[derive(Debug, Clone)]
pub struct LexicalBonus {
    pub pattern: Regex,
    pub amount: f64,
}

/// Compiled form of an [`IntentSpec`].
#[derive(Debug, Clone)]
pub struct IntentDefinition {
    pub id: IntentId,
    pub canonical_screen: Screen,
    pub patterns: Vec<Regex>,
    pub excludes: Vec<Regex>,
    pub bonuses: Vec<LexicalBonus>,
    pub required: Vec<&'static str>,
    pub optional: Vec<&'static str>,
    pub use_active_workout: bool,
    pub default_date_today: bool,
}

impl IntentDefinition {
    /// Any pattern fires and no exclusion does.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
            && !self.excludes.iter().any(|p| p.is_match(text))
    }

    /// Sum of the lexical bonuses whose pattern fires.
    pub fn lexical_bonus(&self, text: &str) -> f64 {
        self.bonuses
            .iter()
            .filter(|b| b.pattern.is_match(text))
            .map(|b| b.amount)
            .sum()
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required.iter().chain(self.optional.iter()).copied()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Clarification, disambiguation, small talk
// ════════════════════════════════════════════════════════════════════════════

/// Follow-up prompt for an intent with missing required slots.
#[derive(Debug, Clone, PartialEq)]
pub struct ClarificationTemplate {
    pub intent: IntentId,
    pub prompt: &'static str,
    pub placeholder: Option<&'static str>,
    pub options: &'static [&'static str],
}

impl ClarificationTemplate {
    pub fn to_request(&self, missing_slots: Vec<String>) -> ClarificationRequest {
        ClarificationRequest {
            for_intent: self.intent,
            prompt: self.prompt.to_string(),
            placeholder: self.placeholder.map(str::to_string),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            missing_slots,
        }
    }
}

/// Two intents users commonly mix up, with the labels shown for each.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusablePair {
    pub first: IntentId,
    pub first_label: &'static str,
    pub second: IntentId,
    pub second_label: &'static str,
    pub prompt: &'static str,
}

impl ConfusablePair {
    /// Unordered membership test.
    pub fn involves(&self, a: IntentId, b: IntentId) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    pub fn label_for(&self, intent: IntentId) -> &'static str {
        if intent == self.first {
            self.first_label
        } else {
            self.second_label
        }
    }
}

/// Declarative input for one small-talk category.
#[derive(Debug, Clone)]
pub struct SmallTalkSpec {
    pub kind: SmallTalkKind,
    pub patterns: &'static [&'static str],
    pub responses: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct SmallTalkCategory {
    pub kind: SmallTalkKind,
    pub patterns: Vec<Regex>,
    pub responses: &'static [&'static str],
}

impl SmallTalkCategory {
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Registry
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct PatternRegistry {
    intents: Vec<IntentDefinition>,
    slots: Vec<SlotSpec>,
    clarifications: Vec<ClarificationTemplate>,
    confusables: Vec<ConfusablePair>,
    small_talk: Vec<SmallTalkCategory>,
    disambiguation_threshold: f64,
    small_talk_confidence: Confidence,
}

impl PatternRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The shipped intent catalogue.
    pub fn builtin() -> Result<Self, RegistryError> {
        super::catalog::register_builtin(Self::builder()).build()
    }

    /// Replaces the confusable-pair closeness threshold.
    pub fn with_disambiguation_threshold(mut self, threshold: f64) -> Result<Self, RegistryError> {
        validate_threshold(threshold)?;
        self.disambiguation_threshold = threshold;
        Ok(self)
    }

    pub fn with_small_talk_confidence(mut self, confidence: Confidence) -> Self {
        self.small_talk_confidence = confidence;
        self
    }

    /// Router-owned intents in registration order.
    pub fn intents(&self) -> &[IntentDefinition] {
        &self.intents
    }

    pub fn definition(&self, intent: IntentId) -> Option<&IntentDefinition> {
        self.intents.iter().find(|d| d.id == intent)
    }

    pub fn slot(&self, name: &str) -> Option<&SlotSpec> {
        self.slots.iter().find(|s| s.name == name)
    }

    pub fn slots(&self) -> &[SlotSpec] {
        &self.slots
    }

    pub fn clarification_for(&self, intent: IntentId) -> Option<&ClarificationTemplate> {
        self.clarifications.iter().find(|c| c.intent == intent)
    }

    pub fn confusable_pair(&self, a: IntentId, b: IntentId) -> Option<&ConfusablePair> {
        self.confusables.iter().find(|p| p.involves(a, b))
    }

    /// First small-talk category matching normalized text.
    pub fn small_talk(&self, text: &str) -> Option<&SmallTalkCategory> {
        self.small_talk.iter().find(|c| c.matches(text))
    }

    pub fn disambiguation_threshold(&self) -> f64 {
        self.disambiguation_threshold
    }

    pub fn small_talk_confidence(&self) -> Confidence {
        self.small_talk_confidence
    }
}

fn validate_threshold(threshold: f64) -> Result<(), RegistryError> {
    if threshold > 0.0 && threshold < 1.0 {
        Ok(())
    } else {
        Err(RegistryError::InvalidThreshold(threshold))
    }
}

fn compile(owner: &str, pattern: &str) -> Result<Regex, RegistryError> {
    Regex::new(pattern).map_err(|e| RegistryError::invalid_pattern(owner, pattern, e))
}

/// Collects specs and validates them into a [`PatternRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    intents: Vec<IntentSpec>,
    slots: Vec<SlotSpec>,
    clarifications: Vec<ClarificationTemplate>,
    confusables: Vec<ConfusablePair>,
    small_talk: Vec<SmallTalkSpec>,
    disambiguation_threshold: Option<f64>,
}

impl RegistryBuilder {
    pub fn intent(mut self, spec: IntentSpec) -> Self {
        self.intents.push(spec);
        self
    }

    pub fn slot(mut self, name: &'static str, extractor: SlotExtractor) -> Self {
        self.slots.push(SlotSpec::new(name, extractor));
        self
    }

    pub fn clarification(mut self, template: ClarificationTemplate) -> Self {
        self.clarifications.push(template);
        self
    }

    pub fn confusable(mut self, pair: ConfusablePair) -> Self {
        self.confusables.push(pair);
        self
    }

    pub fn small_talk(mut self, spec: SmallTalkSpec) -> Self {
        self.small_talk.push(spec);
        self
    }

    pub fn disambiguation_threshold(mut self, threshold: f64) -> Self {
        self.disambiguation_threshold = Some(threshold);
        self
    }

    /// Compiles every pattern and checks cross-references.
    pub fn build(self) -> Result<PatternRegistry, RegistryError> {
        let threshold = self
            .disambiguation_threshold
            .unwrap_or(DEFAULT_DISAMBIGUATION_THRESHOLD);
        validate_threshold(threshold)?;

        let mut seen = HashSet::new();
        let mut intents = Vec::with_capacity(self.intents.len());
        let mut slots = self.slots;

        for spec in self.intents {
            if !seen.insert(spec.id) {
                return Err(RegistryError::DuplicateIntent(spec.id));
            }
            let owner = spec.id.as_str();

            for name in spec.required.iter().chain(spec.optional.iter()) {
                if !slots.iter().any(|s| s.name == *name) {
                    return Err(RegistryError::UnknownSlot {
                        intent: spec.id,
                        slot: name.to_string(),
                    });
                }
            }
            if !spec.required.is_empty()
                && !self.clarifications.iter().any(|c| c.intent == spec.id)
            {
                return Err(RegistryError::MissingClarification(spec.id));
            }
            for slot in slots.iter_mut() {
                if spec.required.contains(&slot.name) {
                    slot.required_for.push(spec.id);
                }
            }

            let patterns = spec
                .patterns
                .iter()
                .map(|p| compile(owner, p))
                .collect::<Result<Vec<_>, _>>()?;
            let excludes = spec
                .excludes
                .iter()
                .map(|p| compile(owner, p))
                .collect::<Result<Vec<_>, _>>()?;
            let bonuses = spec
                .bonuses
                .iter()
                .map(|(p, amount)| {
                    Ok(LexicalBonus {
                        pattern: compile(owner, p)?,
                        amount: *amount,
                    })
                })
                .collect::<Result<Vec<_>, RegistryError>>()?;

            intents.push(IntentDefinition {
                id: spec.id,
                canonical_screen: spec.canonical_screen,
                patterns,
                excludes,
                bonuses,
                required: spec.required.to_vec(),
                optional: spec.optional.to_vec(),
                use_active_workout: spec.use_active_workout,
                default_date_today: spec.default_date_today,
            });
        }

        for template in &self.clarifications {
            if !seen.contains(&template.intent) {
                return Err(RegistryError::UnknownIntent {
                    context: "clarification template",
                    intent: template.intent,
                });
            }
        }
        for pair in &self.confusables {
            if pair.first == pair.second {
                return Err(RegistryError::SelfConfusable(pair.first));
            }
            for intent in [pair.first, pair.second] {
                if !seen.contains(&intent) {
                    return Err(RegistryError::UnknownIntent {
                        context: "confusable pair",
                        intent,
                    });
                }
            }
        }

        let mut small_talk = Vec::with_capacity(self.small_talk.len());
        for spec in self.small_talk {
            if spec.responses.is_empty() {
                return Err(RegistryError::EmptyResponses(spec.kind));
            }
            let owner = format!("small talk {:?}", spec.kind);
            let patterns = spec
                .patterns
                .iter()
                .map(|p| compile(&owner, p))
                .collect::<Result<Vec<_>, _>>()?;
            small_talk.push(SmallTalkCategory {
                kind: spec.kind,
                patterns,
                responses: spec.responses,
            });
        }

        Ok(PatternRegistry {
            intents,
            slots,
            clarifications: self.clarifications,
            confusables: self.confusables,
            small_talk,
            disambiguation_threshold: threshold,
            small_talk_confidence: Confidence::new(DEFAULT_SMALL_TALK_CONFIDENCE),
        })
    }
}
