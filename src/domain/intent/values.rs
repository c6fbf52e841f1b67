//! Value Objects for the Intent Domain
//!
//! Everything here is built fresh for one call and handed straight back to
//! the caller. Nothing is cached between calls.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::extraction::{ExtractedDate, MuscleGroup};
use crate::domain::foundation::Confidence;

/// Canonical action identifiers the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentId {
    // Router-owned
    CreateWorkout,
    StartWorkout,
    LogSet,
    #[serde(rename = "CALCULATE_1RM")]
    CalculateOneRepMax,
    CalculatePercent,
    CreateProgram,
    SmallTalk,

    // Workout screen
    FinishWorkout,
    ScheduleWorkout,
    SwapExercise,
    AddExercise,
    StartRestTimer,

    // Nutrition screen
    LogMeal,
    LogWater,
    CheckMacros,
    CreateMealPlan,
    SetNutritionGoal,

    // Progress screen
    CheckPr,
    ShowProgress,
    LogBodyWeight,
    CompareProgress,

    // Program screen
    StartProgram,
    ModifyProgram,
    ViewProgram,

    // Recipe screen
    FindRecipe,
    SaveRecipe,
    LogRecipe,
    ScaleRecipe,

    // Home and chat
    ViewToday,
    Navigate,
    Help,
}

impl IntentId {
    /// Wire name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentId::CreateWorkout => "CREATE_WORKOUT",
            IntentId::StartWorkout => "START_WORKOUT",
            IntentId::LogSet => "LOG_SET",
            IntentId::CalculateOneRepMax => "CALCULATE_1RM",
            IntentId::CalculatePercent => "CALCULATE_PERCENT",
            IntentId::CreateProgram => "CREATE_PROGRAM",
            IntentId::SmallTalk => "SMALL_TALK",
            IntentId::FinishWorkout => "FINISH_WORKOUT",
            IntentId::ScheduleWorkout => "SCHEDULE_WORKOUT",
            IntentId::SwapExercise => "SWAP_EXERCISE",
            IntentId::AddExercise => "ADD_EXERCISE",
            IntentId::StartRestTimer => "START_REST_TIMER",
            IntentId::LogMeal => "LOG_MEAL",
            IntentId::LogWater => "LOG_WATER",
            IntentId::CheckMacros => "CHECK_MACROS",
            IntentId::CreateMealPlan => "CREATE_MEAL_PLAN",
            IntentId::SetNutritionGoal => "SET_NUTRITION_GOAL",
            IntentId::CheckPr => "CHECK_PR",
            IntentId::ShowProgress => "SHOW_PROGRESS",
            IntentId::LogBodyWeight => "LOG_BODY_WEIGHT",
            IntentId::CompareProgress => "COMPARE_PROGRESS",
            IntentId::StartProgram => "START_PROGRAM",
            IntentId::ModifyProgram => "MODIFY_PROGRAM",
            IntentId::ViewProgram => "VIEW_PROGRAM",
            IntentId::FindRecipe => "FIND_RECIPE",
            IntentId::SaveRecipe => "SAVE_RECIPE",
            IntentId::LogRecipe => "LOG_RECIPE",
            IntentId::ScaleRecipe => "SCALE_RECIPE",
            IntentId::ViewToday => "VIEW_TODAY",
            IntentId::Navigate => "NAVIGATE",
            IntentId::Help => "HELP",
        }
    }
}

impl fmt::Display for IntentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Slot names shared by the router and the screen detectors.
pub mod slot {
    pub const WEIGHT: &str = "weight";
    pub const REPS: &str = "reps";
    pub const EXERCISE: &str = "exercise";
    pub const PERCENTAGE: &str = "percentage";
    pub const ONE_REP_MAX: &str = "one_rep_max";
    pub const DAYS_PER_WEEK: &str = "days_per_week";
    pub const DATE: &str = "date";
    pub const MUSCLE_GROUPS: &str = "muscle_groups";
    pub const MUSCLE_GROUP: &str = "muscle_group";
    pub const GOAL: &str = "goal";
    pub const MEAL_TYPE: &str = "meal_type";
    pub const AMOUNT: &str = "amount";
    pub const UNIT: &str = "unit";
    pub const MACRO: &str = "macro";
    pub const TARGET: &str = "target";
    pub const SECONDS: &str = "seconds";
    pub const PERIOD: &str = "period";
    pub const DIET: &str = "diet";
    pub const MAX_CALORIES: &str = "max_calories";
    pub const SERVINGS: &str = "servings";
    pub const SCREEN: &str = "screen";
}

/// A single extracted parameter.
///
/// Untagged on the wire: numbers stay numbers, dates become
/// `{type, date, display_text}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
    Date(ExtractedDate),
}

impl SlotValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SlotValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SlotValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SlotValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&ExtractedDate> {
        match self {
            SlotValue::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            SlotValue::Number(n) => write!(f, "{}", n),
            SlotValue::Text(s) => write!(f, "{}", s),
            SlotValue::List(items) => write!(f, "{}", items.join(", ")),
            SlotValue::Date(d) => write!(f, "{}", d.display_text),
        }
    }
}

impl From<f64> for SlotValue {
    fn from(n: f64) -> Self {
        SlotValue::Number(n)
    }
}

impl From<u32> for SlotValue {
    fn from(n: u32) -> Self {
        SlotValue::Number(f64::from(n))
    }
}

impl From<u8> for SlotValue {
    fn from(n: u8) -> Self {
        SlotValue::Number(f64::from(n))
    }
}

impl From<&str> for SlotValue {
    fn from(s: &str) -> Self {
        SlotValue::Text(s.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(s: String) -> Self {
        SlotValue::Text(s)
    }
}

impl From<ExtractedDate> for SlotValue {
    fn from(d: ExtractedDate) -> Self {
        SlotValue::Date(d)
    }
}

impl From<Vec<MuscleGroup>> for SlotValue {
    fn from(groups: Vec<MuscleGroup>) -> Self {
        SlotValue::List(groups.iter().map(|g| g.label().to_string()).collect())
    }
}

/// Named parameters of an intent, ordered by name for stable output.
pub type Slots = BTreeMap<String, SlotValue>;

/// State of a workout in progress, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActiveWorkout {
    pub current_exercise: Option<String>,
    pub last_weight: Option<f64>,
    pub last_reps: Option<u32>,
}

/// Everything the engine knows beyond the message text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageContext {
    /// Overrides the wall-clock date for date resolution.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub active_workout: Option<ActiveWorkout>,
}

impl MessageContext {
    /// Context pinned to a given date.
    pub fn on(today: NaiveDate) -> Self {
        Self {
            today: Some(today),
            active_workout: None,
        }
    }

    /// Adds an active workout.
    pub fn with_active_workout(mut self, workout: ActiveWorkout) -> Self {
        self.active_workout = Some(workout);
        self
    }

    /// The supplied date, or the local wall-clock date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn has_active_workout(&self) -> bool {
        self.active_workout.is_some()
    }
}

/// One interpretation of a message, scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentCandidate {
    pub intent: IntentId,
    pub confidence: Confidence,
    pub slots: Slots,
    pub missing_slots: Vec<String>,
}

/// Follow-up question for an intent that matched with data missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarificationRequest {
    pub for_intent: IntentId,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub options: Vec<String>,
    pub missing_slots: Vec<String>,
}

/// A choice offered when two confusable intents score almost the same.
///
/// Carries the already extracted data so a selection needs no re-parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationOption {
    pub label: String,
    pub intent: IntentId,
    pub data: Slots,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationRequest {
    pub prompt: String,
    pub options: Vec<DisambiguationOption>,
}

/// Category of small talk that short-circuited routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmallTalkKind {
    Greeting,
    Thanks,
    Farewell,
    Interjection,
    Capabilities,
}

/// Outcome of routing a single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RouteResult {
    Resolved {
        intent: IntentId,
        slots: Slots,
        confidence: Confidence,
    },
    Clarify(ClarificationRequest),
    Disambiguate(DisambiguationRequest),
    SmallTalk {
        kind: SmallTalkKind,
        response: String,
        confidence: Confidence,
    },
    Unresolved {
        fallback_to_generative: bool,
    },
}

impl RouteResult {
    /// The "I don't understand" outcome. Always hands off to the generative fallback.
    pub fn unresolved() -> Self {
        RouteResult::Unresolved {
            fallback_to_generative: true,
        }
    }

    /// Intent this result commits to, if any.
    pub fn intent(&self) -> Option<IntentId> {
        match self {
            RouteResult::Resolved { intent, .. } => Some(*intent),
            RouteResult::SmallTalk { .. } => Some(IntentId::SmallTalk),
            RouteResult::Clarify(_) | RouteResult::Disambiguate(_) | RouteResult::Unresolved { .. } => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, RouteResult::Unresolved { .. })
    }
}

/// Output of a screen-scoped detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentGuess {
    pub intent: IntentId,
    pub confidence: Confidence,
    pub parameters: Slots,
}
