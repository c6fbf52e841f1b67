//! Screen identifiers for the UI surfaces that host the chat.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Active UI surface, used to scope which detectors apply.
///
/// Names are matched by exact string equality; there is no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    #[serde(rename = "WorkoutScreen")]
    Workout,
    #[serde(rename = "NutritionScreen")]
    Nutrition,
    #[serde(rename = "ProgressScreen")]
    Progress,
    #[serde(rename = "ProgramScreen")]
    Program,
    #[serde(rename = "RecipeScreen")]
    Recipe,
    #[serde(rename = "HomeScreen")]
    Home,
    /// The free-form assistant conversation, reachable from every tab.
    #[serde(rename = "ChatScreen")]
    Chat,
}

impl Screen {
    /// All known screens in navigation order.
    pub const ALL: [Screen; 7] = [
        Screen::Home,
        Screen::Workout,
        Screen::Program,
        Screen::Progress,
        Screen::Nutrition,
        Screen::Recipe,
        Screen::Chat,
    ];

    /// Returns the wire name of this screen.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Workout => "WorkoutScreen",
            Screen::Nutrition => "NutritionScreen",
            Screen::Progress => "ProgressScreen",
            Screen::Program => "ProgramScreen",
            Screen::Recipe => "RecipeScreen",
            Screen::Home => "HomeScreen",
            Screen::Chat => "ChatScreen",
        }
    }

    /// Exact-match lookup. Unknown names are not an error here.
    pub fn from_name(name: &str) -> Option<Screen> {
        Screen::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// True when `name` is exactly this screen's wire name.
    pub fn is(&self, name: &str) -> bool {
        self.name() == name
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Screen {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::empty_field("screen"));
        }
        Screen::from_name(s)
            .ok_or_else(|| ValidationError::invalid_format("screen", format!("unknown screen '{}'", s)))
    }
}
